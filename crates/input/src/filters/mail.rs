//! Mail address filter

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Filter, Filtered, Param, ParamError, ids};

static MAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,}$",
    )
    .unwrap()
});

fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+/=?^_`{|}~-.@".contains(c)
}

/// The first problem found in `address`, as an error id.
///
/// Checks run from the most specific to the most general, so the caller
/// learns what to fix: spaces, umlauts, the `@` count, illegal characters,
/// consecutive dots, and finally the overall shape.
///
/// ```
/// use sieve_input::filters::mail_error;
///
/// assert_eq!(mail_error("jane@example.com"), None);
/// assert_eq!(mail_error("jane doe@example.com"), Some("MAILADDRESS_CANNOT_CONTAIN_SPACES"));
/// assert_eq!(mail_error("jane..doe@example.com"), Some("MAILADDRESS_CONTAINS_TWO_FOLLOWING_DOTS"));
/// ```
#[must_use]
pub fn mail_error(address: &str) -> Option<&'static str> {
    if address.chars().any(char::is_whitespace) {
        return Some(ids::MAILADDRESS_CANNOT_CONTAIN_SPACES);
    }
    if !address.is_ascii() {
        return Some(ids::MAILADDRESS_CANNOT_CONTAIN_UMLAUTS);
    }
    if address.matches('@').count() != 1 {
        return Some(ids::MAILADDRESS_MUST_CONTAIN_ONE_AT);
    }
    if !address.chars().all(is_allowed_char) {
        return Some(ids::MAILADDRESS_CANNOT_CONTAIN_ILLEGAL_CHARS);
    }
    if address.contains("..") {
        return Some(ids::MAILADDRESS_CONTAINS_TWO_FOLLOWING_DOTS);
    }
    if !MAIL_REGEX.is_match(address) {
        return Some(ids::MAILADDRESS_INCORRECT);
    }
    None
}

/// Reads a mail address. Surrounding whitespace is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MailFilter;

impl Filter for MailFilter {
    type Output = String;

    fn apply(&self, param: &Param) -> Filtered<String> {
        let Some(raw) = param.scalar() else {
            return if param.is_null() {
                Filtered::none()
            } else {
                Filtered::error(ParamError::new(ids::MAILADDRESS_INCORRECT))
            };
        };
        let address = raw.trim();
        if address.is_empty() {
            return Filtered::none();
        }
        match mail_error(address) {
            Some(id) => Filtered::error(ParamError::new(id)),
            None => Filtered::ok(address.to_owned()),
        }
    }
}
