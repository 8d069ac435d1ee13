//! Parameter errors and per-value error sets.
//!
//! A [`ParamError`] is identified by its id (`FIELD_EMPTY`,
//! `VALUE_TOO_SMALL`, ...) and carries a map of details used to fill
//! localized message templates. Errors are plain values: invalid input is
//! never reported through `Err` or a panic.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use super::Detail;

// ============================================================================
// ERROR IDS
// ============================================================================

/// Error ids produced by the built-in filters and ranges.
pub mod ids {
    /// Value required but missing or empty.
    pub const FIELD_EMPTY: &str = "FIELD_EMPTY";
    /// Value is not one of the allowed values.
    pub const FIELD_NO_SELECT: &str = "FIELD_NO_SELECT";
    /// Value does not satisfy a regular expression.
    pub const FIELD_WRONG_VALUE: &str = "FIELD_WRONG_VALUE";
    /// Value is not an IP address.
    pub const INVALID_IP_ADDRESS: &str = "INVALID_IP_ADDRESS";

    pub const VALUE_TOO_SMALL: &str = "VALUE_TOO_SMALL";
    pub const VALUE_TOO_GREAT: &str = "VALUE_TOO_GREAT";
    pub const STRING_TOO_SHORT: &str = "STRING_TOO_SHORT";
    pub const STRING_TOO_LONG: &str = "STRING_TOO_LONG";
    pub const DATE_TOO_EARLY: &str = "DATE_TOO_EARLY";
    pub const DATE_TOO_LATE: &str = "DATE_TOO_LATE";

    pub const INTEGER_INVALID: &str = "INTEGER_INVALID";
    pub const FLOAT_INVALID: &str = "FLOAT_INVALID";
    pub const DATE_INVALID: &str = "DATE_INVALID";

    pub const JSON_INPUT_TOO_BIG: &str = "JSON_INPUT_TOO_BIG";
    pub const JSON_INVALID: &str = "JSON_INVALID";
    pub const JSON_SYNTAX_ERROR: &str = "JSON_SYNTAX_ERROR";

    pub const HTTP_URI_INCORRECT: &str = "HTTP_URI_INCORRECT";
    pub const HTTP_URI_NOT_AVAILABLE: &str = "HTTP_URI_NOT_AVAILABLE";

    pub const MAILADDRESS_INCORRECT: &str = "MAILADDRESS_INCORRECT";
    pub const MAILADDRESS_CANNOT_CONTAIN_SPACES: &str = "MAILADDRESS_CANNOT_CONTAIN_SPACES";
    pub const MAILADDRESS_CANNOT_CONTAIN_UMLAUTS: &str = "MAILADDRESS_CANNOT_CONTAIN_UMLAUTS";
    pub const MAILADDRESS_MUST_CONTAIN_ONE_AT: &str = "MAILADDRESS_MUST_CONTAIN_ONE_AT";
    pub const MAILADDRESS_CANNOT_CONTAIN_ILLEGAL_CHARS: &str =
        "MAILADDRESS_CANNOT_CONTAIN_ILLEGAL_CHARS";
    pub const MAILADDRESS_CONTAINS_TWO_FOLLOWING_DOTS: &str =
        "MAILADDRESS_CONTAINS_TWO_FOLLOWING_DOTS";

    pub const PASSWORDS_NOT_EQUAL: &str = "PASSWORDS_NOT_EQUAL";
    pub const PASSWORD_TOO_SHORT: &str = "PASSWORD_TOO_SHORT";
    pub const PASSWORD_TOO_LESS_DIFF_CHARS: &str = "PASSWORD_TOO_LESS_DIFF_CHARS";
    pub const PASSWORD_DISALLOWED: &str = "PASSWORD_DISALLOWED";
}

// ============================================================================
// PARAM ERROR
// ============================================================================

/// An identified error with a detail payload.
///
/// # Examples
///
/// ```
/// use sieve_input::foundation::ParamError;
///
/// let error = ParamError::new("STRING_TOO_SHORT").with_detail("minLength", 3_i64);
/// let message = error.fill_message("at least {minLength} characters", "en_EN");
/// assert_eq!(message.message(), "at least 3 characters");
/// assert_eq!(message.locale(), "en_EN");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamError {
    id: Cow<'static, str>,
    details: IndexMap<Cow<'static, str>, Detail>,
}

impl ParamError {
    /// Creates an error without details.
    pub fn new(id: impl Into<Cow<'static, str>>) -> Self {
        Self {
            id: id.into(),
            details: IndexMap::new(),
        }
    }

    /// Creates an error with the given details.
    pub fn with_details<K, D, I>(id: impl Into<Cow<'static, str>>, details: I) -> Self
    where
        I: IntoIterator<Item = (K, D)>,
        K: Into<Cow<'static, str>>,
        D: Into<Detail>,
    {
        Self {
            id: id.into(),
            details: details
                .into_iter()
                .map(|(k, d)| (k.into(), d.into()))
                .collect(),
        }
    }

    /// Adds a single detail.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_detail(mut self, key: impl Into<Cow<'static, str>>, value: impl Into<Detail>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// The error id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// All details in insertion order.
    #[must_use]
    pub fn details(&self) -> &IndexMap<Cow<'static, str>, Detail> {
        &self.details
    }

    /// Looks up a detail by key.
    #[must_use]
    pub fn detail(&self, key: &str) -> Option<&Detail> {
        self.details.get(key)
    }

    /// Replaces every `{key}` in `template` with the flattened detail.
    ///
    /// The template is scanned once, so text coming from a detail is never
    /// substituted again. Placeholders without a matching detail are left
    /// untouched.
    pub fn fill_message(&self, template: &str, locale: impl Into<String>) -> LocalizedMessage {
        let mut message = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(open) = rest.find('{') {
            message.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find(['{', '}']) {
                Some(close) if after.as_bytes()[close] == b'}' => {
                    let key = &after[..close];
                    match self.details.get(key) {
                        Some(detail) => message.push_str(&detail.flatten()),
                        None => message.push_str(&rest[open..open + close + 2]),
                    }
                    rest = &after[close + 1..];
                }
                _ => {
                    message.push('{');
                    rest = after;
                }
            }
        }
        message.push_str(rest);

        LocalizedMessage {
            locale: locale.into(),
            message,
        }
    }

    /// Fills one message per locale from a locale → template mapping.
    pub fn fill_messages<I, L, T>(&self, templates: I) -> Vec<LocalizedMessage>
    where
        I: IntoIterator<Item = (L, T)>,
        L: Into<String>,
        T: AsRef<str>,
    {
        templates
            .into_iter()
            .map(|(locale, template)| self.fill_message(template.as_ref(), locale))
            .collect()
    }
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)?;
        if !self.details.is_empty() {
            write!(f, " {{")?;
            for (i, (key, detail)) in self.details.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={detail}")?;
            }
            write!(f, "}}")?;
        }
        Ok(())
    }
}

// ============================================================================
// LOCALIZED MESSAGE
// ============================================================================

/// A rendered error message tagged with its locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedMessage {
    locale: String,
    message: String,
}

impl LocalizedMessage {
    /// The locale the template was chosen for.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// The rendered message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for LocalizedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

// ============================================================================
// ERROR SET
// ============================================================================

/// Errors keyed by id, in insertion order.
///
/// Adding an error whose id is already present keeps the first one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ErrorSet {
    errors: IndexMap<Cow<'static, str>, ParamError>,
}

impl ErrorSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an error, returning the one now stored under its id.
    pub fn add(&mut self, error: ParamError) -> &ParamError {
        self.errors.entry(error.id.clone()).or_insert(error)
    }

    /// Whether an error with `id` is present.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.errors.contains_key(id)
    }

    /// The error stored under `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ParamError> {
        self.errors.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates over the errors in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ParamError> {
        self.errors.values()
    }

    /// The ids of all stored errors.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(AsRef::as_ref)
    }
}

impl Extend<ParamError> for ErrorSet {
    fn extend<I: IntoIterator<Item = ParamError>>(&mut self, iter: I) {
        for error in iter {
            self.add(error);
        }
    }
}

impl FromIterator<ParamError> for ErrorSet {
    fn from_iter<I: IntoIterator<Item = ParamError>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl IntoIterator for ErrorSet {
    type Item = ParamError;
    type IntoIter = indexmap::map::IntoValues<Cow<'static, str>, ParamError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_values()
    }
}

impl<'a> IntoIterator for &'a ErrorSet {
    type Item = &'a ParamError;
    type IntoIter = indexmap::map::Values<'a, Cow<'static, str>, ParamError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.values()
    }
}

impl From<ParamError> for ErrorSet {
    fn from(error: ParamError) -> Self {
        std::iter::once(error).collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================
