//! String and text filters

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::foundation::{Filter, Filtered, Param};

static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?([A-Za-z][A-Za-z0-9]*)\b[^>]*>").unwrap());

/// Reads a single-line string.
///
/// NUL bytes and line breaks are removed. Arrays and objects yield no value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringFilter;

impl Filter for StringFilter {
    type Output = String;

    fn apply(&self, param: &Param) -> Filtered<String> {
        match param.scalar() {
            Some(raw) => Filtered::ok(raw.chars().filter(|c| !matches!(c, '\0' | '\r' | '\n')).collect()),
            None => Filtered::none(),
        }
    }
}

/// Reads multi-line text.
///
/// Line endings are normalized to `\n`, NUL bytes removed and markup tags
/// stripped unless their name is in the allow list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFilter {
    allowed_tags: Vec<String>,
}

impl TextFilter {
    /// A filter that strips every tag.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            allowed_tags: Vec::new(),
        }
    }

    /// A filter that keeps the named tags, e.g. `["b", "i"]`.
    #[must_use]
    pub fn allowing<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_tags: tags.into_iter().map(|t| t.into().to_ascii_lowercase()).collect(),
        }
    }

    #[must_use]
    pub fn allowed_tags(&self) -> &[String] {
        &self.allowed_tags
    }

    fn is_allowed(&self, tag: &str) -> bool {
        self.allowed_tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    fn clean(&self, raw: &str) -> String {
        let normalized = raw.replace("\r\n", "\n").replace('\r', "\n").replace('\0', "");
        TAG_REGEX
            .replace_all(&normalized, |caps: &Captures<'_>| {
                if self.is_allowed(&caps[1]) {
                    caps[0].to_owned()
                } else {
                    String::new()
                }
            })
            .into_owned()
    }
}

impl Filter for TextFilter {
    type Output = String;

    fn apply(&self, param: &Param) -> Filtered<String> {
        match param.scalar() {
            Some(raw) => Filtered::ok(self.clean(&raw)),
            None => Filtered::none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn text(filter: &impl Filter<Output = String>, raw: &str) -> String {
        filter.apply(&Param::new("t", raw)).value().cloned().unwrap()
    }

    #[test]
    fn string_removes_line_breaks_and_nul() {
        assert_eq!(text(&StringFilter, "a\r\nb\0c"), "abc");
        assert_eq!(text(&StringFilter, ""), "");
    }

    #[test]
    fn string_reads_scalars() {
        let result = StringFilter.apply(&Param::new("n", 12));
        assert_eq!(result.value().map(String::as_str), Some("12"));
        assert!(StringFilter.apply(&Param::new("n", serde_json::json!([1]))).value().is_none());
    }

    #[test]
    fn text_keeps_line_breaks() {
        assert_eq!(text(&TextFilter::new(), "one\r\ntwo\rthree"), "one\ntwo\nthree");
    }

    #[test]
    fn text_strips_tags_unless_allowed() {
        let input = "<p>Hello <b>world</b><script>x()</script></p>";
        assert_eq!(text(&TextFilter::new(), input), "Hello worldx()");
        assert_eq!(
            text(&TextFilter::allowing(["B"]), input),
            "Hello <b>world</b>x()"
        );
    }

    #[test]
    fn text_leaves_comparisons_alone() {
        assert_eq!(text(&TextFilter::new(), "1 < 2 and 3 > 2"), "1 < 2 and 3 > 2");
    }
}
