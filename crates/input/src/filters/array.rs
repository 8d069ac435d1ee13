//! Array filter

use serde_json::Value;

use crate::foundation::{Filter, Filtered, Param, scalar_str};

/// Default item separator.
pub const DEFAULT_ARRAY_SEPARATOR: &str = ",";

/// Reads a list of strings.
///
/// String input is split on the separator and each item trimmed; the empty
/// string is the empty list. JSON arrays keep their scalar items.
///
/// ```
/// use sieve_input::filters::ArrayFilter;
/// use sieve_input::foundation::{Filter, Param};
///
/// let tags = ArrayFilter::new().apply(&Param::new("tags", "foo, bar"));
/// assert_eq!(tags.value(), Some(&vec!["foo".to_owned(), "bar".to_owned()]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayFilter {
    separator: String,
}

impl ArrayFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::separated_by(DEFAULT_ARRAY_SEPARATOR)
    }

    /// A filter splitting on `separator`. An empty separator keeps the
    /// input as a single item.
    #[must_use]
    pub fn separated_by(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    fn split(&self, raw: &str) -> Vec<String> {
        if raw.trim().is_empty() {
            return Vec::new();
        }
        if self.separator.is_empty() {
            return vec![raw.trim().to_owned()];
        }
        raw.split(self.separator.as_str())
            .map(|item| item.trim().to_owned())
            .collect()
    }
}

impl Default for ArrayFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for ArrayFilter {
    type Output = Vec<String>;

    fn apply(&self, param: &Param) -> Filtered<Vec<String>> {
        match param.value() {
            Value::Null => Filtered::none(),
            Value::Array(items) => Filtered::ok(
                items
                    .iter()
                    .filter_map(|item| scalar_str(item).map(|s| s.trim().to_owned()))
                    .collect(),
            ),
            Value::Object(map) => Filtered::ok(
                map.values()
                    .filter_map(|item| scalar_str(item).map(|s| s.trim().to_owned()))
                    .collect(),
            ),
            other => Filtered::ok(scalar_str(other).map(|s| self.split(&s)).unwrap_or_default()),
        }
    }
}
