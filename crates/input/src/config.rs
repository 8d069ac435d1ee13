//! Filter configuration
//!
//! Tunables for the filters a [`ValueReader`](crate::reader::ValueReader)
//! builds on its own: array separator, JSON input limit, allowed text tags
//! and the password policy. Loadable from JSON; missing keys keep their
//! defaults.
//!
//! ```
//! use sieve_input::config::FilterConfig;
//!
//! let config = FilterConfig::from_json_str(r#"{"array_separator": ";"}"#).unwrap();
//! assert_eq!(config.array_separator, ";");
//! assert_eq!(config.json_max_length, 20_000);
//! ```

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::filters::{
    ArrayFilter, DEFAULT_ARRAY_SEPARATOR, DEFAULT_JSON_MAX_LENGTH, JsonFilter, SimplePasswordChecker,
    TextFilter,
};
use crate::foundation::FilterMisuse;

static SHARED: LazyLock<FilterConfig> = LazyLock::new(FilterConfig::default);

/// Password strength rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
    /// Minimum number of characters
    pub min_length: usize,
    /// Minimum number of distinct characters
    pub min_diff_chars: usize,
    /// Passwords that are never accepted, compared case-insensitively
    pub disallowed: Vec<String>,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            min_diff_chars: 5,
            disallowed: Vec::new(),
        }
    }
}

/// Configuration for reader-built filters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Separator for `as_array`
    pub array_separator: String,
    /// Maximum JSON input in bytes
    pub json_max_length: usize,
    /// Tags `as_text` keeps
    pub text_allowed_tags: Vec<String>,
    /// Rules for `as_configured_password`
    pub password: PasswordPolicy,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            array_separator: DEFAULT_ARRAY_SEPARATOR.to_owned(),
            json_max_length: DEFAULT_JSON_MAX_LENGTH,
            text_allowed_tags: Vec::new(),
            password: PasswordPolicy::default(),
        }
    }
}

impl FilterConfig {
    /// The process-wide default configuration.
    #[must_use]
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, FilterMisuse> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the array separator
    #[must_use = "builder methods must be chained or built"]
    pub fn with_array_separator(mut self, separator: impl Into<String>) -> Self {
        self.array_separator = separator.into();
        self
    }

    /// Set the JSON input limit
    #[must_use = "builder methods must be chained or built"]
    pub const fn with_json_max_length(mut self, max_length: usize) -> Self {
        self.json_max_length = max_length;
        self
    }

    /// Set the tags kept by text filtering
    #[must_use = "builder methods must be chained or built"]
    pub fn with_text_allowed_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.text_allowed_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the password policy
    #[must_use = "builder methods must be chained or built"]
    pub fn with_password_policy(mut self, policy: PasswordPolicy) -> Self {
        self.password = policy;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), FilterMisuse> {
        if self.array_separator.is_empty() {
            return Err(FilterMisuse::InvalidConfig {
                reason: "array_separator must not be empty".into(),
            });
        }
        if self.json_max_length == 0 {
            return Err(FilterMisuse::InvalidConfig {
                reason: "json_max_length must be positive".into(),
            });
        }
        if self.password.min_diff_chars > self.password.min_length {
            return Err(FilterMisuse::InvalidConfig {
                reason: format!(
                    "password.min_diff_chars ({}) exceeds password.min_length ({})",
                    self.password.min_diff_chars, self.password.min_length
                ),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn array_filter(&self) -> ArrayFilter {
        ArrayFilter::separated_by(self.array_separator.as_str())
    }

    #[must_use]
    pub const fn json_filter(&self) -> JsonFilter {
        JsonFilter::new().max_length(self.json_max_length)
    }

    #[must_use]
    pub fn text_filter(&self) -> TextFilter {
        TextFilter::allowing(self.text_allowed_tags.iter().map(String::as_str))
    }

    #[must_use]
    pub fn password_checker(&self) -> SimplePasswordChecker {
        SimplePasswordChecker::from(&self.password)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_keys_keep_defaults() {
        let config = FilterConfig::from_json_str(r#"{"password": {"min_length": 12}}"#).unwrap();
        assert_eq!(config.password.min_length, 12);
        assert_eq!(config.password.min_diff_chars, 5);
        assert_eq!(config.array_separator, ",");
    }

    #[test]
    fn malformed_json_is_misuse() {
        let err = FilterConfig::from_json_str("{").unwrap_err();
        assert_eq!(err.code(), "FILTER_INVALID_CONFIG");
    }

    #[test]
    fn inconsistent_values_are_misuse() {
        let err = FilterConfig::from_json_str(r#"{"array_separator": ""}"#).unwrap_err();
        assert_eq!(err.code(), "FILTER_INVALID_CONFIG");

        let policy = PasswordPolicy {
            min_length: 4,
            min_diff_chars: 6,
            disallowed: Vec::new(),
        };
        assert!(FilterConfig::default().with_password_policy(policy).validate().is_err());
    }

    #[test]
    fn builds_configured_filters() {
        let config = FilterConfig::default()
            .with_array_separator("|")
            .with_json_max_length(10)
            .with_text_allowed_tags(["b"]);
        assert_eq!(config.array_filter().separator(), "|");
        assert_eq!(config.json_filter(), JsonFilter::new().max_length(10));
        assert_eq!(config.text_filter().allowed_tags(), ["b"]);
        assert_eq!(config.password_checker().min_length(), 8);
    }

    #[test]
    fn shared_is_default() {
        assert_eq!(FilterConfig::shared(), &FilterConfig::default());
    }
}
