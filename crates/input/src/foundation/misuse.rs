/// Programmer or configuration mistakes.
///
/// Unlike [`ParamError`](super::ParamError), which describes bad user input,
/// a `FilterMisuse` means the calling code is wrong: inverted bounds, an
/// uncompilable pattern, an unknown parameter name in a strict lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterMisuse {
    /// A range was built with its min border above its max border.
    #[error("invalid {kind} bounds: min `{min}` is greater than max `{max}`")]
    InvalidBounds {
        kind: &'static str,
        min: String,
        max: String,
    },

    /// Truncation was requested from a range that does not allow it.
    #[error("range does not allow truncating values to its max border")]
    TruncateNotAllowed,

    /// A regular expression failed to compile.
    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// A strict lookup asked for a parameter the source does not carry.
    #[error("unknown parameter `{name}`")]
    UnknownParam { name: String },

    /// Filter configuration could not be loaded.
    #[error("invalid filter configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl FilterMisuse {
    /// Machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::InvalidBounds { .. } => "FILTER_INVALID_BOUNDS",
            Self::TruncateNotAllowed => "FILTER_TRUNCATE_NOT_ALLOWED",
            Self::InvalidPattern { .. } => "FILTER_INVALID_PATTERN",
            Self::UnknownParam { .. } => "FILTER_UNKNOWN_PARAM",
            Self::InvalidConfig { .. } => "FILTER_INVALID_CONFIG",
        }
    }

    /// Wraps a regex compile failure for `pattern`.
    pub fn invalid_pattern(pattern: impl Into<String>, error: &regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for FilterMisuse {
    fn from(error: serde_json::Error) -> Self {
        Self::InvalidConfig {
            reason: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = FilterMisuse::InvalidBounds {
            kind: "number",
            min: "10".into(),
            max: "1".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid number bounds: min `10` is greater than max `1`"
        );

        let err = FilterMisuse::UnknownParam {
            name: "email".into(),
        };
        assert_eq!(err.to_string(), "unknown parameter `email`");
    }

    #[test]
    fn codes_are_unique_per_variant() {
        let errors = [
            FilterMisuse::InvalidBounds {
                kind: "",
                min: String::new(),
                max: String::new(),
            },
            FilterMisuse::TruncateNotAllowed,
            FilterMisuse::InvalidPattern {
                pattern: String::new(),
                reason: String::new(),
            },
            FilterMisuse::UnknownParam {
                name: String::new(),
            },
            FilterMisuse::InvalidConfig {
                reason: String::new(),
            },
        ];

        let mut codes: Vec<&str> = errors.iter().map(FilterMisuse::code).collect();
        assert!(codes.iter().all(|c| c.starts_with("FILTER_")));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }
}
