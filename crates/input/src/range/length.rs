//! String length ranges
//!
//! Length is measured in Unicode scalar values, not bytes.

use super::Range;
use crate::foundation::{FilterMisuse, ParamError, ids};

/// Min/max character count of a string.
///
/// A length built with [`StringLength::truncate`] clamps overlong values to
/// the max border instead of rejecting them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StringLength {
    min: Option<usize>,
    max: Option<usize>,
    truncate: bool,
}

impl StringLength {
    /// No length constraints.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            min: None,
            max: None,
            truncate: false,
        }
    }

    /// At least `min` characters.
    #[must_use]
    pub const fn min(min: usize) -> Self {
        Self {
            min: Some(min),
            max: None,
            truncate: false,
        }
    }

    /// At most `max` characters.
    #[must_use]
    pub const fn max(max: usize) -> Self {
        Self {
            min: None,
            max: Some(max),
            truncate: false,
        }
    }

    /// At most `max` characters; longer values are cut down to `max`.
    #[must_use]
    pub const fn truncate(max: usize) -> Self {
        Self {
            min: None,
            max: Some(max),
            truncate: true,
        }
    }

    /// Optional borders. Returns an error if `min > max`.
    pub fn new(min: Option<usize>, max: Option<usize>) -> Result<Self, FilterMisuse> {
        if let (Some(lo), Some(hi)) = (min, max)
            && lo > hi
        {
            return Err(FilterMisuse::InvalidBounds {
                kind: "string length",
                min: lo.to_string(),
                max: hi.to_string(),
            });
        }
        Ok(Self {
            min,
            max,
            truncate: false,
        })
    }

    /// Both borders. Returns an error if `min > max`.
    pub fn between(min: usize, max: usize) -> Result<Self, FilterMisuse> {
        Self::new(Some(min), Some(max))
    }

    /// Adds a min border to a truncating length.
    pub fn with_min(self, min: usize) -> Result<Self, FilterMisuse> {
        let mut length = Self::new(Some(min), self.max)?;
        length.truncate = self.truncate;
        Ok(length)
    }

    #[must_use]
    pub const fn min_border(&self) -> Option<usize> {
        self.min
    }

    #[must_use]
    pub const fn max_border(&self) -> Option<usize> {
        self.max
    }
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

impl Range<String> for StringLength {
    fn below_min_border(&self, value: &String) -> bool {
        self.min.is_some_and(|min| char_len(value) < min)
    }

    fn above_max_border(&self, value: &String) -> bool {
        self.max.is_some_and(|max| char_len(value) > max)
    }

    fn min_param_error(&self) -> ParamError {
        ParamError::new(ids::STRING_TOO_SHORT).with_detail("minLength", self.min)
    }

    // The max-length detail is published as `maxNumber`; message catalogs
    // reference it under that key.
    fn max_param_error(&self) -> ParamError {
        ParamError::new(ids::STRING_TOO_LONG).with_detail("maxNumber", self.max)
    }

    fn allows_truncate(&self, value: &String) -> bool {
        self.truncate && self.above_max_border(value)
    }

    fn truncate_to_max_border(&self, value: &String) -> Result<String, FilterMisuse> {
        match self.max {
            Some(max) if self.allows_truncate(value) => Ok(value.chars().take(max).collect()),
            _ => Err(FilterMisuse::TruncateNotAllowed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Detail;

    #[test]
    fn counts_characters_not_bytes() {
        let length = StringLength::max(5);
        assert!(length.contains(&"h\u{e9}llo".to_owned()));
        assert!(length.above_max_border(&"h\u{e9}llo!".to_owned()));
    }

    #[test]
    fn inverted_borders_are_misuse() {
        let err = StringLength::between(5, 2).unwrap_err();
        assert_eq!(err.code(), "FILTER_INVALID_BOUNDS");
        assert!(StringLength::between(2, 2).is_ok());
        assert!(StringLength::new(Some(9), None).is_ok());
    }

    #[test]
    fn min_only_never_exceeds_max() {
        let length = StringLength::min(3);
        assert!(!length.above_max_border(&"x".repeat(10_000)));
        assert!(length.below_min_border(&"ab".to_owned()));
    }

    #[test]
    fn errors_use_published_detail_keys() {
        let length = StringLength::between(2, 4).unwrap();

        let short = length.errors_of(&"a".to_owned());
        assert_eq!(
            short.get(ids::STRING_TOO_SHORT).unwrap().detail("minLength"),
            Some(&Detail::Int(2))
        );

        let long = length.errors_of(&"abcde".to_owned());
        assert_eq!(
            long.get(ids::STRING_TOO_LONG).unwrap().detail("maxNumber"),
            Some(&Detail::Int(4))
        );
    }

    #[test]
    fn truncating_length_clamps() {
        let length = StringLength::truncate(3);
        let value = "h\u{e9}llo".to_owned();
        assert!(length.allows_truncate(&value));
        assert_eq!(length.truncate_to_max_border(&value).unwrap(), "h\u{e9}l");
    }

    #[test]
    fn plain_length_refuses_truncation() {
        let length = StringLength::max(3);
        let value = "hello".to_owned();
        assert!(!length.allows_truncate(&value));
        assert_eq!(
            length.truncate_to_max_border(&value),
            Err(FilterMisuse::TruncateNotAllowed)
        );
    }

    #[test]
    fn truncating_length_keeps_min_border() {
        let length = StringLength::truncate(5).with_min(2).unwrap();
        assert!(length.below_min_border(&"a".to_owned()));
        assert!(length.allows_truncate(&"abcdefg".to_owned()));
        assert!(StringLength::truncate(1).with_min(2).is_err());
    }
}
