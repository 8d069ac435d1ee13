//! Numeric ranges

use std::fmt::Display;

use super::Range;
use crate::foundation::{Detail, FilterMisuse, ParamError, ids};

/// Inclusive min/max borders on a number.
///
/// # Examples
///
/// ```
/// use sieve_input::range::{NumberRange, Range};
///
/// let adult = NumberRange::min(18_i64);
/// assert!(adult.below_min_border(&17));
/// assert!(!adult.above_max_border(&i64::MAX));
///
/// let error = adult.min_param_error();
/// assert_eq!(error.id(), "VALUE_TOO_SMALL");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberRange<T> {
    min: Option<T>,
    max: Option<T>,
}

impl<T> NumberRange<T> {
    /// A range without borders.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    /// A range with only a min border.
    pub const fn min(min: T) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// A range with only a max border.
    pub const fn max(max: T) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// The min border, if any.
    pub const fn min_border(&self) -> Option<&T> {
        self.min.as_ref()
    }

    /// The max border, if any.
    pub const fn max_border(&self) -> Option<&T> {
        self.max.as_ref()
    }
}

impl<T: PartialOrd + Display> NumberRange<T> {
    /// A range with optional borders.
    ///
    /// Returns an error if both are set and `min > max`.
    pub fn new(min: Option<T>, max: Option<T>) -> Result<Self, FilterMisuse> {
        if let (Some(lo), Some(hi)) = (&min, &max)
            && lo > hi
        {
            return Err(FilterMisuse::InvalidBounds {
                kind: "number",
                min: lo.to_string(),
                max: hi.to_string(),
            });
        }
        Ok(Self { min, max })
    }

    /// A range with both borders.
    pub fn between(min: T, max: T) -> Result<Self, FilterMisuse> {
        Self::new(Some(min), Some(max))
    }
}

impl<T> Default for NumberRange<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T> Range<T> for NumberRange<T>
where
    T: PartialOrd + Copy + Into<Detail>,
{
    fn below_min_border(&self, value: &T) -> bool {
        self.min.is_some_and(|min| *value < min)
    }

    fn above_max_border(&self, value: &T) -> bool {
        self.max.is_some_and(|max| *value > max)
    }

    fn min_param_error(&self) -> ParamError {
        ParamError::new(ids::VALUE_TOO_SMALL).with_detail("minNumber", self.min)
    }

    fn max_param_error(&self) -> ParamError {
        ParamError::new(ids::VALUE_TOO_GREAT).with_detail("maxNumber", self.max)
    }
}
