//! Min/max expectations on filtered values
//!
//! A [`Range`] describes optional borders. An unset border never rejects a
//! value. Violations become a [`ParamError`] carrying the violated border
//! as a detail.
//!
//! | range | value | errors |
//! |---|---|---|
//! | [`NumberRange`] | `i64`, `f64` | `VALUE_TOO_SMALL {minNumber}`, `VALUE_TOO_GREAT {maxNumber}` |
//! | [`StringLength`] | `String` | `STRING_TOO_SHORT {minLength}`, `STRING_TOO_LONG {maxNumber}` |
//! | [`DateRange`] | `NaiveDateTime` | `DATE_TOO_EARLY {earliestDate}`, `DATE_TOO_LATE {latestDate}` |
//! | [`DatespanRange`] | any [`Span`](crate::datespan::Span) | same as `DateRange` |
//!
//! Truncation instead of rejection is a capability of the range itself
//! ([`Range::allows_truncate`]), so [`RangeFilter`](crate::filters::RangeFilter)
//! stays agnostic of the concrete range it wraps.

pub mod date;
pub mod length;
pub mod number;

pub use date::{DateRange, DatespanRange};
pub use length::StringLength;
pub use number::NumberRange;

use crate::foundation::{ErrorSet, FilterMisuse, ParamError};

/// Borders a value of type `T` must respect.
pub trait Range<T: ?Sized> {
    /// `true` if a min border is set and `value` lies below it.
    fn below_min_border(&self, value: &T) -> bool;

    /// `true` if a max border is set and `value` lies above it.
    fn above_max_border(&self, value: &T) -> bool;

    /// Error describing a min border violation.
    fn min_param_error(&self) -> ParamError;

    /// Error describing a max border violation.
    fn max_param_error(&self) -> ParamError;

    /// Whether `value` respects both borders.
    fn contains(&self, value: &T) -> bool {
        !self.below_min_border(value) && !self.above_max_border(value)
    }

    /// The errors `value` produces against this range.
    fn errors_of(&self, value: &T) -> ErrorSet {
        let mut errors = ErrorSet::new();
        if self.below_min_border(value) {
            errors.add(self.min_param_error());
        } else if self.above_max_border(value) {
            errors.add(self.max_param_error());
        }
        errors
    }

    /// Whether `value` may be clamped to the max border instead of rejected.
    fn allows_truncate(&self, _value: &T) -> bool {
        false
    }

    /// Clamps `value` to the max border.
    ///
    /// Fails with [`FilterMisuse::TruncateNotAllowed`] unless
    /// [`allows_truncate`](Self::allows_truncate) holds for `value`.
    fn truncate_to_max_border(&self, _value: &T) -> Result<T, FilterMisuse>
    where
        T: Sized,
    {
        Err(FilterMisuse::TruncateNotAllowed)
    }
}

impl<T: ?Sized, R: Range<T> + ?Sized> Range<T> for &R {
    fn below_min_border(&self, value: &T) -> bool {
        (**self).below_min_border(value)
    }

    fn above_max_border(&self, value: &T) -> bool {
        (**self).above_max_border(value)
    }

    fn min_param_error(&self) -> ParamError {
        (**self).min_param_error()
    }

    fn max_param_error(&self) -> ParamError {
        (**self).max_param_error()
    }

    fn allows_truncate(&self, value: &T) -> bool {
        (**self).allows_truncate(value)
    }

    fn truncate_to_max_border(&self, value: &T) -> Result<T, FilterMisuse>
    where
        T: Sized,
    {
        (**self).truncate_to_max_border(value)
    }
}
