//! Range filter

use crate::foundation::{Filter, Filtered, Param};
use crate::range::Range;

/// Checks the output of an inner filter against a [`Range`].
///
/// Errors of the inner filter pass through unchanged. A value outside the
/// range is clamped when the range allows truncation for it, otherwise
/// rejected with the range's errors.
///
/// ```
/// use sieve_input::filters::IntegerFilter;
/// use sieve_input::foundation::{Filter, FilterExt, Param};
/// use sieve_input::range::NumberRange;
///
/// let adult = IntegerFilter.in_range(NumberRange::min(18));
/// let result = adult.apply(&Param::new("age", "17"));
/// assert!(result.errors().contains("VALUE_TOO_SMALL"));
/// ```
#[derive(Debug, Clone)]
pub struct RangeFilter<F, R> {
    inner: F,
    range: R,
}

impl<F, R> RangeFilter<F, R>
where
    F: Filter,
    R: Range<F::Output>,
{
    pub const fn new(inner: F, range: R) -> Self {
        Self { inner, range }
    }

    pub const fn range(&self) -> &R {
        &self.range
    }
}

impl<F, R> Filter for RangeFilter<F, R>
where
    F: Filter,
    R: Range<F::Output>,
{
    type Output = F::Output;

    fn apply(&self, param: &Param) -> Filtered<F::Output> {
        self.inner.apply(param).and_then(|value| {
            if self.range.contains(&value) {
                return Filtered::ok(value);
            }
            if self.range.allows_truncate(&value)
                && let Ok(truncated) = self.range.truncate_to_max_border(&value)
            {
                return Filtered::ok(truncated);
            }
            Filtered::from_errors(self.range.errors_of(&value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{IntegerFilter, StringFilter};
    use crate::foundation::{FilterExt, ids};
    use crate::range::{NumberRange, StringLength};

    #[test]
    fn value_inside_passes() {
        let filter = IntegerFilter.in_range(NumberRange::between(1, 10).unwrap());
        assert_eq!(filter.apply(&Param::new("n", "5")).value(), Some(&5));
    }

    #[test]
    fn value_outside_is_rejected() {
        let filter = IntegerFilter.in_range(NumberRange::max(10));
        let result = filter.apply(&Param::new("n", "11"));
        assert!(result.value().is_none());
        assert!(result.errors().contains(ids::VALUE_TOO_GREAT));
    }

    #[test]
    fn inner_errors_pass_through() {
        let filter = IntegerFilter.in_range(NumberRange::min(1));
        let result = filter.apply(&Param::new("n", "x"));
        assert_eq!(result.errors().ids().collect::<Vec<_>>(), [ids::INTEGER_INVALID]);
    }

    #[test]
    fn absent_value_is_not_checked() {
        let filter = IntegerFilter.in_range(NumberRange::min(1));
        let result = filter.apply(&Param::new("n", ""));
        assert!(result.is_ok());
        assert!(result.value().is_none());
    }

    #[test]
    fn truncating_range_clamps() {
        let filter = StringFilter.in_range(StringLength::truncate(3));
        let result = filter.apply(&Param::new("s", "abcdef"));
        assert_eq!(result.value().map(String::as_str), Some("abc"));
        assert!(result.is_ok());
    }

    #[test]
    fn truncating_range_still_enforces_min() {
        let filter = StringFilter.in_range(StringLength::truncate(3).with_min(2).unwrap());
        let result = filter.apply(&Param::new("s", "a"));
        assert!(result.errors().contains(ids::STRING_TOO_SHORT));
    }
}
