//! Core traits for filters and validators.
//!
//! A [`Filter`] turns a raw [`Param`] into a typed value and reports the
//! errors it found as part of its result, without touching the param.
//! A [`Validator`] is a plain predicate over a raw value.

use serde_json::Value;

use super::{ErrorSet, Param, ParamError};
use crate::filters::RangeFilter;
use crate::range::Range;

// ============================================================================
// FILTER RESULT
// ============================================================================

/// The outcome of applying a filter: an optional value and the errors found.
///
/// A result with errors never carries a value.
#[derive(Debug, Clone, PartialEq)]
pub struct Filtered<T> {
    value: Option<T>,
    errors: ErrorSet,
}

impl<T> Filtered<T> {
    /// A successful result.
    pub fn ok(value: T) -> Self {
        Self {
            value: Some(value),
            errors: ErrorSet::new(),
        }
    }

    /// No value and no errors, e.g. for a null input.
    pub fn none() -> Self {
        Self {
            value: None,
            errors: ErrorSet::new(),
        }
    }

    /// A failed result with a single error.
    pub fn error(error: ParamError) -> Self {
        Self::from_errors(error.into())
    }

    /// A failed result with several errors.
    ///
    /// An empty set yields [`Filtered::none`].
    pub fn from_errors(errors: ErrorSet) -> Self {
        Self {
            value: None,
            errors,
        }
    }

    /// Whether no error was reported.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    #[must_use]
    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    /// Splits the result into value and errors.
    pub fn into_parts(self) -> (Option<T>, ErrorSet) {
        (self.value, self.errors)
    }

    /// Maps the value, keeping errors.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Filtered<U> {
        Filtered {
            value: self.value.map(f),
            errors: self.errors,
        }
    }

    /// Chains a further step on the value. Errors short-circuit.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Filtered<U>) -> Filtered<U> {
        if !self.errors.is_empty() {
            return Filtered::from_errors(self.errors);
        }
        match self.value {
            Some(value) => f(value),
            None => Filtered::none(),
        }
    }
}

// ============================================================================
// FILTER
// ============================================================================

/// Converts a raw parameter into a typed value.
///
/// Implementations must not have side effects beyond their result and
/// must return [`Filtered::none`] for a null param unless null has a
/// meaning for them.
///
/// # Examples
///
/// ```
/// use sieve_input::foundation::{Filter, Filtered, Param, ParamError};
///
/// struct Upper;
///
/// impl Filter for Upper {
///     type Output = String;
///
///     fn apply(&self, param: &Param) -> Filtered<String> {
///         match param.scalar() {
///             Some(s) if s.is_empty() => Filtered::error(ParamError::new("UPPER_EMPTY")),
///             Some(s) => Filtered::ok(s.to_uppercase()),
///             None => Filtered::none(),
///         }
///     }
/// }
///
/// let result = Upper.apply(&Param::new("code", "ab"));
/// assert_eq!(result.value().map(String::as_str), Some("AB"));
/// ```
pub trait Filter {
    /// The typed value produced on success.
    type Output;

    /// Applies the filter to `param`.
    fn apply(&self, param: &Param) -> Filtered<Self::Output>;
}

impl<F: Filter + ?Sized> Filter for &F {
    type Output = F::Output;

    fn apply(&self, param: &Param) -> Filtered<Self::Output> {
        (**self).apply(param)
    }
}

/// Composition helpers for filters.
pub trait FilterExt: Filter + Sized {
    /// Checks the filtered value against `range`.
    fn in_range<R>(self, range: R) -> RangeFilter<Self, R>
    where
        R: Range<Self::Output>,
    {
        RangeFilter::new(self, range)
    }
}

impl<F: Filter> FilterExt for F {}

// ============================================================================
// VALIDATOR
// ============================================================================

/// A side-effect-free predicate over a raw value.
///
/// Must be total: wrong-typed input, including null, yields `false`.
pub trait Validator {
    /// Whether `value` is valid.
    fn validate(&self, value: &Value) -> bool;
}

impl<F> Validator for F
where
    F: Fn(&Value) -> bool,
{
    fn validate(&self, value: &Value) -> bool {
        self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl Filter for Echo {
        type Output = String;

        fn apply(&self, param: &Param) -> Filtered<String> {
            param
                .scalar()
                .map_or_else(Filtered::none, |s| Filtered::ok(s.into_owned()))
        }
    }

    #[test]
    fn filters_do_not_touch_the_param() {
        let param = Param::new("a", "x");
        let result = Echo.apply(&param);
        assert!(result.is_ok());
        assert!(!param.has_errors());
    }

    #[test]
    fn and_then_short_circuits_on_errors() {
        let failed: Filtered<i32> = Filtered::error(ParamError::new("X"));
        let chained = failed.and_then(|v| Filtered::ok(v + 1));
        assert!(chained.errors().contains("X"));
        assert!(chained.value().is_none());

        let chained = Filtered::ok(1).and_then(|v| Filtered::ok(v + 1));
        assert_eq!(chained.value(), Some(&2));
    }

    #[test]
    fn closures_are_validators() {
        let is_string = |value: &Value| value.is_string();
        assert!(is_string.validate(&Value::from("a")));
        assert!(!is_string.validate(&Value::Null));
    }

    #[test]
    fn references_are_filters() {
        let filter = &Echo;
        assert_eq!(filter.apply(&Param::new("a", "x")).value().map(String::as_str), Some("x"));
    }
}
