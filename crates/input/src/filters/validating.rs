//! Validator-backed filter

use std::borrow::Cow;

use serde_json::Value;

use crate::foundation::{Filter, Filtered, Param, ParamError, Validator, scalar_str};

/// Passes the scalar value through when a [`Validator`] accepts it.
///
/// Rejected values, and values without a scalar form, produce the
/// configured error. Null stays null.
#[derive(Debug, Clone)]
pub struct ValidatingFilter<V> {
    validator: V,
    error: ParamError,
}

impl<V: Validator> ValidatingFilter<V> {
    pub const fn new(validator: V, error: ParamError) -> Self {
        Self { validator, error }
    }
}

impl<V: Validator> Filter for ValidatingFilter<V> {
    type Output = String;

    fn apply(&self, param: &Param) -> Filtered<String> {
        if param.is_null() {
            return Filtered::none();
        }
        match param.scalar() {
            Some(value) if self.validator.validate(param.value()) => Filtered::ok(value.into_owned()),
            _ => Filtered::error(self.error.clone()),
        }
    }
}

/// Passes a list through when a [`Validator`] accepts the whole value.
///
/// Arrays yield their scalar items, a scalar yields a single item. Use it
/// with validators that judge arrays, such as
/// [`OneOfValidator`](crate::validators::OneOfValidator) for multi-selects.
#[derive(Debug, Clone)]
pub struct ValidatingListFilter<V> {
    validator: V,
    error: ParamError,
}

impl<V: Validator> ValidatingListFilter<V> {
    pub const fn new(validator: V, error: ParamError) -> Self {
        Self { validator, error }
    }

    fn items(value: &Value) -> Option<Vec<String>> {
        match value {
            Value::Array(items) => items
                .iter()
                .map(|item| scalar_str(item).map(Cow::into_owned))
                .collect(),
            other => scalar_str(other).map(|s| vec![s.into_owned()]),
        }
    }
}

impl<V: Validator> Filter for ValidatingListFilter<V> {
    type Output = Vec<String>;

    fn apply(&self, param: &Param) -> Filtered<Vec<String>> {
        if param.is_null() {
            return Filtered::none();
        }
        match Self::items(param.value()) {
            Some(items) if self.validator.validate(param.value()) => Filtered::ok(items),
            _ => Filtered::error(self.error.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::foundation::ids;
    use crate::validators::OneOfValidator;

    #[test]
    fn accepted_values_pass() {
        let filter = ValidatingFilter::new(|v: &Value| v == "a", ParamError::new(ids::FIELD_WRONG_VALUE));
        assert_eq!(filter.apply(&Param::new("p", "a")).value().map(String::as_str), Some("a"));
    }

    #[test]
    fn rejected_values_get_the_configured_error() {
        let error = ParamError::new(ids::FIELD_NO_SELECT).with_detail("allowed", vec!["a", "b"]);
        let filter = ValidatingFilter::new(|v: &Value| v == "a", error);
        let result = filter.apply(&Param::new("p", "c"));
        let error = result.errors().get(ids::FIELD_NO_SELECT).unwrap();
        assert_eq!(error.detail("allowed").map(ToString::to_string).as_deref(), Some("a, b"));
    }

    #[test]
    fn lists_pass_when_the_whole_value_is_accepted() {
        let filter = ValidatingListFilter::new(
            OneOfValidator::new(["red", "green", "blue"]),
            ParamError::new(ids::FIELD_NO_SELECT),
        );
        let result = filter.apply(&Param::new("p", json!(["red", "blue"])));
        assert_eq!(result.value(), Some(&vec!["red".to_owned(), "blue".to_owned()]));

        let result = filter.apply(&Param::new("p", "green"));
        assert_eq!(result.value(), Some(&vec!["green".to_owned()]));

        let result = filter.apply(&Param::new("p", json!(["red", "pink"])));
        assert!(result.errors().contains(ids::FIELD_NO_SELECT));
        assert!(filter.apply(&Param::null("p")).value().is_none());
    }

    #[test]
    fn structured_values_are_rejected() {
        let filter = ValidatingFilter::new(|_: &Value| true, ParamError::new(ids::FIELD_WRONG_VALUE));
        let result = filter.apply(&Param::new("p", json!(["a"])));
        assert!(result.errors().contains(ids::FIELD_WRONG_VALUE));
    }
}
