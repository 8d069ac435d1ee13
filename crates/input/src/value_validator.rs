//! One-shot predicates over a parameter's raw value
//!
//! Unlike [`ValueReader`](crate::reader::ValueReader), nothing is recorded:
//! each method returns the validator's verdict directly, and null is simply
//! invalid.

use serde_json::Value;

use crate::foundation::{FilterMisuse, Param, Validator};
use crate::validators::{
    ContainsValidator, EqualValidator, ExistingHttpUriValidator, HostResolver, HttpUriValidator,
    IpAddressValidator, IpV4Validator, IpV6Validator, MailValidator, OneOfValidator,
    RegexValidator,
};

/// Boolean checks on one parameter.
#[derive(Debug, Clone)]
pub struct ValueValidator {
    param: Param,
}

impl ValueValidator {
    #[must_use]
    pub const fn new(param: Param) -> Self {
        Self { param }
    }

    #[must_use]
    pub const fn param(&self) -> &Param {
        &self.param
    }

    fn value(&self) -> &Value {
        self.param.value()
    }

    /// Whether the value contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        ContainsValidator::new(needle).validate(self.value())
    }

    #[must_use]
    pub fn is_equal_to(&self, expected: impl Into<Value>) -> bool {
        EqualValidator::new(expected).validate(self.value())
    }

    #[must_use]
    pub fn is_http_uri(&self) -> bool {
        HttpUriValidator.validate(self.value())
    }

    /// Whether the value is an HTTP URI whose host resolves through `resolver`.
    #[must_use]
    pub fn is_existing_http_uri<R: HostResolver>(&self, resolver: R) -> bool {
        ExistingHttpUriValidator::new(resolver).validate(self.value())
    }

    #[must_use]
    pub fn is_ip_address(&self) -> bool {
        IpAddressValidator.validate(self.value())
    }

    #[must_use]
    pub fn is_ip_v4_address(&self) -> bool {
        IpV4Validator.validate(self.value())
    }

    #[must_use]
    pub fn is_ip_v6_address(&self) -> bool {
        IpV6Validator.validate(self.value())
    }

    #[must_use]
    pub fn is_mail_address(&self) -> bool {
        MailValidator.validate(self.value())
    }

    /// Whether the value, or every item of an array value, is allowed.
    pub fn is_one_of<I, S>(&self, allowed: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        OneOfValidator::new(allowed).validate(self.value())
    }

    /// Whether the value matches `pattern`.
    ///
    /// An uncompilable pattern is a mistake in the calling code, not an
    /// invalid value, and is returned as an error.
    pub fn satisfies_regex(&self, pattern: &str) -> Result<bool, FilterMisuse> {
        Ok(RegexValidator::new(pattern)?.validate(self.value()))
    }

    /// Checks the value with any validator.
    pub fn with_validator<V: Validator>(&self, validator: V) -> bool {
        validator.validate(self.value())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn check(value: Value) -> ValueValidator {
        ValueValidator::new(Param::new("p", value))
    }

    #[test]
    fn predicates_answer_directly() {
        assert!(check(json!("https://example.com")).is_http_uri());
        assert!(check(json!("jane@example.com")).is_mail_address());
        assert!(check(json!("::1")).is_ip_v6_address());
        assert!(check(json!("a-b")).contains("-"));
        assert!(check(json!("5")).is_equal_to(5));
        assert!(check(json!(["a", "b"])).is_one_of(["a", "b", "c"]));
    }

    #[test]
    fn null_is_invalid_everywhere() {
        let v = check(Value::Null);
        assert!(!v.is_http_uri());
        assert!(!v.is_mail_address());
        assert!(!v.is_ip_address());
        assert!(!v.contains(""));
        assert!(!v.is_one_of(["a"]));
        assert!(!v.satisfies_regex(".*").unwrap());
    }

    #[test]
    fn bad_patterns_are_misuse() {
        assert!(check(json!("x")).satisfies_regex("[").is_err());
        assert!(check(json!("abc")).satisfies_regex("^a").unwrap());
    }

    #[test]
    fn existing_uri_uses_the_resolver() {
        let v = check(json!("http://example.com"));
        assert!(v.is_existing_http_uri(|_: &str, _: u16| true));
        assert!(!v.is_existing_http_uri(|_: &str, _: u16| false));
    }

    #[test]
    fn custom_validators() {
        assert!(check(json!(3)).with_validator(|v: &Value| v.as_i64() == Some(3)));
    }
}
