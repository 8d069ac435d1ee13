//! Content validators
//!
//! Validators comparing a value against expected content.

use regex::Regex;
use serde_json::Value;

use crate::foundation::{FilterMisuse, Validator, scalar_str};

// ============================================================================
// CONTAINS VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates that the value contains a substring.
    #[derive(PartialEq, Eq, Hash)]
    pub ContainsValidator { needle: String };
    rule(self, input) { input.contains(self.needle.as_str()) }
    new(needle: impl Into<String>) {
        Self { needle: needle.into() }
    }
    fn contains(needle: impl Into<String>);
}

// ============================================================================
// REGEX VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates that the value matches a regular expression.
    pub RegexValidator { pattern: Regex };
    rule(self, input) { self.pattern.is_match(input) }
    new(pattern: &str) -> FilterMisuse {
        Regex::new(pattern)
            .map(|pattern| Self { pattern })
            .map_err(|err| FilterMisuse::invalid_pattern(pattern, &err))
    }
    fn regex(pattern: &str) -> FilterMisuse;
}

impl From<Regex> for RegexValidator {
    fn from(pattern: Regex) -> Self {
        Self { pattern }
    }
}

// ============================================================================
// EQUAL VALIDATOR
// ============================================================================

/// Validates that the value equals an expected value.
///
/// Values of different JSON types are equal when their scalar forms are,
/// so `"5"` equals `5`.
#[derive(Debug, Clone, PartialEq)]
pub struct EqualValidator {
    expected: Value,
}

impl EqualValidator {
    #[must_use]
    pub fn new(expected: impl Into<Value>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl Validator for EqualValidator {
    fn validate(&self, value: &Value) -> bool {
        if value.is_null() {
            return false;
        }
        if *value == self.expected {
            return true;
        }
        match (scalar_str(value), scalar_str(&self.expected)) {
            (Some(actual), Some(expected)) => actual == expected,
            _ => false,
        }
    }
}

#[must_use]
pub fn equal_to(expected: impl Into<Value>) -> EqualValidator {
    EqualValidator::new(expected)
}

// ============================================================================
// ONE OF VALIDATOR
// ============================================================================

/// Validates that the value is one of the allowed values.
///
/// For an array every item must be allowed; the empty array is not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneOfValidator {
    allowed: Vec<String>,
}

impl OneOfValidator {
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }

    fn allows(&self, value: &Value) -> bool {
        scalar_str(value).is_some_and(|s| self.allowed.iter().any(|a| *a == s))
    }
}

impl Validator for OneOfValidator {
    fn validate(&self, value: &Value) -> bool {
        match value {
            Value::Array(items) => !items.is_empty() && items.iter().all(|item| self.allows(item)),
            other => self.allows(other),
        }
    }
}

pub fn one_of<I, S>(allowed: I) -> OneOfValidator
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    OneOfValidator::new(allowed)
}

// ============================================================================
// TESTS
// ============================================================================
