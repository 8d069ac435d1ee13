//! Password and secret filters
//!
//! Both produce a [`SecretString`] so the value is never logged or printed
//! by accident. Neither has a meaningful default.

use std::collections::HashSet;

use secrecy::SecretString;
use serde_json::Value;

use crate::config::PasswordPolicy;
use crate::foundation::{ErrorSet, Filter, Filtered, Param, ParamError, ids, scalar_str};

// ============================================================================
// CHECKER
// ============================================================================

/// Strength rules for a password.
pub trait PasswordChecker {
    /// Errors for `password`; an empty set accepts it.
    fn check(&self, password: &str) -> ErrorSet;
}

impl<C: PasswordChecker + ?Sized> PasswordChecker for &C {
    fn check(&self, password: &str) -> ErrorSet {
        (**self).check(password)
    }
}

/// Length, character variety and a deny list.
///
/// # Errors reported
///
/// - `PASSWORD_DISALLOWED` for passwords on the deny list (case-insensitive)
/// - `PASSWORD_TOO_SHORT {minLength}`
/// - `PASSWORD_TOO_LESS_DIFF_CHARS {minDiff}` for too few distinct characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimplePasswordChecker {
    min_length: usize,
    min_diff_chars: usize,
    disallowed: Vec<String>,
}

impl SimplePasswordChecker {
    #[must_use]
    pub const fn new(min_length: usize, min_diff_chars: usize) -> Self {
        Self {
            min_length,
            min_diff_chars,
            disallowed: Vec::new(),
        }
    }

    /// Adds passwords that are never accepted.
    #[must_use = "builder methods must be chained or built"]
    pub fn disallow<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disallowed
            .extend(values.into_iter().map(|v| v.into().to_lowercase()));
        self
    }

    #[must_use]
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    #[must_use]
    pub const fn min_diff_chars(&self) -> usize {
        self.min_diff_chars
    }
}

impl Default for SimplePasswordChecker {
    fn default() -> Self {
        Self::from(&PasswordPolicy::default())
    }
}

impl From<&PasswordPolicy> for SimplePasswordChecker {
    fn from(policy: &PasswordPolicy) -> Self {
        Self::new(policy.min_length, policy.min_diff_chars).disallow(policy.disallowed.iter().cloned())
    }
}

impl PasswordChecker for SimplePasswordChecker {
    fn check(&self, password: &str) -> ErrorSet {
        let mut errors = ErrorSet::new();
        let lowered = password.to_lowercase();
        if self.disallowed.iter().any(|d| *d == lowered) {
            errors.add(ParamError::new(ids::PASSWORD_DISALLOWED));
        }
        if password.chars().count() < self.min_length {
            errors.add(
                ParamError::new(ids::PASSWORD_TOO_SHORT).with_detail("minLength", self.min_length),
            );
        }
        if password.chars().collect::<HashSet<_>>().len() < self.min_diff_chars {
            errors.add(
                ParamError::new(ids::PASSWORD_TOO_LESS_DIFF_CHARS)
                    .with_detail("minDiff", self.min_diff_chars),
            );
        }
        errors
    }
}

// ============================================================================
// FILTERS
// ============================================================================

/// Reads a password and checks its strength.
///
/// A two-item array is treated as password plus confirmation; differing
/// items are `PASSWORDS_NOT_EQUAL`.
#[derive(Debug, Clone, Default)]
pub struct PasswordFilter<C> {
    checker: C,
}

impl<C: PasswordChecker> PasswordFilter<C> {
    pub const fn new(checker: C) -> Self {
        Self { checker }
    }

    fn candidate(value: &Value) -> Result<Option<String>, ParamError> {
        match value {
            Value::Array(items) if items.len() == 2 => {
                let first = scalar_str(&items[0]);
                if first != scalar_str(&items[1]) {
                    return Err(ParamError::new(ids::PASSWORDS_NOT_EQUAL));
                }
                Ok(first.map(|s| s.into_owned()))
            }
            other => Ok(scalar_str(other).map(|s| s.into_owned())),
        }
    }
}

impl<C: PasswordChecker> Filter for PasswordFilter<C> {
    type Output = SecretString;

    fn apply(&self, param: &Param) -> Filtered<SecretString> {
        let password = match Self::candidate(param.value()) {
            Ok(Some(password)) if !password.is_empty() => password,
            Ok(_) => return Filtered::none(),
            Err(error) => return Filtered::error(error),
        };
        let errors = self.checker.check(&password);
        if errors.is_empty() {
            Filtered::ok(SecretString::from(password))
        } else {
            Filtered::from_errors(errors)
        }
    }
}

/// Reads any scalar as a secret without further checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SecretFilter;

impl Filter for SecretFilter {
    type Output = SecretString;

    fn apply(&self, param: &Param) -> Filtered<SecretString> {
        match param.scalar() {
            Some(secret) if !secret.is_empty() => Filtered::ok(SecretString::from(secret.into_owned())),
            _ => Filtered::none(),
        }
    }
}
