//! A named raw request value.

use std::borrow::Cow;

use serde_json::Value;

use super::{Detail, ErrorSet, ParamError};

/// A named, possibly absent raw value plus its own error set.
///
/// Raw values are JSON values: strings from query strings and forms,
/// arrays for multi-valued fields, scalars or structures from decoded
/// bodies. `Value::Null` marks an absent parameter.
///
/// # Examples
///
/// ```
/// use sieve_input::foundation::Param;
///
/// let param = Param::new("name", "Ada");
/// assert_eq!(param.name(), "name");
/// assert!(!param.is_empty());
/// assert_eq!(param.len(), 3);
///
/// assert!(Param::null("missing").is_null());
/// assert!(Param::new("blank", "").is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    name: String,
    value: Value,
    errors: ErrorSet,
}

impl Param {
    /// Creates a param with a raw value.
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            errors: ErrorSet::new(),
        }
    }

    /// Creates an absent param.
    pub fn null(name: impl Into<String>) -> Self {
        Self::new(name, Value::Null)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Consumes the param, returning its raw value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.value
    }

    /// `true` iff the value is null.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }

    /// `true` iff the value is null or a zero-length string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match &self.value {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Length of the value: characters for strings and other scalars,
    /// element count for arrays and objects, `0` for null.
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.value {
            Value::Null => 0,
            Value::Array(items) => items.len(),
            Value::Object(map) => map.len(),
            _ => self.scalar().map_or(0, |s| s.chars().count()),
        }
    }

    /// String form of a scalar value; `None` for null, arrays and objects.
    #[must_use]
    pub fn scalar(&self) -> Option<Cow<'_, str>> {
        scalar_str(&self.value)
    }

    /// Adds an error, de-duplicated by id. Returns the stored error.
    pub fn add_error(&mut self, error: ParamError) -> &ParamError {
        self.errors.add(error)
    }

    /// Adds an error built from an id and details.
    pub fn add_error_with_id<K, D, I>(&mut self, id: impl Into<Cow<'static, str>>, details: I) -> &ParamError
    where
        I: IntoIterator<Item = (K, D)>,
        K: Into<Cow<'static, str>>,
        D: Into<Detail>,
    {
        self.errors.add(ParamError::with_details(id, details))
    }

    #[must_use]
    pub fn has_error(&self, id: &str) -> bool {
        self.errors.contains(id)
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    #[must_use]
    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }
}

/// String form of a scalar JSON value.
///
/// Strings are borrowed; numbers and booleans use their canonical form.
/// Null, arrays and objects have no scalar form.
#[must_use]
pub fn scalar_str(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
