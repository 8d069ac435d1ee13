//! Parameter sources
//!
//! A [`ParamSource`] hands out a fresh [`Param`] per lookup. [`Params`] is
//! the in-memory source; request adapters implement the trait over their
//! own storage.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::foundation::{ErrorSink, FilterMisuse, Param};
use crate::reader::ValueReader;
use crate::value_validator::ValueValidator;

/// Something that provides raw parameter values by name.
pub trait ParamSource {
    /// The raw value for `name`, if present.
    fn raw(&self, name: &str) -> Option<&Value>;

    /// Whether a value is present for `name`.
    fn contains(&self, name: &str) -> bool {
        self.raw(name).is_some()
    }

    /// A param for `name`. Absent names yield a null param.
    fn param(&self, name: &str) -> Param {
        Param::new(name, self.raw(name).cloned().unwrap_or(Value::Null))
    }

    /// A param for `name`, failing if the source does not carry it.
    fn require(&self, name: &str) -> Result<Param, FilterMisuse> {
        self.raw(name)
            .map(|value| Param::new(name, value.clone()))
            .ok_or_else(|| FilterMisuse::UnknownParam {
                name: name.to_owned(),
            })
    }

    /// A reader for `name` recording errors into `errors`.
    fn read<'a, S>(&self, name: &str, errors: &'a mut S) -> ValueReader<'a, S>
    where
        S: ErrorSink + ?Sized,
    {
        ValueReader::new(errors, self.param(name))
    }

    /// Predicate shortcuts for `name`.
    fn validate(&self, name: &str) -> ValueValidator {
        ValueValidator::new(self.param(name))
    }
}

/// An insertion-ordered set of raw parameter values.
///
/// ```
/// use sieve_input::foundation::ParamErrors;
/// use sieve_input::params::{ParamSource, Params};
///
/// let params: Params = serde_json::from_str(r#"{"age": "42"}"#).unwrap();
/// let mut errors = ParamErrors::new();
/// assert_eq!(params.read("age", &mut errors).as_int(None), Some(42));
/// assert!(!errors.exist());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params {
    values: IndexMap<String, Value>,
}

impl Params {
    /// Create an empty value set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value for a parameter name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    /// Set a value, builder style.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Remove a value by name, returning it if it existed.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.values.shift_remove(name)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Parameter names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ParamSource for Params {
    fn raw(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }
}

impl ParamSource for Map<String, Value> {
    fn raw(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}
