//! Session-wide error collection.
//!
//! [`ParamErrors`] groups errors by parameter name, then by error id. One
//! instance lives for one validation session (typically one request) and
//! only ever grows.

use std::sync::{Arc, LazyLock};

use indexmap::IndexMap;
use parking_lot::Mutex;
use serde::Serialize;

use super::{ErrorSet, ParamError};

static EMPTY: LazyLock<ErrorSet> = LazyLock::new(ErrorSet::new);

// ============================================================================
// PARAM ERRORS
// ============================================================================

/// Errors of a validation session, grouped by parameter name.
///
/// Iteration follows insertion order of parameter names and, within each
/// name, insertion order of error ids.
///
/// # Examples
///
/// ```
/// use sieve_input::foundation::{ParamError, ParamErrors};
///
/// let mut errors = ParamErrors::new();
/// errors.add(ParamError::new("FIELD_EMPTY"), "email");
/// errors.add(ParamError::new("FIELD_EMPTY"), "email");
///
/// assert!(errors.exist_for_with_id("email", "FIELD_EMPTY"));
/// assert_eq!(errors.count(), 1);
/// assert_eq!(errors.get_for("email").len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ParamErrors {
    errors: IndexMap<String, ErrorSet>,
}

impl ParamErrors {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an error for `param_name`.
    ///
    /// Returns the error now stored under that id: if the id was already
    /// present for the name, the first error wins.
    pub fn add(&mut self, error: ParamError, param_name: impl Into<String>) -> &ParamError {
        self.errors.entry(param_name.into()).or_default().add(error)
    }

    /// Adds every error of `errors` for `param_name`.
    pub fn add_all(&mut self, errors: ErrorSet, param_name: impl Into<String>) {
        if errors.is_empty() {
            return;
        }
        self.errors.entry(param_name.into()).or_default().extend(errors);
    }

    /// Whether any error exists.
    #[must_use]
    pub fn exist(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Whether any error exists for `param_name`.
    #[must_use]
    pub fn exist_for(&self, param_name: &str) -> bool {
        self.errors.contains_key(param_name)
    }

    /// Whether an error with `id` exists for `param_name`.
    #[must_use]
    pub fn exist_for_with_id(&self, param_name: &str, id: &str) -> bool {
        self.errors
            .get(param_name)
            .is_some_and(|set| set.contains(id))
    }

    /// Number of parameter names with at least one error.
    #[must_use]
    pub fn count(&self) -> usize {
        self.errors.len()
    }

    /// The full two-level structure.
    #[must_use]
    pub fn get(&self) -> &IndexMap<String, ErrorSet> {
        &self.errors
    }

    /// Errors for `param_name`; empty if there are none.
    #[must_use]
    pub fn get_for(&self, param_name: &str) -> &ErrorSet {
        self.errors.get(param_name).unwrap_or(&EMPTY)
    }

    /// The error with `id` for `param_name`.
    #[must_use]
    pub fn get_for_with_id(&self, param_name: &str, id: &str) -> Option<&ParamError> {
        self.errors.get(param_name)?.get(id)
    }

    /// Iterates over `(param_name, errors)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ErrorSet)> {
        self.errors.iter().map(|(name, set)| (name.as_str(), set))
    }
}

impl<'a> IntoIterator for &'a ParamErrors {
    type Item = (&'a String, &'a ErrorSet);
    type IntoIter = indexmap::map::Iter<'a, String, ErrorSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

// ============================================================================
// ERROR SINK
// ============================================================================

/// Destination for errors recorded by readers.
pub trait ErrorSink {
    /// Records `error` for `param_name`.
    fn record(&mut self, param_name: &str, error: ParamError);

    /// Records every error of `errors` for `param_name`.
    fn record_all(&mut self, param_name: &str, errors: ErrorSet) {
        for error in errors {
            self.record(param_name, error);
        }
    }
}

impl ErrorSink for ParamErrors {
    fn record(&mut self, param_name: &str, error: ParamError) {
        self.add(error, param_name);
    }

    fn record_all(&mut self, param_name: &str, errors: ErrorSet) {
        self.add_all(errors, param_name);
    }
}

// ============================================================================
// SHARED PARAM ERRORS
// ============================================================================

/// A [`ParamErrors`] shared between threads.
///
/// Clones point at the same collection, so independent parameters can be
/// read on separate threads. Inserts take the lock, which keeps the
/// one-error-per-id rule per parameter name.
#[derive(Debug, Clone, Default)]
pub struct SharedParamErrors {
    inner: Arc<Mutex<ParamErrors>>,
}

impl SharedParamErrors {
    /// Creates an empty shared collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` with the collection locked.
    pub fn with<R>(&self, f: impl FnOnce(&ParamErrors) -> R) -> R {
        f(&self.inner.lock())
    }

    /// A copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> ParamErrors {
        self.inner.lock().clone()
    }

    /// Returns the collection, cloning it if other handles are still alive.
    #[must_use]
    pub fn into_inner(self) -> ParamErrors {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => mutex.into_inner(),
            Err(shared) => shared.lock().clone(),
        }
    }
}

impl ErrorSink for SharedParamErrors {
    fn record(&mut self, param_name: &str, error: ParamError) {
        self.inner.lock().add(error, param_name);
    }

    fn record_all(&mut self, param_name: &str, errors: ErrorSet) {
        self.inner.lock().add_all(errors, param_name);
    }
}

impl From<ParamErrors> for SharedParamErrors {
    fn from(errors: ParamErrors) -> Self {
        Self {
            inner: Arc::new(Mutex::new(errors)),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
