//! JSON filter

use serde_json::Value;

use crate::foundation::{Filter, Filtered, Param, ParamError, ids};

/// Default maximum input length in bytes.
pub const DEFAULT_JSON_MAX_LENGTH: usize = 20_000;

/// Reads a JSON object or array.
///
/// String input is decoded; arrays and objects that arrive already
/// structured pass through unchanged.
///
/// # Errors reported
///
/// - `JSON_INPUT_TOO_BIG {maxLength}` when the input exceeds `max_length` bytes
/// - `JSON_INVALID` when the input does not start with `{` or `[`
/// - `JSON_SYNTAX_ERROR {errorMsg, line, column}` when decoding fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonFilter {
    max_length: usize,
}

impl JsonFilter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_length: DEFAULT_JSON_MAX_LENGTH,
        }
    }

    /// Sets the maximum input length in bytes.
    #[must_use = "builder methods must be chained or built"]
    pub const fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    fn decode(&self, raw: &str) -> Filtered<Value> {
        let input = raw.trim();
        if input.is_empty() {
            return Filtered::none();
        }
        if input.len() > self.max_length {
            return Filtered::error(
                ParamError::new(ids::JSON_INPUT_TOO_BIG).with_detail("maxLength", self.max_length),
            );
        }
        if !input.starts_with(['{', '[']) {
            return Filtered::error(ParamError::new(ids::JSON_INVALID));
        }
        match serde_json::from_str(input) {
            Ok(value) => Filtered::ok(value),
            Err(err) => Filtered::error(
                ParamError::new(ids::JSON_SYNTAX_ERROR)
                    .with_detail("errorMsg", err.to_string())
                    .with_detail("line", err.line())
                    .with_detail("column", err.column()),
            ),
        }
    }
}

impl Default for JsonFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for JsonFilter {
    type Output = Value;

    fn apply(&self, param: &Param) -> Filtered<Value> {
        match param.value() {
            Value::Null => Filtered::none(),
            Value::String(raw) => self.decode(raw),
            structured @ (Value::Array(_) | Value::Object(_)) => Filtered::ok(structured.clone()),
            Value::Bool(_) | Value::Number(_) => Filtered::error(ParamError::new(ids::JSON_INVALID)),
        }
    }
}
