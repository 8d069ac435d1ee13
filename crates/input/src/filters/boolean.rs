//! Boolean filter

use serde_json::Value;

use crate::foundation::{Filter, Filtered, Param};

const TRUTHY: [&str; 3] = ["1", "true", "yes"];

/// Reads a flag.
///
/// `1`, `"1"`, `"true"`, `"yes"` (case-insensitive) and `true` are true.
/// Every other non-null value is false. Null stays null.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoolFilter;

impl BoolFilter {
    fn is_truthy(value: &Value) -> bool {
        match value {
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_i64() == Some(1) || n.as_f64() == Some(1.0),
            Value::String(s) => {
                let token = s.trim();
                TRUTHY.iter().any(|t| token.eq_ignore_ascii_case(t))
            }
            Value::Null | Value::Array(_) | Value::Object(_) => false,
        }
    }
}

impl Filter for BoolFilter {
    type Output = bool;

    fn apply(&self, param: &Param) -> Filtered<bool> {
        if param.is_null() {
            return Filtered::none();
        }
        Filtered::ok(Self::is_truthy(param.value()))
    }
}
