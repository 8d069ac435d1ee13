//! Integer and float filters

use serde_json::Value;

use crate::foundation::{Filter, Filtered, Param, ParamError, ids};

/// Trimmed string form of a scalar; `None` for null and empty input.
fn numeric_input(value: &Value) -> Option<Result<&str, ()>> {
    match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(Ok(s.trim())),
        _ => Some(Err(())),
    }
}

/// Reads a whole number.
///
/// Accepts JSON integers and numeric strings. Decimal input is cut to its
/// integer part. Anything else is `INTEGER_INVALID`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerFilter;

impl IntegerFilter {
    #[allow(clippy::cast_possible_truncation)]
    fn from_float(f: f64) -> Option<i64> {
        // i64::MAX as f64 rounds up, so the upper check is exclusive
        let in_range = f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64;
        in_range.then(|| f.trunc() as i64)
    }

    fn parse(value: &Value) -> Option<Result<i64, ()>> {
        if let Value::Number(n) = value {
            return Some(n.as_i64().or_else(|| n.as_f64().and_then(Self::from_float)).ok_or(()));
        }
        let text = match numeric_input(value)? {
            Ok(text) => text,
            Err(()) => return Some(Err(())),
        };
        Some(
            text.parse::<i64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().and_then(Self::from_float))
                .ok_or(()),
        )
    }
}

impl Filter for IntegerFilter {
    type Output = i64;

    fn apply(&self, param: &Param) -> Filtered<i64> {
        match Self::parse(param.value()) {
            None => Filtered::none(),
            Some(Ok(n)) => Filtered::ok(n),
            Some(Err(())) => Filtered::error(ParamError::new(ids::INTEGER_INVALID)),
        }
    }
}

/// Reads a finite floating point number, optionally rounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FloatFilter {
    decimals: Option<u32>,
}

impl FloatFilter {
    /// A filter that keeps full precision.
    #[must_use]
    pub const fn new() -> Self {
        Self { decimals: None }
    }

    /// A filter that rounds to `decimals` places.
    #[must_use]
    pub const fn rounded(decimals: u32) -> Self {
        Self {
            decimals: Some(decimals),
        }
    }

    #[must_use]
    pub const fn decimals(&self) -> Option<u32> {
        self.decimals
    }

    fn round(&self, value: f64) -> f64 {
        match self.decimals {
            Some(places) => {
                let factor = 10_f64.powi(i32::try_from(places).unwrap_or(i32::MAX));
                let rounded = (value * factor).round() / factor;
                if rounded.is_finite() { rounded } else { value }
            }
            None => value,
        }
    }

    fn parse(value: &Value) -> Option<Result<f64, ()>> {
        let parsed = match value {
            Value::Number(n) => n.as_f64().ok_or(()),
            _ => match numeric_input(value)? {
                Ok(text) => text.replace(',', ".").parse::<f64>().map_err(|_| ()),
                Err(()) => Err(()),
            },
        };
        Some(parsed.and_then(|f| if f.is_finite() { Ok(f) } else { Err(()) }))
    }
}

impl Filter for FloatFilter {
    type Output = f64;

    fn apply(&self, param: &Param) -> Filtered<f64> {
        match Self::parse(param.value()) {
            None => Filtered::none(),
            Some(Ok(f)) => Filtered::ok(self.round(f)),
            Some(Err(())) => Filtered::error(ParamError::new(ids::FLOAT_INVALID)),
        }
    }
}
