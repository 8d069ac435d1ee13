//! Error detail values.
//!
//! A [`ParamError`](super::ParamError) carries a map of placeholder name to
//! [`Detail`]. Details are flattened to strings when a message template is
//! filled:
//!
//! - lists are flattened item by item and joined with `", "`
//! - objects render their string form, or their type name if they have none
//! - everything else uses Rust's canonical `Display` output

use std::borrow::Cow;
use std::fmt;

use serde::{Serialize, Serializer};

/// A single detail value attached to a parameter error.
#[derive(Debug, Clone, PartialEq)]
pub enum Detail {
    /// No value. Renders as the empty string.
    Null,
    /// A boolean, rendered as `true` / `false`.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    Str(Cow<'static, str>),
    /// A list of details, rendered comma-joined.
    List(Vec<Detail>),
    /// A structured value.
    ///
    /// `display` holds the string form when the value has one; without it
    /// the detail renders as `type_name`.
    Object {
        type_name: Cow<'static, str>,
        display: Option<String>,
    },
}

impl Detail {
    /// Builds an object detail from any value with a string form.
    pub fn display_of<T: fmt::Display + ?Sized>(value: &T) -> Self {
        Self::Object {
            type_name: Cow::Borrowed(short_type_name::<T>()),
            display: Some(value.to_string()),
        }
    }

    /// Builds an object detail for a value without a string form.
    pub fn opaque<T: ?Sized>() -> Self {
        Self::Object {
            type_name: Cow::Borrowed(short_type_name::<T>()),
            display: None,
        }
    }

    /// Flattens the detail into the string substituted into templates.
    #[must_use]
    pub fn flatten(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Str(s) => s.to_string(),
            Self::List(items) => items
                .iter()
                .map(Detail::flatten)
                .collect::<Vec<_>>()
                .join(", "),
            Self::Object {
                display: Some(display),
                ..
            } => display.clone(),
            Self::Object { type_name, .. } => type_name.to_string(),
        }
    }
}

/// Last path segment of a type name, without generic arguments.
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.flatten())
    }
}

impl Serialize for Detail {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::Str(s) => serializer.serialize_str(s),
            Self::List(items) => serializer.collect_seq(items),
            Self::Object { .. } => serializer.serialize_str(&self.flatten()),
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<bool> for Detail {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Detail {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Detail {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u32> for Detail {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<usize> for Detail {
    fn from(value: usize) -> Self {
        i64::try_from(value).map_or_else(|_| Self::Str(value.to_string().into()), Self::Int)
    }
}

impl From<f64> for Detail {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&'static str> for Detail {
    fn from(value: &'static str) -> Self {
        Self::Str(Cow::Borrowed(value))
    }
}

impl From<String> for Detail {
    fn from(value: String) -> Self {
        Self::Str(Cow::Owned(value))
    }
}

impl<T: Into<Detail>> From<Vec<T>> for Detail {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Detail>> From<Option<T>> for Detail {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<chrono::NaiveDate> for Detail {
    fn from(value: chrono::NaiveDate) -> Self {
        Self::display_of(&value)
    }
}

impl From<chrono::NaiveDateTime> for Detail {
    fn from(value: chrono::NaiveDateTime) -> Self {
        Self::display_of(&value)
    }
}

impl From<serde_json::Value> for Detail {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => n
                .as_i64()
                .map(Self::Int)
                .or_else(|| n.as_f64().map(Self::Float))
                .unwrap_or_else(|| Self::Str(n.to_string().into())),
            Value::String(s) => Self::Str(s.into()),
            Value::Array(items) => Self::List(items.into_iter().map(Into::into).collect()),
            object @ Value::Object(_) => Self::Object {
                type_name: Cow::Borrowed("object"),
                display: Some(object.to_string()),
            },
        }
    }
}
