//! Scalar values for rows, predicates and LIMIT/OFFSET clauses

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A scalar value that can be rendered into a statement
///
/// Serialized untagged, so `Value::I64(1)` is the JSON number `1` and
/// `Value::Null` is `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// Signed integer
    I64(i64),
    /// Unsigned integer too large for `I64`
    U64(u64),
    /// Floating point number
    F64(f64),
    /// String value
    String(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Render the value as a literal inside a statement.
    ///
    /// Strings are wrapped in single quotes verbatim. Embedded quotes are
    /// not escaped.
    ///
    /// # Examples
    /// ```
    /// use yqlkit_core::Value;
    ///
    /// assert_eq!(Value::from("x").to_literal(), "'x'");
    /// assert_eq!(Value::from(1).to_literal(), "1");
    /// assert_eq!(Value::Null.to_literal(), "null");
    /// ```
    pub fn to_literal(&self) -> String {
        match self {
            Value::String(s) => format!("'{}'", s),
            other => other.to_bare(),
        }
    }

    /// Render the value without quoting, as LIMIT and OFFSET take it
    pub fn to_bare(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::I64(n) => n.to_string(),
            Value::U64(n) => n.to_string(),
            Value::F64(n) => n.to_string(),
            Value::String(s) => s.clone(),
        }
    }

    /// Whether the value counts as present for optional clauses.
    ///
    /// `Null`, `false`, zero, `NaN` and the empty string are falsy. The
    /// string `"0"` is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::I64(n) => *n != 0,
            Value::U64(n) => *n != 0,
            Value::F64(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
        }
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Value::Bool(val)
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(val: $ty) -> Self {
                    Value::I64(i64::from(val))
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Value {
    fn from(val: u64) -> Self {
        match i64::try_from(val) {
            Ok(n) => Value::I64(n),
            Err(_) => Value::U64(val),
        }
    }
}

impl From<usize> for Value {
    fn from(val: usize) -> Self {
        Value::from(val as u64)
    }
}

impl From<f64> for Value {
    fn from(val: f64) -> Self {
        Value::F64(val)
    }
}

impl From<String> for Value {
    fn from(val: String) -> Self {
        Value::String(val)
    }
}

impl From<&str> for Value {
    fn from(val: &str) -> Self {
        Value::String(val.to_string())
    }
}

impl From<&String> for Value {
    fn from(val: &String) -> Self {
        Value::String(val.clone())
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(val) => val.into(),
            None => Value::Null,
        }
    }
}

#[cfg(feature = "uuid-support")]
impl From<uuid::Uuid> for Value {
    fn from(val: uuid::Uuid) -> Self {
        Value::String(val.hyphenated().to_string())
    }
}

// Timestamps are stored as epoch milliseconds.
#[cfg(feature = "datetime-support")]
impl From<chrono::DateTime<chrono::Utc>> for Value {
    fn from(val: chrono::DateTime<chrono::Utc>) -> Self {
        Value::I64(val.timestamp_millis())
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = Error;

    fn try_from(val: serde_json::Value) -> Result<Self> {
        match val {
            serde_json::Value::Null => Ok(Value::Null),
            serde_json::Value::Bool(b) => Ok(Value::Bool(b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::I64(i))
                } else if let Some(u) = n.as_u64() {
                    Ok(Value::U64(u))
                } else {
                    n.as_f64()
                        .map(Value::F64)
                        .ok_or_else(|| Error::invalid_argument(format!("Unsupported number {}", n)))
                }
            }
            serde_json::Value::String(s) => Ok(Value::String(s)),
            other => Err(Error::invalid_argument(format!(
                "Expected a scalar value, got {}",
                other
            ))),
        }
    }
}
