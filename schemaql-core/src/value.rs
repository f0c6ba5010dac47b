//! Literal values interpolated into rendered SQL

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// A SQL literal compared against a column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// 32-bit integer
    I32(i32),
    /// 64-bit integer
    I64(i64),
    /// 32-bit float
    F32(f32),
    /// 64-bit float
    F64(f64),
    /// String value
    String(String),
    /// JSON value
    Json(serde_json::Value),
    /// UUID value
    #[cfg(feature = "uuid-support")]
    Uuid(uuid::Uuid),
    /// Timestamp without time zone; UTC instants are stored in their naive UTC form
    #[cfg(feature = "datetime-support")]
    Timestamp(chrono::NaiveDateTime),
    /// Arbitrary precision decimal
    #[cfg(feature = "decimal-support")]
    Decimal(rust_decimal::Decimal),
}

/// The declared type of a column, as seen by the runtime schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Boolean,
    Integer,
    Float,
    Text,
    Json,
    Uuid,
    Timestamp,
    Decimal,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Boolean => "boolean",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Text => "text",
            ValueKind::Json => "json",
            ValueKind::Uuid => "uuid",
            ValueKind::Timestamp => "timestamp",
            ValueKind::Decimal => "decimal",
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// False only for NaN and infinite floats, which have no SQL literal
    pub fn is_finite(&self) -> bool {
        match self {
            Value::F32(n) => n.is_finite(),
            Value::F64(n) => n.is_finite(),
            _ => true,
        }
    }

    /// The kind of this value, `None` for `Null` which fits any nullable column
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            Value::Null => None,
            Value::Bool(_) => Some(ValueKind::Boolean),
            Value::I32(_) | Value::I64(_) => Some(ValueKind::Integer),
            Value::F32(_) | Value::F64(_) => Some(ValueKind::Float),
            Value::String(_) => Some(ValueKind::Text),
            Value::Json(_) => Some(ValueKind::Json),
            #[cfg(feature = "uuid-support")]
            Value::Uuid(_) => Some(ValueKind::Uuid),
            #[cfg(feature = "datetime-support")]
            Value::Timestamp(_) => Some(ValueKind::Timestamp),
            #[cfg(feature = "decimal-support")]
            Value::Decimal(_) => Some(ValueKind::Decimal),
        }
    }

    /// Render the value as an inline SQL literal.
    ///
    /// Numbers and booleans render through `Display`; NaN and infinities
    /// render as `NULL`. String-like values are wrapped in single quotes with
    /// embedded quotes doubled when `quote_strings` is set, and emitted
    /// verbatim otherwise.
    pub fn to_literal(&self, quote_strings: bool) -> String {
        match self {
            Value::Null => "NULL".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::I32(n) => n.to_string(),
            Value::I64(n) => n.to_string(),
            Value::F32(n) if n.is_finite() => n.to_string(),
            Value::F64(n) if n.is_finite() => n.to_string(),
            Value::F32(_) | Value::F64(_) => "NULL".to_string(),
            Value::String(s) => string_literal(s, quote_strings),
            Value::Json(json) => string_literal(&json.to_string(), quote_strings),
            #[cfg(feature = "uuid-support")]
            Value::Uuid(id) => string_literal(&id.to_string(), quote_strings),
            #[cfg(feature = "datetime-support")]
            Value::Timestamp(ts) => string_literal(&ts.to_string(), quote_strings),
            #[cfg(feature = "decimal-support")]
            Value::Decimal(d) => d.to_string(),
        }
    }
}

fn string_literal(raw: &str, quote: bool) -> String {
    if quote {
        format!("'{}'", raw.replace('\'', "''"))
    } else {
        raw.to_string()
    }
}

// Implement From for common types
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

impl From<i32> for Value {
    fn from(val: i32) -> Self {
        Value::I32(val)
    }
}

impl From<i64> for Value {
    fn from(val: i64) -> Self {
        Value::I64(val)
    }
}

impl From<f32> for Value {
    fn from(val: f32) -> Self {
        Value::F32(val)
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

impl From<serde_json::Value> for Value {
    fn from(val: serde_json::Value) -> Self {
        Value::Json(val)
    }
}

#[cfg(feature = "uuid-support")]
impl From<uuid::Uuid> for Value {
    fn from(val: uuid::Uuid) -> Self {
        Value::Uuid(val)
    }
}

#[cfg(feature = "datetime-support")]
impl From<chrono::NaiveDateTime> for Value {
    fn from(val: chrono::NaiveDateTime) -> Self {
        Value::Timestamp(val)
    }
}

#[cfg(feature = "datetime-support")]
impl From<chrono::DateTime<chrono::Utc>> for Value {
    fn from(val: chrono::DateTime<chrono::Utc>) -> Self {
        Value::Timestamp(val.naive_utc())
    }
}

#[cfg(feature = "decimal-support")]
impl From<rust_decimal::Decimal> for Value {
    fn from(val: rust_decimal::Decimal) -> Self {
        Value::Decimal(val)
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
