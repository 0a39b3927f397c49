//! Typed primitive values exchanged between backends.

use compact_str::CompactString;

use crate::schema::FieldKind;

/// One typed field value.
///
/// Consumers iterating a container only ever see these four shapes,
/// never a backend-specific row or object type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Signed 64-bit integer (coerced only from unsigned digit tokens)
    Integer(i64),
    /// Boolean value
    Boolean(bool),
    /// UTF-8 string
    Text(CompactString),
    /// Absent value
    Null,
}

/// An ordered tuple of typed values, positionally aligned with its
/// table's fields. Plain data, no behavior.
pub type Record = Vec<Value>;

impl Value {
    /// Runtime kind of this value.
    pub fn kind(&self) -> FieldKind {
        match self {
            Value::Integer(_) => FieldKind::Integer,
            Value::Boolean(_) => FieldKind::Boolean,
            Value::Text(_) => FieldKind::Text,
            Value::Null => FieldKind::Null,
        }
    }

    /// Check if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Try to get as i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Render this value back to its wire token form, the inverse of
    /// coercion: nulls become the empty string, booleans `"true"` /
    /// `"false"`, integers their decimal digits.
    pub fn to_token(&self) -> String {
        match self {
            Value::Integer(v) => v.to_string(),
            Value::Boolean(true) => "true".to_string(),
            Value::Boolean(false) => "false".to_string(),
            Value::Text(s) => s.to_string(),
            Value::Null => String::new(),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(CompactString::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(CompactString::from(s))
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => Value::from(v),
            None => Value::Null,
        }
    }
}
