//! Dynamically typed argument values

#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};

use crate::error::StatsError;

/// An argument as a host query engine hands it over
///
/// Only `Integer` and `Real` are numeric. `Null` marks a missing
/// observation and is skipped; anything else is rejected.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Name of the value's storage class, for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Integer(_) => "integer",
            Value::Real(_) => "real",
            Value::Text(_) => "text",
            Value::Blob(_) => "blob",
        }
    }

    /// Numeric view of the value
    ///
    /// `Ok(None)` for null, `InvalidInput` for text and blobs.
    pub fn as_f64(&self) -> Result<Option<f64>, StatsError> {
        match self {
            Value::Null => Ok(None),
            Value::Integer(i) => Ok(Some(*i as f64)),
            Value::Real(r) => Ok(Some(*r)),
            other => Err(StatsError::InvalidInput(format!(
                "got {} value",
                other.type_name()
            ))),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Real(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.into())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
