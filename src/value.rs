//! Scalar values that flow between operation ports

use serde::{Deserialize, Serialize};

use crate::error::InvokeError;

/// Data types that can flow through operation ports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    /// Boolean value
    Boolean,
    /// Signed 64-bit integer
    Integer,
    /// IEEE-754 double precision float
    Float,
}

impl DataType {
    /// Check if this data type can connect to another
    pub fn can_connect_to(&self, other: &DataType) -> bool {
        self == other
    }

    /// Get a human-readable name for this data type
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Boolean => "Boolean",
            DataType::Integer => "Integer",
            DataType::Float => "Float",
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A scalar value passed into or returned from an operation.
///
/// Integers are fixed at `i64`; floats are IEEE-754 doubles. There are no
/// aggregate or reference types in this catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Boolean(bool),
    Integer(i64),
    Float(f64),
}

impl Value {
    /// Get the data type of this value
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Boolean(_) => DataType::Boolean,
            Value::Integer(_) => DataType::Integer,
            Value::Float(_) => DataType::Float,
        }
    }

    /// Extract the boolean payload, or fail with a type mismatch
    pub fn as_bool(&self) -> Result<bool, InvokeError> {
        match self {
            Value::Boolean(b) => Ok(*b),
            other => Err(InvokeError::TypeMismatch {
                expected: DataType::Boolean,
                got: other.data_type(),
            }),
        }
    }

    /// Extract the integer payload, or fail with a type mismatch
    pub fn as_int(&self) -> Result<i64, InvokeError> {
        match self {
            Value::Integer(i) => Ok(*i),
            other => Err(InvokeError::TypeMismatch {
                expected: DataType::Integer,
                got: other.data_type(),
            }),
        }
    }

    /// Extract the float payload, or fail with a type mismatch
    pub fn as_float(&self) -> Result<f64, InvokeError> {
        match self {
            Value::Float(f) => Ok(*f),
            other => Err(InvokeError::TypeMismatch {
                expected: DataType::Float,
                got: other.data_type(),
            }),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_names() {
        assert_eq!(DataType::Boolean.name(), "Boolean");
        assert_eq!(DataType::Integer.name(), "Integer");
        assert_eq!(DataType::Float.name(), "Float");
    }

    #[test]
    fn test_data_type_connectability() {
        assert!(DataType::Float.can_connect_to(&DataType::Float));
        assert!(!DataType::Float.can_connect_to(&DataType::Integer));
        assert!(!DataType::Boolean.can_connect_to(&DataType::Float));
    }

    #[test]
    fn test_typed_accessors() {
        assert_eq!(Value::Integer(7).as_int().unwrap(), 7);
        assert_eq!(Value::Float(1.5).as_float().unwrap(), 1.5);
        assert!(Value::Boolean(true).as_bool().unwrap());

        let err = Value::Float(1.5).as_int().unwrap_err();
        assert_eq!(
            err,
            InvokeError::TypeMismatch {
                expected: DataType::Integer,
                got: DataType::Float,
            }
        );
    }

    #[test]
    fn test_value_serde_round_trip() {
        let values = [Value::Boolean(true), Value::Integer(-3), Value::Float(0.25)];
        for value in values {
            let json = serde_json::to_string(&value).unwrap();
            let back: Value = serde_json::from_str(&json).unwrap();
            assert_eq!(back, value);
        }
    }
}
