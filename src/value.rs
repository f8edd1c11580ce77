//! Runtime values shared by every pipeline stage.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Type;

/// Runtime value. The `String` variant exclusively owns its text; `Clone`
/// duplicates the payload, it never aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit float
    Float(f64),
    /// Boolean
    Bool(bool),
    /// Owned string
    String(String),
}

impl Value {
    pub fn null() -> Self {
        Value::Null
    }

    /// The type tag of this value.
    pub fn type_of(&self) -> Type {
        match self {
            Value::Null => Type::Null,
            Value::Int(_) => Type::Int,
            Value::Float(_) => Type::Float,
            Value::Bool(_) => Type::Bool,
            Value::String(_) => Type::String,
        }
    }

    /// Try to get as integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get as float (an integer widens)
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Try to get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Canonical value text: `null`, decimal integers, shortest round-tripping
/// floats, `true`/`false`, and strings re-quoted verbatim (no escaping).
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Bool(b) => write!(f, "{}", b),
            Value::String(s) => write!(f, "\"{}\"", s),
        }
    }
}

// Host-facing constructors for embedders.

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_text() {
        assert_eq!(Value::Int(123).to_string(), "123");
        assert_eq!(Value::Float(1.5).to_string(), "1.5");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::String("hi".to_string()).to_string(), "\"hi\"");
        assert_eq!(Value::Null.to_string(), "null");
    }

    #[test]
    fn string_text_is_not_escaped() {
        let value = Value::String("a\"b".to_string());
        assert_eq!(value.to_string(), "\"a\"b\"");
    }

    #[test]
    fn type_tags() {
        assert_eq!(Value::Null.type_of(), Type::Null);
        assert_eq!(Value::Int(0).type_of(), Type::Int);
        assert_eq!(Value::Float(0.0).type_of(), Type::Float);
        assert_eq!(Value::Bool(false).type_of(), Type::Bool);
        assert_eq!(Value::String(String::new()).type_of(), Type::String);
    }

    #[test]
    fn accessors() {
        assert_eq!(Value::Int(7).as_int(), Some(7));
        assert_eq!(Value::Bool(true).as_int(), None);
        assert_eq!(Value::Float(1.5).as_float(), Some(1.5));
        assert_eq!(Value::Int(2).as_float(), Some(2.0));
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::String("s".to_string()).as_str(), Some("s"));
    }

    #[test]
    fn clone_duplicates_string_payload() {
        let original = Value::String("owned".to_string());
        let copy = original.clone();
        drop(original);
        assert_eq!(copy.as_str(), Some("owned"));
    }

    #[test]
    fn host_constructors() {
        assert_eq!(Value::from(42i64), Value::Int(42));
        assert_eq!(Value::from(1.5), Value::Float(1.5));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from("s"), Value::String("s".to_string()));
        assert_eq!(Value::null(), Value::Null);
    }
}
