//! Runtime values exchanged through the evaluation [`Scope`](crate::Scope).
//!
//! Integers of every declared width share one arbitrary-precision
//! representation; whether a value is acceptable for a declared type is a
//! range check rather than a separate variant per width.

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use std::fmt;

/// A value of one of the language's built-in types.
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// let byte = Value::from(200);
/// assert!(byte.fits("u8"));
/// assert!(!byte.fits("i8"));
/// assert_eq!(byte.type_name(), "integer");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The `void` value
    Void,
    /// A `bool`
    Bool(bool),
    /// Any integer type (`i8` .. `u128`, `uptr`)
    Integer(BigInt),
    /// `f32`, `f64` or `fix64`
    Float(f64),
    /// A `str`
    Str(String),
}

impl Value {
    /// Short name of the value's representation
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Void => "void",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
        }
    }

    /// Returns whether this value can be stored in a slot of the declared
    /// type `type_name`. Unknown type names never fit.
    pub fn fits(&self, type_name: &str) -> bool {
        match (self, type_name) {
            (Value::Void, "void") => true,
            (Value::Bool(_), "bool") => true,
            (Value::Str(_), "str") => true,
            (Value::Float(_), "f32" | "f64" | "fix64") => true,
            (Value::Integer(n), "i8") => n.to_i8().is_some(),
            (Value::Integer(n), "i16") => n.to_i16().is_some(),
            (Value::Integer(n), "i32") => n.to_i32().is_some(),
            (Value::Integer(n), "i64") => n.to_i64().is_some(),
            (Value::Integer(n), "i128") => n.to_i128().is_some(),
            (Value::Integer(n), "u8") => n.to_u8().is_some(),
            (Value::Integer(n), "u16") => n.to_u16().is_some(),
            (Value::Integer(n), "u32") => n.to_u32().is_some(),
            (Value::Integer(n), "u64" | "uptr") => n.to_u64().is_some(),
            (Value::Integer(n), "u128") => n.to_u128().is_some(),
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(BigInt::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Void => write!(f, "void"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "{}", s),
        }
    }
}
