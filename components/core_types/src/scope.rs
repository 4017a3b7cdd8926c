//! Capability an evaluator hands to built-in functions.
//!
//! No evaluator exists yet; this is the contract one must satisfy.

use crate::{DlError, Value};

/// Access to the arguments of the running instruction and to global symbols.
pub trait Scope {
    /// Read the argument at `place`, checked against `type_name`.
    ///
    /// Fails if `place` is out of range or the argument does not fit the type.
    fn get_argument(&self, place: usize, type_name: &str) -> Result<Value, DlError>;

    /// Replace the argument at `place`, returning the previous value.
    ///
    /// Fails if `place` is out of range or `value` does not fit the type.
    fn set_argument(&mut self, place: usize, type_name: &str, value: Value)
        -> Result<Value, DlError>;

    /// Read the value of a global symbol.
    ///
    /// Fails if the symbol does not exist or is not a readable binding.
    fn get(&self, name: &str) -> Result<Value, DlError>;
}

/// A function implemented by the host rather than in source.
pub type BuiltinFunction = fn(&mut dyn Scope) -> Result<Value, DlError>;
