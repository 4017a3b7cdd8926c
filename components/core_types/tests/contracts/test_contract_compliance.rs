//! Contract compliance tests for core_types
//!
//! These tests implement the collaborator traits the way an evaluator or a
//! module loader would, and check the contract holds for such an
//! implementation.

use core_types::{BuiltinFunction, DlError, ErrorKind, ModuleMap, Scope, Value};
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

/// Minimal scope over a fixed argument list and global table
struct ArgumentScope {
    arguments: Vec<Value>,
    globals: HashMap<String, Value>,
}

impl ArgumentScope {
    fn check(&self, place: usize, type_name: &str, value: &Value) -> Result<(), DlError> {
        if place >= self.arguments.len() {
            return Err(DlError::new(
                ErrorKind::SemanticError,
                format!("argument {} out of range", place),
                None,
            ));
        }
        if !value.fits(type_name) {
            return Err(DlError::new(
                ErrorKind::SemanticError,
                format!("argument {} is not {}", place, type_name),
                None,
            ));
        }
        Ok(())
    }
}

impl Scope for ArgumentScope {
    fn get_argument(&self, place: usize, type_name: &str) -> Result<Value, DlError> {
        let value = self.arguments.get(place).cloned().unwrap_or(Value::Void);
        self.check(place, type_name, &value)?;
        Ok(value)
    }

    fn set_argument(
        &mut self,
        place: usize,
        type_name: &str,
        value: Value,
    ) -> Result<Value, DlError> {
        self.check(place, type_name, &value)?;
        Ok(std::mem::replace(&mut self.arguments[place], value))
    }

    fn get(&self, name: &str) -> Result<Value, DlError> {
        self.globals.get(name).cloned().ok_or_else(|| {
            DlError::new(ErrorKind::SemanticError, format!("unknown symbol {}", name), None)
        })
    }
}

fn double_first(scope: &mut dyn Scope) -> Result<Value, DlError> {
    let Value::Integer(n) = scope.get_argument(0, "i32")? else {
        return Ok(Value::Void);
    };
    scope.set_argument(0, "i32", Value::Integer(n * 2))
}

fn scope() -> ArgumentScope {
    let mut globals = HashMap::new();
    globals.insert("answer".to_string(), Value::from(42));
    ArgumentScope {
        arguments: vec![Value::from(21), Value::from("text")],
        globals,
    }
}

#[test]
fn test_get_argument_checks_type() {
    let scope = scope();
    assert_eq!(scope.get_argument(0, "i32").unwrap(), Value::from(21));
    assert!(scope.get_argument(1, "i32").is_err());
    assert!(scope.get_argument(5, "str").is_err());
}

#[test]
fn test_builtin_function_through_scope() {
    let mut scope = scope();
    let builtin: BuiltinFunction = double_first;

    let previous = builtin(&mut scope).unwrap();
    assert_eq!(previous, Value::from(21));
    assert_eq!(scope.get_argument(0, "i32").unwrap(), Value::from(42));
}

#[test]
fn test_get_global() {
    let scope = scope();
    assert_eq!(scope.get("answer").unwrap(), Value::from(42));
    assert_eq!(scope.get("missing").unwrap_err().kind, ErrorKind::SemanticError);
}

#[test]
fn test_module_map_implementations_agree() {
    let mut hashed = HashMap::new();
    let mut ordered = BTreeMap::new();
    for (name, path) in [("std.io", "/lib/io.dl"), ("app", "./app.dl")] {
        hashed.insert(name.to_string(), PathBuf::from(path));
        ordered.insert(name.to_string(), PathBuf::from(path));
    }

    for name in ["std.io", "app", "std"] {
        assert_eq!(hashed.resolve(name), ordered.resolve(name));
    }
    assert!(ordered.resolve("std").is_none());
}
