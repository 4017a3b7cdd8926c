//! Collaborator interface tests
//!
//! Parsed module chains feed module maps, and values flow through the
//! `Scope` capability an evaluator would provide.

use core_types::{BuiltinFunction, DlError, ErrorKind, ModuleMap, Scope, Value};
use num_bigint::BigInt;
use parser::ast::Node;
use parser::{Parser, Scanner};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

fn first_instruction_module(source: &str) -> String {
    let tokens = Scanner::from_text(source).scan().unwrap();
    let tree = Parser::new(tokens).parse("mods.dl").unwrap();
    let Node::Declaration(decl) = &tree.statements[0] else {
        panic!("expected a declaration");
    };
    let Node::Function(function) = decl.value.as_ref() else {
        panic!("expected a function");
    };
    let Node::Instruction(instruction) = &function.body[0] else {
        panic!("expected an instruction");
    };
    instruction.module.as_ref().unwrap().qualified_name()
}

#[test]
fn test_module_chain_resolves_through_map() {
    let mut modules = BTreeMap::new();
    modules.insert("std.io".to_string(), PathBuf::from("/lib/std/io.dl"));

    let key = first_instruction_module("main void () { std.io.print 1; }");
    assert_eq!(modules.resolve(&key), Some(Path::new("/lib/std/io.dl")));

    let key = first_instruction_module("main void () { std.net.get 1; }");
    assert_eq!(modules.resolve(&key), None);
}

struct Frame {
    arguments: Vec<Value>,
    globals: BTreeMap<String, Value>,
}

impl Scope for Frame {
    fn get_argument(&self, place: usize, type_name: &str) -> Result<Value, DlError> {
        match self.arguments.get(place) {
            Some(value) if value.fits(type_name) => Ok(value.clone()),
            Some(value) => Err(DlError::new(
                ErrorKind::SemanticError,
                format!("argument {} is {}, not {}", place, value.type_name(), type_name),
                None,
            )),
            None => Err(DlError::new(
                ErrorKind::SemanticError,
                format!("no argument {}", place),
                None,
            )),
        }
    }

    fn set_argument(&mut self, place: usize, type_name: &str, value: Value) -> Result<Value, DlError> {
        let old = self.get_argument(place, type_name)?;
        self.arguments[place] = value;
        Ok(old)
    }

    fn get(&self, name: &str) -> Result<Value, DlError> {
        self.globals
            .get(name)
            .cloned()
            .ok_or_else(|| DlError::new(ErrorKind::SemanticError, format!("unknown {}", name), None))
    }
}

fn increment(scope: &mut dyn Scope) -> Result<Value, DlError> {
    let Value::Integer(n) = scope.get_argument(0, "i64")? else {
        return Ok(Value::Void);
    };
    scope.set_argument(0, "i64", Value::Integer(n + BigInt::from(1)))
}

#[test]
fn test_builtin_mutates_scope() {
    let builtin: BuiltinFunction = increment;
    let mut frame = Frame {
        arguments: vec![Value::from(41)],
        globals: BTreeMap::new(),
    };

    let old = builtin(&mut frame).unwrap();
    assert_eq!(old, Value::Integer(BigInt::from(41)));
    assert_eq!(frame.get_argument(0, "i64").unwrap(), Value::from(42));
}

#[test]
fn test_builtin_rejects_out_of_range_argument() {
    let mut frame = Frame {
        arguments: vec![Value::Integer(BigInt::from(1u128 << 70))],
        globals: BTreeMap::new(),
    };
    let err = increment(&mut frame).unwrap_err();
    assert_eq!(err.kind, ErrorKind::SemanticError);
}

#[test]
fn test_scope_globals() {
    let mut globals = BTreeMap::new();
    globals.insert("flag".to_string(), Value::from(true));
    let frame = Frame {
        arguments: Vec::new(),
        globals,
    };
    assert_eq!(frame.get("flag").unwrap(), Value::Bool(true));
    assert!(frame.get("missing").is_err());
}
