//! Full Pipeline Integration Tests
//!
//! Tests the complete flow: Source -> Scanner -> Tokens -> Parser -> Tree -> SymbolTable -> Symbols

use core_types::{DlError, ErrorKind};
use parser::ast::{Declaration, Node};
use parser::{Kind, Parser, Scanner, Symbol, SymbolTable, Tree};
use std::collections::BTreeMap;

/// Helper function to run every stage over `source`
fn run(source: &str) -> Result<(Tree, BTreeMap<String, Symbol>), DlError> {
    let tokens = Scanner::from_text(source).scan()?;
    let tree = Parser::new(tokens).parse("pipeline.dl")?;
    let symbols = SymbolTable::new().collect(&tree)?.clone();
    Ok((tree, symbols))
}

fn declaration<'a>(tree: &'a Tree, name: &str) -> &'a Declaration {
    tree.statements
        .iter()
        .find_map(|node| match node {
            Node::Declaration(decl) if decl.identifier == name => Some(decl),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no declaration named {}", name))
}

const PROGRAM: &str = r#"
limit u32 const(100);
greeting str export("hello\tworld");
base f64 consteval(2.5);
alias u32 export(copy(limit));

main void (args str^) {
    std.io.print greeting, limit;
    log.write "done";
}
"#;

#[test]
fn test_full_pipeline_program() {
    let (tree, symbols) = run(PROGRAM).unwrap();

    assert_eq!(
        tree.global_names,
        vec!["limit", "greeting", "base", "alias", "main"]
    );
    assert_eq!(symbols.len(), 5);

    assert!(symbols["limit"].is_const);
    assert!(symbols["greeting"].exported);
    assert!(symbols["base"].consteval);

    let alias = &symbols["alias"];
    assert!(alias.exported && alias.copied);
    assert_eq!(alias.copied_from.as_deref(), Some("limit"));

    assert_eq!(symbols["main"], Symbol::default());
}

#[test]
fn test_full_pipeline_string_escapes() {
    let (tree, _) = run(PROGRAM).unwrap();
    let Node::ModifierConversion(export) = declaration(&tree, "greeting").value.as_ref() else {
        panic!("expected export(...)");
    };
    let Node::Value(value) = export.value.as_ref() else {
        panic!("expected a value");
    };
    assert_eq!(value.kind, Kind::String);
    assert_eq!(value.value, "hello\tworld");
}

#[test]
fn test_full_pipeline_function_body() {
    let (tree, _) = run(PROGRAM).unwrap();
    let Node::Function(main) = declaration(&tree, "main").value.as_ref() else {
        panic!("expected a function");
    };
    assert_eq!(main.arguments.len(), 1);
    assert!(main.arguments[0].variadic);
    assert_eq!(main.body.len(), 2);

    let Node::Instruction(print) = &main.body[0] else {
        panic!("expected an instruction");
    };
    assert_eq!(print.name, "print");
    assert_eq!(print.module.as_ref().unwrap().qualified_name(), "std.io");
    assert_eq!(print.arguments.len(), 2);

    let Node::Instruction(write) = &main.body[1] else {
        panic!("expected an instruction");
    };
    assert_eq!(write.arguments[0].kind, Kind::String);
}

#[test]
fn test_full_pipeline_error_stages() {
    assert_eq!(run("x i32 #").unwrap_err().kind, ErrorKind::ScanError);
    assert_eq!(run("x i32 \"open").unwrap_err().kind, ErrorKind::ScanError);
    assert_eq!(run("x i32 12.").unwrap_err().kind, ErrorKind::ScanError);
    assert_eq!(run("i32 x 1").unwrap_err().kind, ErrorKind::SyntaxError);
    assert_eq!(run("x i32 import").unwrap_err().kind, ErrorKind::SyntaxError);
    assert_eq!(run("x i32 copy(\"y\")").unwrap_err().kind, ErrorKind::SemanticError);
}

#[test]
fn test_full_pipeline_stages_are_reusable() {
    let mut scanner = Scanner::from_text("a i32 1");
    let mut parser = Parser::new(scanner.scan().unwrap());
    let mut table = SymbolTable::new();

    let tree = parser.parse("one.dl").unwrap();
    assert!(table.collect(&tree).unwrap().contains_key("a"));

    scanner.set_source(&b"b i32 export(2)"[..]).unwrap();
    parser.set_tokens(scanner.scan().unwrap()).unwrap();
    let tree = parser.parse("two.dl").unwrap();
    let symbols = table.collect(&tree).unwrap();
    assert!(!symbols.contains_key("a"));
    assert!(symbols["b"].exported);
}

#[test]
fn test_cli_pipeline_matches_library() {
    let output = dl_cli::Pipeline::new()
        .run_string(PROGRAM, "pipeline.dl")
        .unwrap();
    let (tree, symbols) = run(PROGRAM).unwrap();
    assert_eq!(output.tree, tree);
    assert_eq!(output.symbols, symbols);
}
