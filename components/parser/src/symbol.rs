//! Symbol resolution
//!
//! Walks the modifier conversions wrapping each top-level declaration and
//! records the resulting attributes per declared name.

use crate::ast::{Node, Tree};
use crate::error::semantic_error;
use core_types::DlError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attributes of one global declaration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    /// Wrapped in `export(...)`
    pub exported: bool,
    /// Wrapped in `const(...)`
    #[serde(rename = "const")]
    pub is_const: bool,
    /// Wrapped in `consteval(...)`
    pub consteval: bool,
    /// Wrapped in `copy(...)`
    pub copied: bool,
    /// Name passed to `copy(...)`
    pub copied_from: Option<String>,
}

/// Resolves a [`Tree`] into a name to [`Symbol`] mapping
///
/// # Examples
///
/// ```
/// use parser::{Parser, Scanner, SymbolTable};
///
/// let tokens = Scanner::from_text("x i32 export(const(1))").scan().unwrap();
/// let tree = Parser::new(tokens).parse("main.dl").unwrap();
///
/// let mut table = SymbolTable::new();
/// let symbols = table.collect(&tree).unwrap();
/// assert!(symbols["x"].exported && symbols["x"].is_const);
/// ```
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: BTreeMap<String, Symbol>,
}

impl SymbolTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Symbols from the last successful or partial [`SymbolTable::collect`]
    pub fn symbols(&self) -> &BTreeMap<String, Symbol> {
        &self.symbols
    }

    /// Rebuild the mapping from `tree`.
    ///
    /// Previous results are discarded first. A later declaration of the same
    /// name replaces the earlier one.
    pub fn collect(&mut self, tree: &Tree) -> Result<&BTreeMap<String, Symbol>, DlError> {
        self.symbols.clear();
        tracing::debug!(source = %tree.source_name, "collecting symbols");

        for statement in &tree.statements {
            let Node::Declaration(declaration) = statement else {
                return Err(semantic_error(format!(
                    "expected declaration, got {}",
                    statement.kind_name()
                )));
            };
            let mut symbol = Symbol::default();
            apply_modifiers(&declaration.value, &mut symbol)?;
            self.symbols.insert(declaration.identifier.clone(), symbol);
        }

        tracing::debug!(symbols = self.symbols.len(), "symbols collected");
        Ok(&self.symbols)
    }
}

fn apply_modifiers(mut node: &Node, symbol: &mut Symbol) -> Result<(), DlError> {
    while let Node::ModifierConversion(conversion) = node {
        match conversion.name.as_str() {
            "export" => symbol.exported = true,
            "const" => symbol.is_const = true,
            "consteval" => symbol.consteval = true,
            "copy" => match conversion.value.as_ref() {
                Node::Value(value) if value.is_bare_identifier() => {
                    symbol.copied = true;
                    symbol.copied_from = Some(value.value.clone());
                }
                _ => return Err(semantic_error("expected identifier in copy(...)")),
            },
            other => tracing::trace!(modifier = other, "ignoring unknown modifier"),
        }
        node = conversion.value.as_ref();
    }
    Ok(())
}
