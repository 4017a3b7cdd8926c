//! dl language front end
//!
//! Turns dl source text into tokens, a syntax tree and a symbol mapping.
//!
//! # Overview
//!
//! - [`Scanner`] - Tokenizes dl source
//! - [`Token`] - Classified lexical unit with its source position
//! - [`Parser`] - Recursive descent parser producing a [`Tree`]
//! - [`Node`] - Syntax tree node types
//! - [`SymbolTable`] - Resolves modifier conversions into [`Symbol`] records
//!
//! # Example
//!
//! ```
//! use parser::{Parser, Scanner, SymbolTable};
//!
//! let source = "answer i32 export(42)";
//! let tokens = Scanner::from_text(source).scan().unwrap();
//! let tree = Parser::new(tokens).parse("main.dl").unwrap();
//!
//! let mut table = SymbolTable::new();
//! let symbols = table.collect(&tree).unwrap();
//! assert!(symbols["answer"].exported);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod symbol;
pub mod token;

pub use ast::{Node, Tree};
pub use lexer::Scanner;
pub use parser::Parser;
pub use symbol::{Symbol, SymbolTable};
pub use token::{Kind, Token};
