//! Front end orchestration
//!
//! The Pipeline drives the three stages in order:
//! - Scanner for tokens
//! - Parser for the syntax tree
//! - SymbolTable for the symbol mapping

use crate::error::{CliError, CliResult};
use parser::{Parser, Scanner, Symbol, SymbolTable, Token, Tree};
use serde_json::{Map, Value as Json};
use std::collections::BTreeMap;
use std::fs::File;
use std::io;
use std::path::Path;

/// Everything one run produced
#[derive(Debug, Clone)]
pub struct Output {
    /// Scanned tokens, ending with `Eof`
    pub tokens: Vec<Token>,
    /// Parsed tree
    pub tree: Tree,
    /// Resolved symbols
    pub symbols: BTreeMap<String, Symbol>,
}

/// Runs scan, parse and collect over one source
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    print_tokens: bool,
    print_ast: bool,
    print_symbols: bool,
    trace: bool,
}

impl Pipeline {
    /// Create a pipeline that prints nothing and does not trace
    ///
    /// # Example
    /// ```
    /// use dl_cli::Pipeline;
    ///
    /// let output = Pipeline::new().run_string("x i32 1", "inline.dl").unwrap();
    /// assert_eq!(output.tree.global_names, vec!["x"]);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Include tokens in [`Pipeline::render`]
    pub fn with_print_tokens(mut self, enabled: bool) -> Self {
        self.print_tokens = enabled;
        self
    }

    /// Include the syntax tree in [`Pipeline::render`]
    pub fn with_print_ast(mut self, enabled: bool) -> Self {
        self.print_ast = enabled;
        self
    }

    /// Include symbols in [`Pipeline::render`]
    pub fn with_print_symbols(mut self, enabled: bool) -> Self {
        self.print_symbols = enabled;
        self
    }

    /// Send scanner and parser trace lines to stderr
    pub fn with_trace(mut self, enabled: bool) -> Self {
        self.trace = enabled;
        self
    }

    /// Check if trace output is enabled
    pub fn is_trace_enabled(&self) -> bool {
        self.trace
    }

    /// Run the front end over a file
    ///
    /// # Errors
    /// Returns `CliError` if the file cannot be opened or any stage fails
    pub fn run_file(&self, path: &Path) -> CliResult<Output> {
        let file = File::open(path).map_err(|source| CliError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let scanner = Scanner::new(file)?;
        self.run(scanner, &path.display().to_string())
    }

    /// Run the front end over in-memory source, attributing errors to `source_name`
    pub fn run_string(&self, source: &str, source_name: &str) -> CliResult<Output> {
        self.run(Scanner::from_text(source), source_name)
    }

    fn run(&self, mut scanner: Scanner, source_name: &str) -> CliResult<Output> {
        tracing::info!(source = source_name, "running front end");
        if self.trace {
            scanner.set_trace(io::stderr())?;
        }
        let tokens = scanner.scan()?;

        let mut parser = Parser::new(tokens.clone());
        if self.trace {
            parser.set_trace(io::stderr())?;
        }
        let tree = parser.parse(source_name)?;

        let mut table = SymbolTable::new();
        let symbols = table.collect(&tree)?.clone();

        Ok(Output {
            tokens,
            tree,
            symbols,
        })
    }

    /// Render the selected parts of `output` as pretty JSON
    pub fn render(&self, output: &Output) -> CliResult<String> {
        let mut document = Map::new();
        if self.print_tokens {
            document.insert("tokens".to_string(), serde_json::to_value(&output.tokens)?);
        }
        if self.print_ast {
            document.insert("tree".to_string(), serde_json::to_value(&output.tree)?);
        }
        if self.print_symbols {
            document.insert("symbols".to_string(), serde_json::to_value(&output.symbols)?);
        }
        Ok(serde_json::to_string_pretty(&Json::Object(document))?)
    }
}
