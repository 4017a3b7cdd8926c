//! Error helpers for the scanner, parser and symbol resolver

use core_types::{DlError, ErrorKind, SourcePosition};

/// Create a scan error at a given position
pub fn scan_error(message: impl Into<String>, position: Option<SourcePosition>) -> DlError {
    DlError::new(ErrorKind::ScanError, message, position)
}

/// Create a syntax error at a given position
pub fn syntax_error(message: impl Into<String>, position: Option<SourcePosition>) -> DlError {
    DlError::new(ErrorKind::SyntaxError, message, position)
}

/// Create an unexpected token error
pub fn unexpected_token(expected: &str, got: &str, position: Option<SourcePosition>) -> DlError {
    syntax_error(format!("expected {}, got {}", expected, got), position)
}

/// Create an unexpected end of input error
pub fn unexpected_eof(position: Option<SourcePosition>) -> DlError {
    syntax_error("unexpected end of input", position)
}

/// Create a semantic error
pub fn semantic_error(message: impl Into<String>) -> DlError {
    DlError::new(ErrorKind::SemanticError, message, None)
}
