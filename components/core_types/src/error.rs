//! Error types shared by every front-end stage.
//!
//! Each stage reports exactly one error category, and configuration misuse
//! gets its own kinds so callers can tell "retry later" apart from
//! "the input is wrong".

use crate::SourcePosition;
use std::fmt;
use thiserror::Error;

/// The kind of front-end error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Illegal character, malformed literal or unreadable source
    ScanError,
    /// Token sequence does not match the grammar
    SyntaxError,
    /// Syntactically valid tree with invalid meaning
    SemanticError,
    /// Stage reconfigured while it was running
    Busy,
    /// Invalid configuration handed to a stage
    ConfigError,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ErrorKind::ScanError => "scan error",
            ErrorKind::SyntaxError => "syntax error",
            ErrorKind::SemanticError => "semantic error",
            ErrorKind::Busy => "busy",
            ErrorKind::ConfigError => "configuration error",
        };
        f.write_str(text)
    }
}

/// An error with its category, message and optional source position.
///
/// # Examples
///
/// ```
/// use core_types::{DlError, ErrorKind};
///
/// let error = DlError {
///     kind: ErrorKind::SemanticError,
///     message: "expected declaration".to_string(),
///     source_position: None,
/// };
///
/// assert_eq!(error.to_string(), "semantic error: expected declaration");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct DlError {
    /// The category of error
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
    /// Source position where the error occurred
    pub source_position: Option<SourcePosition>,
}

impl DlError {
    /// Create an error of the given kind
    pub fn new(
        kind: ErrorKind,
        message: impl Into<String>,
        source_position: Option<SourcePosition>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source_position,
        }
    }

    /// Reconfiguration refused because `stage` is running
    pub fn busy(stage: &str) -> Self {
        Self::new(ErrorKind::Busy, format!("{}: currently working", stage), None)
    }

    /// Invalid configuration
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigError, message, None)
    }

    /// True if this error was caused by reconfiguring a running stage
    pub fn is_busy(&self) -> bool {
        self.kind == ErrorKind::Busy
    }
}
