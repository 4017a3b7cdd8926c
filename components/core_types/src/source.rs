//! Source position tracking for scanner, parser and diagnostics.
//!
//! Positions are 1-based for line and column and 0-based for the byte
//! offset, so the first character of a file sits at `1:1` offset `0`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a position in source code.
///
/// Used by tokens and errors to indicate where something was found.
///
/// # Examples
///
/// ```
/// use core_types::SourcePosition;
///
/// let mut pos = SourcePosition::start();
/// pos.advance('a', 1);
/// pos.advance('\n', 1);
///
/// assert_eq!(pos.line, 2);
/// assert_eq!(pos.column, 1);
/// assert_eq!(pos.offset, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourcePosition {
    /// Line number (1-indexed)
    pub line: u32,
    /// Column number (1-indexed, counted in characters)
    pub column: u32,
    /// Byte offset from the start of the source
    pub offset: usize,
}

impl SourcePosition {
    /// Create a position from its parts
    pub fn new(line: u32, column: u32, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// Position of the first character of a source
    pub fn start() -> Self {
        Self::new(1, 1, 0)
    }

    /// Move past `ch`, which occupies `width` bytes of input.
    ///
    /// A line feed resets the column and starts a new line.
    pub fn advance(&mut self, ch: char, width: usize) {
        self.offset += width;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
