//! Token model: kinds, recognized word collections and identifier rules

use core_types::SourcePosition;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Kind {
    /// Reserved word
    Keyword,
    /// `const`, `consteval`, `copy` or `export`
    ModifierConversion,
    /// Decimal digits
    Integer,
    /// Digits, a dot, digits
    Float,
    /// Double-quoted text
    String,
    /// Punctuation such as `(` or `;`
    Separator,
    /// Built-in type name
    Type,
    /// Name of a binding or instruction
    Identifier,
    /// Character no tokenizer accepts
    Illegal,
    /// End of input
    Eof,
}

impl Kind {
    /// Lower-case name used in messages and serialized output
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Keyword => "keyword",
            Kind::ModifierConversion => "modifier-conversion",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::Separator => "separator",
            Kind::Type => "type",
            Kind::Identifier => "identifier",
            Kind::Illegal => "illegal",
            Kind::Eof => "eof",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified lexical unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Source text (for strings, the unescaped content)
    pub literal: String,
    /// Classification
    pub kind: Kind,
    /// Where the token starts
    pub position: SourcePosition,
}

impl Token {
    /// Create a token
    pub fn new(literal: impl Into<String>, kind: Kind, position: SourcePosition) -> Self {
        Self {
            literal: literal.into(),
            kind,
            position,
        }
    }
}

/// An ordered set of recognized literal strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collection(&'static [&'static str]);

impl Collection {
    /// Wrap a fixed list of words
    pub const fn new(words: &'static [&'static str]) -> Self {
        Self(words)
    }

    /// Membership test
    pub fn contains(&self, word: &str) -> bool {
        self.0.iter().any(|known| *known == word)
    }

    /// Words in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &'static str> {
        self.0.iter().copied()
    }
}

/// Reserved words. None of them is accepted by the grammar yet.
pub const KEYWORDS: Collection = Collection::new(&["module", "import"]);

/// Single-character separators
pub const SEPARATORS: Collection = Collection::new(&[",", ";", "{", "}", "(", ")", ".", "^"]);

/// Modifier conversions that may wrap a declaration's value
pub const MODIFIER_CONVERSIONS: Collection =
    Collection::new(&["const", "consteval", "copy", "export"]);

/// Built-in type names
pub const TYPES: Collection = Collection::new(&[
    "i8", "i16", "i32", "i64", "i128", "u8", "u16", "u32", "u64", "u128", "uptr", "f32", "f64",
    "fix64", "str", "bool", "void",
]);

/// Longest identifier, in characters
pub const MAX_IDENTIFIER_LEN: usize = 255;

/// Checks whether `text` is a valid identifier:
/// - 1 to 255 characters;
/// - does not start with a digit;
/// - only letters, digits and underscores;
/// - not a keyword.
///
/// ```
/// use parser::token::is_identifier;
///
/// assert!(is_identifier("_x9"));
/// assert!(!is_identifier("9x"));
/// assert!(!is_identifier("module"));
/// ```
pub fn is_identifier(text: &str) -> bool {
    is_identifier_in(text, &KEYWORDS)
}

/// Like [`is_identifier`], against an explicit keyword collection
pub fn is_identifier_in(text: &str, keywords: &Collection) -> bool {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if first.is_numeric() || text.chars().count() > MAX_IDENTIFIER_LEN {
        return false;
    }
    if keywords.contains(text) {
        return false;
    }
    std::iter::once(first)
        .chain(chars)
        .all(|ch| ch.is_alphanumeric() || ch == '_')
}
