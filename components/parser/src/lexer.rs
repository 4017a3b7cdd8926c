//! Scanner - turns a byte source into tokens
//!
//! Tokenization is driven by an ordered list of tokenizers. Each one either
//! declines (`Ok(None)`), produces a token, or fails the whole scan. A
//! tokenizer that reads ahead and then declines must restore the cursor to
//! where it started, so later tokenizers see untouched input.

use crate::error::scan_error;
use crate::token::{is_identifier, Kind, Token, KEYWORDS, MODIFIER_CONVERSIONS, SEPARATORS, TYPES};
use core_types::{DlError, SourcePosition, StageState, TraceSink};
use std::fmt;
use std::io::{self, Read, Write};

const STAGE: &str = "scanner";

/// A tokenizer strategy
type Tokenizer = fn(&mut Scanner) -> Result<Option<Token>, DlError>;

/// Scanner for dl source
///
/// # Examples
///
/// ```
/// use parser::{Kind, Scanner};
///
/// let mut scanner = Scanner::from_text("answer i32 42");
/// let tokens = scanner.scan().unwrap();
///
/// let kinds: Vec<Kind> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds, vec![Kind::Identifier, Kind::Type, Kind::Integer, Kind::Eof]);
/// ```
pub struct Scanner {
    input: Vec<u8>,
    source: Box<dyn Read>,
    cursor: SourcePosition,
    state: StageState,
    trace: TraceSink,
    tokenizers: Vec<Tokenizer>,
}

impl Scanner {
    /// Create a scanner, buffering everything `source` has to offer
    pub fn new(source: impl Read + 'static) -> Result<Self, DlError> {
        let mut source: Box<dyn Read> = Box::new(source);
        let input = read_all(&mut source)?;
        Ok(Self {
            input,
            source,
            cursor: SourcePosition::start(),
            state: StageState::Idle,
            trace: TraceSink::disabled(),
            tokenizers: Vec::new(),
        })
    }

    /// Create a scanner with tracing written to `sink`
    pub fn with_trace(
        source: impl Read + 'static,
        sink: impl Write + 'static,
    ) -> Result<Self, DlError> {
        let mut scanner = Self::new(source)?;
        scanner.trace = TraceSink::new(sink);
        Ok(scanner)
    }

    /// Create a scanner over in-memory text
    pub fn from_text(text: &str) -> Self {
        Self {
            input: text.as_bytes().to_vec(),
            source: Box::new(io::empty()),
            cursor: SourcePosition::start(),
            state: StageState::Idle,
            trace: TraceSink::disabled(),
            tokenizers: Vec::new(),
        }
    }

    /// True while [`Scanner::scan`] is running
    pub fn is_scanning(&self) -> bool {
        self.state.is_running()
    }

    /// True if trace lines are being written
    pub fn is_tracing(&self) -> bool {
        self.trace.is_enabled()
    }

    /// Replace the byte source.
    ///
    /// The previous source stays in place if the scanner is busy or the new
    /// source cannot be read.
    pub fn set_source(&mut self, source: impl Read + 'static) -> Result<(), DlError> {
        self.state.ensure_idle(STAGE)?;
        let mut source: Box<dyn Read> = Box::new(source);
        let input = read_all(&mut source)?;
        self.input = input;
        self.source = source;
        self.cursor = SourcePosition::start();
        Ok(())
    }

    /// Send trace lines to `sink`
    pub fn set_trace(&mut self, sink: impl Write + 'static) -> Result<(), DlError> {
        self.state.ensure_idle(STAGE)?;
        self.trace = TraceSink::new(sink);
        Ok(())
    }

    /// Stop tracing
    pub fn disable_trace(&mut self) -> Result<(), DlError> {
        self.state.ensure_idle(STAGE)?;
        self.trace = TraceSink::disabled();
        Ok(())
    }

    /// Scan the whole input into tokens.
    ///
    /// Every successful scan ends with exactly one [`Kind::Eof`] token placed
    /// at the final cursor position.
    pub fn scan(&mut self) -> Result<Vec<Token>, DlError> {
        self.state.begin(STAGE)?;
        self.setup();
        self.cursor = SourcePosition::start();
        self.trace(format_args!("starting scanning"));
        tracing::debug!(bytes = self.input.len(), "scan started");

        let result = self.scan_tokens();

        self.trace(format_args!("ending scanning"));
        self.state.finish();
        match &result {
            Ok(tokens) => tracing::debug!(tokens = tokens.len(), "scan finished"),
            Err(err) => tracing::debug!(error = %err, "scan failed"),
        }
        result
    }

    fn setup(&mut self) {
        if self.tokenizers.is_empty() {
            self.tokenizers = vec![
                Scanner::tokenize_number,
                Scanner::tokenize_identifier,
                Scanner::tokenize_separator,
                Scanner::tokenize_string,
            ];
        }
    }

    fn scan_tokens(&mut self) -> Result<Vec<Token>, DlError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace()?;
            if self.at_end()? {
                break;
            }
            let token = self.tokenize()?;
            self.trace(format_args!("tokenized: {} ({})", token.literal, token.kind));
            tokens.push(token);
        }
        tokens.push(Token::new("", Kind::Eof, self.cursor));
        Ok(tokens)
    }

    fn tokenize(&mut self) -> Result<Token, DlError> {
        for index in 0..self.tokenizers.len() {
            let tokenizer = self.tokenizers[index];
            match tokenizer(self)? {
                Some(token) => return Ok(token),
                None => self.trace(format_args!("got no match, trying other tokenizer")),
            }
        }

        let position = self.cursor;
        let illegal = self.advance()?.unwrap_or('\u{FFFD}');
        tracing::trace!(character = %illegal, %position, "illegal character");
        Err(self.error_at(format!("met illegal character: {}", illegal), position))
    }

    // tokenizers

    fn tokenize_number(&mut self) -> Result<Option<Token>, DlError> {
        match self.current()? {
            Some(ch) if ch.is_numeric() => {}
            _ => return Ok(None),
        }
        let start = self.snapshot();
        self.trace(format_args!("tokenizing number"));
        self.consume_while(|ch| ch.is_numeric())?;

        if self.current()? != Some('.') {
            return Ok(Some(self.token_from(start, Kind::Integer)));
        }

        self.trace(format_args!("detected dot, consuming fractional part"));
        self.advance()?;
        match self.current()? {
            Some(ch) if ch.is_numeric() => {}
            _ => return Err(self.error_at("expected a number after dot", self.cursor)),
        }
        self.consume_while(|ch| ch.is_numeric())?;
        Ok(Some(self.token_from(start, Kind::Float)))
    }

    fn tokenize_identifier(&mut self) -> Result<Option<Token>, DlError> {
        match self.current()? {
            Some(ch) if ch.is_alphabetic() || ch == '_' => {}
            _ => return Ok(None),
        }
        let start = self.snapshot();
        self.consume_while(|ch| ch.is_alphanumeric() || ch == '_')?;

        let word = self.slice(start.offset, self.cursor.offset);
        let kind = if TYPES.contains(&word) {
            Kind::Type
        } else if MODIFIER_CONVERSIONS.contains(&word) {
            Kind::ModifierConversion
        } else if KEYWORDS.contains(&word) {
            Kind::Keyword
        } else if is_identifier(&word) {
            Kind::Identifier
        } else {
            self.trace(format_args!("{} is not an identifier, backtracking", word));
            self.restore(start);
            return Ok(None);
        };
        Ok(Some(Token::new(word, kind, start)))
    }

    fn tokenize_separator(&mut self) -> Result<Option<Token>, DlError> {
        let Some(ch) = self.current()? else {
            return Ok(None);
        };
        let mut buf = [0u8; 4];
        if !SEPARATORS.contains(ch.encode_utf8(&mut buf)) {
            return Ok(None);
        }
        let start = self.snapshot();
        self.advance()?;
        Ok(Some(self.token_from(start, Kind::Separator)))
    }

    fn tokenize_string(&mut self) -> Result<Option<Token>, DlError> {
        if self.current()? != Some('"') {
            return Ok(None);
        }
        let start = self.snapshot();
        self.advance()?;

        let mut text = String::new();
        loop {
            match self.advance()? {
                None => {
                    return Err(self.error_at("unexpected end of input in string literal", start))
                }
                Some('"') => break,
                Some('\\') => {
                    let escaped = match self.advance()? {
                        Some('"') => '"',
                        Some('\\') => '\\',
                        Some('n') => '\n',
                        Some('t') => '\t',
                        Some(other) => {
                            return Err(self.error_at(
                                format!("unknown escape sequence: \\{}", other),
                                self.cursor,
                            ))
                        }
                        None => {
                            return Err(
                                self.error_at("unexpected end of input in string literal", start)
                            )
                        }
                    };
                    text.push(escaped);
                }
                Some(ch) => text.push(ch),
            }
        }
        Ok(Some(Token::new(text, Kind::String, start)))
    }

    // cursor

    fn snapshot(&self) -> SourcePosition {
        self.cursor
    }

    fn restore(&mut self, snapshot: SourcePosition) {
        self.cursor = snapshot;
    }

    fn skip_whitespace(&mut self) -> Result<(), DlError> {
        while let Some(ch) = self.current()? {
            if !ch.is_whitespace() {
                break;
            }
            self.trace(format_args!("skipping whitespace"));
            self.advance()?;
        }
        Ok(())
    }

    fn consume_while(&mut self, accept: impl Fn(char) -> bool) -> Result<(), DlError> {
        while let Some(ch) = self.current()? {
            if !accept(ch) {
                break;
            }
            self.advance()?;
        }
        Ok(())
    }

    /// Character under the cursor, or `None` at the end of input
    fn current(&mut self) -> Result<Option<char>, DlError> {
        if self.at_end()? {
            return Ok(None);
        }
        let (ch, _) = decode(&self.input[self.cursor.offset..]);
        self.trace(format_args!("getting current character: {}", ch));
        Ok(Some(ch))
    }

    /// Consume the character under the cursor
    fn advance(&mut self) -> Result<Option<char>, DlError> {
        if self.at_end()? {
            return Ok(None);
        }
        let (ch, width) = decode(&self.input[self.cursor.offset..]);
        self.cursor.advance(ch, width);
        let SourcePosition {
            line,
            column,
            offset,
        } = self.cursor;
        self.trace(format_args!(
            "advanced to pos={} line={} col={}",
            offset, line, column
        ));
        Ok(Some(ch))
    }

    /// True once the buffer is exhausted and the source has nothing more
    fn at_end(&mut self) -> Result<bool, DlError> {
        if self.cursor.offset < self.input.len() {
            return Ok(false);
        }
        let mut more = Vec::new();
        if let Err(err) = self.source.read_to_end(&mut more) {
            return Err(self.error_at(format!("cannot read source: {}", err), self.cursor));
        }
        if more.is_empty() {
            return Ok(true);
        }
        self.trace(format_args!("source grew by {} bytes", more.len()));
        self.input.extend_from_slice(&more);
        Ok(false)
    }

    fn slice(&self, start: usize, end: usize) -> String {
        String::from_utf8_lossy(&self.input[start..end]).into_owned()
    }

    fn token_from(&self, start: SourcePosition, kind: Kind) -> Token {
        Token::new(self.slice(start.offset, self.cursor.offset), kind, start)
    }

    fn error_at(&self, message: impl fmt::Display, position: SourcePosition) -> DlError {
        scan_error(format!("{}; source: {}", message, position), Some(position))
    }

    fn trace(&mut self, message: fmt::Arguments<'_>) {
        self.trace.line(message);
    }
}

fn read_all(source: &mut dyn Read) -> Result<Vec<u8>, DlError> {
    let mut input = Vec::new();
    source
        .read_to_end(&mut input)
        .map_err(|err| scan_error(format!("cannot read source: {}", err), None))?;
    Ok(input)
}

/// Decode one character. Invalid or truncated UTF-8 yields U+FFFD over a
/// single byte, which no tokenizer accepts.
fn decode(bytes: &[u8]) -> (char, usize) {
    let width = match bytes[0] {
        b if b < 0x80 => 1,
        b if b >= 0xF0 => 4,
        b if b >= 0xE0 => 3,
        b if b >= 0xC0 => 2,
        _ => 1,
    };
    bytes
        .get(..width)
        .and_then(|chunk| std::str::from_utf8(chunk).ok())
        .and_then(|text| text.chars().next())
        .map(|ch| (ch, width))
        .unwrap_or(('\u{FFFD}', 1))
}
