//! Recursive descent parser for dl
//!
//! Grammar, top level repeating until end of input:
//!
//! ```text
//! declaration := identifier type value ";"?
//! value       := integer | float | string | reference
//!              | modifier "(" value ")"
//!              | function
//! reference   := identifier ("." identifier)*
//! function    := "(" (identifier type "^"? ","?)* ")" "{" statement* "}"
//! statement   := reference (value ","?)* ";"
//! ```
//!
//! Top-level statements are tried against an ordered list of rules. A rule
//! that does not recognize the current token declines and the next rule is
//! tried; a rule that recognizes it but then fails aborts the parse with its
//! error. The first syntax error ends the parse.

use crate::ast::{
    Declaration, Function, FunctionArgument, Instruction, InstructionArgument, ModifierConversion,
    ModuleChain, Node, Tree, Value,
};
use crate::error::{syntax_error, unexpected_eof, unexpected_token};
use crate::token::{Kind, Token};
use core_types::{DlError, SourcePosition, StageState, TraceSink};
use std::fmt;
use std::io::Write;

const STAGE: &str = "parser";

/// Deepest allowed nesting of values, counting modifier conversions and
/// function literals
pub const MAX_NESTING: usize = 256;

/// A top-level statement rule
type TopLevelRule = fn(&mut Parser, &mut Tree) -> Result<Option<Node>, DlError>;

/// Cursor moved past the last token
#[derive(Debug)]
struct OutOfBounds;

/// dl parser
///
/// # Examples
///
/// ```
/// use parser::{Parser, Scanner};
///
/// let tokens = Scanner::from_text("answer i32 42").scan().unwrap();
/// let tree = Parser::new(tokens).parse("main.dl").unwrap();
///
/// assert_eq!(tree.global_names, vec!["answer".to_string()]);
/// ```
pub struct Parser {
    source_name: String,
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
    state: StageState,
    trace: TraceSink,
    rules: Vec<TopLevelRule>,
}

impl Parser {
    /// Create a parser over `tokens`
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            source_name: String::new(),
            tokens,
            pos: 0,
            depth: 0,
            state: StageState::Idle,
            trace: TraceSink::disabled(),
            rules: Vec::new(),
        }
    }

    /// Create a parser with tracing written to `sink`
    pub fn with_trace(tokens: Vec<Token>, sink: impl Write + 'static) -> Self {
        let mut parser = Self::new(tokens);
        parser.trace = TraceSink::new(sink);
        parser
    }

    /// True while [`Parser::parse`] is running
    pub fn is_parsing(&self) -> bool {
        self.state.is_running()
    }

    /// True if trace lines are being written
    pub fn is_tracing(&self) -> bool {
        self.trace.is_enabled()
    }

    /// Replace the token sequence.
    ///
    /// Fails without changing anything if the parser is busy, or if `tokens`
    /// is not terminated by exactly one trailing [`Kind::Eof`] token.
    pub fn set_tokens(&mut self, tokens: Vec<Token>) -> Result<(), DlError> {
        self.state.ensure_idle(STAGE)?;
        validate(&tokens)?;
        self.tokens = tokens;
        self.pos = 0;
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

    /// Parse the tokens into a [`Tree`].
    ///
    /// `source_name` is only used to attribute errors.
    pub fn parse(&mut self, source_name: &str) -> Result<Tree, DlError> {
        validate(&self.tokens)?;
        self.state.begin(STAGE)?;
        self.source_name = source_name.to_string();
        self.setup();
        self.pos = 0;
        self.depth = 0;
        self.trace(format_args!("starting parsing"));
        tracing::debug!(source = source_name, tokens = self.tokens.len(), "parse started");

        let result = self.parse_tree();

        self.state.finish();
        self.trace(format_args!("parsing ended"));
        match &result {
            Ok(tree) => {
                tracing::debug!(statements = tree.statements.len(), "parse finished")
            }
            Err(err) => tracing::debug!(error = %err, "parse failed"),
        }
        result
    }

    fn setup(&mut self) {
        if self.rules.is_empty() {
            self.rules = vec![Parser::parse_declaration];
        }
    }

    fn parse_tree(&mut self) -> Result<Tree, DlError> {
        let mut tree = Tree::new(self.source_name.clone());
        while self.current()?.kind != Kind::Eof {
            let statement = self.parse_top_level(&mut tree)?;
            tree.statements.push(statement);
        }
        Ok(tree)
    }

    fn parse_top_level(&mut self, tree: &mut Tree) -> Result<Node, DlError> {
        for index in 0..self.rules.len() {
            let rule = self.rules[index];
            self.trace(format_args!("trying top-level rule {}", index));
            if let Some(node) = rule(self, tree)? {
                self.trace(format_args!("parsed {}", node.kind_name()));
                return Ok(node);
            }
            tracing::trace!(rule = index, "top-level rule declined");
        }
        let token = self.current()?.clone();
        Err(self.error_at(
            format!(
                "expected declaration, got \"{}\" (literal: {}) instead",
                token.kind, token.literal
            ),
            token.position,
        ))
    }

    // cursor

    fn current(&mut self) -> Result<&Token, DlError> {
        let Some(token) = self.tokens.get(self.pos) else {
            let position = self.tokens.last().map(|t| t.position);
            return Err(unexpected_eof(position));
        };
        if self.trace.is_enabled() {
            self.trace.line(format_args!(
                "getting current token: {} - {}",
                token.literal, token.kind
            ));
        }
        Ok(&self.tokens[self.pos])
    }

    fn current_literal_is(&mut self, literal: &str) -> Result<bool, DlError> {
        let token = self.current()?;
        Ok(token.kind == Kind::Separator && token.literal == literal)
    }

    /// Step to the next token. The cursor never moves past the final token.
    fn advance(&mut self) -> Result<(), OutOfBounds> {
        if self.pos + 1 >= self.tokens.len() {
            return Err(OutOfBounds);
        }
        self.pos += 1;
        Ok(())
    }

    /// Consume the current token, which the caller has already matched
    fn bump(&mut self) -> Result<Token, DlError> {
        let token = self.current()?.clone();
        self.advance()
            .map_err(|OutOfBounds| unexpected_eof(Some(token.position)))?;
        Ok(token)
    }

    fn expect_kind(&mut self, kind: Kind) -> Result<Token, DlError> {
        let token = self.current()?.clone();
        if token.kind != kind {
            return Err(self.mismatch(&format!("\"{}\" kind", kind), &token));
        }
        self.bump()
    }

    fn expect_literal(&mut self, literal: &str) -> Result<Token, DlError> {
        let token = self.current()?.clone();
        if token.literal != literal || token.kind != Kind::Separator {
            return Err(self.mismatch(&format!("\"{}\" literal", literal), &token));
        }
        self.bump()
    }

    fn mismatch(&self, expected: &str, got: &Token) -> DlError {
        let found = format!("\"{}\" (literal: {}) instead", got.kind, got.literal);
        let err = unexpected_token(expected, &found, None);
        self.error_at(err.message, got.position)
    }

    fn error_at(&self, message: impl fmt::Display, position: SourcePosition) -> DlError {
        syntax_error(
            format!(
                "{}; source is {}:{}:{}",
                message, self.source_name, position.line, position.column
            ),
            Some(position),
        )
    }

    fn trace(&mut self, message: fmt::Arguments<'_>) {
        self.trace.line(message);
    }

    // rules

    fn parse_declaration(&mut self, tree: &mut Tree) -> Result<Option<Node>, DlError> {
        if self.current()?.kind != Kind::Identifier {
            return Ok(None);
        }
        let identifier = self.expect_kind(Kind::Identifier)?;
        let declared_type = self.expect_kind(Kind::Type)?;
        let value = self.parse_value()?;
        if self.current_literal_is(";")? {
            self.bump()?;
        }

        tree.global_names.push(identifier.literal.clone());
        Ok(Some(Node::Declaration(Declaration {
            identifier: identifier.literal,
            declared_type: declared_type.literal,
            value: Box::new(value),
        })))
    }

    fn parse_value(&mut self) -> Result<Node, DlError> {
        let token = self.current()?.clone();
        if self.depth >= MAX_NESTING {
            return Err(self.error_at(
                format!("values nested deeper than {} levels", MAX_NESTING),
                token.position,
            ));
        }
        self.depth += 1;
        let value = self.parse_nested_value(token);
        self.depth -= 1;
        value
    }

    fn parse_nested_value(&mut self, token: Token) -> Result<Node, DlError> {
        match token.kind {
            Kind::Integer | Kind::Float | Kind::String => {
                self.bump()?;
                Ok(Node::Value(Value::new(token.literal, token.kind)))
            }
            Kind::Identifier => self.parse_reference(),
            Kind::ModifierConversion => {
                self.bump()?;
                self.expect_literal("(")?;
                let value = self.parse_value()?;
                self.expect_literal(")")?;
                Ok(Node::ModifierConversion(ModifierConversion {
                    name: token.literal,
                    value: Box::new(value),
                }))
            }
            Kind::Separator if token.literal == "(" => self.parse_function(),
            _ => Err(self.error_at(
                format!(
                    "unknown token kind: \"{}\" (literal: {})",
                    token.kind, token.literal
                ),
                token.position,
            )),
        }
    }

    /// Parse `a.b.c` into the name `c` qualified by the chain `a.b`
    fn parse_qualified_name(&mut self) -> Result<(String, Option<ModuleChain>), DlError> {
        let mut segments = vec![self.expect_kind(Kind::Identifier)?.literal];
        while self.current_literal_is(".")? {
            self.bump()?;
            segments.push(self.expect_kind(Kind::Identifier)?.literal);
        }
        let name = segments.pop().unwrap_or_default();
        Ok((name, ModuleChain::from_segments(&segments)))
    }

    fn parse_reference(&mut self) -> Result<Node, DlError> {
        let (name, module) = self.parse_qualified_name()?;
        Ok(Node::Value(Value {
            value: name,
            kind: Kind::Identifier,
            from_module: module.is_some(),
            module,
        }))
    }

    fn parse_function(&mut self) -> Result<Node, DlError> {
        self.expect_literal("(")?;
        let mut arguments = Vec::new();
        loop {
            if self.current_literal_is(")")? {
                break;
            }
            if self.current_literal_is(",")? {
                self.bump()?;
                continue;
            }
            let name = self.expect_kind(Kind::Identifier)?;
            let declared_type = self.expect_kind(Kind::Type)?;
            let variadic = self.current_literal_is("^")?;
            if variadic {
                self.bump()?;
            }
            arguments.push(FunctionArgument {
                name: name.literal,
                declared_type: declared_type.literal,
                variadic,
            });
        }
        self.expect_literal(")")?;

        let body = self.parse_function_body()?;
        Ok(Node::Function(Function { arguments, body }))
    }

    fn parse_function_body(&mut self) -> Result<Vec<Node>, DlError> {
        self.expect_literal("{")?;
        let mut body = Vec::new();
        while !self.current_literal_is("}")? {
            body.push(self.parse_statement()?);
        }
        self.expect_literal("}")?;
        Ok(body)
    }

    fn parse_statement(&mut self) -> Result<Node, DlError> {
        let (name, module) = self.parse_qualified_name()?;
        let mut arguments = Vec::new();
        loop {
            if self.current_literal_is(",")? {
                self.bump()?;
                continue;
            }
            if self.current_literal_is(";")? {
                self.bump()?;
                break;
            }
            let kind = self.current()?.kind;
            let value = self.parse_value()?;
            arguments.push(InstructionArgument {
                kind,
                value: Box::new(value),
            });
        }
        Ok(Node::Instruction(Instruction {
            name,
            from_module: module.is_some(),
            module,
            arguments,
        }))
    }
}

/// A parsable token sequence ends with its only `Eof` token
fn validate(tokens: &[Token]) -> Result<(), DlError> {
    match tokens.iter().position(|t| t.kind == Kind::Eof) {
        None if tokens.is_empty() => Err(DlError::config("parser: got no tokens")),
        Some(index) if index + 1 == tokens.len() => Ok(()),
        _ => Err(DlError::config(
            "parser: token sequence must end with exactly one eof token",
        )),
    }
}
