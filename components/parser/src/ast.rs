//! Abstract Syntax Tree node definitions

use crate::token::Kind;
use serde::{Deserialize, Serialize};

/// AST node representing dl program elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Node {
    /// Root of one parse
    Tree(Tree),
    /// Top-level binding
    Declaration(Declaration),
    /// `name(value)` wrapper such as `export(...)`
    ModifierConversion(ModifierConversion),
    /// Function literal
    Function(Function),
    /// Parameter of a function literal
    FunctionArgument(FunctionArgument),
    /// Call-like statement inside a function body
    Instruction(Instruction),
    /// Argument of an instruction
    InstructionArgument(InstructionArgument),
    /// Literal or identifier reference
    Value(Value),
    /// Dotted module qualification
    ModuleChain(ModuleChain),
}

impl Node {
    /// Lower-case name of the variant, used in diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Tree(_) => "tree",
            Node::Declaration(_) => "declaration",
            Node::ModifierConversion(_) => "modifier conversion",
            Node::Function(_) => "function",
            Node::FunctionArgument(_) => "function argument",
            Node::Instruction(_) => "instruction",
            Node::InstructionArgument(_) => "instruction argument",
            Node::Value(_) => "value",
            Node::ModuleChain(_) => "module chain",
        }
    }
}

/// Result of parsing one source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tree {
    /// Name used for error attribution
    pub source_name: String,
    /// Top-level statements in source order
    pub statements: Vec<Node>,
    /// Identifiers bound by top-level declarations, in source order
    pub global_names: Vec<String>,
}

impl Tree {
    /// Create an empty tree for `source_name`
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            ..Self::default()
        }
    }
}

/// `identifier type value`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    /// Bound name
    pub identifier: String,
    /// Declared type name
    pub declared_type: String,
    /// Bound value
    pub value: Box<Node>,
}

/// `name(value)`; chains when `value` is itself a modifier conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierConversion {
    /// Modifier name, e.g. `export`
    pub name: String,
    /// Wrapped value
    pub value: Box<Node>,
}

/// `( arguments ) { body }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    /// Parameters in order
    pub arguments: Vec<FunctionArgument>,
    /// Instructions in order
    pub body: Vec<Node>,
}

/// `name type` or `name type^`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionArgument {
    /// Parameter name
    pub name: String,
    /// Declared type name
    pub declared_type: String,
    /// Accepts any number of trailing values
    pub variadic: bool,
}

/// `name arg, arg ;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    /// Instruction name, without module qualification
    pub name: String,
    /// True if the name was module-qualified
    pub from_module: bool,
    /// Qualifying modules, outermost first
    pub module: Option<ModuleChain>,
    /// Arguments in order
    pub arguments: Vec<InstructionArgument>,
}

/// One instruction argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionArgument {
    /// Kind of the argument's first token
    pub kind: Kind,
    /// Argument value
    pub value: Box<Node>,
}

/// Literal or identifier reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Value {
    /// Literal text, or the referenced name
    pub value: String,
    /// Kind of the token the value came from
    pub kind: Kind,
    /// True if the name was module-qualified
    pub from_module: bool,
    /// Qualifying modules, outermost first
    pub module: Option<ModuleChain>,
}

impl Value {
    /// An unqualified value
    pub fn new(value: impl Into<String>, kind: Kind) -> Self {
        Self {
            value: value.into(),
            kind,
            from_module: false,
            module: None,
        }
    }

    /// True for an unqualified identifier reference
    pub fn is_bare_identifier(&self) -> bool {
        self.kind == Kind::Identifier && !self.from_module
    }
}

/// One segment of a dotted module path
///
/// # Examples
///
/// ```
/// use parser::ast::ModuleChain;
///
/// let chain = ModuleChain::from_segments(&["std", "io"]).unwrap();
/// assert!(chain.has_sub_module);
/// assert_eq!(chain.qualified_name(), "std.io");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleChain {
    /// Module name
    pub name: String,
    /// True if another segment follows
    pub has_sub_module: bool,
    /// Following segment
    pub next: Option<Box<ModuleChain>>,
}

impl ModuleChain {
    /// Build a chain from outermost to innermost segment
    pub fn from_segments<S: AsRef<str>>(segments: &[S]) -> Option<Self> {
        segments.iter().rev().fold(None, |next, segment| {
            Some(ModuleChain {
                name: segment.as_ref().to_string(),
                has_sub_module: next.is_some(),
                next: next.map(Box::new),
            })
        })
    }

    /// Segment names, outermost first
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        std::iter::successors(Some(self), |chain| chain.next.as_deref())
            .map(|chain| chain.name.as_str())
    }

    /// Dotted name, the key used by module maps
    pub fn qualified_name(&self) -> String {
        self.segments().collect::<Vec<_>>().join(".")
    }
}
