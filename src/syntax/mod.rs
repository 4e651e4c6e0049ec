//! The restricted path-expression language.
//!
//! This module stands where the original design put an external
//! expression evaluator: it turns a path string such as `?a?b?3` into a
//! parsed query that the optics layer inspects. The grammar is the
//! lookup fragment of a much larger expression language, small enough
//! to parse with a hand-written scanner:
//!
//! ```text
//! expression := literal | steps
//! literal    := digits | string-literal
//! steps      := step ('/' step)*
//! step       := '.' lookup* | lookup+
//! lookup     := '?' key
//! key        := (alphanumeric | '_' | '-')+
//! ```
//!
//! Keys stay opaque here; whether a key addresses a mapping or a
//! 1-based sequence position is decided at traversal time against the
//! runtime shape of the data.
//!
//! # Example
//!
//! ```
//! use pathlens::syntax::{parse, QueryBody};
//!
//! let query = parse("?a?b")?;
//! assert!(matches!(query.body(), QueryBody::Lookups(lookups) if lookups.len() == 2));
//! # Ok::<(), pathlens::syntax::ParseError>(())
//! ```

mod parser;

pub use parser::parse;

/// A successfully parsed path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    body: QueryBody,
}

impl ParsedQuery {
    pub(crate) const fn new(body: QueryBody) -> Self {
        Self { body }
    }

    /// The expression body.
    #[must_use]
    pub const fn body(&self) -> &QueryBody {
        &self.body
    }
}

/// The shape of a parsed expression body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryBody {
    /// A path of context-item steps, e.g. `.?a` or `.?a/.?b`.
    Path(PathExpr),
    /// A bare chain of lookups with no path wrapper, e.g. `?a?b`.
    Lookups(Vec<Lookup>),
    /// A literal with no lookups at all, e.g. `42` or `"text"`.
    Literal(LiteralExpr),
}

/// A path expression: one or more steps separated by `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathExpr {
    steps: Vec<StepExpr>,
}

impl PathExpr {
    pub(crate) const fn new(steps: Vec<StepExpr>) -> Self {
        Self { steps }
    }

    /// The steps in written order.
    #[must_use]
    pub fn steps(&self) -> &[StepExpr] {
        &self.steps
    }
}

/// A single path step and its chained lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepExpr {
    lookups: Vec<Lookup>,
}

impl StepExpr {
    pub(crate) const fn new(lookups: Vec<Lookup>) -> Self {
        Self { lookups }
    }

    pub(crate) fn into_lookups(self) -> Vec<Lookup> {
        self.lookups
    }

    /// The lookups in written order; may be empty for a bare `.` step.
    #[must_use]
    pub fn lookups(&self) -> &[Lookup] {
        &self.lookups
    }
}

/// One `?key` lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// A named key, e.g. `?name`.
    Name(String),
    /// An all-digit key, written as a 1-based position, e.g. `?3`.
    Position(String),
}

impl Lookup {
    pub(crate) fn classify(key: String) -> Self {
        if !key.is_empty() && key.bytes().all(|byte| byte.is_ascii_digit()) {
            Self::Position(key)
        } else {
            Self::Name(key)
        }
    }

    /// The raw key text, regardless of classification.
    #[must_use]
    pub fn identifier(&self) -> &str {
        match self {
            Self::Name(key) | Self::Position(key) => key,
        }
    }
}

/// A literal expression body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralExpr {
    /// An unsigned number literal, kept as written.
    Number(String),
    /// A quoted string literal.
    Text(String),
}

/// Errors raised while parsing a path expression.
///
/// These surface unmodified through
/// [`CompileError::Parse`](crate::optics::CompileError::Parse).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty or all whitespace.
    EmptyExpression,
    /// A character that no rule accepts.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset into the input.
        offset: usize,
    },
    /// The input ended where a step or lookup was required.
    UnexpectedEnd,
    /// A `?` with no key after it.
    MissingLookupKey {
        /// Byte offset of the `?`.
        offset: usize,
    },
    /// A string literal with no closing quote.
    UnterminatedLiteral {
        /// Byte offset of the opening quote.
        offset: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(formatter, "empty path expression"),
            Self::UnexpectedCharacter { character, offset } => {
                write!(
                    formatter,
                    "unexpected character `{character}` at offset {offset}"
                )
            }
            Self::UnexpectedEnd => write!(formatter, "unexpected end of path expression"),
            Self::MissingLookupKey { offset } => {
                write!(formatter, "`?` at offset {offset} is missing its key")
            }
            Self::UnterminatedLiteral { offset } => {
                write!(
                    formatter,
                    "string literal starting at offset {offset} is never closed"
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}
