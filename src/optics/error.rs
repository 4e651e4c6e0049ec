//! Error tiers for lens compilation and traversal.
//!
//! Compilation problems (the expression does not describe a single
//! lookup chain) are expected and returned as values. Traversal
//! problems (the path does not match the shape of the data it is
//! applied to) are misuse by the caller and get their own error type,
//! kept fully disjoint from the compile tier.

use crate::syntax::ParseError;
use crate::value::Value;

/// Failures while extracting lookup steps from a parsed expression.
///
/// # Examples
///
/// ```rust
/// use pathlens::optics::{create_setter, CompileError, ExtractError};
///
/// let result = create_setter(".?a/.?b");
/// assert_eq!(
///     result.err(),
///     Some(CompileError::Extract(ExtractError::TooManySteps { count: 2 }))
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The path has more than one step where exactly one is allowed.
    TooManySteps {
        /// How many steps the path actually has.
        count: usize,
    },
    /// The expression parses but contains no lookups at all.
    NoLookups,
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooManySteps { count } => {
                write!(
                    formatter,
                    "expression has more than one path step ({count})"
                )
            }
            Self::NoLookups => write!(formatter, "no unary lookup found in the expression"),
        }
    }
}

impl std::error::Error for ExtractError {}

/// Expected compile-time failures of [`create_setter`](crate::optics::create_setter).
///
/// Both variants wrap the failing layer's own error unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// The expression did not parse.
    Parse(ParseError),
    /// The parsed expression is not a single lookup chain.
    Extract(ExtractError),
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(error) => write!(formatter, "{error}"),
            Self::Extract(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(error) => Some(error),
            Self::Extract(error) => Some(error),
        }
    }
}

impl From<ParseError> for CompileError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<ExtractError> for CompileError {
    fn from(error: ExtractError) -> Self {
        Self::Extract(error)
    }
}

/// Shape-mismatch faults raised while focusing a lens on real data.
///
/// These indicate a path that does not fit the structure it was
/// applied to; they carry the offending identifier and a rendering of
/// the data that rejected it.
#[derive(Debug, Clone, PartialEq)]
pub enum TraversalError {
    /// An identifier that is not a usable 1-based position was used
    /// against a sequence.
    NotAnIndex {
        /// The offending step identifier.
        identifier: String,
        /// The sequence it was applied to.
        sequence: Value,
    },
    /// A non-final step read a value that cannot be descended into.
    NotAContainer {
        /// The failing step, 1-based.
        step: usize,
        /// The identifier looked up at that step.
        identifier: String,
        /// The container the lookup ran against.
        container: Value,
        /// What the lookup returned, if anything.
        found: Option<Value>,
    },
}

impl std::fmt::Display for TraversalError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAnIndex {
                identifier,
                sequence,
            } => {
                write!(
                    formatter,
                    "cannot use the string `{identifier}` as a 1-based position into the sequence {sequence}"
                )
            }
            Self::NotAContainer {
                step,
                identifier,
                container,
                found: Some(found),
            } => {
                write!(
                    formatter,
                    "no result for step {step}: tried to get `{identifier}` from {container} and got {found}"
                )
            }
            Self::NotAContainer {
                step,
                identifier,
                container,
                found: None,
            } => {
                write!(
                    formatter,
                    "no result for step {step}: tried to get `{identifier}` from {container} and got nothing"
                )
            }
        }
    }
}

impl std::error::Error for TraversalError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence;
    use rstest::rstest;

    #[rstest]
    fn test_extract_error_display() {
        assert_eq!(
            format!("{}", ExtractError::TooManySteps { count: 3 }),
            "expression has more than one path step (3)"
        );
        assert_eq!(
            format!("{}", ExtractError::NoLookups),
            "no unary lookup found in the expression"
        );
    }

    #[rstest]
    fn test_compile_error_wraps_parse_error() {
        let error = CompileError::from(ParseError::EmptyExpression);
        assert_eq!(format!("{error}"), "empty path expression");
    }

    #[rstest]
    fn test_compile_error_source() {
        use std::error::Error;

        let error = CompileError::from(ExtractError::NoLookups);
        assert!(error.source().is_some());
    }

    #[rstest]
    fn test_not_an_index_display() {
        let error = TraversalError::NotAnIndex {
            identifier: "a".to_string(),
            sequence: sequence![1, 2, 3],
        };
        assert_eq!(
            format!("{error}"),
            "cannot use the string `a` as a 1-based position into the sequence [1, 2, 3]"
        );
    }

    #[rstest]
    fn test_not_a_container_display() {
        let error = TraversalError::NotAContainer {
            step: 2,
            identifier: "y".to_string(),
            container: sequence![4],
            found: Some(Value::Integer(4)),
        };
        assert_eq!(
            format!("{error}"),
            "no result for step 2: tried to get `y` from [4] and got 4"
        );

        let absent = TraversalError::NotAContainer {
            step: 1,
            identifier: "missing".to_string(),
            container: sequence![],
            found: None,
        };
        assert_eq!(
            format!("{absent}"),
            "no result for step 1: tried to get `missing` from [] and got nothing"
        );
    }
}
