//! Step extraction from parsed queries.
//!
//! The bridge between the expression language and the lens compiler:
//! of everything the grammar can express, only a single chain of
//! lookups compiles. Two parsed shapes qualify — a path with exactly
//! one step, and a bare lookup chain — and both flatten to the same
//! thing, the ordered list of step identifiers.

use smallvec::SmallVec;

use crate::optics::ExtractError;
use crate::syntax::{Lookup, ParsedQuery, QueryBody};

/// Ordered step identifiers, root to leaf.
///
/// Paths are short; the inline capacity keeps the common case off the
/// heap.
pub type Steps = SmallVec<[String; 8]>;

/// Extracts the lookup steps of a parsed query.
///
/// - A path body must have exactly one step; its lookups are returned
///   in written order (possibly none, for a lone context item).
/// - A bare lookup chain returns its lookups in written order.
/// - Anything else carries no lookups and is rejected.
///
/// # Errors
///
/// [`ExtractError::TooManySteps`] for a multi-step path,
/// [`ExtractError::NoLookups`] for a body without lookups.
///
/// # Example
///
/// ```
/// use pathlens::optics::extract_steps;
/// use pathlens::syntax::parse;
///
/// let query = parse("?b?4?e?1")?;
/// let steps = extract_steps(&query)?;
/// assert_eq!(steps.as_slice(), ["b", "4", "e", "1"]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn extract_steps(query: &ParsedQuery) -> Result<Steps, ExtractError> {
    match query.body() {
        QueryBody::Path(path) => {
            if path.steps().len() > 1 {
                return Err(ExtractError::TooManySteps {
                    count: path.steps().len(),
                });
            }
            Ok(path
                .steps()
                .iter()
                .flat_map(|step| step.lookups())
                .map(identifier)
                .collect())
        }
        QueryBody::Lookups(lookups) => {
            if lookups.is_empty() {
                return Err(ExtractError::NoLookups);
            }
            Ok(lookups.iter().map(identifier).collect())
        }
        QueryBody::Literal(_) => Err(ExtractError::NoLookups),
    }
}

fn identifier(lookup: &Lookup) -> String {
    lookup.identifier().to_string()
}
