//! The lens compiler: from path string to copy-on-write setter.
//!
//! Compilation is two-phase. [`create_setter`] does the per-path work
//! once — parse, extract steps — and the resulting [`SetterLens`] is
//! reusable across any number of roots. Focusing it on a root with
//! [`SetterLens::lens`] walks the steps top-down, dispatching a
//! [`StepOptic`](crate::optics::StepOptic) per level against the
//! runtime shape of the value, and accumulates one setter per level.
//! The returned [`Setter`] replays those setters bottom-up, rebuilding
//! each ancestor around its updated child; everything off the path is
//! shared with the original root.

use crate::optics::extract::{Steps, extract_steps};
use crate::optics::step::{StepOptic, ValueOptional};
use crate::optics::{CompileError, TraversalError};
use crate::syntax;
use crate::value::Value;

/// Compiles a path expression into a reusable lens.
///
/// # Errors
///
/// [`CompileError::Parse`] when the expression does not parse;
/// [`CompileError::Extract`] when it parses but is not a single lookup
/// chain. Both are expected failure modes returned as values — shape
/// mismatches against actual data surface later, from
/// [`SetterLens::lens`].
///
/// # Example
///
/// ```
/// use pathlens::optics::create_setter;
/// use pathlens::mapping;
///
/// let compiled = create_setter("?c?y")?;
/// let root = mapping! { "c" => mapping! { "x" => 3, "y" => 4 } };
///
/// let updated = compiled.lens(&root)?.set(5);
/// assert_eq!(updated, mapping! { "c" => mapping! { "x" => 3, "y" => 5 } });
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn create_setter(path: &str) -> Result<SetterLens, CompileError> {
    let parsed = syntax::parse(path)?;
    let steps = extract_steps(&parsed)?;
    Ok(SetterLens { steps })
}

/// A compiled lookup path.
///
/// Holds the step identifiers in root-to-leaf order; stateless and
/// freely reusable across roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetterLens {
    steps: Steps,
}

impl SetterLens {
    /// The step identifiers in root-to-leaf order.
    #[must_use]
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Focuses the lens on `root`, descending step by step.
    ///
    /// Each level clones only a handle to the container it saw, so the
    /// walk is cheap; `root` itself is never modified.
    ///
    /// # Errors
    ///
    /// [`TraversalError::NotAnIndex`] when a sequence is addressed by
    /// an identifier that is not a usable 1-based position, and
    /// [`TraversalError::NotAContainer`] when any step before the last
    /// reads a value that cannot be descended into. Both mean the path
    /// does not match the shape of this particular root.
    pub fn lens(&self, root: &Value) -> Result<Setter, TraversalError> {
        let mut levels = Vec::with_capacity(self.steps.len());
        let mut partial = root.clone();
        let mut leaf = Some(root.clone());

        for (position, identifier) in self.steps.iter().enumerate() {
            let optic = StepOptic::for_value(&partial, identifier)?;
            let next = optic.get_option(&partial).cloned();

            let is_final = position + 1 == self.steps.len();
            if !is_final && !next.as_ref().is_some_and(Value::is_container) {
                return Err(TraversalError::NotAContainer {
                    step: position + 1,
                    identifier: identifier.clone(),
                    container: partial,
                    found: next,
                });
            }

            levels.push(Level {
                optic,
                source: partial,
            });
            partial = next.clone().unwrap_or(Value::Null);
            leaf = next;
        }

        Ok(Setter { levels, leaf })
    }
}

/// One traversed level: the optic for its step and the container it
/// was dispatched against.
#[derive(Debug, Clone)]
struct Level {
    optic: StepOptic,
    source: Value,
}

/// A setter focused on one leaf of one specific root.
///
/// Produced by [`SetterLens::lens`]; applying it never mutates the
/// root it was focused on, and it may be applied any number of times.
#[derive(Debug, Clone)]
pub struct Setter {
    levels: Vec<Level>,
    leaf: Option<Value>,
}

impl Setter {
    /// The leaf value read at focus time, before any set.
    ///
    /// `None` when the final step's identifier was absent from its
    /// container.
    #[must_use]
    pub const fn current(&self) -> Option<&Value> {
        self.leaf.as_ref()
    }

    /// Builds a new root with the focused leaf replaced by `value`.
    ///
    /// Walks the traversed levels deepest-first, rebuilding each
    /// ancestor around its freshly built child. Every sibling subtree
    /// is shared with the original root by reference.
    #[must_use]
    pub fn set(&self, value: impl Into<Value>) -> Value {
        let mut current = value.into();
        for level in self.levels.iter().rev() {
            current = level.optic.set(level.source.clone(), current);
        }
        current
    }
}
