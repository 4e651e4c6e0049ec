//! Per-step optics over dynamic values.
//!
//! Each traversal step focuses on one child of a container. The
//! capability is the [`ValueOptional`] trait: a getter that may find
//! nothing and a copy-on-write setter that rebuilds only the container
//! it touches, sharing every other child with the source.
//!
//! Which implementation applies is decided per step at traversal time,
//! against the runtime shape of the value: sequences take
//! [`SequenceIx`], everything else takes [`MappingKey`]. The
//! [`StepOptic`] dispatcher performs that selection.

use crate::optics::TraversalError;
use crate::value::{Mapping, Value};

/// Optional-style access to one child of a dynamic value.
///
/// # Laws
///
/// When the focused child is present:
///
/// 1. **GetPut Law**: `optic.set(source.clone(), optic.get_option(&source).cloned().unwrap()) == source`
/// 2. **PutGet Law**: `optic.get_option(&optic.set(source, value.clone())) == Some(&value)`
/// 3. **PutPut Law**: `optic.set(optic.set(source, first), second) == optic.set(source, second)`
pub trait ValueOptional {
    /// Reads the focused child, or `None` when absent.
    fn get_option<'a>(&self, source: &'a Value) -> Option<&'a Value>;

    /// Returns a new value identical to `source` except for the
    /// focused child, which becomes `value`.
    ///
    /// The source is never mutated; children off the focus are shared
    /// with it by reference.
    fn set(&self, source: Value, value: Value) -> Value;
}

/// Focuses on the element at a fixed 0-based index of a sequence.
///
/// # Example
///
/// ```
/// use pathlens::optics::{SequenceIx, ValueOptional};
/// use pathlens::sequence;
/// use pathlens::value::Value;
///
/// let optic = SequenceIx::new(1);
/// let source = sequence![1, 2, 3];
///
/// assert_eq!(optic.get_option(&source), Some(&Value::Integer(2)));
/// assert_eq!(optic.set(source, Value::Integer(9)), sequence![1, 9, 3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceIx {
    index: usize,
}

impl SequenceIx {
    /// Creates an optic for the given 0-based index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self { index }
    }
}

impl ValueOptional for SequenceIx {
    fn get_option<'a>(&self, source: &'a Value) -> Option<&'a Value> {
        source.as_sequence()?.get(self.index)
    }

    fn set(&self, source: Value, value: Value) -> Value {
        // Shallow copy; a non-sequence source contributes no elements.
        let mut elements = source.as_sequence().map_or_else(Vec::new, <[Value]>::to_vec);
        if self.index >= elements.len() {
            // An out-of-range write grows the sequence, like a sparse
            // array assignment.
            elements.resize(self.index + 1, Value::Null);
        }
        elements[self.index] = value;
        Value::from(elements)
    }
}

/// Focuses on the value under a fixed key of a mapping.
///
/// Setting always writes the key: an existing entry is replaced in
/// place, an absent one is appended. A non-mapping source contributes
/// no entries, so a set against it yields a single-entry mapping.
///
/// # Example
///
/// ```
/// use pathlens::optics::{MappingKey, ValueOptional};
/// use pathlens::mapping;
/// use pathlens::value::Value;
///
/// let optic = MappingKey::new("x");
/// let source = mapping! { "x" => 1, "y" => 2 };
///
/// assert_eq!(optic.get_option(&source), Some(&Value::Integer(1)));
/// assert_eq!(
///     optic.set(source, Value::Integer(9)),
///     mapping! { "x" => 9, "y" => 2 }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingKey {
    key: String,
}

impl MappingKey {
    /// Creates an optic for the given key.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl ValueOptional for MappingKey {
    fn get_option<'a>(&self, source: &'a Value) -> Option<&'a Value> {
        source.as_mapping()?.get(&self.key)
    }

    fn set(&self, source: Value, value: Value) -> Value {
        let updated = match source.as_mapping() {
            Some(mapping) => mapping.insert(self.key.as_str(), value),
            None => Mapping::new().insert(self.key.as_str(), value),
        };
        Value::from(updated)
    }
}

/// The per-step dispatcher: selects the optic variant for the runtime
/// shape of the traversed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOptic {
    /// Positional access into a sequence.
    Sequence(SequenceIx),
    /// Keyed access into a mapping (or any non-sequence value).
    Mapping(MappingKey),
}

impl StepOptic {
    /// Builds the optic that applies `identifier` to `value`.
    ///
    /// Sequences require an all-digit identifier naming a 1-based
    /// position, converted here to its 0-based index; everything else
    /// is treated as a mapping key.
    ///
    /// # Errors
    ///
    /// [`TraversalError::NotAnIndex`] when `value` is a sequence and
    /// `identifier` is not a usable position (non-digit characters,
    /// position `0`, or a number too large to index with).
    pub fn for_value(value: &Value, identifier: &str) -> Result<Self, TraversalError> {
        match value {
            Value::Sequence(_) => position_index(identifier)
                .map(|index| Self::Sequence(SequenceIx::new(index)))
                .ok_or_else(|| TraversalError::NotAnIndex {
                    identifier: identifier.to_string(),
                    sequence: value.clone(),
                }),
            _ => Ok(Self::Mapping(MappingKey::new(identifier))),
        }
    }
}

impl ValueOptional for StepOptic {
    fn get_option<'a>(&self, source: &'a Value) -> Option<&'a Value> {
        match self {
            Self::Sequence(optic) => optic.get_option(source),
            Self::Mapping(optic) => optic.get_option(source),
        }
    }

    fn set(&self, source: Value, value: Value) -> Value {
        match self {
            Self::Sequence(optic) => optic.set(source, value),
            Self::Mapping(optic) => optic.set(source, value),
        }
    }
}

/// Converts an all-digit identifier written as a 1-based position into
/// its 0-based index.
fn position_index(identifier: &str) -> Option<usize> {
    if identifier.is_empty() || !identifier.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    identifier.parse::<usize>().ok()?.checked_sub(1)
}
