//! Insertion-ordered mapping with unique string keys.
//!
//! Key order is irrelevant for equality but preserved for deterministic
//! iteration and rendering. Updates are persistent: [`Mapping::insert`]
//! returns a new mapping and leaves the original untouched.

use crate::value::Value;

/// An insertion-ordered map from string keys to [`Value`]s.
///
/// Keys are unique; inserting an existing key replaces its value in
/// place, keeping the key's original position, while a new key is
/// appended at the end.
///
/// # Example
///
/// ```
/// use pathlens::value::{Mapping, Value};
///
/// let mapping = Mapping::new()
///     .insert("one", 1)
///     .insert("two", 2);
/// assert_eq!(mapping.get("one"), Some(&Value::Integer(1)));
///
/// // Persistent update: the original mapping is preserved
/// let updated = mapping.insert("one", 100);
/// assert_eq!(mapping.get("one"), Some(&Value::Integer(1)));
/// assert_eq!(updated.get("one"), Some(&Value::Integer(100)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mapping {
    entries: Vec<(String, Value)>,
}

impl Mapping {
    /// Creates an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the mapping has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Returns `true` when `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Returns a new mapping with `key` bound to `value`.
    ///
    /// An existing key keeps its position; a new key is appended. The
    /// receiver is not modified.
    #[must_use]
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut entries = self.entries.clone();
        Self::write(&mut entries, key.into(), value.into());
        Self { entries }
    }

    fn write(entries: &mut Vec<(String, Value)>, key: String, value: Value) {
        match entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => entries.push((key, value)),
        }
    }
}

impl PartialEq for Mapping {
    /// Equality ignores insertion order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iterator: I) -> Self {
        let mut entries = Vec::new();
        for (key, value) in iterator {
            Self::write(&mut entries, key.into(), value.into());
        }
        Self { entries }
    }
}

impl std::fmt::Display for Mapping {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{{")?;
        for (position, (key, value)) in self.entries.iter().enumerate() {
            if position > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key:?}: {value}")?;
        }
        write!(formatter, "}}")
    }
}
