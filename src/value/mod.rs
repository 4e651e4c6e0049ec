//! Dynamic values traversed by lenses.
//!
//! A [`Value`] is either a leaf (null, boolean, number, text) or a
//! container: an ordered [`Sequence`](Value::Sequence) or an
//! insertion-ordered [`Mapping`](Value::Mapping). Containers are
//! reference-counted, so cloning a value is cheap and updated roots
//! share every untouched subtree with their originals.
//!
//! # Structural Sharing
//!
//! Copy-on-write updates rebuild only the containers along the updated
//! path. [`Value::ptr_eq`] observes the sharing:
//!
//! ```rust
//! use pathlens::{mapping, sequence};
//!
//! let shared = sequence![1, 2, 3];
//! let root = mapping! { "a" => shared.clone(), "b" => 0 };
//!
//! assert!(shared.ptr_eq(root.as_mapping().unwrap().get("a").unwrap()));
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub type ReferenceCounter<T> = std::sync::Arc<T>;

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(not(feature = "arc"))]
pub type ReferenceCounter<T> = std::rc::Rc<T>;

mod mapping;

pub use mapping::Mapping;

/// A dynamic value: a leaf or a shared container.
///
/// # Example
///
/// ```
/// use pathlens::value::Value;
/// use pathlens::{mapping, sequence};
///
/// let root = mapping! { "numbers" => sequence![1, 2, 3] };
/// assert!(root.is_container());
/// assert_eq!(root.as_mapping().unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absent value.
    Null,
    /// A boolean leaf.
    Bool(bool),
    /// An integer leaf.
    Integer(i64),
    /// A floating-point leaf.
    Float(f64),
    /// A text leaf.
    Text(String),
    /// An ordered sequence of values, shared by reference.
    Sequence(ReferenceCounter<Vec<Value>>),
    /// An insertion-ordered mapping, shared by reference.
    Mapping(ReferenceCounter<Mapping>),
}

impl Value {
    /// Builds a sequence value from its elements.
    ///
    /// # Example
    ///
    /// ```
    /// use pathlens::value::Value;
    ///
    /// let sequence = Value::sequence([Value::Integer(1), Value::Integer(2)]);
    /// assert_eq!(sequence.as_sequence().map(<[Value]>::len), Some(2));
    /// ```
    #[must_use]
    pub fn sequence(elements: impl IntoIterator<Item = Self>) -> Self {
        Self::Sequence(ReferenceCounter::new(elements.into_iter().collect()))
    }

    /// Returns `true` for sequences and mappings.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, Self::Sequence(_) | Self::Mapping(_))
    }

    /// Returns the elements when this value is a sequence.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::Sequence(elements) => Some(elements),
            _ => None,
        }
    }

    /// Returns the mapping when this value is one.
    #[must_use]
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    /// Returns `true` when both values are the same shared container
    /// allocation.
    ///
    /// Leaves are never pointer-equal; use `==` for them. This is the
    /// observation point for structural sharing: a subtree untouched by
    /// an update stays pointer-equal to the original.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Sequence(left), Self::Sequence(right)) => {
                ReferenceCounter::ptr_eq(left, right)
            }
            (Self::Mapping(left), Self::Mapping(right)) => ReferenceCounter::ptr_eq(left, right),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<Self>> for Value {
    fn from(elements: Vec<Self>) -> Self {
        Self::Sequence(ReferenceCounter::new(elements))
    }
}

impl From<Mapping> for Value {
    fn from(mapping: Mapping) -> Self {
        Self::Mapping(ReferenceCounter::new(mapping))
    }
}

impl std::fmt::Display for Value {
    /// Renders a JSON-like form, used verbatim in traversal diagnostics.
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(formatter, "null"),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Integer(value) => write!(formatter, "{value}"),
            Self::Float(value) => write!(formatter, "{value}"),
            Self::Text(value) => write!(formatter, "{value:?}"),
            Self::Sequence(elements) => {
                write!(formatter, "[")?;
                for (position, element) in elements.iter().enumerate() {
                    if position > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{element}")?;
                }
                write!(formatter, "]")
            }
            Self::Mapping(mapping) => write!(formatter, "{mapping}"),
        }
    }
}

/// Builds a sequence [`Value`] from a list of elements.
///
/// Elements are converted with [`Value::from`].
///
/// # Example
///
/// ```
/// use pathlens::sequence;
///
/// let numbers = sequence![1, 2, 3];
/// assert_eq!(numbers.as_sequence().map(<[_]>::len), Some(3));
/// ```
#[macro_export]
macro_rules! sequence {
    () => {
        $crate::value::Value::sequence(::std::iter::empty())
    };
    ($($element:expr),+ $(,)?) => {
        $crate::value::Value::sequence([$($crate::value::Value::from($element)),+])
    };
}

/// Builds a mapping [`Value`] from `key => value` entries.
///
/// Values are converted with [`Value::from`]; later duplicates of a key
/// overwrite earlier ones in place.
///
/// # Example
///
/// ```
/// use pathlens::mapping;
///
/// let point = mapping! { "x" => 1, "y" => 2 };
/// assert_eq!(point.as_mapping().unwrap().len(), 2);
/// ```
#[macro_export]
macro_rules! mapping {
    () => {
        $crate::value::Value::from($crate::value::Mapping::new())
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::value::Value::from(
            [$(($key, $crate::value::Value::from($value))),+]
                .into_iter()
                .collect::<$crate::value::Mapping>(),
        )
    };
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Integer(value) => serializer.serialize_i64(*value),
            Self::Float(value) => serializer.serialize_f64(*value),
            Self::Text(value) => serializer.serialize_str(value),
            Self::Sequence(elements) => {
                use serde::ser::SerializeSeq;
                let mut sequence = serializer.serialize_seq(Some(elements.len()))?;
                for element in elements.iter() {
                    sequence.serialize_element(element)?;
                }
                sequence.end()
            }
            Self::Mapping(mapping) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(mapping.len()))?;
                for (key, value) in mapping.iter() {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

#[cfg(feature = "serde")]
struct ValueVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a valid dynamic value")
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(Self)
    }

    fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
        Ok(Value::Bool(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
        Ok(Value::Integer(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
        #[allow(clippy::cast_precision_loss)]
        let fallback = value as f64;
        Ok(i64::try_from(value).map_or(Value::Float(fallback), Value::Integer))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
        Ok(Value::Float(value))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
        Ok(Value::Text(value.to_string()))
    }

    fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
        Ok(Value::Text(value))
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut elements = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(element) = access.next_element()? {
            elements.push(element);
        }
        Ok(Value::from(elements))
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut entries: Vec<(String, Value)> = Vec::new();
        while let Some(entry) = access.next_entry()? {
            entries.push(entry);
        }
        Ok(Value::from(entries.into_iter().collect::<Mapping>()))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

// =============================================================================
// Tests
// =============================================================================
