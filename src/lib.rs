//! # pathlens
//!
//! A small compiler from restricted lookup-path expressions (`?a?b?3`)
//! to reusable lenses over dynamic values.
//!
//! ## Overview
//!
//! A path expression names one chain of lookups into a structure of
//! nested mappings and ordered sequences. Compiling it yields a
//! [`SetterLens`](optics::SetterLens): applied to a root value, the
//! lens walks down to the addressed leaf and hands back a
//! [`Setter`](optics::Setter) that builds a new root with that one leaf
//! replaced. Nothing is ever mutated; every subtree off the path is
//! shared by reference with the original root.
//!
//! - **[`value`]**: the [`Value`](value::Value) model — leaves,
//!   reference-counted sequences, and insertion-ordered mappings.
//! - **[`syntax`]**: the restricted expression grammar and its parser.
//! - **[`optics`]**: step extraction, per-step optics, and the lens
//!   compiler itself.
//!
//! ## Feature Flags
//!
//! - `arc`: share containers with `Arc` instead of `Rc`
//! - `serde`: serialization support for [`Value`](value::Value)
//!
//! ## Example
//!
//! ```rust
//! use pathlens::optics::create_setter;
//! use pathlens::{mapping, sequence};
//!
//! let root = mapping! {
//!     "a" => 1,
//!     "b" => sequence![10, 20, 30],
//! };
//!
//! let compiled = create_setter("?b?2").expect("path compiles");
//! let setter = compiled.lens(&root).expect("path matches the data");
//!
//! let updated = setter.set(99);
//! assert_eq!(updated, mapping! { "a" => 1, "b" => sequence![10, 99, 30] });
//!
//! // The original root is untouched.
//! assert_eq!(root, mapping! { "a" => 1, "b" => sequence![10, 20, 30] });
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use pathlens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::optics::*;
    pub use crate::syntax::*;
    pub use crate::value::*;
}

pub mod optics;
pub mod syntax;
pub mod value;
