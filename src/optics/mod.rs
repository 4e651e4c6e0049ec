//! Lens compilation for lookup paths.
//!
//! This module turns a path expression into a lens over dynamic
//! values: a composable pair of getter and setter focused on one leaf
//! of a nested structure. The pipeline, top to bottom:
//!
//! ```text
//! "?c?y"  --parse-->  ParsedQuery  --extract_steps-->  ["c", "y"]
//!         --create_setter-->  SetterLens
//!         --lens(root)-->     Setter
//!         --set(value)-->     new root, sharing everything off the path
//! ```
//!
//! # Components
//!
//! - [`extract_steps`]: flattens a parsed query into ordered step
//!   identifiers, rejecting anything that is not a single lookup chain.
//! - [`ValueOptional`], [`SequenceIx`], [`MappingKey`], [`StepOptic`]:
//!   the per-step optics and their runtime-shape dispatcher.
//! - [`create_setter`], [`SetterLens`], [`Setter`]: the compiled lens
//!   and its whole-to-whole update.
//!
//! # Error tiers
//!
//! Compile-time problems ([`CompileError`]) are expected and returned
//! as values: the expression failed to parse, or parsed into something
//! other than a single lookup chain. Traversal faults
//! ([`TraversalError`]) mean the path does not fit the data it was
//! focused on; they only arise from [`SetterLens::lens`], never from
//! [`Setter::set`].
//!
//! # Example
//!
//! ```
//! use pathlens::optics::create_setter;
//! use pathlens::mapping;
//!
//! let root = mapping! {
//!     "a" => 1,
//!     "b" => 2,
//!     "c" => mapping! { "x" => 3, "y" => 4 },
//! };
//!
//! let setter = create_setter("?c?y")?.lens(&root)?;
//! let updated = setter.set(5);
//!
//! assert_eq!(
//!     updated,
//!     mapping! { "a" => 1, "b" => 2, "c" => mapping! { "x" => 3, "y" => 5 } }
//! );
//!
//! // Subtrees off the path are shared, not copied.
//! let original_c = root.as_mapping().unwrap().get("c").unwrap();
//! let updated_c = updated.as_mapping().unwrap().get("c").unwrap();
//! assert!(!original_c.ptr_eq(updated_c));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod extract;
mod setter;
mod step;

// Re-export the error tiers
pub use error::CompileError;
pub use error::ExtractError;
pub use error::TraversalError;

// Re-export step extraction
pub use extract::Steps;
pub use extract::extract_steps;

// Re-export the per-step optics
pub use step::MappingKey;
pub use step::SequenceIx;
pub use step::StepOptic;
pub use step::ValueOptional;

// Re-export the compiled lens
pub use setter::Setter;
pub use setter::SetterLens;
pub use setter::create_setter;
