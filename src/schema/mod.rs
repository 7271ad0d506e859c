//! Schema data model and session ownership.
//!
//! # Key Types
//!
//! - [`ElementKind`] - The fixed set of schema element kinds
//! - [`AttributeSet`] - Attribute id to values mapping of one definition
//! - [`SchemaElement`] - One named, typed schema element
//! - [`SchemaManager`] - Owns per-kind stores, hands out containers

mod manager;
mod types;

pub use manager::SchemaManager;
pub use types::{AttributeSet, ElementKind, ModOp, Modification, SchemaElement};
