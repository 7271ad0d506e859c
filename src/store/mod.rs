//! Schema element store contract and implementations.
//!
//! This module defines the capability set every concrete schema-element
//! store must provide, parameterized only over element kind — never over
//! storage mechanism. Containers hold a store value and route every
//! permitted naming operation through it.
//!
//! # Key Types
//!
//! - [`SchemaElementStore`] - The capability contract per element kind
//! - [`InMemorySchemaStore`] - RwLock-guarded in-memory implementation

mod in_memory;

pub use in_memory::InMemorySchemaStore;

use crate::error::SchemaNamingResult;
use crate::schema::{AttributeSet, ElementKind, SchemaElement};

/// The capability contract for one schema element container.
///
/// Each operation observes a single consistent snapshot of the underlying
/// store per call, and a `create` followed by a `resolve` for the same name
/// within the same logical session succeeds (read-your-writes). No ordering
/// guarantee is made for the list operations beyond containing exactly the
/// currently-defined elements.
pub trait SchemaElementStore: Send + Sync {
    /// The fixed kind of element this store holds.
    fn kind(&self) -> ElementKind;

    /// Create a new element under `name` with the given definition.
    ///
    /// Fails with `AlreadyExists` if the name is taken, or with
    /// `InvalidDefinition` if the attribute set is insufficient to define
    /// an element of this store's kind. On failure the store is unchanged.
    fn create(&self, name: &str, attrs: AttributeSet) -> SchemaNamingResult<SchemaElement>;

    /// Remove the element under `name`. Fails with `NotFound` if absent.
    fn remove(&self, name: &str) -> SchemaNamingResult<()>;

    /// Persist a mutated attribute set for the element under `name`.
    ///
    /// Fails with `NotFound` if absent; the replacement is all-or-nothing.
    fn update(&self, name: &str, attrs: AttributeSet) -> SchemaNamingResult<()>;

    /// Resolve `name` to its element. Fails with `NotFound` if absent.
    fn resolve(&self, name: &str) -> SchemaNamingResult<SchemaElement>;

    /// The names of all currently-defined elements, as a snapshot.
    fn list_names(&self) -> Vec<String>;

    /// All currently-defined (name, element) pairs, as a snapshot.
    fn list_entries(&self) -> Vec<(String, SchemaElement)>;
}
