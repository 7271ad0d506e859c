//! The generic naming-service contract and its result types.
//!
//! This module defines the tree-naming boundary the adapter implements:
//! every operation a generic hierarchical naming service exposes, taking a
//! normalized [`SchemaName`] and returning either a delegated result or one
//! of the fixed error kinds. The adapter's dispatcher lives in
//! [`container`].
//!
//! # Key Types
//!
//! - [`DirContext`] - The naming-service operation set
//! - [`SchemaContainer`] - The dispatcher implementing it over a schema store
//! - [`Bindable`] - The "directory-object-like" seam consulted by `bind`

mod container;

pub use container::SchemaContainer;

use crate::error::SchemaNamingResult;
use crate::name::SchemaName;
use crate::schema::{AttributeSet, ElementKind, Modification, SchemaElement};

/// What a lookup resolves to.
///
/// The empty name always resolves to the container itself, never to a
/// stored element; anything else resolves to an element or fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// The container itself (the empty name).
    Root,
    /// A schema element stored under the looked-up name.
    Element(SchemaElement),
}

impl Resolved {
    /// The resolved element, if the lookup did not hit the container root.
    pub fn element(&self) -> Option<&SchemaElement> {
        match self {
            Resolved::Root => None,
            Resolved::Element(element) => Some(element),
        }
    }
}

/// One entry of a `list` result: a name and the kind stored under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePair {
    /// The element's name.
    pub name: String,
    /// The kind of element the name is bound to.
    pub kind: ElementKind,
}

/// One entry of a `list_bindings` result: a name and its resolved element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// The element's name.
    pub name: String,
    /// The element bound under the name.
    pub element: SchemaElement,
}

/// Objects that may be bound into a schema container.
///
/// `bind` is only permitted for objects that expose an attribute set, in
/// which case it is equivalent to creating a subcontext from those
/// attributes. Plain values return `None` and are rejected with
/// `InvalidArgument`.
pub trait Bindable {
    /// The attribute set this object exposes, if it is directory-object-like.
    fn directory_attributes(&self) -> Option<AttributeSet>;
}

impl Bindable for SchemaElement {
    fn directory_attributes(&self) -> Option<AttributeSet> {
        Some(self.attrs().clone())
    }
}

impl Bindable for AttributeSet {
    fn directory_attributes(&self) -> Option<AttributeSet> {
        Some(self.clone())
    }
}

impl Bindable for &str {
    fn directory_attributes(&self) -> Option<AttributeSet> {
        None
    }
}

impl Bindable for String {
    fn directory_attributes(&self) -> Option<AttributeSet> {
        None
    }
}

/// The generic tree-naming operation set.
///
/// Implementations either delegate an operation to the underlying store or
/// fail it with a fixed, operation-specific error; no operation is silently
/// approximated. Names are the empty name (the context itself) or a single
/// relative segment.
pub trait DirContext {
    /// Resolve a name. The empty name yields the context itself.
    fn lookup(&self, name: &SchemaName) -> SchemaNamingResult<Resolved>;

    /// Follow a link. Schema trees have no link concept; always rejected.
    fn lookup_link(&self, name: &SchemaName) -> SchemaNamingResult<Resolved>;

    /// List the names enumerable under the resolved target.
    fn list(&self, name: &SchemaName) -> SchemaNamingResult<Vec<NamePair>>;

    /// List (name, element) bindings under the resolved target.
    fn list_bindings(&self, name: &SchemaName) -> SchemaNamingResult<Vec<Binding>>;

    /// Read the target element's attributes, optionally projected to `ids`.
    ///
    /// The empty name targets the context itself, which carries no
    /// attributes and is rejected.
    fn get_attributes(
        &self,
        name: &SchemaName,
        ids: Option<&[&str]>,
    ) -> SchemaNamingResult<AttributeSet>;

    /// Apply a modification list to the target element's attributes.
    ///
    /// The whole list succeeds or nothing is persisted.
    fn modify_attributes(
        &self,
        name: &SchemaName,
        mods: &[Modification],
    ) -> SchemaNamingResult<()>;

    /// Create a new element under `name` from the given definition.
    ///
    /// A schema element cannot exist without a defining attribute set, so
    /// `attrs: None` is always rejected.
    fn create_subcontext(
        &self,
        name: &SchemaName,
        attrs: Option<AttributeSet>,
    ) -> SchemaNamingResult<SchemaElement>;

    /// Destroy the element under `name`.
    fn destroy_subcontext(&self, name: &SchemaName) -> SchemaNamingResult<()>;

    /// Bind an object under `name`.
    ///
    /// Permitted only for objects exposing an attribute set, where it is
    /// equivalent to `create_subcontext` with those attributes.
    fn bind(&self, name: &SchemaName, obj: &dyn Bindable) -> SchemaNamingResult<SchemaElement>;

    /// Replace a binding. No in-place identity change exists in a schema
    /// tree; always rejected.
    fn rebind(&self, name: &SchemaName, obj: &dyn Bindable) -> SchemaNamingResult<()>;

    /// Rename an element. Always rejected, regardless of whether either
    /// name exists.
    fn rename(&self, old: &SchemaName, new: &SchemaName) -> SchemaNamingResult<()>;

    /// Remove the binding under `name`; equivalent to `destroy_subcontext`.
    fn unbind(&self, name: &SchemaName) -> SchemaNamingResult<()>;
}
