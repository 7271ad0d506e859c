//! The schema manager: ownership root of the schema session.
//!
//! A [`SchemaManager`] owns one element store per kind and hands out
//! [`SchemaContainer`] handles that borrow it. Ownership only ever flows
//! this direction — containers never own the manager — so a container
//! cannot outlive the schema session backing it.

use crate::naming::SchemaContainer;
use crate::schema::ElementKind;
use crate::store::{InMemorySchemaStore, SchemaElementStore};

/// Owns the per-kind schema element stores for one schema session.
pub struct SchemaManager {
    object_classes: Box<dyn SchemaElementStore>,
    attribute_types: Box<dyn SchemaElementStore>,
    matching_rules: Box<dyn SchemaElementStore>,
    syntaxes: Box<dyn SchemaElementStore>,
}

impl SchemaManager {
    /// Create a manager backed by empty in-memory stores.
    pub fn new() -> Self {
        Self {
            object_classes: Box::new(InMemorySchemaStore::new(ElementKind::ObjectClass)),
            attribute_types: Box::new(InMemorySchemaStore::new(ElementKind::AttributeType)),
            matching_rules: Box::new(InMemorySchemaStore::new(ElementKind::MatchingRule)),
            syntaxes: Box::new(InMemorySchemaStore::new(ElementKind::Syntax)),
        }
    }

    /// Create a manager over caller-supplied stores, one per kind.
    ///
    /// Each store must report the kind of the slot it fills.
    pub fn with_stores(
        object_classes: Box<dyn SchemaElementStore>,
        attribute_types: Box<dyn SchemaElementStore>,
        matching_rules: Box<dyn SchemaElementStore>,
        syntaxes: Box<dyn SchemaElementStore>,
    ) -> Self {
        debug_assert_eq!(object_classes.kind(), ElementKind::ObjectClass);
        debug_assert_eq!(attribute_types.kind(), ElementKind::AttributeType);
        debug_assert_eq!(matching_rules.kind(), ElementKind::MatchingRule);
        debug_assert_eq!(syntaxes.kind(), ElementKind::Syntax);
        Self {
            object_classes,
            attribute_types,
            matching_rules,
            syntaxes,
        }
    }

    /// Hand out the container for the given element kind.
    pub fn container(&self, kind: ElementKind) -> SchemaContainer<'_> {
        SchemaContainer::new(self, kind)
    }

    /// The object class container (`ClassDefinition`).
    pub fn object_classes(&self) -> SchemaContainer<'_> {
        self.container(ElementKind::ObjectClass)
    }

    /// The attribute type container (`AttributeDefinition`).
    pub fn attribute_types(&self) -> SchemaContainer<'_> {
        self.container(ElementKind::AttributeType)
    }

    /// The matching rule container (`MatchingRule`).
    pub fn matching_rules(&self) -> SchemaContainer<'_> {
        self.container(ElementKind::MatchingRule)
    }

    /// The syntax container (`SyntaxDefinition`).
    pub fn syntaxes(&self) -> SchemaContainer<'_> {
        self.container(ElementKind::Syntax)
    }

    pub(crate) fn store_for(&self, kind: ElementKind) -> &dyn SchemaElementStore {
        match kind {
            ElementKind::ObjectClass => self.object_classes.as_ref(),
            ElementKind::AttributeType => self.attribute_types.as_ref(),
            ElementKind::MatchingRule => self.matching_rules.as_ref(),
            ElementKind::Syntax => self.syntaxes.as_ref(),
        }
    }
}

impl Default for SchemaManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SchemaManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaManager")
            .field("object_classes", &self.object_classes.list_names().len())
            .field("attribute_types", &self.attribute_types.list_names().len())
            .field("matching_rules", &self.matching_rules.list_names().len())
            .field("syntaxes", &self.syntaxes.list_names().len())
            .finish()
    }
}
