//! The schema element container: the tree-naming dispatcher.
//!
//! A [`SchemaContainer`] is one addressable point in the schema naming
//! tree, holding zero or more elements of one fixed kind. It implements the
//! full [`DirContext`] contract by routing permitted operations to the
//! kind's [`SchemaElementStore`] and synthesizing the fixed error for
//! operations a schema tree cannot express.
//!
//! Containers are handed out by a [`SchemaManager`] and borrow it for their
//! whole lifetime; a container never outlives the manager that backs it.

use log::debug;

use crate::error::{SchemaNamingError, SchemaNamingResult};
use crate::name::SchemaName;
use crate::naming::{Bindable, Binding, DirContext, NamePair, Resolved};
use crate::schema::{AttributeSet, ElementKind, Modification, SchemaElement, SchemaManager};
use crate::store::SchemaElementStore;

/// A container of schema elements of one fixed kind.
///
/// The `path` is fixed at construction and names this container's position
/// in the schema tree (e.g. `ClassDefinition`). All state lives in the
/// manager's stores; the container itself is a cheap, copyable handle.
#[derive(Debug, Clone, Copy)]
pub struct SchemaContainer<'m> {
    manager: &'m SchemaManager,
    kind: ElementKind,
    path: &'static str,
}

impl<'m> SchemaContainer<'m> {
    pub(crate) fn new(manager: &'m SchemaManager, kind: ElementKind) -> Self {
        Self {
            manager,
            kind,
            path: kind.container_path(),
        }
    }

    /// The kind of element this container holds.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// The container's path in the schema naming tree.
    pub fn path(&self) -> &str {
        self.path
    }

    fn store(&self) -> &dyn SchemaElementStore {
        self.manager.store_for(self.kind)
    }

    /// Resolve a non-root name to its element, or the target of an
    /// attribute operation on the root to the fixed rejection.
    fn resolve_element(&self, name: &SchemaName) -> SchemaNamingResult<SchemaElement> {
        if name.is_root() {
            return Err(SchemaNamingError::no_attributes(self.path));
        }
        self.store().resolve(name.as_str())
    }

    /// Reject structural mutations aimed at the container itself.
    fn require_child_name<'n>(&self, name: &'n SchemaName) -> SchemaNamingResult<&'n str> {
        if name.is_root() {
            return Err(SchemaNamingError::invalid_argument(format!(
                "the empty name denotes the container {} itself",
                self.path
            )));
        }
        Ok(name.as_str())
    }
}

impl DirContext for SchemaContainer<'_> {
    fn lookup(&self, name: &SchemaName) -> SchemaNamingResult<Resolved> {
        if name.is_root() {
            return Ok(Resolved::Root);
        }
        self.store().resolve(name.as_str()).map(Resolved::Element)
    }

    fn lookup_link(&self, _name: &SchemaName) -> SchemaNamingResult<Resolved> {
        Err(SchemaNamingError::unsupported("lookupLink"))
    }

    fn list(&self, name: &SchemaName) -> SchemaNamingResult<Vec<NamePair>> {
        match self.lookup(name)? {
            Resolved::Root => Ok(self
                .store()
                .list_names()
                .into_iter()
                .map(|name| NamePair {
                    name,
                    kind: self.kind,
                })
                .collect()),
            // A schema element is a leaf; nothing is enumerable under it.
            Resolved::Element(_) => Ok(Vec::new()),
        }
    }

    fn list_bindings(&self, name: &SchemaName) -> SchemaNamingResult<Vec<Binding>> {
        match self.lookup(name)? {
            Resolved::Root => Ok(self
                .store()
                .list_entries()
                .into_iter()
                .map(|(name, element)| Binding { name, element })
                .collect()),
            Resolved::Element(_) => Ok(Vec::new()),
        }
    }

    fn get_attributes(
        &self,
        name: &SchemaName,
        ids: Option<&[&str]>,
    ) -> SchemaNamingResult<AttributeSet> {
        let element = self.resolve_element(name)?;
        Ok(match ids {
            Some(ids) => element.attrs().project(ids),
            None => element.attrs().clone(),
        })
    }

    fn modify_attributes(
        &self,
        name: &SchemaName,
        mods: &[Modification],
    ) -> SchemaNamingResult<()> {
        let element = self.resolve_element(name)?;

        // Apply the full list to a scratch copy first; nothing is persisted
        // unless every entry applies cleanly.
        let mut attrs = element.attrs().clone();
        for modification in mods {
            modification.apply(&mut attrs)?;
        }

        debug!(
            "modifying {} attribute(s) of {} '{}'",
            mods.len(),
            self.kind,
            name
        );
        self.store().update(name.as_str(), attrs)
    }

    fn create_subcontext(
        &self,
        name: &SchemaName,
        attrs: Option<AttributeSet>,
    ) -> SchemaNamingResult<SchemaElement> {
        // A schema element cannot exist without a defining attribute set.
        let Some(attrs) = attrs else {
            return Err(SchemaNamingError::unsupported(
                "createSubcontext without attributes",
            ));
        };
        let name = self.require_child_name(name)?;
        debug!("createSubcontext {} under {}", name, self.path);
        self.store().create(name, attrs)
    }

    fn destroy_subcontext(&self, name: &SchemaName) -> SchemaNamingResult<()> {
        let name = self.require_child_name(name)?;
        debug!("destroySubcontext {} under {}", name, self.path);
        self.store().remove(name)
    }

    fn bind(&self, name: &SchemaName, obj: &dyn Bindable) -> SchemaNamingResult<SchemaElement> {
        match obj.directory_attributes() {
            Some(attrs) => self.create_subcontext(name, Some(attrs)),
            None => Err(SchemaNamingError::invalid_argument(
                "can not bind this type of object",
            )),
        }
    }

    fn rebind(&self, _name: &SchemaName, _obj: &dyn Bindable) -> SchemaNamingResult<()> {
        Err(SchemaNamingError::unsupported("rebind"))
    }

    fn rename(&self, _old: &SchemaName, _new: &SchemaName) -> SchemaNamingResult<()> {
        Err(SchemaNamingError::unsupported("rename"))
    }

    fn unbind(&self, name: &SchemaName) -> SchemaNamingResult<()> {
        self.destroy_subcontext(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> SchemaManager {
        SchemaManager::new()
    }

    fn object_class_attrs() -> AttributeSet {
        let mut attrs = AttributeSet::new();
        attrs.put("objectClass", ["top", "objectClassDef"]);
        attrs.put_single("numericoid", "2.5.6.6");
        attrs
    }

    #[test]
    fn test_lookup_root_yields_container() {
        let manager = manager();
        let container = manager.object_classes();
        assert_eq!(
            container.lookup(&SchemaName::root()).unwrap(),
            Resolved::Root
        );
    }

    #[test]
    fn test_lookup_missing_name_fails() {
        let manager = manager();
        let container = manager.object_classes();
        let result = container.lookup(&"cn=ghost".into());
        assert!(matches!(result, Err(SchemaNamingError::NotFound { .. })));
    }

    #[test]
    fn test_get_attributes_on_root_rejected() {
        let manager = manager();
        let container = manager.object_classes();
        let result = container.get_attributes(&SchemaName::root(), None);
        assert!(matches!(
            result,
            Err(SchemaNamingError::NoAttributesAtThisLevel { .. })
        ));
    }

    #[test]
    fn test_modify_attributes_on_root_rejected() {
        let manager = manager();
        let container = manager.object_classes();
        let result = container.modify_attributes(&SchemaName::root(), &[]);
        assert!(matches!(
            result,
            Err(SchemaNamingError::NoAttributesAtThisLevel { .. })
        ));
    }

    #[test]
    fn test_create_without_attrs_unsupported_even_for_existing_name() {
        let manager = manager();
        let container = manager.object_classes();
        container
            .create_subcontext(&"cn=person".into(), Some(object_class_attrs()))
            .unwrap();

        let result = container.create_subcontext(&"cn=person".into(), None);
        assert!(matches!(
            result,
            Err(SchemaNamingError::UnsupportedOperation { .. })
        ));
    }

    #[test]
    fn test_create_on_root_rejected() {
        let manager = manager();
        let container = manager.object_classes();
        let result = container.create_subcontext(&SchemaName::root(), Some(object_class_attrs()));
        assert!(matches!(
            result,
            Err(SchemaNamingError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_list_on_leaf_is_empty() {
        let manager = manager();
        let container = manager.object_classes();
        container
            .create_subcontext(&"cn=person".into(), Some(object_class_attrs()))
            .unwrap();

        let listed = container.list(&"cn=person".into()).unwrap();
        assert!(listed.is_empty());
    }

    #[test]
    fn test_list_on_missing_name_fails() {
        let manager = manager();
        let container = manager.object_classes();
        let result = container.list(&"cn=ghost".into());
        assert!(matches!(result, Err(SchemaNamingError::NotFound { .. })));
    }

    #[test]
    fn test_list_on_empty_container_is_empty_not_error() {
        let manager = manager();
        let container = manager.object_classes();
        assert!(container.list(&SchemaName::root()).unwrap().is_empty());
        assert!(
            container
                .list_bindings(&SchemaName::root())
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_containers_are_isolated_per_kind() {
        let manager = manager();
        manager
            .object_classes()
            .create_subcontext(&"cn=person".into(), Some(object_class_attrs()))
            .unwrap();

        let result = manager.syntaxes().lookup(&"cn=person".into());
        assert!(matches!(result, Err(SchemaNamingError::NotFound { .. })));
    }

    #[test]
    fn test_container_path_follows_kind() {
        let manager = manager();
        assert_eq!(manager.object_classes().path(), "ClassDefinition");
        assert_eq!(manager.attribute_types().path(), "AttributeDefinition");
        assert_eq!(manager.matching_rules().path(), "MatchingRule");
        assert_eq!(manager.syntaxes().path(), "SyntaxDefinition");
    }
}
