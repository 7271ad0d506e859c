//! In-memory schema element store.
//!
//! A thread-safe implementation of the [`SchemaElementStore`] capability
//! using a HashMap behind an RwLock. Designed for testing, development, and
//! for backing a schema session that is loaded once and mutated in place.
//!
//! Elements are keyed by case-folded name — LDAP names are
//! case-insensitive — while each stored element keeps the spelling it was
//! created with. Mutations take the write lock and are validated before the
//! map is touched, so a failed create or update leaves the store exactly as
//! it was observed before the call.

use log::debug;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{SchemaNamingError, SchemaNamingResult};
use crate::schema::{AttributeSet, ElementKind, SchemaElement};
use crate::store::SchemaElementStore;

/// Thread-safe in-memory store for one kind of schema element.
#[derive(Debug)]
pub struct InMemorySchemaStore {
    kind: ElementKind,
    elements: RwLock<HashMap<String, SchemaElement>>,
}

impl InMemorySchemaStore {
    /// Create an empty store for the given element kind.
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            elements: RwLock::new(HashMap::new()),
        }
    }

    /// Number of elements currently defined.
    pub fn len(&self) -> usize {
        self.read_guard().len()
    }

    /// Whether the store holds no elements.
    pub fn is_empty(&self) -> bool {
        self.read_guard().is_empty()
    }

    /// Check that the attribute set is sufficient to define an element of
    /// this store's kind.
    fn validate_definition(&self, attrs: &AttributeSet) -> SchemaNamingResult<()> {
        if attrs.is_empty() {
            return Err(SchemaNamingError::invalid_definition(
                self.kind,
                "attribute set is empty",
            ));
        }
        for (id, values) in attrs.iter() {
            if values.is_empty() {
                return Err(SchemaNamingError::invalid_definition(
                    self.kind,
                    format!("attribute '{}' has no values", id),
                ));
            }
        }
        for required in self.kind.required_attribute_ids() {
            if !attrs.contains(required) {
                return Err(SchemaNamingError::invalid_definition(
                    self.kind,
                    format!("missing required attribute '{}'", required),
                ));
            }
        }
        Ok(())
    }

    fn read_guard(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, SchemaElement>> {
        // Lock poisoning only happens if a holder panicked; the map itself
        // is never left mid-mutation, so the data is still usable.
        self.elements.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_guard(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, SchemaElement>> {
        self.elements.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl SchemaElementStore for InMemorySchemaStore {
    fn kind(&self) -> ElementKind {
        self.kind
    }

    fn create(&self, name: &str, attrs: AttributeSet) -> SchemaNamingResult<SchemaElement> {
        self.validate_definition(&attrs)?;

        let key = name.to_ascii_lowercase();
        let mut elements = self.write_guard();
        if elements.contains_key(&key) {
            return Err(SchemaNamingError::already_exists(name));
        }

        debug!("creating {} '{}'", self.kind, name);
        let element = SchemaElement::new(name, self.kind, attrs);
        elements.insert(key, element.clone());
        Ok(element)
    }

    fn remove(&self, name: &str) -> SchemaNamingResult<()> {
        let key = name.to_ascii_lowercase();
        let mut elements = self.write_guard();
        match elements.remove(&key) {
            Some(_) => {
                debug!("removed {} '{}'", self.kind, name);
                Ok(())
            }
            None => Err(SchemaNamingError::not_found(name)),
        }
    }

    fn update(&self, name: &str, attrs: AttributeSet) -> SchemaNamingResult<()> {
        let key = name.to_ascii_lowercase();
        let mut elements = self.write_guard();
        match elements.get_mut(&key) {
            Some(element) => {
                debug!("updating attributes of {} '{}'", self.kind, name);
                element.set_attrs(attrs);
                Ok(())
            }
            None => Err(SchemaNamingError::not_found(name)),
        }
    }

    fn resolve(&self, name: &str) -> SchemaNamingResult<SchemaElement> {
        let key = name.to_ascii_lowercase();
        self.read_guard()
            .get(&key)
            .cloned()
            .ok_or_else(|| SchemaNamingError::not_found(name))
    }

    fn list_names(&self) -> Vec<String> {
        self.read_guard()
            .values()
            .map(|element| element.name().to_string())
            .collect()
    }

    fn list_entries(&self) -> Vec<(String, SchemaElement)> {
        self.read_guard()
            .values()
            .map(|element| (element.name().to_string(), element.clone()))
            .collect()
    }
}
