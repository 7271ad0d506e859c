//! Tree-naming adapter over an LDAP schema store.
//!
//! Makes a flat collection of typed schema elements — object classes,
//! attribute types, matching rules, syntaxes — satisfy the full contract of
//! a generic hierarchical naming service, with a fixed legality policy for
//! the operations a schema tree cannot express. Also provides the
//! filter-assertion encoder used to embed `(type, value)` comparison
//! clauses in search filters.
//!
//! # Core Components
//!
//! - [`SchemaManager`] - Owns the per-kind element stores for one session
//! - [`SchemaContainer`](naming::SchemaContainer) - Dispatcher implementing
//!   the naming contract over one container
//! - [`SchemaElementStore`](store::SchemaElementStore) - Capability trait
//!   backing each element kind
//! - [`AttributeValueAssertion`](filter::AttributeValueAssertion) - Filter
//!   assertion with canonical encoding
//!
//! # Quick Start
//!
//! ```rust
//! use ldap_schema_naming::{SchemaManager, naming::DirContext};
//! use ldap_schema_naming::schema::AttributeSet;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = SchemaManager::new();
//! let classes = manager.object_classes();
//!
//! let mut attrs = AttributeSet::new();
//! attrs.put("objectClass", ["top", "objectClassDef"]);
//! attrs.put_single("numericoid", "2.5.6.6");
//! classes.create_subcontext(&"cn=person".into(), Some(attrs))?;
//!
//! let person = classes.lookup(&"cn=person".into())?;
//! assert!(person.element().is_some());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod filter;
pub mod name;
pub mod naming;
pub mod schema;
pub mod store;

// Re-export commonly used types for convenience
pub use error::{SchemaNamingError, SchemaNamingResult};
pub use filter::{AttributeValueAssertion, escape_filter_value};
pub use name::SchemaName;
pub use naming::{Bindable, Binding, DirContext, NamePair, Resolved, SchemaContainer};
pub use schema::{AttributeSet, ElementKind, ModOp, Modification, SchemaElement, SchemaManager};
pub use store::{InMemorySchemaStore, SchemaElementStore};
