//! Error types for schema naming operations.
//!
//! Every failure the adapter can surface is one of the kinds below. Errors
//! are reported synchronously to the immediate caller and carry the
//! offending name or path; nothing is retried or downgraded inside this
//! crate.

use crate::schema::ElementKind;

/// Main error type for schema naming operations.
///
/// Covers both resolution failures against a container and the fixed
/// rejections for naming operations that have no schema-store equivalent.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SchemaNamingError {
    /// Resolution of a name against a container found no such element.
    #[error("No such schema element: '{name}'")]
    NotFound { name: String },

    /// Create was called with a name already present in the container.
    #[error("Schema element already exists: '{name}'")]
    AlreadyExists { name: String },

    /// Create was called with an attribute set insufficient to define an
    /// element of the container's kind.
    #[error("Invalid {kind} definition: {message}")]
    InvalidDefinition { kind: ElementKind, message: String },

    /// An attribute operation targeted the container itself, which carries
    /// no attributes.
    #[error("No attributes for {path}")]
    NoAttributesAtThisLevel { path: String },

    /// The operation has no meaningful schema-store equivalent and is
    /// rejected uniformly (rename, rebind, lookupLink, attribute-less
    /// createSubcontext).
    #[error("Operation '{operation}' is not supported in a schema tree")]
    UnsupportedOperation { operation: String },

    /// Bind was called with an object that exposes no attribute set.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl SchemaNamingError {
    /// Create a not-found error for the given element name.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Create an already-exists error for the given element name.
    pub fn already_exists(name: impl Into<String>) -> Self {
        Self::AlreadyExists { name: name.into() }
    }

    /// Create an invalid-definition error for the given element kind.
    pub fn invalid_definition(kind: ElementKind, message: impl Into<String>) -> Self {
        Self::InvalidDefinition {
            kind,
            message: message.into(),
        }
    }

    /// Create a no-attributes error for the given container path.
    pub fn no_attributes(path: impl Into<String>) -> Self {
        Self::NoAttributesAtThisLevel { path: path.into() }
    }

    /// Create an unsupported-operation error.
    pub fn unsupported(operation: impl Into<String>) -> Self {
        Self::UnsupportedOperation {
            operation: operation.into(),
        }
    }

    /// Create an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

/// Result type alias for schema naming operations.
pub type SchemaNamingResult<T> = Result<T, SchemaNamingError>;
