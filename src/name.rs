//! Normalized name representation for the schema tree.
//!
//! The adapter resolves names one level at a time: a name is either empty,
//! denoting the container itself, or a single relative segment denoting a
//! contained element. Structured (multi-segment) names are accepted only at
//! the boundary and immediately collapsed to this form; reducing a deep
//! path to repeated single-segment resolution is the caller's job.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{SchemaNamingError, SchemaNamingResult};

/// A normalized schema name: empty (the container itself) or one segment.
///
/// Every naming operation takes a `SchemaName`; there is a single internal
/// resolver code path regardless of how the name arrived at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemaName(String);

impl SchemaName {
    /// The empty name, resolving to the container itself.
    pub fn root() -> Self {
        SchemaName(String::new())
    }

    /// Create a name from a single relative segment or the empty string.
    pub fn new(segment: impl Into<String>) -> Self {
        SchemaName(segment.into())
    }

    /// Accept a structured name at the boundary.
    ///
    /// Zero segments is the empty name; one segment is a relative name.
    /// More than one segment is rejected — multi-segment resolution belongs
    /// to the external name parser, not this adapter.
    pub fn from_segments(segments: &[&str]) -> SchemaNamingResult<Self> {
        match segments {
            [] => Ok(Self::root()),
            [segment] => Ok(Self::new(*segment)),
            _ => Err(SchemaNamingError::invalid_argument(format!(
                "expected at most one name segment, got {}",
                segments.len()
            ))),
        }
    }

    /// Whether this is the empty name, denoting the container itself.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SchemaName {
    fn from(segment: &str) -> Self {
        SchemaName::new(segment)
    }
}

impl From<String> for SchemaName {
    fn from(segment: String) -> Self {
        SchemaName::new(segment)
    }
}

impl fmt::Display for SchemaName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
