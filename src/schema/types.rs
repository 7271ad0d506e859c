//! Core data model for schema elements.
//!
//! This module contains the fundamental data structures of the adapter: the
//! fixed set of schema element kinds, the attribute set carried by every
//! element definition, modification descriptors for attribute updates, and
//! the schema element itself.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

use crate::error::{SchemaNamingError, SchemaNamingResult};

/// The kind of schema element a container holds.
///
/// A container never mixes kinds; the kind is fixed when the container is
/// created and selects both its path in the naming tree and the attribute
/// ids required to define one of its elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementKind {
    /// Object class definition
    ObjectClass,
    /// Attribute type definition
    AttributeType,
    /// Matching rule definition
    MatchingRule,
    /// Attribute syntax definition
    Syntax,
}

impl ElementKind {
    /// The standard container name for this kind in the schema naming tree.
    pub fn container_path(&self) -> &'static str {
        match self {
            ElementKind::ObjectClass => "ClassDefinition",
            ElementKind::AttributeType => "AttributeDefinition",
            ElementKind::MatchingRule => "MatchingRule",
            ElementKind::Syntax => "SyntaxDefinition",
        }
    }

    /// Attribute ids an attribute set must carry to define an element of
    /// this kind. Ids are in their case-folded form.
    pub fn required_attribute_ids(&self) -> &'static [&'static str] {
        match self {
            ElementKind::ObjectClass => &["objectclass"],
            ElementKind::AttributeType => &["objectclass", "syntax"],
            ElementKind::MatchingRule => &["objectclass", "syntax"],
            ElementKind::Syntax => &["objectclass", "numericoid"],
        }
    }

    /// All element kinds, in container-path order.
    pub fn all() -> [ElementKind; 4] {
        [
            ElementKind::ObjectClass,
            ElementKind::AttributeType,
            ElementKind::MatchingRule,
            ElementKind::Syntax,
        ]
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ElementKind::ObjectClass => "object class",
            ElementKind::AttributeType => "attribute type",
            ElementKind::MatchingRule => "matching rule",
            ElementKind::Syntax => "syntax",
        };
        f.write_str(label)
    }
}

/// The attribute set of one schema element definition.
///
/// Maps an attribute id to one or more string values. Ids are case-folded
/// on insert and lookup — LDAP attribute ids are case-insensitive — so
/// `objectClass` and `objectclass` address the same entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeSet {
    values: HashMap<String, Vec<String>>,
}

impl AttributeSet {
    /// Create an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an attribute with the given values, replacing any previous
    /// values for the same id.
    pub fn put<I, V>(&mut self, id: &str, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.values.insert(
            id.to_ascii_lowercase(),
            values.into_iter().map(Into::into).collect(),
        );
    }

    /// Insert a single-valued attribute.
    pub fn put_single(&mut self, id: &str, value: impl Into<String>) {
        self.put(id, [value.into()]);
    }

    /// The values of an attribute, if present.
    pub fn get(&self, id: &str) -> Option<&[String]> {
        self.values
            .get(&id.to_ascii_lowercase())
            .map(Vec::as_slice)
    }

    /// Remove an attribute, returning its values if it was present.
    pub fn remove(&mut self, id: &str) -> Option<Vec<String>> {
        self.values.remove(&id.to_ascii_lowercase())
    }

    /// Whether the attribute id is present.
    pub fn contains(&self, id: &str) -> bool {
        self.values.contains_key(&id.to_ascii_lowercase())
    }

    /// The case-folded ids in the set, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Iterate over (id, values) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of attributes in the set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the set holds no attributes.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Project the set onto the requested ids.
    ///
    /// Ids not present in the set are silently omitted, matching the
    /// attribute-selection behavior of a directory read.
    pub fn project(&self, ids: &[&str]) -> AttributeSet {
        let mut projected = AttributeSet::new();
        for id in ids {
            if let Some(values) = self.get(id) {
                projected.put(id, values.iter().cloned());
            }
        }
        projected
    }

    /// Build an attribute set from a JSON object.
    ///
    /// Each field must be a string or an array of strings; anything else is
    /// rejected as an invalid argument.
    pub fn from_json(value: &Value) -> SchemaNamingResult<Self> {
        let object = value.as_object().ok_or_else(|| {
            SchemaNamingError::invalid_argument("attribute set must be a JSON object")
        })?;

        let mut attrs = AttributeSet::new();
        for (id, field) in object {
            match field {
                Value::String(s) => attrs.put_single(id, s.clone()),
                Value::Array(items) => {
                    let mut values = Vec::with_capacity(items.len());
                    for item in items {
                        let s = item.as_str().ok_or_else(|| {
                            SchemaNamingError::invalid_argument(format!(
                                "attribute '{}' has a non-string value",
                                id
                            ))
                        })?;
                        values.push(s.to_string());
                    }
                    attrs.put(id, values);
                }
                _ => {
                    return Err(SchemaNamingError::invalid_argument(format!(
                        "attribute '{}' must be a string or array of strings",
                        id
                    )));
                }
            }
        }
        Ok(attrs)
    }
}

/// Modification operator for one entry of a modify-attributes list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModOp {
    /// Append values to the attribute, creating it if absent.
    Add,
    /// Replace the attribute's values; empty values remove the attribute.
    Replace,
    /// Remove the attribute entirely; listed values are ignored.
    Remove,
}

/// One entry of a modify-attributes list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modification {
    /// The operator to apply.
    pub op: ModOp,
    /// The attribute id the modification targets.
    pub id: String,
    /// The values carried by the modification (unused for `Remove`).
    pub values: Vec<String>,
}

impl Modification {
    /// Create an add modification.
    pub fn add<I, V>(id: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self {
            op: ModOp::Add,
            id: id.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a replace modification.
    pub fn replace<I, V>(id: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self {
            op: ModOp::Replace,
            id: id.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a remove modification.
    pub fn remove(id: impl Into<String>) -> Self {
        Self {
            op: ModOp::Remove,
            id: id.into(),
            values: Vec::new(),
        }
    }

    /// Apply this modification to an attribute set.
    ///
    /// Removing an attribute that is not present is an invalid argument;
    /// the caller applies the whole modification list to a scratch copy, so
    /// a failure here leaves the stored element untouched.
    pub fn apply(&self, attrs: &mut AttributeSet) -> SchemaNamingResult<()> {
        match self.op {
            ModOp::Add => {
                let mut values: Vec<String> = attrs.remove(&self.id).unwrap_or_default();
                values.extend(self.values.iter().cloned());
                attrs.put(&self.id, values);
                Ok(())
            }
            ModOp::Replace => {
                if self.values.is_empty() {
                    attrs.remove(&self.id);
                } else {
                    attrs.put(&self.id, self.values.iter().cloned());
                }
                Ok(())
            }
            ModOp::Remove => {
                if attrs.remove(&self.id).is_none() {
                    return Err(SchemaNamingError::invalid_argument(format!(
                        "cannot remove absent attribute '{}'",
                        self.id
                    )));
                }
                Ok(())
            }
        }
    }
}

/// One named, typed schema element.
///
/// Owned by its container: elements are created and destroyed only through
/// the container's store operations, never assembled piecemeal by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaElement {
    name: String,
    kind: ElementKind,
    attrs: AttributeSet,
}

impl SchemaElement {
    /// Assemble an element. Called by store implementations; naming-service
    /// callers obtain elements through container operations instead.
    pub fn new(name: impl Into<String>, kind: ElementKind, attrs: AttributeSet) -> Self {
        Self {
            name: name.into(),
            kind,
            attrs,
        }
    }

    /// The element's name as supplied at creation.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The element's kind.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// The element's attribute set.
    pub fn attrs(&self) -> &AttributeSet {
        &self.attrs
    }

    /// Replace the element's attribute set.
    pub(crate) fn set_attrs(&mut self, attrs: AttributeSet) {
        self.attrs = attrs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_attribute_ids_are_case_folded() {
        let mut attrs = AttributeSet::new();
        attrs.put("objectClass", ["top", "objectClassDef"]);

        assert!(attrs.contains("objectclass"));
        assert!(attrs.contains("OBJECTCLASS"));
        assert_eq!(
            attrs.get("ObjectClass").unwrap(),
            &["top".to_string(), "objectClassDef".to_string()]
        );
    }

    #[test]
    fn test_project_keeps_only_requested_ids() {
        let mut attrs = AttributeSet::new();
        attrs.put_single("numericoid", "2.5.6.6");
        attrs.put_single("desc", "a person");
        attrs.put("objectclass", ["top"]);

        let projected = attrs.project(&["numericoid", "desc", "absent"]);
        assert_eq!(projected.len(), 2);
        assert_eq!(projected.get("numericoid").unwrap(), &["2.5.6.6"]);
        assert!(!projected.contains("objectclass"));
    }

    #[test]
    fn test_from_json_object() {
        let attrs = AttributeSet::from_json(&json!({
            "objectClass": ["top", "objectClassDef"],
            "attrType": "cn",
        }))
        .unwrap();

        assert_eq!(attrs.get("objectclass").unwrap().len(), 2);
        assert_eq!(attrs.get("attrtype").unwrap(), &["cn"]);
    }

    #[test]
    fn test_from_json_rejects_non_string_values() {
        let result = AttributeSet::from_json(&json!({"numericoid": 42}));
        assert!(matches!(
            result,
            Err(SchemaNamingError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_modification_add_extends_values() {
        let mut attrs = AttributeSet::new();
        attrs.put("may", ["sn"]);

        Modification::add("may", ["telephoneNumber"])
            .apply(&mut attrs)
            .unwrap();
        assert_eq!(attrs.get("may").unwrap().len(), 2);
    }

    #[test]
    fn test_modification_replace_with_empty_removes() {
        let mut attrs = AttributeSet::new();
        attrs.put_single("desc", "old");

        Modification::replace("desc", Vec::<String>::new())
            .apply(&mut attrs)
            .unwrap();
        assert!(!attrs.contains("desc"));
    }

    #[test]
    fn test_modification_remove_absent_fails() {
        let mut attrs = AttributeSet::new();
        let result = Modification::remove("desc").apply(&mut attrs);
        assert!(matches!(
            result,
            Err(SchemaNamingError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_required_ids_per_kind() {
        assert_eq!(
            ElementKind::ObjectClass.required_attribute_ids(),
            &["objectclass"]
        );
        assert!(
            ElementKind::AttributeType
                .required_attribute_ids()
                .contains(&"syntax")
        );
        assert!(
            ElementKind::Syntax
                .required_attribute_ids()
                .contains(&"numericoid")
        );
    }
}
