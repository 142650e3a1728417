//! Schema descriptors supplied by the schema provider.
//!
//! The descriptors mirror the provider's wire shape (camelCase JSON) and are
//! immutable for the duration of a run.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::errors::SchemaError;

/// Capability name the provider sets when aggregate-count outputs exist.
pub const AGGREGATE_COUNT: &str = "aggregateCount";

/// Field kind as reported by the schema provider.
///
/// Relations are reported as `object`; the relation linkage itself lives in
/// [`FieldDescriptor::relation_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Scalar,
    Enum,
    Object,
}

/// Structural metadata for one model attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub name: String,
    /// Scalar type name, or the referenced model/enum name.
    #[serde(rename = "type")]
    pub field_type: String,
    pub kind: FieldKind,
    pub is_required: bool,
    #[serde(default)]
    pub is_list: bool,
    /// Present iff the field references another model.
    #[serde(default)]
    pub relation_name: Option<String>,
    #[serde(default)]
    pub is_read_only: bool,
    /// Default value literal, when the schema declares one.
    #[serde(default)]
    pub default: Option<serde_json::Value>,
}

impl FieldDescriptor {
    /// Descriptor for a required scalar field.
    pub fn scalar(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            kind: FieldKind::Scalar,
            is_required: true,
            is_list: false,
            relation_name: None,
            is_read_only: false,
            default: None,
        }
    }

    /// Descriptor for a required enum field.
    pub fn enumeration(name: impl Into<String>, enum_name: impl Into<String>) -> Self {
        Self {
            kind: FieldKind::Enum,
            ..Self::scalar(name, enum_name)
        }
    }

    /// Descriptor for a required relation field.
    pub fn relation(
        name: impl Into<String>,
        target: impl Into<String>,
        relation_name: impl Into<String>,
    ) -> Self {
        Self {
            kind: FieldKind::Object,
            relation_name: Some(relation_name.into()),
            ..Self::scalar(name, target)
        }
    }

    /// Mark the field optional.
    pub fn optional(mut self) -> Self {
        self.is_required = false;
        self
    }

    /// Mark the field a list.
    pub fn list(mut self) -> Self {
        self.is_list = true;
        self
    }

    /// Mark the field read-only.
    pub fn read_only(mut self) -> Self {
        self.is_read_only = true;
        self
    }

    /// Attach a default value literal.
    pub fn with_default(mut self, value: serde_json::Value) -> Self {
        self.default = Some(value);
        self
    }

    /// Whether this field references another model instance/collection.
    pub fn is_relation(&self) -> bool {
        self.relation_name.is_some()
    }

    /// Whether the reported kind agrees with the relation linkage.
    pub fn kind_matches_relation(&self) -> bool {
        self.is_relation() == (self.kind == FieldKind::Object)
    }
}

/// Ordered field descriptors representing one persisted entity type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
}

impl ModelDescriptor {
    /// Create a model descriptor.
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Whether the model owns at least one list relation.
    pub fn has_list_relations(&self) -> bool {
        self.fields.iter().any(|f| f.is_relation() && f.is_list)
    }
}

/// A named enum and its ordered member names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDescriptor {
    pub name: String,
    pub values: Vec<String>,
}

impl EnumDescriptor {
    /// Create an enum descriptor.
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// The full schema description for one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDescription {
    pub models: Vec<ModelDescriptor>,
    #[serde(default)]
    pub enums: Vec<EnumDescriptor>,
    /// Capabilities the provider enabled for this run.
    #[serde(default)]
    pub capabilities: BTreeSet<String>,
    /// Relation field names exposed by each model's aggregate-count output.
    #[serde(default)]
    pub count_outputs: BTreeMap<String, Vec<String>>,
}

impl SchemaDescription {
    /// Check provider-shape invariants that deserialization cannot express.
    pub fn validate(&self) -> Result<(), SchemaError> {
        for model in &self.models {
            let mut seen = BTreeSet::new();
            for field in &model.fields {
                if !seen.insert(field.name.as_str()) {
                    return Err(SchemaError::DuplicateField {
                        model: model.name.clone(),
                        field: field.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_descriptor() {
        let json = r#"{
            "name": "author",
            "type": "User",
            "kind": "object",
            "isRequired": false,
            "relationName": "PostToUser"
        }"#;

        let field: FieldDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(field.name, "author");
        assert_eq!(field.field_type, "User");
        assert_eq!(field.kind, FieldKind::Object);
        assert!(!field.is_required);
        assert!(!field.is_list);
        assert!(field.is_relation());
        assert!(field.kind_matches_relation());
    }

    #[test]
    fn test_kind_relation_mismatch() {
        let mut field = FieldDescriptor::scalar("author", "User");
        field.relation_name = Some("PostToUser".to_string());
        assert!(!field.kind_matches_relation());

        let mut field = FieldDescriptor::relation("author", "User", "PostToUser");
        field.relation_name = None;
        assert!(!field.kind_matches_relation());
    }

    #[test]
    fn test_validate_rejects_duplicate_fields() {
        let schema = SchemaDescription {
            models: vec![ModelDescriptor::new(
                "User",
                vec![
                    FieldDescriptor::scalar("id", "Int"),
                    FieldDescriptor::scalar("id", "String"),
                ],
            )],
            ..Default::default()
        };

        let err = schema.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate field id"));
    }

    #[test]
    fn test_has_list_relations() {
        let model = ModelDescriptor::new(
            "User",
            vec![
                FieldDescriptor::scalar("id", "Int"),
                FieldDescriptor::relation("posts", "Post", "PostToUser").list(),
            ],
        );
        assert!(model.has_list_relations());

        let model = ModelDescriptor::new(
            "Profile",
            vec![FieldDescriptor::relation("user", "User", "ProfileToUser")],
        );
        assert!(!model.has_list_relations());
    }
}
