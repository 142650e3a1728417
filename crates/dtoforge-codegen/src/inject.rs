//! Aggregate-count field injection.

use dtoforge_core::{FieldDescriptor, ModelDescriptor, SchemaDescription, AGGREGATE_COUNT};

use crate::error::{CodegenError, Result};

/// Name of the synthesized counts field.
pub const COUNT_FIELD: &str = "_count";

/// Synthesize the related-record counts field for `model`, when the schema
/// exposes aggregate-count output for it.
///
/// The field is scalar, always required and read-only; its declared type is
/// an inline object literal over the countable relation names, so it needs
/// no import and never takes part in relation splitting.
pub fn count_field(
    schema: &SchemaDescription,
    model: &ModelDescriptor,
) -> Result<Option<FieldDescriptor>> {
    if !schema.capabilities.contains(AGGREGATE_COUNT) || !model.has_list_relations() {
        return Ok(None);
    }

    let counted = schema
        .count_outputs
        .get(&model.name)
        .ok_or_else(|| CodegenError::MissingCountOutput {
            model: model.name.clone(),
        })?;

    let members: Vec<String> = counted.iter().map(|name| format!("{name}: number")).collect();
    let literal = format!("{{ {} }}", members.join("; "));

    Ok(Some(FieldDescriptor::scalar(COUNT_FIELD, literal).read_only()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dtoforge_core::FieldKind;

    fn user_model() -> ModelDescriptor {
        ModelDescriptor::new(
            "User",
            vec![
                FieldDescriptor::scalar("id", "Int"),
                FieldDescriptor::relation("posts", "Post", "PostToUser").list(),
            ],
        )
    }

    #[test]
    fn test_no_capability_no_injection() {
        let schema = SchemaDescription {
            models: vec![user_model()],
            ..Default::default()
        };
        assert!(count_field(&schema, &schema.models[0]).unwrap().is_none());
    }

    #[test]
    fn test_no_list_relations_no_injection() {
        let model = ModelDescriptor::new("Profile", vec![FieldDescriptor::scalar("id", "Int")]);
        let schema = SchemaDescription {
            models: vec![model],
            capabilities: [AGGREGATE_COUNT.to_string()].into(),
            ..Default::default()
        };
        assert!(count_field(&schema, &schema.models[0]).unwrap().is_none());
    }

    #[test]
    fn test_missing_lookup_is_fatal() {
        let schema = SchemaDescription {
            models: vec![user_model()],
            capabilities: [AGGREGATE_COUNT.to_string()].into(),
            ..Default::default()
        };

        let err = count_field(&schema, &schema.models[0]).unwrap_err();
        assert!(matches!(err, CodegenError::MissingCountOutput { .. }));
    }

    #[test]
    fn test_injected_field_shape() {
        let schema = SchemaDescription {
            models: vec![user_model()],
            capabilities: [AGGREGATE_COUNT.to_string()].into(),
            count_outputs: [(
                "User".to_string(),
                vec!["posts".to_string(), "followers".to_string()],
            )]
            .into(),
            ..Default::default()
        };

        let field = count_field(&schema, &schema.models[0]).unwrap().unwrap();
        assert_eq!(field.name, COUNT_FIELD);
        assert_eq!(field.field_type, "{ posts: number; followers: number }");
        assert_eq!(field.kind, FieldKind::Scalar);
        assert!(field.is_required);
        assert!(field.is_read_only);
        assert!(!field.is_relation());
    }
}
