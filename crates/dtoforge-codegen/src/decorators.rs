//! Decorator resolution for generated properties.
//!
//! The decorator sequence is a total function of the field descriptor and
//! the swagger flag. Position 0 is always the presence decorator; downstream
//! emitters rely on that for reproducible output.

use dtoforge_core::{FieldDescriptor, FieldKind};
use serde_json::Value;

/// One decorator applied to a generated property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decorator {
    pub name: String,
    pub arguments: Vec<String>,
}

impl Decorator {
    fn bare(name: &str) -> Self {
        Self {
            name: name.to_string(),
            arguments: Vec::new(),
        }
    }

    fn with_args(name: &str, arguments: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            arguments,
        }
    }

    /// Render as a TypeScript decorator line, e.g. `@IsInt()`.
    pub fn render(&self) -> String {
        format!("@{}({})", self.name, self.arguments.join(", "))
    }

    /// Whether this decorator is imported from class-validator.
    pub fn is_validator(&self) -> bool {
        self.name != "ApiProperty"
    }
}

/// Resolve the ordered decorator sequence for a field.
pub fn decorators_for(field: &FieldDescriptor, swagger: bool) -> Vec<Decorator> {
    let presence = if field.is_required {
        "IsDefined"
    } else {
        "IsOptional"
    };
    let mut decorators = vec![Decorator::bare(presence)];

    if !field.is_relation() {
        if let Some(name) = type_validator(&field.field_type) {
            decorators.push(Decorator::bare(name));
        }
    }

    if field.kind == FieldKind::Enum {
        decorators.push(Decorator::with_args(
            "IsIn",
            vec![format!("getEnumValues({})", field.field_type)],
        ));
    }

    if swagger {
        decorators.push(api_property(field));
    }

    decorators
}

/// Validator decorator for a primitive type, if one exists.
fn type_validator(field_type: &str) -> Option<&'static str> {
    match field_type {
        "Int" => Some("IsInt"),
        "Float" => Some("IsNumber"),
        "DateTime" => Some("IsDate"),
        "String" => Some("IsString"),
        "Boolean" => Some("IsBoolean"),
        _ => None,
    }
}

/// Build the `ApiProperty` documentation decorator.
///
/// Key order is fixed: `required`, `isArray`, `type`, `format`, `example`.
/// `required: true` and `isArray: false` are swagger defaults and omitted.
fn api_property(field: &FieldDescriptor) -> Decorator {
    let mut entries = Vec::new();

    if !field.is_required {
        entries.push("required: false".to_string());
    }
    if field.is_list {
        entries.push("isArray: true".to_string());
    }

    if field.is_relation() {
        entries.push(format!("type: () => {}", field.field_type));
    } else if let Some(wire) = wire_type(field) {
        entries.push(format!("type: \"{wire}\""));
        if field.field_type == "DateTime" {
            entries.push("format: \"date-time\"".to_string());
        }
        if let Some(example) = field.default.as_ref().and_then(literal_example) {
            entries.push(format!("example: {example}"));
        }
    }

    if entries.is_empty() {
        Decorator::bare("ApiProperty")
    } else {
        Decorator::with_args("ApiProperty", vec![format!("{{ {} }}", entries.join(", "))])
    }
}

/// Wire type tag for primitive and enum fields.
fn wire_type(field: &FieldDescriptor) -> Option<&'static str> {
    if field.kind == FieldKind::Enum {
        return Some("string");
    }
    match field.field_type.as_str() {
        "Int" => Some("integer"),
        "Float" => Some("number"),
        "String" => Some("string"),
        "Boolean" => Some("boolean"),
        "DateTime" => Some("string"),
        _ => None,
    }
}

/// Render a schema default as an example literal.
///
/// Object defaults are provider calls (`autoincrement()`, `now()`); they do
/// not document as examples.
fn literal_example(value: &Value) -> Option<String> {
    match value {
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(format!("\"{s}\"")),
        _ => None,
    }
}
