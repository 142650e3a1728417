//! Field type mapping to TypeScript type expressions.

use dtoforge_core::FieldDescriptor;

use crate::error::{CodegenError, Result};

/// Map a field descriptor to its TypeScript type expression.
///
/// Known scalar names map to their TypeScript equivalents; any other declared
/// type (an enum or model name) passes through unchanged. List fields get an
/// array marker unless the mapped expression already carries one.
pub fn ts_type(model: &str, field: &FieldDescriptor) -> Result<String> {
    if field.field_type.is_empty() {
        return Err(CodegenError::InvalidFieldKind {
            model: model.to_string(),
            field: field.name.clone(),
        });
    }

    let mapped = match field.field_type.as_str() {
        "Int" | "Float" => "number".to_string(),
        "DateTime" => "Date".to_string(),
        "String" => "string".to_string(),
        "Boolean" => "boolean".to_string(),
        "Decimal" => "Prisma.Decimal".to_string(),
        "Json" => "Prisma.JsonValue".to_string(),
        "Bytes" => "Uint8Array".to_string(),
        other => other.to_string(),
    };

    if field.is_list && !mapped.ends_with("[]") {
        return Ok(format!("{mapped}[]"));
    }
    Ok(mapped)
}

/// Whether the field's type lives in the `@prisma/client` namespace.
pub fn uses_prisma(field: &FieldDescriptor) -> bool {
    matches!(field.field_type.as_str(), "Decimal" | "Json")
}
