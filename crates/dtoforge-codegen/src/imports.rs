//! Import resolution for generated class files.

use dtoforge_core::{FieldDescriptor, FieldKind};
use indexmap::IndexSet;

use crate::decorators;
use crate::ts::TsImport;
use crate::types;

pub const PRISMA_MODULE: &str = "@prisma/client";
pub const VALIDATOR_MODULE: &str = "class-validator";
pub const SWAGGER_MODULE: &str = "@nestjs/swagger";
pub const SIBLING_MODULE: &str = "./";
pub const HELPERS_MODULE: &str = "../helpers";
pub const ENUMS_MODULE: &str = "../enums";

/// Compute the ordered import groups for a class over `fields`.
///
/// Group order is fixed: library types, validator names, documentation,
/// relation targets, enum helper, enum names. Within a group, names keep
/// first-encountered order and are deduplicated. A relation back to `model`
/// itself is skipped here; the surrounding scope resolves self-references
/// (see the split strategy).
pub fn resolve(model: &str, fields: &[&FieldDescriptor], swagger: bool) -> Vec<TsImport> {
    let mut imports = Vec::new();

    if fields.iter().any(|f| types::uses_prisma(f)) {
        imports.push(TsImport::new(PRISMA_MODULE, vec!["Prisma".to_string()]));
    }

    let mut validator_names: IndexSet<String> = IndexSet::new();
    for field in fields {
        for decorator in decorators::decorators_for(field, false) {
            if decorator.is_validator() {
                validator_names.insert(decorator.name);
            }
        }
    }
    imports.push(TsImport::new(
        VALIDATOR_MODULE,
        validator_names.into_iter().collect(),
    ));

    if swagger && !fields.is_empty() {
        imports.push(TsImport::new(
            SWAGGER_MODULE,
            vec!["ApiProperty".to_string()],
        ));
    }

    let mut relation_targets: IndexSet<String> = IndexSet::new();
    for field in fields {
        if field.is_relation() && field.field_type != model {
            relation_targets.insert(field.field_type.clone());
        }
    }
    if !relation_targets.is_empty() {
        imports.push(TsImport::new(
            SIBLING_MODULE,
            relation_targets.into_iter().collect(),
        ));
    }

    if fields.iter().any(|f| f.kind == FieldKind::Enum) {
        imports.push(TsImport::new(
            HELPERS_MODULE,
            vec!["getEnumValues".to_string()],
        ));
    }

    let mut enum_names: IndexSet<String> = IndexSet::new();
    for field in fields.iter().filter(|f| f.kind == FieldKind::Enum) {
        enum_names.insert(field.field_type.clone());
    }
    if !enum_names.is_empty() {
        imports.push(TsImport::new(
            ENUMS_MODULE,
            enum_names.into_iter().collect(),
        ));
    }

    imports
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_order() {
        let fields = vec![
            FieldDescriptor::scalar("amount", "Decimal"),
            FieldDescriptor::enumeration("role", "Role"),
            FieldDescriptor::relation("posts", "Post", "PostToUser").list(),
        ];
        let refs: Vec<&FieldDescriptor> = fields.iter().collect();

        let imports = resolve("User", &refs, true);
        let modules: Vec<&str> = imports.iter().map(|i| i.module.as_str()).collect();
        assert_eq!(
            modules,
            vec![
                PRISMA_MODULE,
                VALIDATOR_MODULE,
                SWAGGER_MODULE,
                SIBLING_MODULE,
                HELPERS_MODULE,
                ENUMS_MODULE,
            ]
        );
    }

    #[test]
    fn test_validator_names_first_encounter_order() {
        let fields = vec![
            FieldDescriptor::scalar("id", "Int"),
            FieldDescriptor::scalar("name", "String").optional(),
        ];
        let refs: Vec<&FieldDescriptor> = fields.iter().collect();

        let imports = resolve("User", &refs, false);
        assert_eq!(
            imports[0].names,
            vec!["IsDefined", "IsInt", "IsOptional", "IsString"]
        );
    }

    #[test]
    fn test_self_relation_is_skipped() {
        let fields = vec![
            FieldDescriptor::relation("mentor", "User", "Mentorship").optional(),
            FieldDescriptor::relation("posts", "Post", "PostToUser").list(),
        ];
        let refs: Vec<&FieldDescriptor> = fields.iter().collect();

        let imports = resolve("User", &refs, false);
        let sibling = imports
            .iter()
            .find(|i| i.module == SIBLING_MODULE)
            .unwrap();
        assert_eq!(sibling.names, vec!["Post"]);
    }

    #[test]
    fn test_enum_names_are_deduplicated() {
        let fields = vec![
            FieldDescriptor::enumeration("role", "Role"),
            FieldDescriptor::enumeration("backupRole", "Role").optional(),
            FieldDescriptor::enumeration("status", "Status"),
        ];
        let refs: Vec<&FieldDescriptor> = fields.iter().collect();

        let imports = resolve("User", &refs, false);
        let enums = imports.iter().find(|i| i.module == ENUMS_MODULE).unwrap();
        assert_eq!(enums.names, vec!["Role", "Status"]);
    }
}
