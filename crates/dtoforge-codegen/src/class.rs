//! Class emission and the relation-split strategy.
//!
//! With relation splitting disabled every model becomes a single `<Model>`
//! class over all of its fields. Enabled, the fields partition on relation
//! linkage into `<Model>Base` (scalars), `<Model>Relations` (omitted when no
//! relation fields exist) and a combined `<Model>` class extending the base
//! and re-declaring the relation fields.

use std::path::PathBuf;

use dtoforge_core::{FieldDescriptor, GeneratorConfig, ModelDescriptor, SchemaDescription};

use crate::decorators::{self, Decorator};
use crate::error::{CodegenError, Result};
use crate::imports;
use crate::inject;
use crate::output::OutputSet;
use crate::ts::{TsFile, TsImport, TsProperty};
use crate::types;

/// Emit the class file set for one model.
pub fn generate_model(
    out: &mut OutputSet,
    schema: &SchemaDescription,
    config: &GeneratorConfig,
    model: &ModelDescriptor,
) -> Result<()> {
    for field in &model.fields {
        if !field.kind_matches_relation() {
            return Err(CodegenError::InvalidFieldKind {
                model: model.name.clone(),
                field: field.name.clone(),
            });
        }
    }

    let injected = inject::count_field(schema, model)?;

    if config.separate_relation_fields {
        generate_split_classes(out, config, model, injected.as_ref())
    } else {
        generate_single_class(out, config, model, injected.as_ref())
    }
}

fn generate_single_class(
    out: &mut OutputSet,
    config: &GeneratorConfig,
    model: &ModelDescriptor,
    injected: Option<&FieldDescriptor>,
) -> Result<()> {
    let fields: Vec<&FieldDescriptor> = model.fields.iter().chain(injected).collect();

    let mut file = TsFile::new();
    for import in imports::resolve(&model.name, &fields, config.swagger) {
        file.add_import(import);
    }
    file.add_class(&model.name, None, &properties(&model.name, &fields, config)?);

    out.register(model_path(config, &model.name), file.render());
    Ok(())
}

fn generate_split_classes(
    out: &mut OutputSet,
    config: &GeneratorConfig,
    model: &ModelDescriptor,
    injected: Option<&FieldDescriptor>,
) -> Result<()> {
    let (mut scalar_fields, relation_fields): (Vec<&FieldDescriptor>, Vec<&FieldDescriptor>) =
        model.fields.iter().partition(|f| !f.is_relation());
    scalar_fields.extend(injected);

    generate_base_class(out, config, model, &scalar_fields)?;
    if !relation_fields.is_empty() {
        generate_relations_class(out, config, model, &relation_fields)?;
    }
    generate_combined_class(out, config, model, &relation_fields)
}

/// `<Model>Base`: the scalar fields only.
fn generate_base_class(
    out: &mut OutputSet,
    config: &GeneratorConfig,
    model: &ModelDescriptor,
    scalar_fields: &[&FieldDescriptor],
) -> Result<()> {
    let name = format!("{}Base", model.name);

    let mut file = TsFile::new();
    for import in imports::resolve(&model.name, scalar_fields, config.swagger) {
        file.add_import(import);
    }
    file.add_class(&name, None, &properties(&model.name, scalar_fields, config)?);

    out.register(model_path(config, &name), file.render());
    Ok(())
}

/// `<Model>Relations`: the relation fields only.
///
/// A self-relation here imports the combined class from its own file: the
/// base and relations classes have no combined identity yet, and importing
/// through the sibling barrel would close a cycle.
fn generate_relations_class(
    out: &mut OutputSet,
    config: &GeneratorConfig,
    model: &ModelDescriptor,
    relation_fields: &[&FieldDescriptor],
) -> Result<()> {
    let name = format!("{}Relations", model.name);

    let mut file = TsFile::new();
    for import in imports::resolve(&model.name, relation_fields, config.swagger) {
        file.add_import(import);
    }
    if relation_fields.iter().any(|f| f.field_type == model.name) {
        file.add_import(TsImport::new(
            format!("./{}.model", model.name),
            vec![model.name.clone()],
        ));
    }
    file.add_class(&name, None, &properties(&model.name, relation_fields, config)?);

    out.register(model_path(config, &name), file.render());
    Ok(())
}

/// Combined `<Model>` extending `<Model>Base`.
///
/// Relation fields are re-declared with their full decorator sequence even
/// though the relations class already carries them; downstream consumers
/// validate against the combined class alone.
fn generate_combined_class(
    out: &mut OutputSet,
    config: &GeneratorConfig,
    model: &ModelDescriptor,
    relation_fields: &[&FieldDescriptor],
) -> Result<()> {
    let base = format!("{}Base", model.name);

    let mut file = TsFile::new();
    file.add_import(TsImport::new(format!("./{base}.model"), vec![base.clone()]));
    if !relation_fields.is_empty() {
        for import in imports::resolve(&model.name, relation_fields, config.swagger) {
            file.add_import(import);
        }
    }
    file.add_class(
        &model.name,
        Some(&base),
        &properties(&model.name, relation_fields, config)?,
    );

    out.register(model_path(config, &model.name), file.render());
    Ok(())
}

fn properties(
    model: &str,
    fields: &[&FieldDescriptor],
    config: &GeneratorConfig,
) -> Result<Vec<TsProperty>> {
    fields
        .iter()
        .map(|field| {
            Ok(TsProperty {
                name: field.name.clone(),
                ty: types::ts_type(model, field)?,
                optional: !field.is_required,
                nullable: !field.is_required && !field.is_relation(),
                decorators: decorators::decorators_for(field, config.swagger)
                    .iter()
                    .map(Decorator::render)
                    .collect(),
            })
        })
        .collect()
}

fn model_path(config: &GeneratorConfig, class_name: &str) -> PathBuf {
    config
        .output_dir
        .join("models")
        .join(format!("{class_name}.model.ts"))
}
