//! Top-level generation pass.

use dtoforge_core::{GeneratorConfig, SchemaDescription};

use crate::error::Result;
use crate::output::OutputSet;
use crate::{barrel, class, enums, helpers};

/// Generate the full output set for a schema description.
///
/// Pure over its inputs: repeated runs over identical input yield
/// byte-identical units. Models and enums own disjoint output paths, so the
/// emission order carries no meaning beyond determinism.
pub fn generate(schema: &SchemaDescription, config: &GeneratorConfig) -> Result<OutputSet> {
    schema.validate()?;

    let mut out = OutputSet::new();

    for model in &schema.models {
        class::generate_model(&mut out, schema, config, model)?;
    }

    for item in &schema.enums {
        enums::generate_enum(&mut out, config, item);
    }

    let model_names: Vec<String> = schema.models.iter().map(|m| m.name.clone()).collect();
    barrel::generate_barrel(
        &mut out,
        config.output_dir.join("models"),
        &model_names,
        "model",
    );

    if !schema.enums.is_empty() {
        let enum_names: Vec<String> = schema.enums.iter().map(|e| e.name.clone()).collect();
        barrel::generate_barrel(
            &mut out,
            config.output_dir.join("enums"),
            &enum_names,
            "enum",
        );
    }

    helpers::generate_helpers(&mut out, config);

    Ok(out)
}
