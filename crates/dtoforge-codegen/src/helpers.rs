//! The shared helpers file consumed by enum validators.

use dtoforge_core::GeneratorConfig;

use crate::output::OutputSet;

/// Emit `helpers/index.ts` defining `getEnumValues`.
///
/// The helper works on a plain name-to-value record, so it stays independent
/// of how the output language represents enums at runtime.
pub fn generate_helpers(out: &mut OutputSet, config: &GeneratorConfig) {
    let content = "\
export function getEnumValues<T extends Record<string, string>>(enumType: T): string[] {
  return Object.values(enumType);
}
";

    out.register(
        config.output_dir.join("helpers").join("index.ts"),
        content.to_string(),
    );
}
