//! Enum emission.

use std::path::PathBuf;

use dtoforge_core::{EnumDescriptor, GeneratorConfig};

use crate::output::OutputSet;
use crate::ts::TsFile;

/// Emit one enum file; every member's value equals its own name.
pub fn generate_enum(out: &mut OutputSet, config: &GeneratorConfig, item: &EnumDescriptor) {
    let mut file = TsFile::new();
    file.push_line(format!("export enum {} {{", item.name));
    for value in &item.values {
        file.push_line(format!("  {value} = \"{value}\","));
    }
    file.push_line("}");

    out.register(enum_path(config, &item.name), file.render());
}

fn enum_path(config: &GeneratorConfig, name: &str) -> PathBuf {
    config
        .output_dir
        .join("enums")
        .join(format!("{name}.enum.ts"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_enum_members_are_self_valued() {
        let mut out = OutputSet::new();
        let config = GeneratorConfig::new("out");
        generate_enum(
            &mut out,
            &config,
            &EnumDescriptor::new("Role", vec!["ADMIN".to_string(), "USER".to_string()]),
        );

        let role = out.get(Path::new("out/enums/Role.enum.ts")).unwrap();
        assert_eq!(
            role,
            "export enum Role {\n  ADMIN = \"ADMIN\",\n  USER = \"USER\",\n}\n"
        );
    }
}
