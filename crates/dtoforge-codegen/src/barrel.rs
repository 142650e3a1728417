//! Barrel files re-exporting generated declarations.

use std::path::PathBuf;

use crate::output::OutputSet;
use crate::ts::TsFile;

/// Emit `<dir>/index.ts` re-exporting each name from its own file.
///
/// Names are sorted lexicographically for determinism; `suffix` is the file
/// suffix between the name and the extension (`model` or `enum`).
pub fn generate_barrel(out: &mut OutputSet, dir: PathBuf, names: &[String], suffix: &str) {
    let mut sorted: Vec<&String> = names.iter().collect();
    sorted.sort();

    let mut file = TsFile::new();
    for name in sorted {
        file.push_line(format!("export {{ {name} }} from \"./{name}.{suffix}\";"));
    }

    out.register(dir.join("index.ts"), file.render());
}
