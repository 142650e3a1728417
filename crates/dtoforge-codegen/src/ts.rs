//! Minimal TypeScript source construction.
//!
//! Class files are assembled as line vectors and joined once, the same way
//! the framework generators build their output.

/// A named-import declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsImport {
    pub module: String,
    pub names: Vec<String>,
}

impl TsImport {
    /// Create an import of `names` from `module`.
    pub fn new(module: impl Into<String>, names: Vec<String>) -> Self {
        Self {
            module: module.into(),
            names,
        }
    }

    fn render(&self) -> String {
        format!(
            "import {{ {} }} from \"{}\";",
            self.names.join(", "),
            self.module
        )
    }
}

/// One property of a generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsProperty {
    pub name: String,
    pub ty: String,
    /// `?` marker instead of `!`.
    pub optional: bool,
    /// Append ` | null` to the type expression.
    pub nullable: bool,
    /// Pre-rendered decorator lines, e.g. `@IsInt()`.
    pub decorators: Vec<String>,
}

impl TsProperty {
    fn render(&self, lines: &mut Vec<String>) {
        for decorator in &self.decorators {
            lines.push(format!("  {decorator}"));
        }
        let marker = if self.optional { "?" } else { "!" };
        let ty = if self.nullable {
            format!("{} | null", self.ty)
        } else {
            self.ty.clone()
        };
        lines.push(format!("  {}{}: {};", self.name, marker, ty));
    }
}

/// Builder for one TypeScript source file.
#[derive(Debug, Clone, Default)]
pub struct TsFile {
    imports: Vec<TsImport>,
    body: Vec<String>,
}

impl TsFile {
    /// Create an empty source file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import declaration. Imports with no names are dropped.
    pub fn add_import(&mut self, import: TsImport) {
        if !import.names.is_empty() {
            self.imports.push(import);
        }
    }

    /// Append a raw body line.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.body.push(line.into());
    }

    /// Append an exported class declaration.
    pub fn add_class(&mut self, name: &str, extends: Option<&str>, properties: &[TsProperty]) {
        let heritage = match extends {
            Some(base) => format!(" extends {base}"),
            None => String::new(),
        };

        if properties.is_empty() {
            self.body.push(format!("export class {name}{heritage} {{}}"));
            return;
        }

        self.body.push(format!("export class {name}{heritage} {{"));
        for (i, property) in properties.iter().enumerate() {
            if i > 0 {
                self.body.push(String::new());
            }
            property.render(&mut self.body);
        }
        self.body.push("}".to_string());
    }

    /// Render the file, trailing newline included.
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = self.imports.iter().map(TsImport::render).collect();
        if !self.imports.is_empty() && !self.body.is_empty() {
            lines.push(String::new());
        }
        lines.extend(self.body.iter().cloned());

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}
