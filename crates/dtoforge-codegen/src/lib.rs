//! TypeScript DTO class generation from schema descriptors.
//!
//! This crate turns a schema description into validator-ready TypeScript
//! class sources: one class per model (or a base/relations/combined triple
//! when relation splitting is enabled), one enum per enum descriptor, barrel
//! index files, and the shared helpers file. Emission is a pure function of
//! (schema, config); the only side effect is the final batched write on
//! [`OutputSet`].
//!
//! # Example
//!
//! ```ignore
//! use dtoforge_codegen::generate;
//!
//! let out = generate(&schema, &config)?;
//! out.write()?;
//! ```

pub mod barrel;
pub mod class;
pub mod decorators;
pub mod enums;
pub mod error;
pub mod generate;
pub mod helpers;
pub mod imports;
pub mod inject;
pub mod output;
pub mod ts;
pub mod types;

pub use decorators::{decorators_for, Decorator};
pub use error::{CodegenError, Result};
pub use generate::generate;
pub use output::{GeneratedFile, OutputSet};
pub use ts::{TsFile, TsImport, TsProperty};
