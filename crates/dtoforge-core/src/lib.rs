//! Core types for the dtoforge generator.
//!
//! This crate provides the foundational types used by the codegen and CLI
//! crates:
//! - Schema descriptors (models, fields, enums) as handed over by the
//!   schema provider
//! - Generator configuration
//! - Schema and configuration error types

pub mod config;
pub mod errors;
pub mod schema;

pub use config::*;
pub use errors::*;
pub use schema::*;
