//! Parsing and validation of `quickbuilder.toml` manifests.
//!
//! A manifest declares a module of builder contracts:
//!
//! ```toml
//! [module]
//! name = "fruit-builders"
//!
//! [[builder]]
//! name = "Fruit"
//! built = "crate::fruit::Fruit"
//!
//! [[builder.property]]
//! name = "name"
//! type = "String"
//! ```
//!
//! Errors carry the manifest source and spans so they render with
//! [`miette`].

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    BuilderDecl, Manifest, ModuleConfig, ParseContext, PropertyDecl, QuickbuilderToml, SetterDecl,
    parse_manifest,
};
