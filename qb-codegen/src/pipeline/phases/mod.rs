//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - runs lints over the manifest
//! - [`LowerPhase`] - transforms the manifest into a `ModuleIR`

mod lower;
mod validate;

pub use lower::{LowerPhase, lower_manifest};
pub use validate::{
    BuilderNamingLint, DuplicateTargetLint, EmptyDescriptionLint, Lint, LintInfo,
    MissingConstructorLint, ValidatePhase,
};
