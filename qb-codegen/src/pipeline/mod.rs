//! Compilation pipeline for code generation.
//!
//! [`Pipeline`] runs the phases that turn a parsed manifest into the module
//! IR generators consume:
//!
//! - Explicit phase boundaries (validate → lower)
//! - Plugin hooks before and after each phase
//! - Diagnostics collected in one place
//!
//! # Example
//!
//! ```ignore
//! use quickbuilder_codegen::pipeline::Pipeline;
//!
//! let mut ctx = Pipeline::new().run(manifest)?;
//! for diag in ctx.warnings() {
//!     eprintln!("{diag}");
//! }
//! let ir = ctx.take_ir()?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use plugin::Plugin;
pub use runner::Pipeline;
