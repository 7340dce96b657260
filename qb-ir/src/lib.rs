//! Intermediate representation of builder contracts.
//!
//! This crate provides the type definitions shared by the runtime engine and
//! the code generators: property descriptors, the ordered property set that
//! de-duplicates them, and the builder contracts that group them.
//!
//! # Architecture
//!
//! ```text
//! quickbuilder.toml → qb-manifest (parsing) → qb-ir (contracts) → engine / codegen
//! ```
//!
//! The IR is language-agnostic: declared types are kept as
//! [`DeclaredType`](quickbuilder_core::DeclaredType) values and only mapped
//! to concrete Rust types by the generators.

mod contract;
mod error;
mod module;
mod property;

pub use contract::BuilderContract;
pub use error::{Error, Result};
pub use module::{ModuleIR, ModuleMeta};
pub use property::{PropertyDescriptor, PropertySet};
