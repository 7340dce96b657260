//! Core types and utilities for quickbuilder.
//!
//! This crate provides the boxed value model shared by the runtime engine
//! and the code generators: primitive kinds, declared property types, the
//! coercion table between them, and a few string and file helpers.

mod file;
mod kind;
mod utils;
mod value;

// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult};
// Declared types
pub use kind::{DeclaredType, PrimitiveKind};
// String utilities
pub use utils::{is_valid_identifier, to_pascal_case, to_snake_case};
// Boxed values
pub use value::{CoercionError, FromValue, ObjectValue, Value};
