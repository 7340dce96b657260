//! Rust code generation for quickbuilder.
//!
//! Turns a [`ModuleIR`](quickbuilder_ir::ModuleIR) into one Rust source file
//! with a concrete builder type per contract. Generated builders depend only
//! on `quickbuilder_engine`'s provider API.

mod generator;
mod rust_file;

pub mod ast;
pub mod files;

pub use ast::{Field, Fn, Impl, Param, Struct};
pub use generator::Generator;
pub use rust_file::{RawCode, RustFile, Use};
