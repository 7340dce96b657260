//! Rust AST builders for structs, impls and functions.
//!
//! Nodes implement [`Renderable`](quickbuilder_codegen::builder::Renderable)
//! and are rendered through `CodeBuilder`.

mod fns;
mod impls;
mod structs;

pub use fns::{Fn, Param};
pub use impls::Impl;
pub use structs::{Field, Struct};
