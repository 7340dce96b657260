//! Core operations.
//!
//! The business logic of `qb` commands, separated from argument parsing and
//! report rendering.

pub mod check;
pub mod generate;
pub mod list;

pub use check::check;
pub use generate::{GenerateOptions, generate};
pub use list::list;
