//! Shared code generation utilities for quickbuilder.
//!
//! This crate provides language-agnostic building blocks and the compilation
//! pipeline used by language-specific generators (e.g.
//! `quickbuilder-codegen-rust`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`naming`] - Naming conventions and reserved word escaping
//! - [`pipeline`] - Manifest compilation (validate → lower)

pub mod builder;
pub mod naming;
pub mod pipeline;

pub use naming::{NamingConvention, RUST_NAMING};
