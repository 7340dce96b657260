//! Value providers and runtime builder synthesis.
//!
//! Two halves:
//!
//! - [`provider`]: lazy suppliers of values ([`constant`], [`elements`],
//!   [`integers_from`], [`the_same`], ...) and the [`SequenceExt`] helpers
//!   that walk their `next` chains.
//! - [`BuilderType`] / [`Builder`]: immutable fluent builders synthesized
//!   from a [`BuilderContract`](quickbuilder_ir::BuilderContract) and a
//!   [`BuiltType`] description.
//!
//! Builders generated by `qb generate` depend only on the provider half.

mod builder;
mod built;
mod error;
pub mod provider;

pub use builder::{Builder, BuilderType, Generator, Hook, Slots};
pub use built::BuiltType;
pub use error::{Error, Result};
pub use provider::{
    Composed, Constant, ElementSequence, IntegersFrom, Iter, Limit, Mapped, Provider, Repeat,
    SequenceExt, SharedProvider, StoredValue, TheSame, as_string, compose, constant, elements,
    integers_from, limit, map, null_value, once, repeat, the_same,
};
// Re-exported for generated code and hooks.
pub use quickbuilder_core::{FromValue, Value};
