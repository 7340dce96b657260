//! Value providers: lazy, pull-based suppliers of one value with an
//! optional successor for sequential use.
//!
//! Providers are immutable and shared behind [`Arc`]; advancing a sequence
//! returns a new provider instead of changing the current one. The only
//! exception is [`TheSame`], which memoizes its first value.
//!
//! ```
//! use quickbuilder_engine::{SequenceExt, as_string, integers_from};
//!
//! let labels = as_string(integers_from(1)).build_n(3).unwrap();
//! assert_eq!(labels, vec!["1", "2", "3"]);
//! ```

mod cached;
mod combinators;
mod ext;
mod sequence;
mod value;

use std::sync::Arc;

use crate::Result;

pub use cached::{TheSame, the_same};
pub use combinators::{
    Composed, Limit, Mapped, Repeat, as_string, compose, limit, map, repeat,
};
pub use ext::{Iter, SequenceExt};
pub use sequence::{ElementSequence, IntegersFrom, elements, integers_from, once};
pub use value::{Constant, StoredValue, constant, null_value};

/// A lazy supplier of values of type `T`.
pub trait Provider<T>: Send + Sync {
    /// Produce the current value.
    ///
    /// Fails only when no value can be produced, e.g. past the end of a
    /// finite sequence.
    fn build(&self) -> Result<T>;

    /// The provider for the next element, or `None` at the end of the
    /// sequence.
    fn next(self: Arc<Self>) -> Option<SharedProvider<T>>;

    /// Returns true if this provider has no element at all, so `build`
    /// would fail. An empty list or `limit(0)` are exhausted.
    fn is_exhausted(&self) -> bool {
        false
    }

    /// Returns true if following `next` is guaranteed to terminate.
    fn is_finite(&self) -> bool {
        false
    }
}

/// A provider shared behind an [`Arc`].
pub type SharedProvider<T> = Arc<dyn Provider<T>>;
