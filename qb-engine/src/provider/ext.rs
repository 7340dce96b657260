use std::sync::Arc;

use super::{SharedProvider, combinators};
use crate::{Error, Result};

/// Bulk helpers over a provider's `next` chain.
pub trait SequenceExt<T> {
    /// Build every element of a finite sequence, in order.
    ///
    /// Fails with [`Error::Unbounded`] for providers that are not known to
    /// terminate; bound them with [`limit`](SequenceExt::limit) first.
    fn build_all(&self) -> Result<Vec<T>>;

    /// Build the first `n` elements.
    ///
    /// Returns fewer than `n` values if the chain ends early; the result is
    /// never padded.
    fn build_n(&self, n: usize) -> Result<Vec<T>>;

    /// A provider whose chain stops after `n` elements.
    fn limit(&self, n: usize) -> SharedProvider<T>;

    /// Iterate the chain, building each element lazily.
    fn iter(&self) -> Iter<T>;
}

impl<T: 'static> SequenceExt<T> for SharedProvider<T> {
    fn build_all(&self) -> Result<Vec<T>> {
        if !self.is_finite() {
            return Err(Error::Unbounded);
        }
        self.iter().collect()
    }

    fn build_n(&self, n: usize) -> Result<Vec<T>> {
        self.iter().take(n).collect()
    }

    fn limit(&self, n: usize) -> SharedProvider<T> {
        combinators::limit(Arc::clone(self), n)
    }

    fn iter(&self) -> Iter<T> {
        Iter {
            current: Some(Arc::clone(self)),
        }
    }
}

/// Iterator over a provider chain. Stops after the first error.
pub struct Iter<T> {
    current: Option<SharedProvider<T>>,
}

impl<T> Iterator for Iter<T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let provider = self.current.take()?;
        if provider.is_exhausted() {
            return None;
        }
        match provider.build() {
            Ok(value) => {
                self.current = provider.next();
                Some(Ok(value))
            }
            Err(err) => Some(Err(err)),
        }
    }
}

impl<T> std::iter::FusedIterator for Iter<T> {}
