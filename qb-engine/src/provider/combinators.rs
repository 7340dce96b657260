use std::{fmt::Display, sync::Arc};

use super::{Provider, SharedProvider};
use crate::{Error, Result};

/// Delegates to `inner` for a fixed number of elements.
///
/// The inner provider is not advanced: `repeat(p, n)` yields `p.build()`
/// n times.
pub struct Repeat<T> {
    inner: SharedProvider<T>,
    remaining: usize,
}

impl<T: 'static> Provider<T> for Repeat<T> {
    fn build(&self) -> Result<T> {
        if self.remaining == 0 {
            return Err(Error::Exhausted { provider: "repeat" });
        }
        self.inner.build()
    }

    fn next(self: Arc<Self>) -> Option<SharedProvider<T>> {
        if self.remaining <= 1 {
            return None;
        }
        Some(Arc::new(Repeat {
            inner: Arc::clone(&self.inner),
            remaining: self.remaining - 1,
        }))
    }

    fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    fn is_finite(&self) -> bool {
        true
    }
}

pub fn repeat<T: 'static>(inner: SharedProvider<T>, times: usize) -> SharedProvider<T> {
    Arc::new(Repeat {
        inner,
        remaining: times,
    })
}

/// Concatenation of several sequences.
///
/// Builds from the current part until its chain ends, then moves on to the
/// next part. Parts that are already exhausted are skipped.
pub struct Composed<T> {
    parts: Arc<[SharedProvider<T>]>,
    index: usize,
    current: Option<SharedProvider<T>>,
}

impl<T> Composed<T> {
    fn starting_at(parts: Arc<[SharedProvider<T>]>, from: usize) -> Self {
        let index = (from..parts.len())
            .find(|&i| !parts[i].is_exhausted())
            .unwrap_or(parts.len());
        let current = parts.get(index).cloned();
        Self {
            parts,
            index,
            current,
        }
    }
}

impl<T: 'static> Provider<T> for Composed<T> {
    fn build(&self) -> Result<T> {
        match &self.current {
            Some(current) => current.build(),
            None => Err(Error::Exhausted {
                provider: "composed sequence",
            }),
        }
    }

    fn next(self: Arc<Self>) -> Option<SharedProvider<T>> {
        let current = self.current.clone()?;
        if let Some(successor) = current.next() {
            if !successor.is_exhausted() {
                return Some(Arc::new(Composed {
                    parts: Arc::clone(&self.parts),
                    index: self.index,
                    current: Some(successor),
                }));
            }
        }

        let rest = Composed::starting_at(Arc::clone(&self.parts), self.index + 1);
        if rest.current.is_none() {
            return None;
        }
        Some(Arc::new(rest))
    }

    fn is_exhausted(&self) -> bool {
        self.current.is_none()
    }

    fn is_finite(&self) -> bool {
        let tail_finite = self
            .parts
            .iter()
            .skip(self.index + 1)
            .all(|p| p.is_finite());
        let current_finite = self.current.as_ref().is_none_or(|c| c.is_finite());
        current_finite && tail_finite
    }
}

pub fn compose<T: 'static>(parts: Vec<SharedProvider<T>>) -> SharedProvider<T> {
    Arc::new(Composed::starting_at(parts.into(), 0))
}

/// Applies a function to every value of `inner`.
pub struct Mapped<S, T> {
    inner: SharedProvider<S>,
    f: Arc<dyn Fn(S) -> T + Send + Sync>,
}

impl<S: 'static, T: 'static> Provider<T> for Mapped<S, T> {
    fn build(&self) -> Result<T> {
        self.inner.build().map(|value| (self.f)(value))
    }

    fn next(self: Arc<Self>) -> Option<SharedProvider<T>> {
        let inner = Arc::clone(&self.inner).next()?;
        Some(Arc::new(Mapped {
            inner,
            f: Arc::clone(&self.f),
        }))
    }

    fn is_exhausted(&self) -> bool {
        self.inner.is_exhausted()
    }

    fn is_finite(&self) -> bool {
        self.inner.is_finite()
    }
}

pub fn map<S, T, F>(inner: SharedProvider<S>, f: F) -> SharedProvider<T>
where
    S: 'static,
    T: 'static,
    F: Fn(S) -> T + Send + Sync + 'static,
{
    Arc::new(Mapped {
        inner,
        f: Arc::new(f),
    })
}

/// Render every value of `inner` with [`Display`].
pub fn as_string<T>(inner: SharedProvider<T>) -> SharedProvider<String>
where
    T: Display + 'static,
{
    map(inner, |value: T| value.to_string())
}

/// Cuts the chain of `inner` after a fixed number of elements.
pub struct Limit<T> {
    inner: SharedProvider<T>,
    remaining: usize,
}

impl<T: 'static> Provider<T> for Limit<T> {
    fn build(&self) -> Result<T> {
        if self.remaining == 0 {
            return Err(Error::Exhausted { provider: "limit" });
        }
        self.inner.build()
    }

    fn next(self: Arc<Self>) -> Option<SharedProvider<T>> {
        if self.remaining <= 1 {
            return None;
        }
        let inner = Arc::clone(&self.inner).next()?;
        Some(Arc::new(Limit {
            inner,
            remaining: self.remaining - 1,
        }))
    }

    fn is_exhausted(&self) -> bool {
        self.remaining == 0 || self.inner.is_exhausted()
    }

    fn is_finite(&self) -> bool {
        true
    }
}

pub fn limit<T: 'static>(inner: SharedProvider<T>, n: usize) -> SharedProvider<T> {
    Arc::new(Limit {
        inner,
        remaining: n,
    })
}
