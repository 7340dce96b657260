use std::sync::Arc;

use once_cell::sync::OnceCell;

use super::{Provider, SharedProvider};
use crate::Result;

/// Builds its inner provider once and hands out the cached value after
/// that.
///
/// Concurrent first calls compute the inner value at most once. A failed
/// build is not cached, so the next call tries again.
pub struct TheSame<T> {
    inner: SharedProvider<T>,
    cell: OnceCell<T>,
}

impl<T> TheSame<T> {
    pub fn new(inner: SharedProvider<T>) -> Self {
        Self {
            inner,
            cell: OnceCell::new(),
        }
    }

    /// Returns true once the value has been computed.
    pub fn is_cached(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T> Provider<T> for TheSame<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn build(&self) -> Result<T> {
        self.cell.get_or_try_init(|| self.inner.build()).cloned()
    }

    fn next(self: Arc<Self>) -> Option<SharedProvider<T>> {
        Some(self as SharedProvider<T>)
    }
}

/// Cache the first value `inner` builds.
///
/// Wrap the value in an [`Arc`] to share one instance between every build.
pub fn the_same<T>(inner: SharedProvider<T>) -> SharedProvider<T>
where
    T: Clone + Send + Sync + 'static,
{
    Arc::new(TheSame::new(inner))
}

#[cfg(test)]
mod tests {
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        thread,
    };

    use super::*;
    use crate::{Error, provider::elements};

    struct Counting {
        calls: Arc<AtomicUsize>,
    }

    impl Provider<Arc<String>> for Counting {
        fn build(&self) -> Result<Arc<String>> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(format!("value-{}", n)))
        }

        fn next(self: Arc<Self>) -> Option<SharedProvider<Arc<String>>> {
            None
        }
    }

    #[test]
    fn test_same_instance_every_time() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cached = the_same(Arc::new(Counting {
            calls: Arc::clone(&calls),
        }));

        let first = cached.build().unwrap();
        let second = cached.build().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_next_is_itself() {
        let cached = the_same(elements([1, 2]));
        let next = cached.clone().next().unwrap();
        assert!(Arc::ptr_eq(&cached, &next));
        assert_eq!(next.build().unwrap(), 1);
    }

    #[test]
    fn test_concurrent_first_build_computes_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cached = the_same(Arc::new(Counting {
            calls: Arc::clone(&calls),
        }));

        let values: Vec<_> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| cached.build().unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(values.iter().all(|v| Arc::ptr_eq(v, &values[0])));
    }

    #[test]
    fn test_failure_is_not_cached() {
        let provider = TheSame::new(elements(Vec::<i32>::new()));
        assert!(matches!(provider.build(), Err(Error::Exhausted { .. })));
        assert!(!provider.is_cached());
    }
}
