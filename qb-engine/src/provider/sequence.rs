use std::sync::Arc;

use super::{Provider, SharedProvider};
use crate::{Error, Result};

/// Walks a fixed list of elements.
#[derive(Debug)]
pub struct ElementSequence<T> {
    elements: Arc<[T]>,
    position: usize,
}

impl<T> ElementSequence<T> {
    pub fn from_vec(elements: Vec<T>) -> Self {
        Self {
            elements: elements.into(),
            position: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Elements not yet visited, including the current one.
    pub fn remaining(&self) -> usize {
        self.elements.len().saturating_sub(self.position)
    }
}

impl<T> Provider<T> for ElementSequence<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn build(&self) -> Result<T> {
        self.elements
            .get(self.position)
            .cloned()
            .ok_or(Error::Exhausted {
                provider: "element sequence",
            })
    }

    fn next(self: Arc<Self>) -> Option<SharedProvider<T>> {
        let position = self.position + 1;
        if position >= self.elements.len() {
            return None;
        }
        Some(Arc::new(ElementSequence {
            elements: Arc::clone(&self.elements),
            position,
        }))
    }

    fn is_exhausted(&self) -> bool {
        self.position >= self.elements.len()
    }

    fn is_finite(&self) -> bool {
        true
    }
}

/// A sequence over `elements`, in order.
pub fn elements<T>(elements: impl IntoIterator<Item = T>) -> SharedProvider<T>
where
    T: Clone + Send + Sync + 'static,
{
    Arc::new(ElementSequence::from_vec(elements.into_iter().collect()))
}

/// A sequence with a single element.
pub fn once<T>(value: T) -> SharedProvider<T>
where
    T: Clone + Send + Sync + 'static,
{
    Arc::new(ElementSequence::from_vec(vec![value]))
}

/// Ascending integers starting at `start`.
///
/// The sequence ends at `i32::MAX` rather than wrapping.
#[derive(Debug, Clone, Copy)]
pub struct IntegersFrom {
    current: i32,
}

impl IntegersFrom {
    pub fn new(start: i32) -> Self {
        Self { current: start }
    }
}

impl Provider<i32> for IntegersFrom {
    fn build(&self) -> Result<i32> {
        Ok(self.current)
    }

    fn next(self: Arc<Self>) -> Option<SharedProvider<i32>> {
        let next = self.current.checked_add(1)?;
        Some(Arc::new(IntegersFrom::new(next)))
    }
}

pub fn integers_from(start: i32) -> SharedProvider<i32> {
    Arc::new(IntegersFrom::new(start))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_then_next() {
        let seq = elements(["a", "b"]);
        assert_eq!(seq.build().unwrap(), "a");

        let next = seq.next().unwrap();
        assert_eq!(next.build().unwrap(), "b");
        assert!(next.next().is_none());
    }

    #[test]
    fn test_next_does_not_mutate() {
        let seq = elements([1, 2, 3]);
        let _ = seq.clone().next();
        assert_eq!(seq.build().unwrap(), 1);
    }

    #[test]
    fn test_empty_sequence_is_exhausted() {
        let seq = elements(Vec::<i32>::new());
        assert!(seq.is_exhausted());
        assert!(matches!(seq.build(), Err(Error::Exhausted { .. })));
    }

    #[test]
    fn test_remaining() {
        let seq = ElementSequence::from_vec(vec!['x', 'y', 'z']);
        assert_eq!(seq.position(), 0);
        assert_eq!(seq.remaining(), 3);
    }

    #[test]
    fn test_integers_from() {
        let ints = integers_from(2);
        assert_eq!(ints.build().unwrap(), 2);
        assert_eq!(ints.next().unwrap().build().unwrap(), 3);
    }

    #[test]
    fn test_integers_stop_at_max() {
        let ints = integers_from(i32::MAX);
        assert_eq!(ints.build().unwrap(), i32::MAX);
        assert!(ints.next().is_none());
    }
}
