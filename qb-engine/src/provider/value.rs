use std::sync::Arc;

use quickbuilder_core::Value;

use super::{Provider, SharedProvider};
use crate::Result;

/// Always produces the same value; its successor is itself.
#[derive(Debug, Clone)]
pub struct Constant<T> {
    value: T,
}

impl<T> Constant<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T> Provider<T> for Constant<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn build(&self) -> Result<T> {
        Ok(self.value.clone())
    }

    fn next(self: Arc<Self>) -> Option<SharedProvider<T>> {
        Some(self as SharedProvider<T>)
    }
}

/// A provider that repeats `value` forever.
pub fn constant<T>(value: T) -> SharedProvider<T>
where
    T: Clone + Send + Sync + 'static,
{
    Arc::new(Constant::new(value))
}

/// A constant `None`, for optional slots that should build as null.
pub fn null_value<T>() -> SharedProvider<Option<T>>
where
    T: Clone + Send + Sync + 'static,
{
    constant(None)
}

/// A boxed value stored in a builder slot by `with`.
///
/// The value has already been coerced to the property's declared kind.
#[derive(Debug, Clone)]
pub struct StoredValue {
    value: Value,
}

impl StoredValue {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    pub fn shared(value: Value) -> SharedProvider<Value> {
        Arc::new(Self::new(value))
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl Provider<Value> for StoredValue {
    fn build(&self) -> Result<Value> {
        Ok(self.value.clone())
    }

    fn next(self: Arc<Self>) -> Option<SharedProvider<Value>> {
        Some(self as SharedProvider<Value>)
    }
}
