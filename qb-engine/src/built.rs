//! Descriptions of built types: how to default-initialize them and which
//! setters they expose.

use std::{any::Any, collections::HashMap, fmt, sync::Arc};

use quickbuilder_core::{CoercionError, FromValue, Value};

use crate::{Error, Result};

pub(crate) type Setter<T> =
    Arc<dyn Fn(&mut T, Value) -> std::result::Result<(), CoercionError> + Send + Sync>;

/// The runtime description of a built type `T`.
///
/// ```
/// use quickbuilder_engine::BuiltType;
///
/// #[derive(Default)]
/// struct Fruit {
///     name: String,
///     weight: i32,
/// }
///
/// let built = BuiltType::<Fruit>::with_default("Fruit")
///     .setter("set_name", |f: &mut Fruit, name: String| f.name = name)
///     .setter("set_weight", |f: &mut Fruit, weight: i32| f.weight = weight);
/// assert!(built.has_setter("set_weight"));
/// ```
pub struct BuiltType<T> {
    name: String,
    default: Option<Arc<dyn Fn() -> T + Send + Sync>>,
    setters: HashMap<String, Setter<T>>,
}

impl<T: 'static> BuiltType<T> {
    /// A built type without parameterless initialization. Builders for it
    /// need a generator.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
            setters: HashMap::new(),
        }
    }

    /// A built type initialized with [`Default`].
    pub fn with_default(name: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self::new(name).constructor(T::default)
    }

    /// Use `init` for parameterless initialization.
    pub fn constructor<F>(mut self, init: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.default = Some(Arc::new(init));
        self
    }

    /// Register a setter taking a value convertible from the boxed form.
    pub fn setter<V, F>(mut self, name: impl Into<String>, set: F) -> Self
    where
        V: FromValue,
        F: Fn(&mut T, V) + Send + Sync + 'static,
    {
        let setter: Setter<T> = Arc::new(move |target: &mut T, value: Value| {
            set(target, V::from_value(value)?);
            Ok(())
        });
        self.setters.insert(name.into(), setter);
        self
    }

    /// Register a setter for a reference value stored as
    /// [`Value::Object`].
    pub fn object_setter<V, F>(mut self, name: impl Into<String>, set: F) -> Self
    where
        V: Any + Clone,
        F: Fn(&mut T, V) + Send + Sync + 'static,
    {
        let setter: Setter<T> = Arc::new(move |target: &mut T, value: Value| {
            set(target, value.downcast::<V>()?);
            Ok(())
        });
        self.setters.insert(name.into(), setter);
        self
    }
}

impl<T> BuiltType<T> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    pub fn has_setter(&self, name: &str) -> bool {
        self.setters.contains_key(name)
    }

    pub(crate) fn setter_fn(&self, name: &str) -> Option<Setter<T>> {
        self.setters.get(name).cloned()
    }

    pub(crate) fn instantiate(&self) -> Result<T> {
        match &self.default {
            Some(init) => Ok(init()),
            None => Err(Error::NoDefaultConstructor {
                built: self.name.clone(),
            }),
        }
    }
}

impl<T> fmt::Debug for BuiltType<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut setters: Vec<_> = self.setters.keys().collect();
        setters.sort();
        f.debug_struct("BuiltType")
            .field("name", &self.name)
            .field("default", &self.default.is_some())
            .field("setters", &setters)
            .finish()
    }
}
