//! Runtime builder synthesis.
//!
//! A [`BuilderType`] is synthesized once from a [`BuilderContract`] and a
//! [`BuiltType`]; it hands out [`Builder`] instances. Builders are
//! immutable: `with` and `but` return new instances that share unchanged
//! slots with the original.

use std::{any::Any, fmt, sync::Arc};

use quickbuilder_core::{FromValue, Value};
use quickbuilder_ir::{BuilderContract, PropertyDescriptor};
use tracing::{debug, trace};

use crate::{
    BuiltType, Error, Result,
    built::Setter,
    provider::{Provider, SharedProvider, StoredValue, map},
};

/// A custom generation hook for a builder type `B` producing `T`.
///
/// Generated builders use this with their own type as `B`.
pub type Hook<B, T> = Arc<dyn Fn(&B) -> Result<T> + Send + Sync>;

/// The generation hook of a runtime [`Builder`].
pub type Generator<T> = Hook<Builder<T>, T>;

/// One provider slot per unique property, in registration order.
pub type Slots = Vec<Option<SharedProvider<Value>>>;

struct BuilderClass<T> {
    contract: BuilderContract,
    built: BuiltType<T>,
    /// Resolved setter per property, aligned with the property set.
    setters: Vec<Option<Setter<T>>>,
    generator: Option<Generator<T>>,
}

/// A synthesized builder type.
pub struct BuilderType<T> {
    class: Arc<BuilderClass<T>>,
}

impl<T: 'static> BuilderType<T> {
    /// Synthesize a builder type for `contract`.
    ///
    /// Fails if a property names a setter `built` does not register, or if
    /// either the contract or `built` lacks a default constructor and no
    /// generator is given. A runtime generator satisfies a contract that
    /// declares `default_constructor = false`.
    pub fn synthesize(
        contract: BuilderContract,
        built: BuiltType<T>,
        generator: Option<Generator<T>>,
    ) -> Result<Self> {
        if generator.is_none() {
            contract.validate()?;
        }
        if !built.has_default() && generator.is_none() {
            return Err(Error::NoDefaultConstructor {
                built: built.name().to_string(),
            });
        }

        let setters = contract
            .properties
            .iter()
            .map(|property| resolve_setter(&built, property))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            builder = %contract.target,
            built = %built.name(),
            properties = contract.properties.len(),
            generator = generator.is_some(),
            "synthesized builder type"
        );

        Ok(Self {
            class: Arc::new(BuilderClass {
                contract,
                built,
                setters,
                generator,
            }),
        })
    }
}

fn resolve_setter<T>(
    built: &BuiltType<T>,
    property: &PropertyDescriptor,
) -> Result<Option<Setter<T>>> {
    let Some(name) = &property.setter else {
        return Ok(None);
    };
    match built.setter_fn(name) {
        Some(setter) => Ok(Some(setter)),
        None => Err(Error::MissingSetter {
            built: built.name().to_string(),
            property: property.name.clone(),
            setter: name.clone(),
        }),
    }
}

impl<T> BuilderType<T> {
    /// A builder with every slot absent and no generation hook.
    ///
    /// Without a hook, `build` default-constructs the built type, so for a
    /// type synthesized only through its generator it fails with
    /// [`Error::NoDefaultConstructor`]. Use [`BuilderType::builder`] there.
    pub fn new_builder(&self) -> Builder<T> {
        Builder {
            class: Arc::clone(&self.class),
            generator: None,
            slots: vec![None; self.class.contract.properties.len()].into(),
        }
    }

    /// A fresh builder using the generator given at synthesis, if any.
    pub fn builder(&self) -> Builder<T> {
        Builder {
            generator: self.class.generator.clone(),
            ..self.new_builder()
        }
    }

    /// Full construction: an explicit hook plus one optional provider per
    /// property, in registration order.
    ///
    /// Passing `None` as the hook has the same build-time caveat as
    /// [`BuilderType::new_builder`].
    pub fn construct(&self, generator: Option<Generator<T>>, slots: Slots) -> Result<Builder<T>> {
        let expected = self.class.contract.properties.len();
        if slots.len() != expected {
            return Err(Error::Arity {
                builder: self.class.contract.target.clone(),
                expected,
                found: slots.len(),
            });
        }
        Ok(Builder {
            class: Arc::clone(&self.class),
            generator,
            slots: slots.into(),
        })
    }

    pub fn contract(&self) -> &BuilderContract {
        &self.class.contract
    }
}

impl<T> Clone for BuilderType<T> {
    fn clone(&self) -> Self {
        Self {
            class: Arc::clone(&self.class),
        }
    }
}

impl<T> fmt::Debug for BuilderType<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuilderType")
            .field("target", &self.class.contract.target)
            .field("built", &self.class.built)
            .finish()
    }
}

/// An immutable builder instance.
pub struct Builder<T> {
    class: Arc<BuilderClass<T>>,
    generator: Option<Generator<T>>,
    slots: Arc<[Option<SharedProvider<Value>>]>,
}

impl<T> Builder<T> {
    fn property(&self, name: &str) -> Result<(usize, &PropertyDescriptor)> {
        let properties = &self.class.contract.properties;
        properties
            .index_of(name)
            .zip(properties.get(name))
            .ok_or_else(|| Error::UnknownProperty {
                builder: self.class.contract.target.clone(),
                name: name.to_string(),
            })
    }

    fn replace(&self, index: usize, provider: SharedProvider<Value>) -> Self {
        let mut slots = self.slots.to_vec();
        slots[index] = Some(provider);
        Self {
            class: Arc::clone(&self.class),
            generator: self.generator.clone(),
            slots: slots.into(),
        }
    }

    /// Set a plain property.
    ///
    /// The value is coerced to the declared type now, so a mismatch fails
    /// here rather than at `build`.
    pub fn with(&self, name: &str, value: impl Into<Value>) -> Result<Self> {
        let (index, property) = self.property(name)?;
        if property.is_builder {
            return Err(Error::NotAPlainProperty {
                name: name.to_string(),
            });
        }
        let value = value
            .into()
            .coerce(&property.declared_type)
            .map_err(|e| Error::coercion(name, e))?;
        trace!(property = name, value = %value, "with");
        Ok(self.replace(index, StoredValue::shared(value)))
    }

    /// Set a builder-typed property to a boxed provider.
    pub fn with_builder(&self, name: &str, provider: SharedProvider<Value>) -> Result<Self> {
        let (index, property) = self.property(name)?;
        if !property.is_builder {
            return Err(Error::NotABuilderProperty {
                name: name.to_string(),
            });
        }
        trace!(property = name, "with builder");
        Ok(self.replace(index, provider))
    }

    /// Set a builder-typed property to a typed provider, such as another
    /// builder.
    pub fn with_nested<V>(&self, name: &str, provider: SharedProvider<V>) -> Result<Self>
    where
        V: Any + Send + Sync + 'static,
    {
        self.with_builder(name, map(provider, Value::object::<V>))
    }

    /// A structural copy sharing the hook and every slot.
    pub fn but(&self) -> Self {
        self.clone()
    }

    /// Build the value of a plain property, coerced to its declared type.
    pub fn value(&self, name: &str) -> Result<Value> {
        let (index, property) = self.property(name)?;
        if property.is_builder {
            return Err(Error::NotAPlainProperty {
                name: name.to_string(),
            });
        }
        let provider = self.slots[index]
            .as_ref()
            .ok_or_else(|| Error::unset(name))?;
        provider
            .build()?
            .coerce(&property.declared_type)
            .map_err(|e| Error::coercion(name, e))
    }

    /// Build the value of a plain property as `V`.
    pub fn get<V: FromValue>(&self, name: &str) -> Result<V> {
        V::from_value(self.value(name)?).map_err(|e| Error::coercion(name, e))
    }

    /// Build the value of a plain reference-typed property as `V`.
    pub fn get_object<V: Any + Clone>(&self, name: &str) -> Result<V> {
        self.value(name)?
            .downcast::<V>()
            .map_err(|e| Error::coercion(name, e))
    }

    /// Returns true if the named slot holds a provider.
    pub fn is_set(&self, name: &str) -> bool {
        self.property(name)
            .is_ok_and(|(index, _)| self.slots[index].is_some())
    }

    /// The provider in the named slot, if any.
    pub fn slot(&self, name: &str) -> Option<&SharedProvider<Value>> {
        let (index, _) = self.property(name).ok()?;
        self.slots[index].as_ref()
    }

    pub fn contract(&self) -> &BuilderContract {
        &self.class.contract
    }

    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }

    /// Names of the properties whose slots hold a different provider in
    /// `other`. Both builders must come from the same builder type.
    pub fn changed_slots<'a>(&'a self, other: &Builder<T>) -> Vec<&'a str> {
        self.class
            .contract
            .properties
            .names()
            .zip(self.slots.iter().zip(other.slots.iter()))
            .filter(|(_, (a, b))| !same_provider(a.as_ref(), b.as_ref()))
            .map(|(name, _)| name)
            .collect()
    }

    /// Build a fresh value.
    ///
    /// With a generation hook, the hook's result is returned as is.
    /// Otherwise the built type is default-initialized and every set slot
    /// with a setter is applied in registration order; absent slots keep
    /// the built type's default.
    pub fn build(&self) -> Result<T> {
        if let Some(generator) = &self.generator {
            trace!(builder = %self.class.contract.target, "build via generator");
            return generator(self);
        }

        let class = &self.class;
        let mut target = class.built.instantiate()?;
        for ((property, setter), slot) in class
            .contract
            .properties
            .iter()
            .zip(&class.setters)
            .zip(self.slots.iter())
        {
            let (Some(setter), Some(provider)) = (setter, slot) else {
                continue;
            };
            let value = provider
                .build()?
                .coerce(&property.declared_type)
                .map_err(|e| Error::coercion(&property.name, e))?;
            setter(&mut target, value).map_err(|e| Error::coercion(&property.name, e))?;
        }
        trace!(builder = %class.contract.target, "built");
        Ok(target)
    }
}

fn same_provider(a: Option<&SharedProvider<Value>>, b: Option<&SharedProvider<Value>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

impl<T> Clone for Builder<T> {
    fn clone(&self) -> Self {
        Self {
            class: Arc::clone(&self.class),
            generator: self.generator.clone(),
            slots: Arc::clone(&self.slots),
        }
    }
}

/// Two builders are equal when they share a builder type, a hook and every
/// slot provider.
impl<T> PartialEq for Builder<T> {
    fn eq(&self, other: &Self) -> bool {
        let same_hook = match (&self.generator, &other.generator) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        Arc::ptr_eq(&self.class, &other.class)
            && same_hook
            && self.changed_slots(other).is_empty()
    }
}

impl<T> fmt::Debug for Builder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let set: Vec<_> = self
            .class
            .contract
            .properties
            .names()
            .zip(self.slots.iter())
            .filter(|(_, slot)| slot.is_some())
            .map(|(name, _)| name)
            .collect();
        f.debug_struct("Builder")
            .field("target", &self.class.contract.target)
            .field("generator", &self.generator.is_some())
            .field("set", &set)
            .finish()
    }
}

/// A builder is a provider of fresh values, so it can fill another
/// builder's builder-typed slot.
impl<T: Send + Sync + 'static> Provider<T> for Builder<T> {
    fn build(&self) -> Result<T> {
        Builder::build(self)
    }

    fn next(self: Arc<Self>) -> Option<SharedProvider<T>> {
        Some(self as SharedProvider<T>)
    }
}
