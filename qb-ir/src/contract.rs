//! Builder contracts.

use serde::Serialize;

use crate::{Error, PropertyDescriptor, PropertySet, Result};

/// One declared builder: the identities involved and the properties it
/// manages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuilderContract {
    /// Contract id (e.g. `Fruit`).
    pub name: String,
    /// Builder type id (e.g. `FruitBuilder`).
    pub target: String,
    /// Built type id (e.g. `crate::fruit::Fruit`).
    pub built: String,
    /// Unique properties in registration order.
    pub properties: PropertySet,
    /// Path of a custom generation hook, if any.
    pub generator: Option<String>,
    /// Whether the built type supports parameterless initialization.
    pub default_constructor: bool,
    pub description: Option<String>,
}

impl BuilderContract {
    /// Create a contract with no properties. The builder type id defaults to
    /// `<name>Builder`.
    pub fn new(name: impl Into<String>, built: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            target: format!("{}Builder", name),
            name,
            built: built.into(),
            properties: PropertySet::new(),
            generator: None,
            default_constructor: true,
            description: None,
        }
    }

    /// Create a contract from an ordered descriptor list, collapsing
    /// duplicates.
    pub fn from_properties(
        name: impl Into<String>,
        built: impl Into<String>,
        properties: impl IntoIterator<Item = PropertyDescriptor>,
    ) -> Result<Self> {
        let mut contract = Self::new(name, built);
        contract.properties = PropertySet::from_descriptors(properties)?;
        Ok(contract)
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    pub fn generator(mut self, generator: impl Into<String>) -> Self {
        self.generator = Some(generator.into());
        self
    }

    /// Declare that the built type has no parameterless initialization.
    pub fn without_default_constructor(mut self) -> Self {
        self.default_constructor = false;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a property, collapsing an identical duplicate.
    pub fn property(mut self, descriptor: PropertyDescriptor) -> Result<Self> {
        self.properties.insert(descriptor)?;
        Ok(self)
    }

    /// Check contract-level requirements.
    ///
    /// A built type without a default constructor can only be produced by a
    /// generation hook.
    pub fn validate(&self) -> Result<()> {
        if !self.default_constructor && self.generator.is_none() {
            return Err(Error::MissingConstructor {
                contract: self.name.clone(),
                built: self.built.clone(),
            });
        }
        Ok(())
    }

    /// Properties with a plain value slot.
    pub fn plain_properties(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.properties.iter().filter(|p| !p.is_builder)
    }

    /// Properties whose slot is filled with a caller-supplied provider.
    pub fn builder_properties(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.properties.iter().filter(|p| p.is_builder)
    }
}

#[cfg(test)]
mod tests {
    use quickbuilder_core::{DeclaredType, PrimitiveKind};

    use super::*;

    fn fruit() -> BuilderContract {
        BuilderContract::from_properties(
            "Fruit",
            "crate::Fruit",
            [
                PropertyDescriptor::new("name", DeclaredType::reference("String")),
                PropertyDescriptor::new("weight", PrimitiveKind::Int.into()),
                PropertyDescriptor::new("name", DeclaredType::reference("String")),
                PropertyDescriptor::new("seed", DeclaredType::reference("crate::Seed")).builder(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_default_target_name() {
        let contract = fruit();
        assert_eq!(contract.target, "FruitBuilder");
        assert_eq!(contract.properties.len(), 3);
    }

    #[test]
    fn test_plain_and_builder_properties() {
        let contract = fruit();
        let plain: Vec<_> = contract.plain_properties().map(|p| p.name.as_str()).collect();
        let nested: Vec<_> = contract
            .builder_properties()
            .map(|p| p.name.as_str())
            .collect();

        assert_eq!(plain, vec!["name", "weight"]);
        assert_eq!(nested, vec!["seed"]);
    }

    #[test]
    fn test_missing_constructor() {
        let contract = fruit().without_default_constructor();
        assert!(matches!(
            contract.validate(),
            Err(Error::MissingConstructor { .. })
        ));

        let contract = contract.generator("crate::make_fruit");
        assert!(contract.validate().is_ok());
    }

    #[test]
    fn test_property_conflict_propagates() {
        let result = BuilderContract::new("Fruit", "crate::Fruit")
            .property(PropertyDescriptor::new("weight", PrimitiveKind::Int.into()))
            .and_then(|c| c.property(PropertyDescriptor::new("weight", PrimitiveKind::Long.into())));

        assert!(matches!(result, Err(Error::ConflictingProperty { .. })));
    }
}
