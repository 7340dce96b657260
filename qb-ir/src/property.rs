//! Property descriptors and the ordered set that holds them.

use indexmap::IndexMap;
use quickbuilder_core::{DeclaredType, to_snake_case};
use serde::Serialize;

use crate::{Error, Result};

/// Metadata for one settable property of a built type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyDescriptor {
    /// Property name, unique within a contract.
    pub name: String,
    /// Declared type of the property.
    #[serde(rename = "type")]
    pub declared_type: DeclaredType,
    /// Whether the slot holds a provider supplied by the caller.
    pub is_builder: bool,
    /// Name of the setter on the built type, if it has one.
    pub setter: Option<String>,
    /// Description for generated docs.
    pub description: Option<String>,
}

impl PropertyDescriptor {
    /// A plain property with the conventional `set_<name>` setter.
    pub fn new(name: impl Into<String>, declared_type: DeclaredType) -> Self {
        let name = name.into();
        let setter = Some(format!("set_{}", to_snake_case(&name)));
        Self {
            name,
            declared_type,
            is_builder: false,
            setter,
            description: None,
        }
    }

    /// Mark the property as builder-typed.
    pub fn builder(mut self) -> Self {
        self.is_builder = true;
        self
    }

    /// Use a custom setter name.
    pub fn setter(mut self, setter: impl Into<String>) -> Self {
        self.setter = Some(setter.into());
        self
    }

    /// The built type exposes no setter; the property is only read by a
    /// generation hook.
    pub fn without_setter(mut self) -> Self {
        self.setter = None;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn has_setter(&self) -> bool {
        self.setter.is_some()
    }

    /// Name of the accessor used by generation hooks, e.g. `_color`.
    pub fn accessor_name(&self) -> String {
        format!("_{}", to_snake_case(&self.name))
    }

    /// Name of the update method, e.g. `with_color`.
    pub fn with_name(&self) -> String {
        format!("with_{}", to_snake_case(&self.name))
    }

    /// Two descriptors describe the same slot when name, type and builder
    /// flag agree.
    fn same_slot(&self, other: &PropertyDescriptor) -> bool {
        self.declared_type == other.declared_type && self.is_builder == other.is_builder
    }

    fn describe_type(&self) -> String {
        if self.is_builder {
            format!("builder of {}", self.declared_type)
        } else {
            self.declared_type.to_string()
        }
    }
}

/// Ordered set of property descriptors keyed by name.
///
/// Insertion order is preserved because it fixes the positional order of a
/// builder's full constructor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySet {
    entries: IndexMap<String, PropertyDescriptor>,
}

impl PropertySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a descriptor, collapsing duplicates.
    ///
    /// Returns `Ok(true)` if the descriptor added a new slot and `Ok(false)`
    /// if an equivalent descriptor was already present. A descriptor whose
    /// name is taken by one with a different type is rejected.
    pub fn insert(&mut self, descriptor: PropertyDescriptor) -> Result<bool> {
        match self.entries.get_mut(&descriptor.name) {
            None => {
                self.entries.insert(descriptor.name.clone(), descriptor);
                Ok(true)
            }
            Some(existing) if existing.same_slot(&descriptor) => {
                // Keep the first declaration; fill in what it left unset.
                if existing.setter.is_none() {
                    existing.setter = descriptor.setter;
                }
                if existing.description.is_none() {
                    existing.description = descriptor.description;
                }
                Ok(false)
            }
            Some(existing) => Err(Error::ConflictingProperty {
                name: descriptor.name.clone(),
                first: existing.describe_type(),
                second: descriptor.describe_type(),
            }),
        }
    }

    /// Build a set from descriptors in order.
    pub fn from_descriptors(
        descriptors: impl IntoIterator<Item = PropertyDescriptor>,
    ) -> Result<Self> {
        let mut set = Self::new();
        for descriptor in descriptors {
            set.insert(descriptor)?;
        }
        Ok(set)
    }

    pub fn get(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.entries.get(name)
    }

    /// Position of the slot for `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.get_index_of(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.entries.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a PropertySet {
    type Item = &'a PropertyDescriptor;
    type IntoIter = indexmap::map::Values<'a, String, PropertyDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

impl Serialize for PropertySet {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.entries.values())
    }
}

#[cfg(test)]
mod tests {
    use quickbuilder_core::PrimitiveKind;

    use super::*;

    fn string_prop(name: &str) -> PropertyDescriptor {
        PropertyDescriptor::new(name, DeclaredType::reference("String"))
    }

    #[test]
    fn test_derived_names() {
        let prop = string_prop("seedCount");
        assert_eq!(prop.accessor_name(), "_seed_count");
        assert_eq!(prop.with_name(), "with_seed_count");
        assert_eq!(prop.setter.as_deref(), Some("set_seed_count"));
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let set = PropertySet::from_descriptors([
            string_prop("name"),
            PropertyDescriptor::new("weight", PrimitiveKind::Int.into()),
            string_prop("color"),
        ])
        .unwrap();

        let names: Vec<_> = set.names().collect();
        assert_eq!(names, vec!["name", "weight", "color"]);
        assert_eq!(set.index_of("color"), Some(2));
    }

    #[test]
    fn test_duplicates_collapse_to_first_seen() {
        let mut set = PropertySet::new();
        assert!(set.insert(string_prop("name")).unwrap());
        assert!(set.insert(string_prop("color")).unwrap());
        assert!(!set.insert(string_prop("name")).unwrap());

        assert_eq!(set.len(), 2);
        assert_eq!(set.index_of("name"), Some(0));
    }

    #[test]
    fn test_conflicting_type_is_rejected() {
        let mut set = PropertySet::new();
        set.insert(string_prop("weight")).unwrap();

        let err = set
            .insert(PropertyDescriptor::new("weight", PrimitiveKind::Int.into()))
            .unwrap_err();

        assert_eq!(
            err,
            Error::ConflictingProperty {
                name: "weight".into(),
                first: "String".into(),
                second: "int".into(),
            }
        );
    }

    #[test]
    fn test_builder_flag_conflict_is_rejected() {
        let mut set = PropertySet::new();
        set.insert(string_prop("seed")).unwrap();

        let err = set.insert(string_prop("seed").builder()).unwrap_err();
        assert!(err.to_string().contains("builder of String"));
    }

    #[test]
    fn test_duplicate_fills_missing_setter() {
        let mut set = PropertySet::new();
        set.insert(string_prop("name").without_setter()).unwrap();
        set.insert(string_prop("name").setter("rename")).unwrap();

        assert_eq!(
            set.get("name").and_then(|p| p.setter.as_deref()),
            Some("rename")
        );
    }

    #[test]
    fn test_serialize_as_list() {
        let set = PropertySet::from_descriptors([string_prop("name")]).unwrap();
        let json = serde_json::to_value(&set).unwrap();

        assert_eq!(json[0]["name"], "name");
        assert_eq!(json[0]["setter"], "set_name");
        assert_eq!(json[0]["is_builder"], false);
    }
}
