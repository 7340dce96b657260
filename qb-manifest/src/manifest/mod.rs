//! Manifest types for quickbuilder.toml files.

mod file;
mod parse;
mod validate;

use quickbuilder_core::{DeclaredType, to_pascal_case, to_snake_case};
use serde::Deserialize;
use toml::Spanned;

pub use file::QuickbuilderToml;
pub use parse::parse_manifest;
pub use validate::ParseContext;

/// Root manifest for quickbuilder.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Module metadata
    pub module: ModuleConfig,

    /// Builder declarations, in file order
    #[serde(default, rename = "builder")]
    pub builders: Vec<BuilderDecl>,
}

impl Manifest {
    /// Find a builder by contract name.
    pub fn builder(&self, name: &str) -> Option<&BuilderDecl> {
        self.builders.iter().find(|b| b.name() == name)
    }
}

/// Module metadata
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleConfig {
    pub name: String,

    #[serde(default = "default_version")]
    pub version: String,

    pub description: Option<String>,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

/// One `[[builder]]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuilderDecl {
    /// Contract name
    pub name: Spanned<String>,

    /// Generated builder type (default: `<name>Builder`)
    pub target: Option<Spanned<String>>,

    /// Path of the built type
    pub built: Spanned<String>,

    /// Whether the built type implements `Default`
    #[serde(default = "default_true")]
    pub default_constructor: bool,

    /// Path of a custom generation hook
    pub generator: Option<String>,

    pub description: Option<String>,

    #[serde(default, rename = "property")]
    pub properties: Vec<PropertyDecl>,
}

fn default_true() -> bool {
    true
}

impl BuilderDecl {
    pub fn name(&self) -> &str {
        self.name.get_ref()
    }

    /// The generated builder type name.
    pub fn target_name(&self) -> String {
        match &self.target {
            Some(target) => target.get_ref().clone(),
            None => format!("{}Builder", to_pascal_case(self.name())),
        }
    }

    pub fn built(&self) -> &str {
        self.built.get_ref()
    }
}

/// One `[[builder.property]]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertyDecl {
    pub name: Spanned<String>,

    #[serde(rename = "type")]
    pub ty: Spanned<String>,

    /// Setter on the built type
    #[serde(default)]
    pub setter: SetterDecl,

    /// Whether the slot holds a caller-supplied provider
    #[serde(default)]
    pub builder: bool,

    pub description: Option<String>,
}

impl PropertyDecl {
    pub fn name(&self) -> &str {
        self.name.get_ref()
    }

    pub fn declared_type(&self) -> DeclaredType {
        DeclaredType::parse(self.ty.get_ref())
    }

    /// The resolved setter name, or `None` for `setter = false`.
    pub fn setter_name(&self) -> Option<String> {
        match &self.setter {
            SetterDecl::Named(name) => Some(name.clone()),
            SetterDecl::Enabled(true) => Some(format!("set_{}", to_snake_case(self.name()))),
            SetterDecl::Enabled(false) => None,
        }
    }

    /// Two declarations agree when their types and builder flags match.
    pub fn same_slot(&self, other: &PropertyDecl) -> bool {
        self.declared_type() == other.declared_type() && self.builder == other.builder
    }
}

/// The `setter` key: a setter name, or `false` for none.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SetterDecl {
    Named(String),
    Enabled(bool),
}

impl Default for SetterDecl {
    fn default() -> Self {
        SetterDecl::Enabled(true)
    }
}
