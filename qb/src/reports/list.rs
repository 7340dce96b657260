//! List command report data structures.

use serde::Serialize;

use super::output::{Output, Report};

/// The lowered contracts of a manifest. Serialized as-is by `qb list --json`.
#[derive(Debug, Serialize)]
pub struct ListReport {
    pub module: String,
    pub version: String,
    pub builders: Vec<ContractEntry>,
}

#[derive(Debug, Serialize)]
pub struct ContractEntry {
    pub name: String,
    pub target: String,
    pub built: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generator: Option<String>,
    pub default_constructor: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unique properties in registration order.
    pub properties: Vec<PropertyEntry>,
}

#[derive(Debug, Serialize)]
pub struct PropertyEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub builder: bool,
    pub setter: Option<String>,
}

impl PropertyEntry {
    fn signature(&self) -> String {
        let mut signature = format!("{}: {}", self.name, self.ty);
        if self.builder {
            signature.push_str(" [builder]");
        }
        match &self.setter {
            Some(setter) => signature.push_str(&format!(" via {}", setter)),
            None => signature.push_str(" (no setter)"),
        }
        signature
    }
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.builders.is_empty() {
            out.preformatted("No builders defined");
            return;
        }

        for (i, contract) in self.builders.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            out.section(&format!("{} ({})", contract.target, contract.built));
            if let Some(desc) = &contract.description {
                out.preformatted(&format!("  {}", desc));
            }
            if let Some(generator) = &contract.generator {
                out.key_value("  generator", generator);
            }
            for property in &contract.properties {
                out.list_item(&property.signature());
            }
        }
    }
}
