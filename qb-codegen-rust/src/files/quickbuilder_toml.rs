use std::path::{Path, PathBuf};

use quickbuilder_core::{FileRules, GeneratedFile};

/// The starter quickbuilder.toml written by `qb init`.
pub struct QuickbuilderTomlFile {
    pub name: String,
    pub version: String,
    pub description: String,
}

impl QuickbuilderTomlFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: "0.1.0".to_string(),
            description: "Test data builders".to_string(),
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl GeneratedFile for QuickbuilderTomlFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("quickbuilder.toml")
    }

    fn rules(&self) -> FileRules {
        FileRules::scaffold()
    }

    fn render(&self) -> String {
        format!(
            r#"[module]
name = "{}"
version = "{}"
description = "{}"

# One [[builder]] table per builder type:
#
#   target              generated builder type (default: <name>Builder)
#   default_constructor whether the built type implements Default (default: true)
#   generator           optional fn(&Builder) -> Result<Built> used instead of setters

[[builder]]
name = "Fruit"
built = "crate::fruit::Fruit"
description = "A piece of fruit"

[[builder.property]]
name = "name"
type = "String"

[[builder.property]]
name = "weight"
type = "int"
description = "Weight in grams"

# Use `builder = true` for slots filled by another builder or provider,
# and `setter = false` for values read only by a generator.
#
# [[builder.property]]
# name = "seed"
# type = "crate::fruit::Seed"
# builder = true
"#,
            self.name, self.version, self.description
        )
    }
}
