//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    pub config_path: PathBuf,
    pub module_name: String,
    pub module_version: String,
    pub module_description: Option<String>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
    /// Lowered contracts; empty when the check failed.
    pub contracts: Vec<ContractSummary>,
}

/// One lowered contract.
#[derive(Debug)]
pub struct ContractSummary {
    pub target: String,
    pub built: String,
    pub property_count: usize,
    pub has_generator: bool,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }
        for warning in &self.warnings {
            out.warning(warning);
        }
        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        out.preformatted(&format!("  {} v{}", self.module_name, self.module_version));
        if let Some(desc) = &self.module_description {
            out.preformatted(&format!("  {}", desc));
        }
        out.newline();

        let count = self.contracts.len();
        out.section(&format!(
            "  {} builder{}",
            count,
            if count == 1 { "" } else { "s" }
        ));
        for contract in &self.contracts {
            let hook = if contract.has_generator { ", custom generator" } else { "" };
            out.list_item(&format!(
                "{} -> {} ({} propert{}{})",
                contract.target,
                contract.built,
                contract.property_count,
                if contract.property_count == 1 { "y" } else { "ies" },
                hook
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::RecordingOutput;

    fn report() -> CheckReport {
        CheckReport {
            config_path: PathBuf::from("quickbuilder.toml"),
            module_name: "fruit".into(),
            module_version: "0.1.0".into(),
            module_description: None,
            errors: Vec::new(),
            warnings: Vec::new(),
            infos: Vec::new(),
            contracts: vec![ContractSummary {
                target: "FruitBuilder".into(),
                built: "crate::Fruit".into(),
                property_count: 1,
                has_generator: true,
            }],
        }
    }

    #[test]
    fn test_valid_report_lists_builders() {
        let mut out = RecordingOutput::default();
        report().render(&mut out);

        let text = out.text();
        assert!(text.contains("✓ quickbuilder.toml is valid"));
        assert!(text.contains("  1 builder:"));
        assert!(text.contains("  - FruitBuilder -> crate::Fruit (1 property, custom generator)"));
    }

    #[test]
    fn test_errors_suppress_summary() {
        let mut report = report();
        report.errors.push("no generator".into());

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(out.lines[0], "error: no generator");
        assert!(!out.text().contains("is valid"));
    }
}
