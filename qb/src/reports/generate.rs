//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    pub module_name: String,
    pub module_version: String,
    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,
    /// Generated builder type names.
    pub builders: Vec<String>,
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// The module was written to disk.
    Written { path: PathBuf },
    /// Dry-run preview of the module.
    Preview { path: PathBuf, content: String },
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written { path } => {
                for warning in &self.warnings {
                    out.warning(warning);
                }

                out.preformatted(&format!("{} v{}", self.module_name, self.module_version));
                out.newline();

                out.section(&format!("Builders ({})", self.builders.len()));
                for builder in &self.builders {
                    out.added_item(builder);
                }
                out.newline();

                out.key_value("Generated", &path.display().to_string());
            }
            GenerationResult::Preview { path, content } => {
                out.divider(&path.display().to_string());
                out.preformatted(content.trim_end());
                out.divider("Summary");
                out.preformatted(&format!(
                    "{} builder{} would be generated",
                    self.builders.len(),
                    if self.builders.len() == 1 { "" } else { "s" }
                ));
            }
        }
    }
}
