//! Lint for builders without descriptions.

use quickbuilder_manifest::Manifest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns about builders missing descriptions.
///
/// The description becomes the doc comment of the generated builder type.
pub struct EmptyDescriptionLint;

impl Lint for EmptyDescriptionLint {
    fn name(&self) -> &'static str {
        "empty-description"
    }

    fn description(&self) -> &'static str {
        "Warn about builders without a description"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for builder in &manifest.builders {
            let blank = builder
                .description
                .as_deref()
                .is_none_or(|d| d.trim().is_empty());
            if blank {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!("builder '{}' has no description", builder.name()),
                    )
                    .at(format!("builder.{}", builder.name())),
                );
            }
        }
    }
}
