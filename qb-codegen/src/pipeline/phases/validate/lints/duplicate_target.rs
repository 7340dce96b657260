//! Lint for duplicate builder type names.

use std::collections::HashMap;

use quickbuilder_manifest::Manifest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors when two builders generate the same type.
///
/// Contract names are already unique after parsing, but an explicit
/// `target` can collide with another builder's default `<name>Builder`.
pub struct DuplicateTargetLint;

impl Lint for DuplicateTargetLint {
    fn name(&self) -> &'static str {
        "duplicate-target"
    }

    fn description(&self) -> &'static str {
        "Detect builders that generate the same type"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashMap<String, &str> = HashMap::new();

        for builder in &manifest.builders {
            let target = builder.target_name();
            if let Some(first) = seen.get(&target) {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!(
                            "builder '{}' generates type '{}', already generated by builder '{}'",
                            builder.name(),
                            target,
                            first
                        ),
                    )
                    .at(format!("builder.{}", builder.name())),
                );
            } else {
                seen.insert(target, builder.name());
            }
        }
    }
}
