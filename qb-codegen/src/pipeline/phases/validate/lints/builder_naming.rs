//! Lint for builder and property naming conventions.

use quickbuilder_manifest::Manifest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns about builder names that aren't PascalCase and property
/// names that aren't snake_case.
///
/// Generated member names are derived by case conversion, so `seedCount`
/// still becomes `with_seed_count`; the warning keeps the manifest
/// consistent with the generated code.
pub struct BuilderNamingLint;

impl Lint for BuilderNamingLint {
    fn name(&self) -> &'static str {
        "builder-naming"
    }

    fn description(&self) -> &'static str {
        "Check builder names are PascalCase and property names snake_case"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for builder in &manifest.builders {
            let location = format!("builder.{}", builder.name());
            if !is_pascal_case(builder.name()) {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!("builder '{}' should use PascalCase", builder.name()),
                    )
                    .at(&location),
                );
            }

            let target = builder.target_name();
            if !is_pascal_case(&target) {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!("builder target '{}' should use PascalCase", target),
                    )
                    .at(&location),
                );
            }

            for property in &builder.properties {
                if !is_snake_case(property.name()) {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!(
                                "property '{}' should use snake_case (e.g., 'seed_count' not 'seedCount')",
                                property.name()
                            ),
                        )
                        .at(format!("{}.property.{}", location, property.name())),
                    );
                }
            }
        }
    }
}

fn is_pascal_case(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_uppercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric())
}

fn is_snake_case(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
