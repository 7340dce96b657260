//! Lint for built types that cannot be constructed.

use quickbuilder_manifest::Manifest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors on `default_constructor = false` without a generator.
///
/// The generated `build()` needs either `Default::default()` or a
/// generation hook to produce a value.
pub struct MissingConstructorLint;

impl Lint for MissingConstructorLint {
    fn name(&self) -> &'static str {
        "missing-constructor"
    }

    fn description(&self) -> &'static str {
        "Require a generator for built types without a default constructor"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for builder in &manifest.builders {
            if !builder.default_constructor && builder.generator.is_none() {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!(
                            "builder '{}' builds '{}', which has no default constructor; add a `generator`",
                            builder.name(),
                            builder.built()
                        ),
                    )
                    .at(format!("builder.{}", builder.name())),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(src: &str) -> Vec<Diagnostic> {
        let manifest: Manifest = src.parse().unwrap();
        let mut diagnostics = Vec::new();
        MissingConstructorLint.check(&manifest, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_missing_constructor() {
        let diagnostics = check(
            r#"
[module]
name = "test"

[[builder]]
name = "Seed"
built = "crate::Seed"
default_constructor = false
"#,
        );
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_error());
        assert!(diagnostics[0].message.contains("crate::Seed"));
    }

    #[test]
    fn test_generator_replaces_constructor() {
        let diagnostics = check(
            r#"
[module]
name = "test"

[[builder]]
name = "Seed"
built = "crate::Seed"
default_constructor = false
generator = "crate::make_seed"
"#,
        );
        assert!(diagnostics.is_empty());
    }
}
