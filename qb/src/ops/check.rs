//! Check operation - manifest validation.

use std::path::Path;

use eyre::{Context, Result};
use quickbuilder_codegen::pipeline::{CompilationContext, Diagnostic, Pipeline, Severity};
use quickbuilder_manifest::Manifest;

use crate::reports::{CheckReport, ContractSummary};

/// Execute the check operation.
///
/// Validation and lowering failures are reported as diagnostics; only
/// failures without a diagnostic become errors.
pub fn check(manifest: &Manifest, config_path: &Path) -> Result<CheckReport> {
    let mut ctx = CompilationContext::new(manifest.clone());
    if let Err(err) = Pipeline::new().run_with(&mut ctx)
        && !ctx.has_errors()
    {
        return Err(err).wrap_err("Validation failed");
    }

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &ctx.diagnostics {
        let msg = format_diagnostic(diag);
        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    let contracts = ctx
        .ir
        .iter()
        .flat_map(|ir| &ir.contracts)
        .map(|contract| ContractSummary {
            target: contract.target.clone(),
            built: contract.built.clone(),
            property_count: contract.properties.len(),
            has_generator: contract.generator.is_some(),
        })
        .collect();

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        module_name: manifest.module.name.clone(),
        module_version: manifest.module.version.clone(),
        module_description: manifest.module.description.clone(),
        errors,
        warnings,
        infos,
        contracts,
    })
}

fn format_diagnostic(diag: &Diagnostic) -> String {
    match &diag.location {
        Some(loc) => format!("{}\n  --> {}", diag.message, loc),
        None => diag.message.clone(),
    }
}
