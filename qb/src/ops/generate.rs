//! Generate operation - Rust builders from a manifest.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use quickbuilder_codegen::pipeline::{Pipeline, Severity};
use quickbuilder_codegen_rust::{Generator, files::BuildersRs};
use quickbuilder_core::GeneratedFile;
use quickbuilder_manifest::Manifest;
use tracing::info;

use crate::reports::{GenerateReport, GenerationResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory containing the manifest; default outputs are relative to it.
    pub manifest_dir: &'a Path,
    /// Explicit output file.
    pub output: Option<&'a Path>,
    /// Whether to preview without writing.
    pub dry_run: bool,
}

impl GenerateOptions<'_> {
    fn output_path(&self, default: PathBuf) -> PathBuf {
        match self.output {
            Some(path) => path.to_path_buf(),
            None => self.manifest_dir.join(default),
        }
    }
}

/// Execute the generate operation.
pub fn generate(manifest: &Manifest, opts: GenerateOptions) -> Result<GenerateReport> {
    let mut ctx = Pipeline::new()
        .run(manifest.clone())
        .wrap_err("Pipeline failed")?;

    let warnings = ctx
        .diagnostics
        .iter()
        .filter(|d| matches!(d.severity, Severity::Warning))
        .map(|d| d.message.clone())
        .collect();

    let ir = ctx.take_ir()?;
    let path = opts.output_path(BuildersRs::default_path(&ir));
    let file = Generator::new(&ir).file(path.clone());

    let result = if opts.dry_run {
        GenerationResult::Preview {
            content: file.contents(),
            path,
        }
    } else {
        file.write(Path::new(""))
            .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), "wrote builders");
        GenerationResult::Written { path }
    };

    Ok(GenerateReport {
        module_name: ir.meta.name.clone(),
        module_version: ir.meta.version.clone(),
        warnings,
        builders: ir.contracts.iter().map(|c| c.target.clone()).collect(),
        result,
    })
}
