//! Compilation context passed through pipeline phases.

use eyre::{Result, eyre};
use quickbuilder_ir::ModuleIR;
use quickbuilder_manifest::Manifest;

use super::diagnostic::{Diagnostic, Severity};

/// State carried through every pipeline phase.
#[derive(Debug)]
pub struct CompilationContext {
    pub manifest: Manifest,
    /// The lowered module (populated by `LowerPhase`).
    pub ir: Option<ModuleIR>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(manifest: Manifest) -> Self {
        Self {
            manifest,
            ir: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Take the IR out of the context.
    ///
    /// # Errors
    ///
    /// Fails if `LowerPhase` has not run.
    pub fn take_ir(&mut self) -> Result<ModuleIR> {
        self.ir
            .take()
            .ok_or_else(|| eyre!("IR not set - did LowerPhase run?"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_manifest() -> Manifest {
        "[module]\nname = \"test\"\n".parse().unwrap()
    }

    #[test]
    fn test_context_creation() {
        let ctx = CompilationContext::new(make_test_manifest());
        assert!(ctx.ir.is_none());
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_context_diagnostics() {
        let mut ctx = CompilationContext::new(make_test_manifest());

        ctx.add_error("test", "test error");
        ctx.add_warning("test", "test warning");
        ctx.add_info("test", "just info");

        assert!(ctx.has_errors());
        assert!(ctx.has_warnings());
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.warning_count(), 1);
    }

    #[test]
    fn test_take_ir_before_lowering() {
        let mut ctx = CompilationContext::new(make_test_manifest());
        assert!(ctx.take_ir().is_err());
    }
}
