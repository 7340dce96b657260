//! Pipeline orchestrator.

use eyre::Result;
use quickbuilder_manifest::Manifest;
use tracing::debug;

use super::{
    CompilationContext, Phase, Plugin,
    phases::{LowerPhase, ValidatePhase},
};

/// The compilation pipeline orchestrator.
///
/// Runs the built-in phases (validate, lower) followed by any user phases,
/// calling plugin hooks around each one.
///
/// ```ignore
/// let ctx = Pipeline::new()
///     .plugin(DenyWarnings)
///     .phase(MyCustomPhase)
///     .run(manifest)?;
/// ```
pub struct Pipeline {
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            validate: ValidatePhase::new(),
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Replace the built-in validate phase, e.g. to change its lints.
    pub fn validate_with(mut self, validate: ValidatePhase) -> Self {
        self.validate = validate;
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run the pipeline on a manifest.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase or plugin fails.
    pub fn run(&self, manifest: Manifest) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(manifest);
        self.run_with(&mut ctx)?;
        Ok(ctx)
    }

    /// Run the pipeline on an existing context.
    ///
    /// Diagnostics recorded before a failing phase stay in `ctx`, so callers
    /// can report them.
    pub fn run_with(&self, ctx: &mut CompilationContext) -> Result<()> {
        let builtin: [&dyn Phase; 2] = [&self.validate, &LowerPhase];
        let user = self.phases.iter().map(|p| p.as_ref());

        for phase in builtin.into_iter().chain(user) {
            self.run_phase(phase, ctx)?;
        }
        Ok(())
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();
        debug!(phase = phase_name, "running phase");

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        debug!(
            phase = phase_name,
            errors = ctx.error_count(),
            warnings = ctx.warning_count(),
            "phase finished"
        );
        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;

    struct CountingPlugin {
        before: Arc<AtomicUsize>,
        after: Arc<AtomicUsize>,
    }

    impl Plugin for CountingPlugin {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn on_before_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.before.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn on_after_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.after.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct RecordingPhase(Arc<Mutex<Vec<String>>>);

    impl Phase for RecordingPhase {
        fn name(&self) -> &'static str {
            "record"
        }

        fn description(&self) -> &'static str {
            "Record the lowered contract names"
        }

        fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
            let ir = ctx.ir.as_ref().ok_or_else(|| eyre::eyre!("no IR"))?;
            let mut seen = self.0.lock().unwrap();
            seen.extend(ir.contracts.iter().map(|c| c.name.clone()));
            Ok(())
        }
    }

    fn make_test_manifest() -> Manifest {
        r#"
[module]
name = "test"

[[builder]]
name = "Fruit"
built = "crate::Fruit"
description = "A fruit"

[[builder.property]]
name = "name"
type = "String"
"#
        .parse()
        .unwrap()
    }

    #[test]
    fn test_pipeline_populates_ir() {
        let mut ctx = Pipeline::new().run(make_test_manifest()).unwrap();
        let ir = ctx.take_ir().unwrap();
        assert_eq!(ir.meta.name, "test");
        assert_eq!(ir.contracts.len(), 1);
    }

    #[test]
    fn test_plugin_hooks() {
        let before = Arc::new(AtomicUsize::new(0));
        let after = Arc::new(AtomicUsize::new(0));
        let plugin = CountingPlugin {
            before: before.clone(),
            after: after.clone(),
        };

        Pipeline::new()
            .plugin(plugin)
            .run(make_test_manifest())
            .unwrap();

        // validate + lower
        assert_eq!(before.load(Ordering::SeqCst), 2);
        assert_eq!(after.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_user_phase_runs_after_lowering() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        Pipeline::new()
            .phase(RecordingPhase(seen.clone()))
            .run(make_test_manifest())
            .unwrap();
        assert_eq!(*seen.lock().unwrap(), vec!["Fruit".to_string()]);
    }

    #[test]
    fn test_failed_run_keeps_diagnostics() {
        let manifest: Manifest = r#"
[module]
name = "test"

[[builder]]
name = "Seed"
built = "crate::Seed"
description = "A seed"
default_constructor = false
"#
        .parse()
        .unwrap();

        let mut ctx = CompilationContext::new(manifest);
        assert!(Pipeline::new().run_with(&mut ctx).is_err());
        assert_eq!(ctx.error_count(), 1);
        assert!(ctx.ir.is_none());
    }
}
