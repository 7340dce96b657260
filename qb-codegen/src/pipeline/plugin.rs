//! Pipeline plugin trait.

use eyre::Result;

use super::CompilationContext;

/// A plugin that hooks into the compilation pipeline.
///
/// Plugins are called before and after each phase and may inspect or modify
/// the context. Returning an error aborts the pipeline.
///
/// ```ignore
/// struct DenyWarnings;
///
/// impl Plugin for DenyWarnings {
///     fn name(&self) -> &'static str { "deny-warnings" }
///
///     fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
///         if ctx.has_warnings() {
///             eyre::bail!("{phase} produced warnings");
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Plugin: Send + Sync {
    fn name(&self) -> &'static str;

    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }

    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }
}
