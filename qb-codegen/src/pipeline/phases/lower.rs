//! Lower phase - transforms the manifest into a `ModuleIR`.

use std::collections::HashMap;

use eyre::{Result, bail};
use quickbuilder_ir::{BuilderContract, ModuleIR, ModuleMeta, PropertyDescriptor};
use quickbuilder_manifest::{BuilderDecl, Manifest, PropertyDecl};
use tracing::debug;

use crate::{
    naming::RUST_NAMING,
    pipeline::{CompilationContext, Diagnostic, Phase},
};

/// Phase that transforms the manifest into the module IR.
///
/// Repeated property declarations collapse into one descriptor; IR errors
/// become diagnostics located at the offending builder.
pub struct LowerPhase;

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn description(&self) -> &'static str {
        "Transform the manifest into builder contracts"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        match lower_manifest(&ctx.manifest) {
            Ok(ir) => {
                debug!(
                    contracts = ir.contracts.len(),
                    properties = ir.property_count(),
                    "lowered manifest"
                );
                ctx.ir = Some(ir);
                Ok(())
            }
            Err(diagnostic) => {
                ctx.add_diagnostic(diagnostic);
                bail!("lowering failed with {} error(s)", ctx.error_count());
            }
        }
    }
}

/// Lower a manifest into a `ModuleIR`.
pub fn lower_manifest(manifest: &Manifest) -> std::result::Result<ModuleIR, Diagnostic> {
    let mut ir = ModuleIR::new(lower_meta(manifest));

    for decl in &manifest.builders {
        let located = |e: quickbuilder_ir::Error| {
            Diagnostic::error("lower", e.to_string()).at(format!("builder.{}", decl.name()))
        };
        let contract = lower_builder(decl).map_err(located)?;
        check_field_names(&contract)?;
        ir.push(contract).map_err(located)?;
    }

    ir.validate()
        .map_err(|e| Diagnostic::error("lower", e.to_string()))?;
    Ok(ir)
}

/// Reject contracts whose property names map to the same Rust field.
pub fn check_field_names(contract: &BuilderContract) -> std::result::Result<(), Diagnostic> {
    let mut fields: HashMap<String, &str> = HashMap::new();
    for property in contract.properties.iter() {
        let field = RUST_NAMING.field_name(&property.name);
        if let Some(first) = fields.insert(field.clone(), &property.name) {
            return Err(Diagnostic::error(
                "lower",
                format!(
                    "properties '{}' and '{}' both become the field '{}'",
                    first, property.name, field
                ),
            )
            .at(format!("builder.{}", contract.name)));
        }
    }
    Ok(())
}

fn lower_meta(manifest: &Manifest) -> ModuleMeta {
    ModuleMeta {
        name: manifest.module.name.clone(),
        version: manifest.module.version.clone(),
        description: manifest.module.description.clone(),
    }
}

fn lower_builder(decl: &BuilderDecl) -> quickbuilder_ir::Result<BuilderContract> {
    let properties = decl.properties.iter().map(lower_property);
    let mut contract = BuilderContract::from_properties(decl.name(), decl.built(), properties)?
        .target(decl.target_name());

    if let Some(generator) = &decl.generator {
        contract = contract.generator(generator);
    }
    if !decl.default_constructor {
        contract = contract.without_default_constructor();
    }
    if let Some(description) = &decl.description {
        contract = contract.description(description);
    }
    Ok(contract)
}

fn lower_property(decl: &PropertyDecl) -> PropertyDescriptor {
    let mut descriptor = PropertyDescriptor::new(decl.name(), decl.declared_type());
    if decl.builder {
        descriptor = descriptor.builder();
    }
    descriptor = match decl.setter_name() {
        Some(setter) => descriptor.setter(setter),
        None => descriptor.without_setter(),
    };
    if let Some(description) = &decl.description {
        descriptor = descriptor.description(description);
    }
    descriptor
}
