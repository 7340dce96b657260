//! List operation - lowered contracts of a manifest.

use eyre::{Context, Result};
use quickbuilder_codegen::pipeline::Pipeline;
use quickbuilder_ir::{BuilderContract, PropertyDescriptor};
use quickbuilder_manifest::Manifest;

use crate::reports::{ContractEntry, ListReport, PropertyEntry};

/// Lower the manifest and describe each contract with its unique properties.
pub fn list(manifest: &Manifest) -> Result<ListReport> {
    let mut ctx = Pipeline::new()
        .run(manifest.clone())
        .wrap_err("Validation failed")?;
    let ir = ctx.take_ir()?;

    Ok(ListReport {
        module: ir.meta.name.clone(),
        version: ir.meta.version.clone(),
        builders: ir.contracts.iter().map(contract_entry).collect(),
    })
}

fn contract_entry(contract: &BuilderContract) -> ContractEntry {
    ContractEntry {
        name: contract.name.clone(),
        target: contract.target.clone(),
        built: contract.built.clone(),
        generator: contract.generator.clone(),
        default_constructor: contract.default_constructor,
        description: contract.description.clone(),
        properties: contract.properties.iter().map(property_entry).collect(),
    }
}

fn property_entry(property: &PropertyDescriptor) -> PropertyEntry {
    PropertyEntry {
        name: property.name.clone(),
        ty: property.declared_type.to_string(),
        builder: property.is_builder,
        setter: property.setter.clone(),
    }
}
