//! Module-level IR: everything one manifest declares.

use std::collections::HashSet;

use serde::Serialize;

use crate::{BuilderContract, Error, Result};

/// A set of builder contracts generated together.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleIR {
    pub meta: ModuleMeta,
    pub contracts: Vec<BuilderContract>,
}

/// Module metadata.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleMeta {
    pub name: String,
    pub version: String,
    pub description: Option<String>,
}

impl ModuleIR {
    pub fn new(meta: ModuleMeta) -> Self {
        Self {
            meta,
            contracts: Vec::new(),
        }
    }

    /// Add a contract, rejecting a second contract with the same name.
    pub fn push(&mut self, contract: BuilderContract) -> Result<()> {
        if self.contract(&contract.name).is_some() {
            return Err(Error::DuplicateContract(contract.name));
        }
        self.contracts.push(contract);
        Ok(())
    }

    pub fn contract(&self, name: &str) -> Option<&BuilderContract> {
        self.contracts.iter().find(|c| c.name == name)
    }

    /// Validate every contract, and that builder type ids are unique.
    pub fn validate(&self) -> Result<()> {
        let mut targets = HashSet::new();
        for contract in &self.contracts {
            contract.validate()?;
            if !targets.insert(contract.target.as_str()) {
                return Err(Error::DuplicateContract(contract.target.clone()));
            }
        }
        Ok(())
    }

    /// Total number of unique properties across all contracts.
    pub fn property_count(&self) -> usize {
        self.contracts.iter().map(|c| c.properties.len()).sum()
    }
}
