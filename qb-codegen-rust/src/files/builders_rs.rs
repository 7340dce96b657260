use std::path::{Path, PathBuf};

use quickbuilder_codegen::RUST_NAMING;
use quickbuilder_core::{FileRules, GeneratedFile};
use quickbuilder_ir::ModuleIR;

use super::GENERATED_HEADER;
use crate::Generator;

/// The generated builders module.
pub struct BuildersRs<'a> {
    ir: &'a ModuleIR,
    file_name: PathBuf,
}

impl<'a> BuildersRs<'a> {
    pub fn new(ir: &'a ModuleIR, file_name: impl Into<PathBuf>) -> Self {
        Self {
            ir,
            file_name: file_name.into(),
        }
    }

    /// `src/<module>.rs`, e.g. `src/fruit_builders.rs` for `fruit-builders`.
    pub fn default_path(ir: &ModuleIR) -> PathBuf {
        Path::new("src").join(format!("{}.rs", RUST_NAMING.file_name(&ir.meta.name)))
    }
}

impl GeneratedFile for BuildersRs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.file_name)
    }

    fn rules(&self) -> FileRules {
        FileRules::generated(GENERATED_HEADER)
    }

    fn render(&self) -> String {
        Generator::new(self.ir).render()
    }
}
