use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use quickbuilder_manifest::QuickbuilderToml;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to quickbuilder.toml (defaults to ./quickbuilder.toml)
    #[arg(short, long, default_value = QuickbuilderToml::FILE_NAME)]
    pub config: PathBuf,

    /// Output file (defaults to src/<module>.rs next to the manifest)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let file = QuickbuilderToml::open(&self.config).unwrap_or_exit();
        let report = ops::generate(
            file.manifest(),
            GenerateOptions {
                manifest_dir: file.dir(),
                output: self.output.as_deref(),
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
