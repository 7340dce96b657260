use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use quickbuilder_manifest::QuickbuilderToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to quickbuilder.toml (defaults to ./quickbuilder.toml)
    #[arg(short, long, default_value = QuickbuilderToml::FILE_NAME)]
    pub config: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let file = QuickbuilderToml::open(&self.config).unwrap_or_exit();
        let report = ops::check(file.manifest(), &self.config)?;

        report.render(&mut TerminalOutput::new());
        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
