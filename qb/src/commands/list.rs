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
pub struct ListCommand {
    /// Path to quickbuilder.toml (defaults to ./quickbuilder.toml)
    #[arg(short, long, default_value = QuickbuilderToml::FILE_NAME)]
    pub config: PathBuf,

    /// Print the builders as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let file = QuickbuilderToml::open(&self.config).unwrap_or_exit();
        let report = ops::list(file.manifest())?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            report.render(&mut TerminalOutput::new());
        }
        Ok(())
    }
}
