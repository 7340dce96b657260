use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use quickbuilder_codegen_rust::files::QuickbuilderTomlFile;
use quickbuilder_core::{GeneratedFile, WriteResult};

#[derive(Args)]
pub struct InitCommand {
    /// Module name (defaults to the output directory's name)
    #[arg(default_value = ".")]
    pub name: String,

    /// Output directory (defaults to the current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let name = self.module_name()?;
        let file = QuickbuilderTomlFile::new(&name);
        let path = file.path(&self.output);

        match file.write(&self.output)? {
            WriteResult::Written => {
                println!("Created {} for module '{}'", path.display(), name);
                println!();
                println!("Next steps:");
                println!("  qb check -c {}", path.display());
                println!("  qb generate -c {}", path.display());
            }
            WriteResult::Skipped => {
                println!("{} already exists, leaving it untouched", path.display());
            }
        }
        Ok(())
    }

    /// `.` resolves to the name of the output directory.
    fn module_name(&self) -> Result<String> {
        if self.name != "." {
            return Ok(self.name.clone());
        }
        let dir = std::path::absolute(&self.output)
            .wrap_err("Failed to resolve output directory")?;
        dir.file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| eyre::eyre!("Output directory has no valid name"))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_module_name_defaults_to_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("fruit-builders");
        let cmd = InitCommand {
            name: ".".into(),
            output: dir,
        };
        assert_eq!(cmd.module_name().unwrap(), "fruit-builders");
    }

    #[test]
    fn test_explicit_name_wins() {
        let cmd = InitCommand {
            name: "pantry".into(),
            output: PathBuf::from("."),
        };
        assert_eq!(cmd.module_name().unwrap(), "pantry");
    }

    #[test]
    fn test_init_writes_starter_manifest() {
        let temp = TempDir::new().unwrap();
        let cmd = InitCommand {
            name: "pantry".into(),
            output: temp.path().to_path_buf(),
        };
        cmd.run().unwrap();

        let content = std::fs::read_to_string(temp.path().join("quickbuilder.toml")).unwrap();
        assert!(content.contains("name = \"pantry\""));

        // A second run leaves the file alone.
        std::fs::write(temp.path().join("quickbuilder.toml"), "[module]\nname = \"mine\"\n").unwrap();
        cmd.run().unwrap();
        let content = std::fs::read_to_string(temp.path().join("quickbuilder.toml")).unwrap();
        assert!(content.contains("mine"));
    }
}
