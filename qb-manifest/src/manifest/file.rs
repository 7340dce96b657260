use std::path::{Path, PathBuf};

use super::Manifest;
use crate::{Error, Result};

/// A quickbuilder.toml file with both raw content and parsed manifest.
#[derive(Debug)]
pub struct QuickbuilderToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl QuickbuilderToml {
    /// Default file name looked up by the CLI.
    pub const FILE_NAME: &'static str = "quickbuilder.toml";

    /// Open and parse a quickbuilder.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Directory containing the manifest.
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}
