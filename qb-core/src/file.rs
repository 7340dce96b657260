use std::path::{Path, PathBuf};

use eyre::Result;

/// A file produced by a generator.
pub trait GeneratedFile {
    /// Path of the file relative to the output directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file body, without the header
    fn render(&self) -> String;

    /// Render the header followed by the body
    fn contents(&self) -> String {
        match self.rules().header {
            Some(header) => format!("{}\n\n{}", header.trim_end(), self.render()),
            None => self.render(),
        }
    }

    /// Write the file to disk, honouring its overwrite rule.
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);

        if self.rules().overwrite == Overwrite::IfMissing && path.exists() {
            return Ok(WriteResult::Skipped);
        }

        write_file(&path, &self.contents())?;
        Ok(WriteResult::Written)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Outcome of [`GeneratedFile::write`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    Written,
    /// An existing file was left untouched
    Skipped,
}

/// How a generated file is written
#[derive(Debug, Clone)]
pub struct FileRules {
    pub overwrite: Overwrite,
    pub header: Option<&'static str>,
}

impl FileRules {
    /// Rules for generated code: always overwrite, with a header.
    pub fn generated(header: &'static str) -> Self {
        Self {
            overwrite: Overwrite::Always,
            header: Some(header),
        }
    }

    /// Rules for user-owned files: create once, never touch again.
    pub fn scaffold() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
            header: None,
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    Always,
    IfMissing,
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            overwrite: Overwrite::Always,
            header: None,
        }
    }
}
