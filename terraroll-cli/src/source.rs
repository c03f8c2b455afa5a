use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use terraroll_core::{ConfigLoadError, ConfigSource};

/// Reads the configuration document from the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for FileSource {
    fn fetch_document(&self) -> Result<String, ConfigLoadError> {
        log::debug!("reading configuration from {}", self.path.display());
        std::fs::read_to_string(&self.path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => ConfigLoadError::NotFound(self.path.display().to_string()),
            ErrorKind::InvalidData => {
                ConfigLoadError::Malformed(format!("{}: {err}", self.path.display()))
            }
            _ => ConfigLoadError::Network(format!("{}: {err}", self.path.display())),
        })
    }
}
