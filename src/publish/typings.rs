//! Copies the generated declaration file out of the installed dependency

use std::path::PathBuf;

use tracing::info;

use crate::publish::error::TypingsError;

pub struct TypingsExtractor {
    source: PathBuf,
    destination: PathBuf,
}

impl TypingsExtractor {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// Copy the typings file, creating the output directory if needed.
    /// Returns the number of bytes copied.
    pub fn extract(&self) -> Result<u64, TypingsError> {
        if !self.source.is_file() {
            return Err(TypingsError::SourceMissing(self.source.clone()));
        }

        let io_error = |source| TypingsError::Io {
            path: self.destination.clone(),
            source,
        };

        if let Some(parent) = self.destination.parent() {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }
        let bytes = std::fs::copy(&self.source, &self.destination).map_err(io_error)?;

        info!(
            "Typings extracted: {:?} -> {:?} ({} bytes)",
            self.source, self.destination, bytes
        );
        Ok(bytes)
    }
}
