//! Persisted marker of the last published version

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::publish::error::CheckpointError;
use crate::publish::json_file;
use crate::version::tag::VersionTag;

/// Last version that was successfully published
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkpoint {
    pub last_version: VersionTag,
}

impl Checkpoint {
    pub fn new(last_version: VersionTag) -> Self {
        Self { last_version }
    }
}

/// Trait for reading and persisting the checkpoint
#[cfg_attr(test, automock)]
pub trait CheckpointStore: Send + Sync {
    fn load(&self) -> Result<Checkpoint, CheckpointError>;

    fn save(&self, checkpoint: &Checkpoint) -> Result<(), CheckpointError>;
}

/// Checkpoint stored as `{ "lastVersion": "x.y.z" }`
pub struct JsonCheckpointStore {
    path: PathBuf,
}

impl JsonCheckpointStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> CheckpointError {
        CheckpointError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl CheckpointStore for JsonCheckpointStore {
    fn load(&self) -> Result<Checkpoint, CheckpointError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CheckpointError::Missing(self.path.clone()),
            _ => self.io_error(e),
        })?;

        let checkpoint: Checkpoint =
            serde_json::from_str(&content).map_err(|source| CheckpointError::Invalid {
                path: self.path.clone(),
                source,
            })?;

        debug!(
            "Loaded checkpoint {} from {:?}",
            checkpoint.last_version, self.path
        );
        Ok(checkpoint)
    }

    fn save(&self, checkpoint: &Checkpoint) -> Result<(), CheckpointError> {
        json_file::write_pretty(&self.path, checkpoint).map_err(|e| self.io_error(e))?;
        debug!(
            "Saved checkpoint {} to {:?}",
            checkpoint.last_version, self.path
        );
        Ok(())
    }
}
