use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

use crate::version::error::RegistryError;

#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("Checkpoint file not found: {0:?}")]
    Missing(PathBuf),

    #[error("Failed to access checkpoint {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid checkpoint {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to access manifest {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid manifest {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Manifest {0:?} is not a JSON object")]
    NotAnObject(PathBuf),

    #[error("Manifest {0:?} has a non-object \"dependencies\" field")]
    DependenciesNotAnObject(PathBuf),
}

#[derive(Debug, Error)]
pub enum ToolchainError {
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("`{command}` failed with {status}")]
    CommandFailed { command: String, status: ExitStatus },
}

#[derive(Debug, Error)]
pub enum TypingsError {
    #[error("Typings file not found: {0:?}")]
    SourceMissing(PathBuf),

    #[error("Failed to copy typings to {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Failure while processing one candidate version
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Manifest update failed: {0}")]
    Manifest(#[from] ManifestError),

    #[error("Install failed: {0}")]
    Install(#[source] ToolchainError),

    #[error("Typings extraction failed: {0}")]
    Typings(#[from] TypingsError),

    #[error("Publish failed: {0}")]
    Publish(#[source] ToolchainError),

    #[error("Checkpoint update failed: {0}")]
    Checkpoint(#[from] CheckpointError),
}

/// Failure that ends a run before any candidate is processed
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Checkpoint(#[from] CheckpointError),

    #[error("Failed to fetch versions: {0}")]
    Registry(#[from] RegistryError),
}
