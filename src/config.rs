use serde::Deserialize;
use std::path::{Path, PathBuf};

use thiserror::Error;

// =============================================================================
// Registry-related constants
// =============================================================================

/// Default base URL for npm registry
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// Package whose releases drive republishing
pub const DEFAULT_PACKAGE: &str = "electron";

/// Timeout for fetch operations in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

// =============================================================================
// Project file names
// =============================================================================

pub const DEFAULT_CHECKPOINT_FILE: &str = "lastVersion.json";
pub const DEFAULT_MANIFEST_FILE: &str = "package.json";
pub const DEFAULT_TYPINGS_FILE: &str = "electron.d.ts";
pub const DEFAULT_OUTPUT_DIR: &str = "dist";
pub const DEFAULT_NPM_COMMAND: &str = "npm";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Publisher configuration
///
/// Every field is optional in the config file; missing fields fall back to
/// the defaults above. Relative paths are resolved against the project directory.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PublisherConfig {
    /// Name of the tracked npm package
    pub package: String,
    pub registry_url: String,
    pub checkpoint_file: PathBuf,
    pub manifest_file: PathBuf,
    /// Declaration file shipped inside the tracked package
    pub typings_file: String,
    pub output_dir: PathBuf,
    pub npm_command: String,
    pub fetch_timeout_ms: u64,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            checkpoint_file: PathBuf::from(DEFAULT_CHECKPOINT_FILE),
            manifest_file: PathBuf::from(DEFAULT_MANIFEST_FILE),
            typings_file: DEFAULT_TYPINGS_FILE.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            npm_command: DEFAULT_NPM_COMMAND.to_string(),
            fetch_timeout_ms: FETCH_TIMEOUT_MS,
        }
    }
}

impl PublisherConfig {
    /// Loads the config from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn checkpoint_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.checkpoint_file)
    }

    pub fn manifest_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.manifest_file)
    }

    /// Location of the declaration file after `npm install`
    pub fn typings_source(&self, project_dir: &Path) -> PathBuf {
        project_dir
            .join("node_modules")
            .join(&self.package)
            .join(&self.typings_file)
    }

    pub fn typings_destination(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.output_dir).join(&self.typings_file)
    }
}

/// Returns the path to the data directory for typings-publisher.
/// Uses $XDG_DATA_HOME/typings-publisher if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/typings-publisher,
/// or ./typings-publisher if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the name of the log file inside the data directory.
pub fn log_file_name() -> &'static str {
    "typings-publisher.log"
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("typings-publisher")
}
