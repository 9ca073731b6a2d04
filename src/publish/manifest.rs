//! The publishing package's own package.json

use std::path::{Path, PathBuf};

#[cfg(test)]
use mockall::automock;
use serde_json::{Map, Value};
use tracing::info;

use crate::publish::error::ManifestError;
use crate::publish::json_file;
use crate::version::tag::VersionTag;

/// Trait for pointing the manifest at a new version of the tracked package
#[cfg_attr(test, automock)]
pub trait ManifestStore: Send + Sync {
    /// Pin `dependencies.<package_name>` to `version` and set the manifest's own
    /// `version` field to match.
    fn set_tracked_version(
        &self,
        package_name: &str,
        version: &VersionTag,
    ) -> Result<(), ManifestError>;
}

/// package.json on disk; unknown fields and key order are preserved
pub struct JsonManifestStore {
    path: PathBuf,
}

impl JsonManifestStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Value, ManifestError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| ManifestError::Io {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ManifestError::Invalid {
            path: self.path.clone(),
            source,
        })
    }
}

impl ManifestStore for JsonManifestStore {
    fn set_tracked_version(
        &self,
        package_name: &str,
        version: &VersionTag,
    ) -> Result<(), ManifestError> {
        let mut manifest = self.read()?;
        let root = manifest
            .as_object_mut()
            .ok_or_else(|| ManifestError::NotAnObject(self.path.clone()))?;

        let version = version.to_string();

        let dependencies = root
            .entry("dependencies")
            .or_insert_with(|| Value::Object(Map::new()))
            .as_object_mut()
            .ok_or_else(|| ManifestError::DependenciesNotAnObject(self.path.clone()))?;
        dependencies.insert(package_name.to_string(), Value::String(version.clone()));

        root.insert("version".to_string(), Value::String(version.clone()));

        json_file::write_pretty(&self.path, &manifest).map_err(|source| ManifestError::Io {
            path: self.path.clone(),
            source,
        })?;

        info!("Updated {:?}: {} -> {}", self.path, package_name, version);
        Ok(())
    }
}
