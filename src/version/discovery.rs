//! Discovery of releases newer than a baseline

use tracing::{debug, info};

use crate::version::error::RegistryError;
use crate::version::registry::Registry;
use crate::version::tag::VersionTag;

/// Select the versions strictly newer than `baseline`, oldest first.
///
/// Entries that are not plain `major.minor.patch` releases are skipped.
/// Duplicates collapse to one entry.
pub fn list_newer_versions<'a, I>(baseline: &VersionTag, all_versions: I) -> Vec<VersionTag>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut newer: Vec<VersionTag> = all_versions
        .into_iter()
        .filter_map(|raw| {
            VersionTag::parse(raw)
                .inspect_err(|e| debug!("Ignoring registry version: {}", e))
                .ok()
        })
        .filter(|tag| tag > baseline)
        .collect();

    newer.sort();
    newer.dedup();
    newer
}

/// Finds new releases of one package on a registry
pub struct VersionDiscovery<R> {
    registry: R,
    package_name: String,
}

impl<R: Registry> VersionDiscovery<R> {
    pub fn new(registry: R, package_name: impl Into<String>) -> Self {
        Self {
            registry,
            package_name: package_name.into(),
        }
    }

    /// Fetch the registry's version set and return the releases newer than `baseline`
    pub async fn discover(&self, baseline: &VersionTag) -> Result<Vec<VersionTag>, RegistryError> {
        let all_versions = self
            .registry
            .fetch_all_versions(&self.package_name)
            .await?;

        let newer = list_newer_versions(baseline, all_versions.iter());
        info!(
            "Found {} {} version(s) newer than {}",
            newer.len(),
            self.package_name,
            baseline
        );

        Ok(newer)
    }
}
