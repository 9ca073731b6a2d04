//! Driver loop: discover new releases and publish them oldest first

use std::path::Path;
use std::time::Duration;

use tracing::{info, warn};

use crate::config::PublisherConfig;
use crate::publish::checkpoint::{CheckpointStore, JsonCheckpointStore};
use crate::publish::error::{PublishError, RunError};
use crate::publish::manifest::{JsonManifestStore, ManifestStore};
use crate::publish::publisher::{ProcessOutcome, Publisher};
use crate::publish::toolchain::{NpmToolchain, PackageToolchain};
use crate::publish::typings::TypingsExtractor;
use crate::version::discovery::VersionDiscovery;
use crate::version::error::RegistryError;
use crate::version::registries::NpmRegistry;
use crate::version::registry::Registry;
use crate::version::tag::VersionTag;

/// What a run accomplished
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Versions published during this run, in publish order
    pub published: Vec<VersionTag>,
    /// The candidate that stopped the run, if any
    pub failure: Option<(VersionTag, PublishError)>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}

pub struct Runner<R, C, M, T> {
    discovery: VersionDiscovery<R>,
    publisher: Publisher<C, M, T>,
}

/// Runner wired to the npm registry, the npm CLI and JSON files on disk
pub type NpmRunner = Runner<NpmRegistry, JsonCheckpointStore, JsonManifestStore, NpmToolchain>;

impl NpmRunner {
    pub fn from_config(
        project_dir: &Path,
        config: &PublisherConfig,
    ) -> Result<Self, RegistryError> {
        let registry = NpmRegistry::with_timeout(
            &config.registry_url,
            Duration::from_millis(config.fetch_timeout_ms),
        )?;

        let publisher = Publisher::new(
            config.package.clone(),
            JsonCheckpointStore::new(config.checkpoint_path(project_dir)),
            JsonManifestStore::new(config.manifest_path(project_dir)),
            NpmToolchain::new(config.npm_command.clone(), project_dir),
            TypingsExtractor::new(
                config.typings_source(project_dir),
                config.typings_destination(project_dir),
            ),
        );

        Ok(Self::new(
            VersionDiscovery::new(registry, config.package.clone()),
            publisher,
        ))
    }
}

impl<R, C, M, T> Runner<R, C, M, T>
where
    R: Registry,
    C: CheckpointStore,
    M: ManifestStore,
    T: PackageToolchain,
{
    pub fn new(discovery: VersionDiscovery<R>, publisher: Publisher<C, M, T>) -> Self {
        Self {
            discovery,
            publisher,
        }
    }

    /// Versions newer than the checkpoint, without publishing anything
    pub async fn pending(&self) -> Result<Vec<VersionTag>, RunError> {
        let checkpoint = self.publisher.current_checkpoint()?;
        Ok(self.discovery.discover(&checkpoint.last_version).await?)
    }

    /// Publish every version newer than the checkpoint in ascending order.
    ///
    /// Stops at the first candidate that fails: its manifest edit may already be
    /// on disk, and later versions must not be published past it. The next run
    /// retries from that candidate because the checkpoint did not advance.
    pub async fn run(&self) -> Result<RunSummary, RunError> {
        let mut checkpoint = self.publisher.current_checkpoint()?;
        let candidates = self.discovery.discover(&checkpoint.last_version).await?;
        let package_name = self.publisher.package_name();

        let mut summary = RunSummary::default();

        for candidate in candidates {
            if candidate <= checkpoint.last_version {
                continue;
            }

            info!("Processing {} version {}", package_name, candidate);

            match self.publisher.process_version(&candidate, &checkpoint).await {
                ProcessOutcome::Skipped => {}
                ProcessOutcome::Published(next) => {
                    summary.published.push(candidate);
                    checkpoint = next;
                }
                ProcessOutcome::Failed(e) => {
                    warn!(
                        "Halting run at {} version {}; checkpoint stays at {}",
                        package_name, candidate, checkpoint.last_version
                    );
                    summary.failure = Some((candidate, e));
                    break;
                }
            }
        }

        Ok(summary)
    }
}
