//! Processing of a single candidate version

use tracing::{error, info};

use crate::publish::checkpoint::{Checkpoint, CheckpointStore};
use crate::publish::error::{CheckpointError, PublishError};
use crate::publish::manifest::ManifestStore;
use crate::publish::toolchain::PackageToolchain;
use crate::publish::typings::TypingsExtractor;
use crate::version::tag::VersionTag;

/// Result of processing one candidate
#[derive(Debug)]
pub enum ProcessOutcome {
    /// Candidate equals the checkpoint; nothing was touched
    Skipped,
    /// Candidate was published and the checkpoint advanced
    Published(Checkpoint),
    /// A step failed. Earlier steps (e.g. the manifest edit) are not rolled back.
    Failed(PublishError),
}

pub struct Publisher<C, M, T> {
    package_name: String,
    checkpoints: C,
    manifest: M,
    toolchain: T,
    typings: TypingsExtractor,
}

impl<C, M, T> Publisher<C, M, T>
where
    C: CheckpointStore,
    M: ManifestStore,
    T: PackageToolchain,
{
    pub fn new(
        package_name: impl Into<String>,
        checkpoints: C,
        manifest: M,
        toolchain: T,
        typings: TypingsExtractor,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            checkpoints,
            manifest,
            toolchain,
            typings,
        }
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn current_checkpoint(&self) -> Result<Checkpoint, CheckpointError> {
        self.checkpoints.load()
    }

    /// Publish `candidate` unless it is already the checkpoint
    ///
    /// Steps: manifest update -> install -> typings extraction -> publish ->
    /// checkpoint save. The first failing step ends processing.
    pub async fn process_version(
        &self,
        candidate: &VersionTag,
        checkpoint: &Checkpoint,
    ) -> ProcessOutcome {
        if *candidate == checkpoint.last_version {
            info!("Version {} is already published. Skipping.", candidate);
            return ProcessOutcome::Skipped;
        }

        match self.publish(candidate).await {
            Ok(next) => ProcessOutcome::Published(next),
            Err(e) => {
                error!(
                    "Failed to publish {} version {}: {}",
                    self.package_name, candidate, e
                );
                ProcessOutcome::Failed(e)
            }
        }
    }

    async fn publish(&self, candidate: &VersionTag) -> Result<Checkpoint, PublishError> {
        self.manifest.set_tracked_version(&self.package_name, candidate)?;

        self.toolchain
            .install(candidate)
            .await
            .map_err(PublishError::Install)?;

        self.typings.extract()?;

        self.toolchain
            .publish()
            .await
            .map_err(PublishError::Publish)?;
        info!("Package published successfully for {} {}", self.package_name, candidate);

        let next = Checkpoint::new(*candidate);
        self.checkpoints.save(&next)?;

        Ok(next)
    }
}
