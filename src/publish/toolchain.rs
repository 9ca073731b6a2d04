//! Package manager invocations (install / publish)

use std::path::PathBuf;

#[cfg(test)]
use mockall::automock;
use tokio::process::Command;
use tracing::{debug, error, info};

use crate::publish::error::ToolchainError;
use crate::version::tag::VersionTag;

/// Trait for the external install and publish steps
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait PackageToolchain: Send + Sync {
    /// Install dependencies after the manifest was pointed at `version`
    async fn install(&self, version: &VersionTag) -> Result<(), ToolchainError>;

    /// Publish the package in the project directory
    async fn publish(&self) -> Result<(), ToolchainError>;
}

/// Runs the npm CLI (or a compatible one) in the project directory
pub struct NpmToolchain {
    program: String,
    project_dir: PathBuf,
}

impl NpmToolchain {
    pub fn new(program: impl Into<String>, project_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            project_dir: project_dir.into(),
        }
    }

    fn build_command(&self, args: &[&str]) -> Command {
        debug!(
            "Building command: {} {} (in {})",
            self.program,
            args.join(" "),
            self.project_dir.display()
        );

        let mut cmd = Command::new(&self.program);
        cmd.args(args).current_dir(&self.project_dir);
        cmd
    }

    /// Run to completion with inherited stdio so npm's progress stays visible
    async fn execute(&self, args: &[&str]) -> Result<(), ToolchainError> {
        let command = format!("{} {}", self.program, args.join(" "));
        info!("Executing `{}`", command);

        let status = self
            .build_command(args)
            .status()
            .await
            .map_err(|source| ToolchainError::Spawn {
                command: command.clone(),
                source,
            })?;

        debug!("`{}` exit status: {:?}", command, status);

        if status.success() {
            Ok(())
        } else {
            error!("`{}` failed with {}", command, status);
            Err(ToolchainError::CommandFailed { command, status })
        }
    }
}

#[async_trait::async_trait]
impl PackageToolchain for NpmToolchain {
    async fn install(&self, version: &VersionTag) -> Result<(), ToolchainError> {
        debug!("Installing dependencies for {}", version);
        self.execute(&["install"]).await
    }

    async fn publish(&self) -> Result<(), ToolchainError> {
        self.execute(&["publish"]).await
    }
}
