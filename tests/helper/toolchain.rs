//! Toolchain test utilities

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use typings_publisher::publish::error::ToolchainError;
use typings_publisher::publish::toolchain::PackageToolchain;
use typings_publisher::version::tag::VersionTag;

/// Toolchain that "installs" by writing the dependency's typings file and
/// records every invocation
pub struct FakeToolchain {
    typings_source: PathBuf,
    fail_publish_of: Option<VersionTag>,
    installed: Mutex<Option<VersionTag>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeToolchain {
    pub fn new(typings_source: PathBuf) -> Self {
        Self {
            typings_source,
            fail_publish_of: None,
            installed: Mutex::new(None),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing_publish_of(mut self, version: VersionTag) -> Self {
        self.fail_publish_of = Some(version);
        self
    }

    /// Shared log of invocations, still readable after the toolchain is moved
    pub fn calls(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl PackageToolchain for FakeToolchain {
    async fn install(&self, version: &VersionTag) -> Result<(), ToolchainError> {
        self.calls.lock().unwrap().push(format!("install {}", version));

        std::fs::create_dir_all(self.typings_source.parent().unwrap()).unwrap();
        std::fs::write(
            &self.typings_source,
            format!("// Type definitions for Electron {}\n", version),
        )
        .unwrap();

        *self.installed.lock().unwrap() = Some(*version);
        Ok(())
    }

    async fn publish(&self) -> Result<(), ToolchainError> {
        let installed = *self.installed.lock().unwrap();
        self.calls.lock().unwrap().push(format!(
            "publish {}",
            installed.map(|v| v.to_string()).unwrap_or_default()
        ));

        if installed.is_some() && installed == self.fail_publish_of {
            return Err(ToolchainError::Spawn {
                command: "npm publish".to_string(),
                source: std::io::Error::other("403 Forbidden"),
            });
        }
        Ok(())
    }
}
