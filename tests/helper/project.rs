//! Project directory test utilities

use std::path::PathBuf;

use serde_json::Value;
use tempfile::TempDir;

use typings_publisher::config::PublisherConfig;
use typings_publisher::publish::checkpoint::JsonCheckpointStore;
use typings_publisher::publish::manifest::JsonManifestStore;
use typings_publisher::publish::publisher::Publisher;
use typings_publisher::publish::runner::Runner;
use typings_publisher::publish::typings::TypingsExtractor;
use typings_publisher::version::discovery::VersionDiscovery;
use typings_publisher::version::registries::NpmRegistry;

use super::toolchain::FakeToolchain;

pub type TestRunner = Runner<NpmRegistry, JsonCheckpointStore, JsonManifestStore, FakeToolchain>;

/// A typings package checked out in a temp dir
pub struct TestProject {
    pub dir: TempDir,
    pub config: PublisherConfig,
}

impl TestProject {
    pub fn new(last_version: &str, dependency: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let config = PublisherConfig::default();

        std::fs::write(
            config.checkpoint_path(dir.path()),
            format!("{{\n  \"lastVersion\": \"{}\"\n}}", last_version),
        )
        .unwrap();
        std::fs::write(
            config.manifest_path(dir.path()),
            format!(
                r#"{{
  "name": "electron-typings",
  "version": "{}",
  "types": "dist/electron.d.ts",
  "dependencies": {{
    "electron": "{}"
  }}
}}"#,
                last_version, dependency
            ),
        )
        .unwrap();

        Self { dir, config }
    }

    pub fn typings_source(&self) -> PathBuf {
        self.config.typings_source(self.dir.path())
    }

    pub fn typings_destination(&self) -> PathBuf {
        self.config.typings_destination(self.dir.path())
    }

    pub fn checkpoint(&self) -> Value {
        read_json(self.config.checkpoint_path(self.dir.path()))
    }

    pub fn manifest(&self) -> Value {
        read_json(self.config.manifest_path(self.dir.path()))
    }

    pub fn raw_files(&self) -> (String, String) {
        (
            std::fs::read_to_string(self.config.checkpoint_path(self.dir.path())).unwrap(),
            std::fs::read_to_string(self.config.manifest_path(self.dir.path())).unwrap(),
        )
    }

    pub fn publisher(
        &self,
        toolchain: FakeToolchain,
    ) -> Publisher<JsonCheckpointStore, JsonManifestStore, FakeToolchain> {
        Publisher::new(
            self.config.package.clone(),
            JsonCheckpointStore::new(self.config.checkpoint_path(self.dir.path())),
            JsonManifestStore::new(self.config.manifest_path(self.dir.path())),
            toolchain,
            TypingsExtractor::new(self.typings_source(), self.typings_destination()),
        )
    }

    pub fn runner(&self, registry_url: &str, toolchain: FakeToolchain) -> TestRunner {
        Runner::new(
            VersionDiscovery::new(
                NpmRegistry::new(registry_url).unwrap(),
                self.config.package.clone(),
            ),
            self.publisher(toolchain),
        )
    }
}

fn read_json(path: PathBuf) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

/// npm registry document listing `versions`
pub fn registry_body(versions: &[&str]) -> String {
    let versions: serde_json::Map<String, Value> = versions
        .iter()
        .map(|v| (v.to_string(), serde_json::json!({ "version": v })))
        .collect();

    serde_json::json!({ "name": "electron", "versions": versions }).to_string()
}
