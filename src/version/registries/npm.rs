//! npm registry API implementation

use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;
use serde::de::IgnoredAny;
use tracing::{debug, warn};

use crate::config::FETCH_TIMEOUT_MS;
use crate::version::error::RegistryError;
use crate::version::registry::Registry;
use crate::version::types::PackageVersions;

/// Response from npm registry API; per-version metadata is skipped unparsed
#[derive(Debug, Deserialize)]
struct NpmPackageResponse {
    versions: HashMap<String, IgnoredAny>,
}

/// Registry implementation for npm registry API
pub struct NpmRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl NpmRegistry {
    /// Creates a new NpmRegistry with a custom base URL
    pub fn new(base_url: &str) -> Result<Self, RegistryError> {
        Self::with_timeout(base_url, Duration::from_millis(FETCH_TIMEOUT_MS))
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, RegistryError> {
        let client = reqwest::Client::builder()
            .user_agent("typings-publisher")
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Encode package name for URL (handles scoped packages)
    fn encode_package_name(package_name: &str) -> String {
        if package_name.starts_with('@') {
            // Scoped package: @scope/name -> @scope%2Fname
            package_name.replace('/', "%2F")
        } else {
            package_name.to_string()
        }
    }
}

#[async_trait::async_trait]
impl Registry for NpmRegistry {
    async fn fetch_all_versions(
        &self,
        package_name: &str,
    ) -> Result<PackageVersions, RegistryError> {
        let encoded_name = Self::encode_package_name(package_name);
        let url = format!("{}/{}", self.base_url, encoded_name);

        debug!("Fetching versions from {}", url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(package_name.to_string()));
        }

        if !status.is_success() {
            warn!("npm registry returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let package_info: NpmPackageResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse npm registry response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        let versions: Vec<String> = package_info.versions.into_keys().collect();
        debug!("npm registry listed {} versions of {}", versions.len(), package_name);

        Ok(PackageVersions::new(versions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn fetch_all_versions_returns_every_version_key() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/electron")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "name": "electron",
                    "versions": {
                        "10.0.0": {
                            "name": "electron",
                            "dependencies": { "@electron/get": "^1.0.1" },
                            "dist": { "shasum": "0f6e1b6a", "fileCount": 12 },
                            "scripts": { "postinstall": "node install.js" }
                        },
                        "11.0.0-beta.1": { "deprecated": true, "_npmUser": null },
                        "9.9.9": []
                    }
                }"#,
            )
            .create_async()
            .await;

        let registry = NpmRegistry::new(&server.url()).unwrap();
        let result = registry.fetch_all_versions("electron").await.unwrap();

        mock.assert_async().await;
        let mut versions = result.versions;
        versions.sort();
        assert_eq!(
            versions,
            vec![
                "10.0.0".to_string(),
                "11.0.0-beta.1".to_string(),
                "9.9.9".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn fetch_all_versions_returns_not_found_for_nonexistent_package() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/nonexistent-package")
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": "Not found"}"#)
            .create_async()
            .await;

        let registry = NpmRegistry::new(&server.url()).unwrap();
        let result = registry.fetch_all_versions("nonexistent-package").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(RegistryError::NotFound(_))));
    }

    #[tokio::test]
    async fn fetch_all_versions_returns_invalid_response_for_server_error() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/electron")
            .with_status(503)
            .create_async()
            .await;

        let registry = NpmRegistry::new(&server.url()).unwrap();
        let result = registry.fetch_all_versions("electron").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(RegistryError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn fetch_all_versions_returns_invalid_response_without_versions_field() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/electron")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"name": "electron"}"#)
            .create_async()
            .await;

        let registry = NpmRegistry::new(&server.url()).unwrap();
        let result = registry.fetch_all_versions("electron").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(RegistryError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn fetch_all_versions_handles_scoped_package() {
        let mut server = Server::new_async().await;

        // Scoped packages use URL encoding: @types/node -> @types%2Fnode
        let mock = server
            .mock("GET", "/@types%2Fnode")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "name": "@types/node",
                    "versions": {
                        "20.0.0": {}
                    }
                }"#,
            )
            .create_async()
            .await;

        let registry = NpmRegistry::new(&format!("{}/", server.url())).unwrap();
        let result = registry.fetch_all_versions("@types/node").await.unwrap();

        mock.assert_async().await;
        assert_eq!(result.versions, vec!["20.0.0".to_string()]);
    }

    #[tokio::test]
    async fn fetch_all_versions_returns_empty_for_package_without_versions() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/empty-package")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "name": "empty-package",
                    "versions": {}
                }"#,
            )
            .create_async()
            .await;

        let registry = NpmRegistry::new(&server.url()).unwrap();
        let result = registry.fetch_all_versions("empty-package").await.unwrap();

        mock.assert_async().await;
        assert!(result.is_empty());
    }
}
