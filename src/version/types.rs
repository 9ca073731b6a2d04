//! Common types for version management

/// Snapshot of every version a registry lists for one package
///
/// Versions are raw registry keys; they may include pre-releases or
/// anything else the registry accepted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackageVersions {
    pub versions: Vec<String>,
}

impl PackageVersions {
    /// Creates a new PackageVersions with the given versions
    pub fn new(versions: Vec<String>) -> Self {
        Self { versions }
    }

    /// Returns true if the collection is empty
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.versions.iter().map(String::as_str)
    }
}
