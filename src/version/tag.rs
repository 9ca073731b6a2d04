//! Strict `major.minor.patch` version tags

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::version::error::TagError;

/// A released version of the tracked package
///
/// Ordering is lexicographic over (major, minor, patch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionTag {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl VersionTag {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version string that consists of exactly three numeric components.
    ///
    /// Pre-release suffixes ("11.0.0-beta.1") and build metadata ("1.0.0+abc")
    /// are rejected: only plain releases are republished.
    pub fn parse(version: &str) -> Result<Self, TagError> {
        let parsed = semver::Version::parse(version)
            .map_err(|e| TagError::Malformed(version.to_string(), e.to_string()))?;

        if !parsed.pre.is_empty() {
            return Err(TagError::PreRelease(version.to_string()));
        }
        if !parsed.build.is_empty() {
            return Err(TagError::Malformed(
                version.to_string(),
                "build metadata is not allowed".to_string(),
            ));
        }

        Ok(Self::new(parsed.major, parsed.minor, parsed.patch))
    }
}

impl FromStr for VersionTag {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl Serialize for VersionTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for VersionTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
