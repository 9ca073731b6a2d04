//! Version layer: registry access and release discovery
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registries │────▶│  Discovery  │────▶│ VersionTag  │
//! │   (fetch)   │     │  (filter)   │     │  (ordering) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`discovery`]: Selects the releases newer than a baseline, oldest first
//! - [`registry`]: Registry trait for fetching versions from remote sources
//! - [`registries`]: Concrete registry implementations (npm)
//! - [`error`]: Error types for tags and registry operations
//! - [`tag`]: Strict `major.minor.patch` version tags
//! - [`types`]: Common types like `PackageVersions`

pub mod discovery;
pub mod error;
pub mod registries;
pub mod registry;
pub mod tag;
pub mod types;
