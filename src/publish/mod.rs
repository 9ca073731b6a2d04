//! Publishing layer: turns each new release into a published typings package
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Runner    │────▶│  Publisher  │────▶│  Toolchain  │
//! │   (loop)    │     │ (one tag)   │     │(npm install,│
//! └─────────────┘     └─────────────┘     │ npm publish)│
//!                            │            └─────────────┘
//!                            ▼
//!              ┌──────────────────────────┐
//!              │ Checkpoint / Manifest /  │
//!              │ Typings (files on disk)  │
//!              └──────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`checkpoint`]: Last published version, persisted as JSON
//! - [`manifest`]: package.json dependency and version rewrite
//! - [`toolchain`]: Package manager install/publish invocations
//! - [`typings`]: Declaration file extraction
//! - [`publisher`]: Processing of a single candidate version
//! - [`runner`]: Driver loop over discovered versions
//! - [`error`]: Error types for the publishing steps

pub mod checkpoint;
pub mod error;
mod json_file;
pub mod manifest;
pub mod publisher;
pub mod runner;
pub mod toolchain;
pub mod typings;
