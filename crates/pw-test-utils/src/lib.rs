//! Shared test utilities for the patchwork-triage workspace.

pub mod manifest;

pub use manifest::{ManifestBuilder, TempManifest};
