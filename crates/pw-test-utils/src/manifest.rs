//! [`ManifestBuilder`] for assembling MAINTAINERS fixtures in tests.
//!
//! Builds section/block text programmatically so tests don't repeat the
//! title-underline-blank-line plumbing, and can drop the result into a
//! temporary file for code paths that load from disk.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Incrementally assembles MAINTAINERS manifest text.
///
/// # Example
///
/// ```
/// use pw_test_utils::ManifestBuilder;
///
/// let text = ManifestBuilder::new()
///     .section("Networking Drivers")
///     .tree("git://dpdk.org/next/dpdk-next-net")
///     .block()
///     .pattern("drivers/net/mlx5/")
///     .tree("git://dpdk.org/next/dpdk-next-net-mlx")
///     .maintainer("Mlx Maintainer <mlx@example.com>")
///     .build();
/// assert!(text.contains("F: drivers/net/mlx5/"));
/// ```
#[derive(Debug, Default)]
pub struct ManifestBuilder {
    text: String,
}

impl ManifestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new titled section (title line plus dashed underline).
    pub fn section(mut self, title: &str) -> Self {
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(title);
        self.text.push('\n');
        self.text.push_str(&"-".repeat(title.len().max(2)));
        self.text.push('\n');
        self
    }

    /// Start a new blank-line-delimited block within the current section.
    pub fn block(mut self) -> Self {
        self.text.push('\n');
        self
    }

    /// Add an `F:` file-pattern line.
    pub fn pattern(mut self, pattern: &str) -> Self {
        self.text.push_str("F: ");
        self.text.push_str(pattern);
        self.text.push('\n');
        self
    }

    /// Add a `T:` tree line.
    pub fn tree(mut self, tree: &str) -> Self {
        self.text.push_str("T: ");
        self.text.push_str(tree);
        self.text.push('\n');
        self
    }

    /// Add an `M:` maintainer line.
    pub fn maintainer(mut self, maintainer: &str) -> Self {
        self.text.push_str("M: ");
        self.text.push_str(maintainer);
        self.text.push('\n');
        self
    }

    /// Add an arbitrary raw line (e.g. a subsection title).
    pub fn line(mut self, line: &str) -> Self {
        self.text.push_str(line);
        self.text.push('\n');
        self
    }

    /// The assembled manifest text.
    pub fn build(self) -> String {
        self.text
    }

    /// Write the assembled text into a temporary MAINTAINERS file.
    pub fn into_temp(self) -> TempManifest {
        TempManifest::new(&self.build())
    }
}

/// A MAINTAINERS file in a temporary directory, removed on drop.
#[derive(Debug)]
pub struct TempManifest {
    _dir: TempDir,
    path: PathBuf,
}

impl TempManifest {
    pub fn new(text: &str) -> Self {
        let dir = TempDir::new().expect("create tempdir");
        let path = dir.path().join("MAINTAINERS");
        fs::write(&path, text).expect("write manifest fixture");
        Self { _dir: dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
