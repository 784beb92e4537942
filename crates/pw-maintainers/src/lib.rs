//! MAINTAINERS-file resolution engine
//!
//! Resolves, for the set of files changed by a patch or patch series, which
//! upstream git tree the change should be merged through and which
//! maintainers are responsible for it. Driven entirely by the structured
//! free-text MAINTAINERS manifest; nothing here talks to the network.
//!
//! # Pipeline
//!
//! ```text
//! diff text -> changed files -> per-file tree -> common denominator -> maintainers
//!   (diff)       (resolver + manifest + glob)     (denominator)        (maintainer)
//! ```
//!
//! # Example
//!
//! ```no_run
//! use pw_maintainers::{MaintainersFile, Result};
//!
//! fn example() -> Result<()> {
//!     let mut maintainers = MaintainersFile::load("MAINTAINERS")?;
//!     let tree = maintainers.tree_for_files(&["drivers/net/mlx5/mlx5_flow.c"]);
//!     for m in maintainers.maintainers_for(&tree) {
//!         println!("{m}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod denominator;
pub mod diff;
pub mod error;
pub mod glob;
pub mod maintainer;
pub mod manifest;
pub mod recheck;
pub mod resolver;

pub use denominator::{Denominator, ReducePolicy, TreeAlias};
pub use diff::changed_files;
pub use error::{Error, Result};
pub use maintainer::{ADMIN_SECTION_TITLE, Maintainer, maintainers_for};
pub use manifest::{Block, Manifest, Section};
pub use recheck::{RecheckCollector, RecheckReport, RecheckRequest};
pub use resolver::{ResolvedFile, TreeResolver};

use std::path::Path;

/// Convenience facade over the whole resolution pipeline.
///
/// Owns one parsed manifest, the per-pattern resolution cache, and the
/// reduction policy. Build a new one whenever the manifest file changes.
pub struct MaintainersFile {
    resolver: TreeResolver,
    denominator: Denominator,
}

impl MaintainersFile {
    /// Load the manifest from disk with the default reduction policy.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(Manifest::load(path)?, ReducePolicy::default()))
    }

    /// Parse manifest text with the default reduction policy.
    pub fn parse(text: &str) -> Self {
        Self::new(Manifest::parse(text), ReducePolicy::default())
    }

    pub fn new(manifest: Manifest, policy: ReducePolicy) -> Self {
        Self {
            resolver: TreeResolver::new(manifest),
            denominator: Denominator::new(policy),
        }
    }

    /// Resolve each file, then reduce the per-file trees to the single merge
    /// target. Always returns a concrete tree identifier.
    pub fn tree_for_files(&mut self, files: &[impl AsRef<str>]) -> String {
        let resolved: Vec<ResolvedFile> = files
            .iter()
            .map(|f| self.resolver.resolve(f.as_ref()))
            .collect();
        self.denominator.reduce(&resolved)
    }

    /// Per-file resolution, exposed for callers that want the detail.
    pub fn resolve(&mut self, path: &str) -> ResolvedFile {
        self.resolver.resolve(path)
    }

    /// The maintainers bound to a tree in the administrative section.
    pub fn maintainers_for(&self, tree: &str) -> Vec<Maintainer> {
        maintainer::maintainers_for(self.resolver.manifest(), tree)
    }

    pub fn manifest(&self) -> &Manifest {
        self.resolver.manifest()
    }
}
