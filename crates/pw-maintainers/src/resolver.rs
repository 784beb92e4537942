//! Per-file tree resolution
//!
//! Finds, for one changed file, the most specific manifest rule that owns it
//! and the git tree bound to that rule. Results are memoized per pattern:
//! once a pattern has been resolved (including to "no tree"), it is never
//! re-derived for the lifetime of the resolver. Reloading the manifest means
//! building a new resolver; there is no partial invalidation.

use std::collections::HashMap;

use globset::GlobMatcher;

use crate::glob;
use crate::manifest::Manifest;

/// The documentation catch-all. It glob-matches files from almost every
/// subsystem, so it must never be treated as an ownership signal.
const DOC_CATCH_ALL: &str = "doc/*";

/// One changed file with its resolution outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    /// The changed file path, relative to the source root
    pub path: String,
    /// The manifest pattern that claimed the path, if any
    pub pattern: Option<String>,
    /// The tree bound to that pattern; `None` routes through the default tree
    pub tree: Option<String>,
}

/// Resolves file paths to trees using the manifest index.
///
/// Owns the manifest, the pattern→tree cache, and the compiled glob matchers.
pub struct TreeResolver {
    manifest: Manifest,
    /// Write-once pattern→tree memo, in insertion order. A cached `None`
    /// means "pattern confirmed to carry no tree", which is a valid outcome.
    cache: Vec<(String, Option<String>)>,
    /// Matchers compiled once per declared pattern
    matchers: HashMap<String, Option<GlobMatcher>>,
}

impl TreeResolver {
    /// Build a resolver over a parsed manifest, compiling every declared
    /// pattern up front.
    pub fn new(manifest: Manifest) -> Self {
        let matchers = manifest
            .file_patterns()
            .iter()
            .map(|p| (p.clone(), glob::compile(p)))
            .collect();
        Self {
            manifest,
            cache: Vec::new(),
            matchers,
        }
    }

    /// The manifest this resolver was built over.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Resolve a single file path to its owning pattern and tree.
    pub fn resolve(&mut self, path: &str) -> ResolvedFile {
        // A previously resolved pattern that matches the path settles the
        // outcome without rescanning the manifest.
        for (pattern, tree) in &self.cache {
            if self.pattern_matches(pattern, path) {
                tracing::debug!(path, pattern = %pattern, "pattern cache hit");
                return ResolvedFile {
                    path: path.to_string(),
                    pattern: Some(pattern.clone()),
                    tree: tree.clone(),
                };
            }
        }

        let Some(pattern) = self.matching_pattern(path) else {
            // Untracked file: no pattern claims it, nothing to cache.
            tracing::debug!(path, "no manifest pattern matches");
            return ResolvedFile {
                path: path.to_string(),
                pattern: None,
                tree: None,
            };
        };

        let tree = self.tree_for_pattern(&pattern);
        tracing::debug!(path, pattern = %pattern, tree = tree.as_deref(), "resolved pattern");
        self.cache.push((pattern.clone(), tree.clone()));
        ResolvedFile {
            path: path.to_string(),
            pattern: Some(pattern),
            tree,
        }
    }

    /// Resolve a single file path to a tree, if its rule carries one.
    pub fn resolve_tree(&mut self, path: &str) -> Option<String> {
        self.resolve(path).tree
    }

    /// The first declared pattern that glob-matches the path, skipping the
    /// documentation catch-all.
    fn matching_pattern(&self, path: &str) -> Option<String> {
        self.manifest
            .file_patterns()
            .iter()
            .filter(|p| !p.contains(DOC_CATCH_ALL))
            .find(|p| self.pattern_matches(p, path))
            .cloned()
    }

    fn pattern_matches(&self, pattern: &str, path: &str) -> bool {
        match self.matchers.get(pattern) {
            Some(Some(matcher)) => matcher.is_match(path),
            Some(None) => false,
            None => glob::matches(path, pattern),
        }
    }

    /// The tree bound to a pattern: the last block declaring it wins; a block
    /// without a tree falls back to the header of the first section declaring
    /// the pattern.
    fn tree_for_pattern(&self, pattern: &str) -> Option<String> {
        if let Some(tree) = self
            .manifest
            .last_block_with_pattern(pattern)
            .and_then(|block| block.tree.clone())
        {
            return Some(tree);
        }
        self.manifest
            .first_section_with_pattern(pattern)
            .and_then(|section| section.header())
            .and_then(|header| header.tree.clone())
    }
}
