//! Common-denominator tree reduction
//!
//! A patch series touches many files, each resolving to its own tree. The
//! merge target is the longest common prefix of the distinct tree names,
//! with two policy exceptions:
//!
//! - alias folding: tree names that differ textually but share a parent
//!   (e.g. `dpdk-next-virtio` under `dpdk-next-net`) are renamed before the
//!   prefix is computed and restored afterwards;
//! - shared-subsystem retry: when the prefix degenerates to the generic
//!   staging name, files under deliberately ambiguous shared paths are
//!   dropped and a unanimous remaining tree wins.
//!
//! The reduction never fails: with no signal at all it returns the default
//! main tree.

use std::collections::BTreeSet;

use crate::resolver::ResolvedFile;

/// A canonical/folded tree name pair consulted around the prefix reduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeAlias {
    /// The name as it appears in the manifest
    pub display: String,
    /// The name used internally while computing the common prefix
    pub folded: String,
}

/// Reduction policy: the constants that make the prefix rule concrete.
#[derive(Debug, Clone)]
pub struct ReducePolicy {
    /// The main tree, used whenever no stronger signal exists
    pub default_tree: String,
    /// The generic staging name that is not itself a real tree
    pub staging_suffix: String,
    /// Alias table applied before and after the prefix reduction
    pub aliases: Vec<TreeAlias>,
    /// Path prefix of shared subsystems whose ownership is deliberately
    /// ambiguous; files under it are dropped on the degenerate-prefix retry
    pub shared_prefix: String,
}

impl Default for ReducePolicy {
    /// The DPDK tree layout.
    fn default() -> Self {
        Self {
            default_tree: "git://dpdk.org/dpdk".to_string(),
            staging_suffix: "dpdk-next".to_string(),
            aliases: vec![TreeAlias {
                display: "dpdk-next-virtio".to_string(),
                folded: "dpdk-next-net-virtio".to_string(),
            }],
            shared_prefix: "drivers/common".to_string(),
        }
    }
}

/// Reduces per-file tree assignments to a single merge target.
#[derive(Debug, Clone, Default)]
pub struct Denominator {
    policy: ReducePolicy,
}

impl Denominator {
    pub fn new(policy: ReducePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ReducePolicy {
        &self.policy
    }

    /// Reduce the resolved files of a patch or series to one tree.
    ///
    /// Files without a tree are accepted as going through the default tree
    /// and carry no weight in the prefix computation. Always returns a
    /// concrete tree identifier.
    pub fn reduce(&self, resolved: &[ResolvedFile]) -> String {
        let trees: BTreeSet<&str> = resolved
            .iter()
            .filter_map(|f| f.tree.as_deref())
            .collect();
        if trees.is_empty() {
            return self.policy.default_tree.clone();
        }

        let folded: Vec<String> = trees.iter().map(|t| self.fold(t)).collect();
        let mut prefix = common_prefix(&folded);
        let keep = prefix.trim_end_matches('-').len();
        prefix.truncate(keep);
        let prefix = self.unfold(&prefix);

        // A prefix that stops at the generic staging name, or that decays to
        // a bare path, names no real tree. Drop the shared-subsystem files
        // and see whether the rest agree on one.
        if prefix.ends_with(&self.policy.staging_suffix) || prefix.ends_with('/') || prefix.is_empty()
        {
            tracing::debug!(prefix, "no common tree beyond the staging name");
            return self
                .unanimous_without_shared(resolved)
                .unwrap_or_else(|| self.policy.default_tree.clone());
        }
        prefix
    }

    /// The single tree the non-shared files agree on, if they do.
    fn unanimous_without_shared(&self, resolved: &[ResolvedFile]) -> Option<String> {
        let remaining: BTreeSet<&str> = resolved
            .iter()
            .filter(|f| !f.path.starts_with(&self.policy.shared_prefix))
            .filter_map(|f| f.tree.as_deref())
            .collect();
        if remaining.len() == 1 {
            remaining.iter().next().map(|t| t.to_string())
        } else {
            None
        }
    }

    fn fold(&self, tree: &str) -> String {
        let mut tree = tree.to_string();
        for alias in &self.policy.aliases {
            tree = tree.replace(&alias.display, &alias.folded);
        }
        tree
    }

    fn unfold(&self, tree: &str) -> String {
        let mut tree = tree.to_string();
        for alias in &self.policy.aliases {
            tree = tree.replace(&alias.folded, &alias.display);
        }
        tree
    }
}

/// Longest common character prefix of all strings.
fn common_prefix(strings: &[String]) -> String {
    let Some((first, rest)) = strings.split_first() else {
        return String::new();
    };
    let mut len = first.len();
    for s in rest {
        len = first
            .chars()
            .zip(s.chars())
            .take_while(|(a, b)| a == b)
            .map(|(a, _)| a.len_utf8())
            .sum::<usize>()
            .min(len);
    }
    first[..len].to_string()
}
