//! Maintainer lookup for a resolved tree
//!
//! Tree-to-maintainer bindings live in one administrative section of the
//! manifest: each of its blocks declares a `T:` tree and the `M:` people
//! responsible for it. The lookup is pure and stateless; an unknown tree
//! yields an empty list, not an error.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::manifest::Manifest;

/// Title of the section binding trees to their maintainers.
pub const ADMIN_SECTION_TITLE: &str = "General Project Administration";

/// One `M:` line: a free-text `Name <email>` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maintainer {
    line: String,
}

impl Maintainer {
    pub fn new(line: impl Into<String>) -> Self {
        Self { line: line.into() }
    }

    /// The raw manifest line.
    pub fn as_str(&self) -> &str {
        &self.line
    }

    /// The address part between `<` and `>`, if the line carries one.
    pub fn email(&self) -> Option<&str> {
        static EMAIL: OnceLock<Regex> = OnceLock::new();
        let re = EMAIL.get_or_init(|| Regex::new(r"<([^<>]+)>").expect("static regex"));
        re.captures(&self.line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// The display-name part before the address.
    pub fn name(&self) -> &str {
        match self.line.find('<') {
            Some(idx) => self.line[..idx].trim(),
            None => self.line.trim(),
        }
    }
}

impl fmt::Display for Maintainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}

/// The maintainers bound to `tree` in the administrative section.
///
/// When several blocks declare the same tree, the last one wins. Returns the
/// `M:` lines in declaration order; an unknown tree or a manifest without an
/// administrative section yields an empty list.
pub fn maintainers_for(manifest: &Manifest, tree: &str) -> Vec<Maintainer> {
    let Some(section) = manifest.section_titled(ADMIN_SECTION_TITLE) else {
        tracing::warn!(
            title = ADMIN_SECTION_TITLE,
            "manifest has no administrative section"
        );
        return Vec::new();
    };
    section
        .blocks
        .iter()
        .filter(|block| block.tree.as_deref() == Some(tree))
        .next_back()
        .map(|block| {
            block
                .maintainers
                .iter()
                .map(|line| Maintainer::new(line.clone()))
                .collect()
        })
        .unwrap_or_default()
}
