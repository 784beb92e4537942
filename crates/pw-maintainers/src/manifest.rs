//! Parsed MAINTAINERS manifest
//!
//! The manifest is a structured free-text file: top-level sections delimited
//! by a title line with a dashed underline, containing blank-line-delimited
//! blocks of `F:` (file pattern), `T:` (tree) and `M:` (maintainer) tags.
//!
//! ```text
//! Section Title
//! -------------
//! F: path/glob/pattern/*
//! T: git://host/path/tree-name
//! M: Full Name <email@example.com>
//!
//! Subsection Title
//! F: more/specific/pattern
//! T: git://host/path/other-tree
//! ```
//!
//! `Manifest::parse` turns the text into a queryable index of
//! [`Section`]s and [`Block`]s in a single pass; the text itself is not kept.
//! The index is immutable once built. Resolution policies ("first pattern in
//! declaration order", "last block declaring a pattern wins") are exposed as
//! explicit queries rather than being implicit in scan order.

use std::path::Path;

use crate::error::{Error, Result};
use crate::glob;

/// One `F:`/`T:`/`M:` ownership block, delimited by blank lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    /// Normalized `F:` patterns, in declaration order
    pub patterns: Vec<String>,
    /// The block's `T:` tree declaration, if any (first one wins)
    pub tree: Option<String>,
    /// `M:` maintainer lines, in declaration order
    pub maintainers: Vec<String>,
}

impl Block {
    /// Whether this block declares the exact (normalized) pattern.
    pub fn declares_pattern(&self, pattern: &str) -> bool {
        self.patterns.iter().any(|p| p == pattern)
    }

    fn is_empty(&self) -> bool {
        self.patterns.is_empty() && self.tree.is_none() && self.maintainers.is_empty()
    }
}

/// A titled span of the manifest, running to the next title or end of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// The title line preceding the dashed underline
    pub title: String,
    /// The section's blocks, in order; when `has_header` is set, `blocks[0]`
    /// is the header block
    pub blocks: Vec<Block>,
    /// Whether the first block starts directly under the underline. A blank
    /// line between the underline and the first block means the section has
    /// no header, only subsections.
    has_header: bool,
}

impl Section {
    /// The header block: the text between the underline and the first blank
    /// line. Section-level tree declarations live here. `None` when a blank
    /// line immediately follows the underline.
    pub fn header(&self) -> Option<&Block> {
        self.blocks.first().filter(|_| self.has_header)
    }

    /// Whether any block of this section declares the pattern.
    pub fn declares_pattern(&self, pattern: &str) -> bool {
        self.blocks.iter().any(|b| b.declares_pattern(pattern))
    }
}

/// The parsed manifest index.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    sections: Vec<Section>,
    /// Every `F:` pattern in the file, normalized, declaration order preserved
    file_patterns: Vec<String>,
}

impl Manifest {
    /// Load and parse the manifest from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::ManifestLoad {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    /// Parse manifest text into the section/block index.
    ///
    /// Extraction only: unknown lines are ignored, nothing is validated, and
    /// this never fails. Text before the first section title still
    /// contributes its `F:` patterns to [`Manifest::file_patterns`], it just
    /// belongs to no section.
    pub fn parse(text: &str) -> Self {
        let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
        let mut manifest = Self::default();

        let mut i = 0;
        let mut current: Option<Section> = None;
        let mut block = Block::default();
        // Set from the underline until the first blank line; a block flushed
        // while it holds becomes the section header.
        let mut under_title = false;
        while i < lines.len() {
            let line = lines[i];

            // A title line is immediately followed by a dashed underline.
            if lines.get(i + 1).is_some_and(|l| is_underline(l)) {
                flush_block(&mut current, &mut block, &mut under_title);
                if let Some(section) = current.take() {
                    manifest.sections.push(section);
                }
                current = Some(Section {
                    title: line.trim().to_string(),
                    blocks: Vec::new(),
                    has_header: false,
                });
                under_title = true;
                i += 2;
                continue;
            }

            if line.trim().is_empty() {
                flush_block(&mut current, &mut block, &mut under_title);
            } else if let Some(pattern) = tag_value(line, "F:") {
                let pattern = glob::normalize(pattern);
                manifest.file_patterns.push(pattern.clone());
                block.patterns.push(pattern);
            } else if let Some(tree) = tag_value(line, "T:") {
                if block.tree.is_none() {
                    block.tree = Some(tree.to_string());
                }
            } else if let Some(maintainer) = tag_value(line, "M:") {
                block.maintainers.push(maintainer.to_string());
            }
            i += 1;
        }
        flush_block(&mut current, &mut block, &mut under_title);
        if let Some(section) = current.take() {
            manifest.sections.push(section);
        }

        tracing::debug!(
            sections = manifest.sections.len(),
            patterns = manifest.file_patterns.len(),
            "parsed maintainers manifest"
        );
        manifest
    }

    /// The ordered top-level sections.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Every `F:` pattern in the manifest, normalized, in declaration order.
    ///
    /// Order is significant: path matching is first-match-in-declaration-order.
    pub fn file_patterns(&self) -> &[String] {
        &self.file_patterns
    }

    /// The last block anywhere in the manifest declaring `pattern`.
    ///
    /// Later declarations override earlier ones: more specific ownership
    /// blocks appear later in the file under a given pattern.
    pub fn last_block_with_pattern(&self, pattern: &str) -> Option<&Block> {
        self.sections
            .iter()
            .flat_map(|s| s.blocks.iter())
            .filter(|b| b.declares_pattern(pattern))
            .next_back()
    }

    /// The first section declaring `pattern` in any of its blocks.
    pub fn first_section_with_pattern(&self, pattern: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.declares_pattern(pattern))
    }

    /// The first section with this exact title.
    pub fn section_titled(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }
}

/// A dashed underline: two or more `-` characters and nothing else.
fn is_underline(line: &str) -> bool {
    let line = line.trim();
    line.len() >= 2 && line.bytes().all(|b| b == b'-')
}

/// The value of a `F:`/`T:`/`M:` tag at the start of a line, if present.
fn tag_value<'a>(line: &'a str, tag: &str) -> Option<&'a str> {
    let value = line.strip_prefix(tag)?.trim();
    (!value.is_empty()).then_some(value)
}

/// Push the accumulated block onto the current section, if it carries tags.
/// A non-empty block flushed while still directly under the underline is the
/// section header; `under_title` is cleared either way.
fn flush_block(section: &mut Option<Section>, block: &mut Block, under_title: &mut bool) {
    let done = std::mem::take(block);
    let was_under_title = std::mem::replace(under_title, false);
    if done.is_empty() {
        return;
    }
    if let Some(section) = section.as_mut() {
        if was_under_title && section.blocks.is_empty() {
            section.has_header = true;
        }
        section.blocks.push(done);
    }
}
