//! Shell-style glob matching for manifest file patterns
//!
//! The manifest declares ownership with `fnmatch`-style patterns: `*` matches
//! any run of characters *including* path separators, `?` matches exactly one
//! character, and matching is case-sensitive. A pattern ending in `/` claims
//! the whole directory, so it is normalized to `pattern/*` before use.

use globset::{GlobBuilder, GlobMatcher};

/// Compile a manifest pattern into a reusable matcher.
///
/// Returns `None` for patterns that are not valid globs (for example an
/// unclosed character class); such patterns never match anything.
pub fn compile(pattern: &str) -> Option<GlobMatcher> {
    GlobBuilder::new(pattern)
        .literal_separator(false)
        .build()
        .ok()
        .map(|glob| glob.compile_matcher())
}

/// Match a single path against a single pattern.
///
/// Convenience form of [`compile`] for one-off checks; callers matching many
/// paths against the same pattern should compile once instead.
pub fn matches(path: &str, pattern: &str) -> bool {
    compile(pattern).is_some_and(|matcher| matcher.is_match(path))
}

/// Rewrite a trailing `/` into `/*` so directory rules own their descendants.
pub fn normalize(pattern: &str) -> String {
    match pattern.strip_suffix('/') {
        Some(dir) => format!("{dir}/*"),
        None => pattern.to_string(),
    }
}
