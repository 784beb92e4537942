//! Changed-file extraction from unified diffs
//!
//! Mirrors the patch-tracking service's own parser: file paths come from the
//! `---`/`+++` headers, the leading `a/`/`b/` component is dropped, and
//! `/dev/null` entries (file creation/deletion markers) are skipped.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

/// The de-duplicated, sorted set of file paths touched by a unified diff.
pub fn changed_files(diff: &str) -> Vec<String> {
    static HEADER: OnceLock<Regex> = OnceLock::new();
    let re = HEADER.get_or_init(|| {
        Regex::new(r"^(---|\+\+\+) (\S+)").expect("static regex")
    });

    let diff = diff.replace('\r', "");
    let mut filenames = BTreeSet::new();
    for line in diff.lines() {
        let Some(caps) = re.captures(line) else {
            continue;
        };
        let filename = &caps[2];
        if filename.starts_with("/dev/null") {
            continue;
        }
        // Drop the a/ or b/ prefix the diff format adds.
        let stripped = filename
            .split('/')
            .skip(1)
            .collect::<Vec<_>>()
            .join("/");
        if !stripped.is_empty() {
            filenames.insert(stripped);
        }
    }
    filenames.into_iter().collect()
}
