//! Serde models for the subset of the Patchwork API this tool reads
//!
//! Patchwork responses carry far more fields than these; unknown fields are
//! ignored on purpose so server upgrades don't break deserialization.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

/// A patch detail resource.
#[derive(Debug, Clone, Deserialize)]
pub struct Patch {
    pub id: u64,
    /// Raw unified diff; absent for patches with no code change
    pub diff: Option<String>,
    /// The account currently responsible for the patch, if any
    pub delegate: Option<User>,
}

/// A series detail resource: an ordered list of its patches.
#[derive(Debug, Clone, Deserialize)]
pub struct Series {
    pub id: u64,
    pub patches: Vec<PatchRef>,
}

/// An embedded reference to a patch inside another resource.
#[derive(Debug, Clone, Deserialize)]
pub struct PatchRef {
    pub id: u64,
}

/// A Patchwork user account.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: Option<String>,
}

/// A comment-created event from the events feed.
///
/// The payload shape differs per category (`cover-comment-created` carries a
/// `cover` resource link, `patch-comment-created` a `patch` one), so it is
/// kept as raw JSON and picked apart by the client.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentEvent {
    pub category: String,
    pub date: String,
    pub payload: serde_json::Value,
}

impl CommentEvent {
    /// The event timestamp. Patchwork emits naive ISO timestamps (UTC);
    /// offsets are accepted too.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        if let Ok(t) = DateTime::parse_from_rfc3339(&self.date) {
            return Some(t.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(&self.date, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|t| t.and_utc())
    }

    /// The URL of the cover letter or patch the comment was made on.
    pub fn subject_url(&self) -> Option<&str> {
        let key = match self.category.as_str() {
            "cover-comment-created" => "cover",
            "patch-comment-created" => "patch",
            _ => return None,
        };
        self.payload.get(key)?.get("url")?.as_str()
    }

    /// The URL of the comment resource itself.
    pub fn comment_url(&self) -> Option<&str> {
        self.payload.get("comment")?.get("url")?.as_str()
    }
}
