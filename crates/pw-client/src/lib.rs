//! Minimal blocking client for the Patchwork REST API
//!
//! Covers exactly the surface the triage tools use: patch and series detail
//! lookups, user search, delegate updates, and the comment-event feed. The
//! whole crate is synchronous; cancellation and scheduling belong to the
//! caller.

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::PatchworkClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use types::{CommentEvent, Patch, PatchRef, Series, User};
