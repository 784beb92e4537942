//! Blocking Patchwork API client
//!
//! One synchronous request at a time, token auth on every call. 404 on a
//! detail lookup maps to [`Error::NotFound`]; everything else surfaces as
//! [`Error::Http`]. The client never retries.

use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::types::{CommentEvent, Patch, Series, User};

/// Client for the Patchwork REST API.
pub struct PatchworkClient {
    config: ClientConfig,
    http: Client,
}

impl PatchworkClient {
    /// Build a client over validated connection settings.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder().build()?;
        Ok(Self { config, http })
    }

    /// Fetch one patch by id.
    pub fn get_patch(&self, id: u64) -> Result<Patch> {
        let url = format!("{}/patches/{id}/", self.config.base_url());
        Ok(self.get(&url, "patch", id)?.json()?)
    }

    /// Fetch one series by id.
    pub fn get_series(&self, id: u64) -> Result<Series> {
        let url = format!("{}/series/{id}/", self.config.base_url());
        Ok(self.get(&url, "series", id)?.json()?)
    }

    /// Fetch every patch of a series, preserving series order.
    pub fn series_patches(&self, id: u64) -> Result<Vec<Patch>> {
        let series = self.get_series(id)?;
        series
            .patches
            .iter()
            .map(|p| self.get_patch(p.id))
            .collect()
    }

    /// Search user accounts matching a query string (name or email).
    pub fn find_users(&self, query: &str) -> Result<Vec<User>> {
        let url = format!("{}/users/", self.config.base_url());
        let response = self
            .http
            .get(&url)
            .query(&[("q", query)])
            .header("Authorization", self.auth_header())
            .send()?
            .error_for_status()?;
        Ok(response.json()?)
    }

    /// Assign a delegate on a patch, overriding any current delegate.
    pub fn set_delegate(&self, patch_id: u64, user_id: u64) -> Result<()> {
        let url = format!("{}/patches/{patch_id}/", self.config.base_url());
        tracing::debug!(patch_id, user_id, "updating patch delegate");
        self.http
            .patch(&url)
            .header("Authorization", self.auth_header())
            .form(&[("delegate", user_id.to_string())])
            .send()?
            .error_for_status()?;
        Ok(())
    }

    /// Cover- and patch-comment-created events since a timestamp, for the
    /// recheck flow. First page per category only.
    pub fn comment_events_since(&self, since: &str) -> Result<Vec<CommentEvent>> {
        let url = format!("{}/events/", self.config.base_url());
        let mut events: Vec<CommentEvent> = Vec::new();
        for category in ["cover-comment-created", "patch-comment-created"] {
            let response = self
                .http
                .get(&url)
                .query(&[
                    ("since", since),
                    ("category", category),
                    ("project", self.config.project.as_str()),
                ])
                .header("Authorization", self.auth_header())
                .send()?
                .error_for_status()?;
            events.extend(response.json::<Vec<CommentEvent>>()?);
        }
        Ok(events)
    }

    /// The series id behind a comment event, following the cover/patch link.
    pub fn event_series_id(&self, event: &CommentEvent) -> Result<Option<u64>> {
        let Some(url) = event.subject_url() else {
            return Ok(None);
        };
        let subject: serde_json::Value = self.get_raw(url)?.json()?;
        let id = subject
            .get("series")
            .and_then(|s| s.as_array())
            .and_then(|arr| arr.first())
            .and_then(|s| s.get("id"))
            .and_then(|id| id.as_u64());
        Ok(id)
    }

    /// The body text of the comment behind an event.
    pub fn event_comment_body(&self, event: &CommentEvent) -> Result<Option<String>> {
        let Some(url) = event.comment_url() else {
            return Ok(None);
        };
        let comment: serde_json::Value = self.get_raw(url)?.json()?;
        Ok(comment
            .get("content")
            .and_then(|c| c.as_str())
            .map(str::to_string))
    }

    fn get(&self, url: &str, resource: &'static str, id: u64) -> Result<Response> {
        let response = self.get_raw(url)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotFound { resource, id });
        }
        Ok(response.error_for_status()?)
    }

    fn get_raw(&self, url: &str) -> Result<Response> {
        tracing::debug!(url, "GET");
        Ok(self
            .http
            .get(url)
            .header("Authorization", self.auth_header())
            .send()?)
    }

    fn auth_header(&self) -> String {
        format!("Token {}", self.config.token)
    }
}
