//! Recheck collection command
//!
//! Polls the comment-event feed, parses `Recheck-request:` trailers, and
//! prints the per-series retest report as JSON for the lab scheduler.

use pw_client::PatchworkClient;
use pw_maintainers::RecheckCollector;

use crate::error::Result;

/// Collect recheck requests from comments newer than `since` and print the
/// JSON report on stdout.
pub fn run_list_rechecks(
    client: &PatchworkClient,
    since: &str,
    contexts: Vec<String>,
) -> Result<()> {
    let events = client.comment_events_since(since)?;
    tracing::debug!(events = events.len(), "fetched comment events");

    let mut collector = RecheckCollector::new(contexts);
    for event in &events {
        let Some(timestamp) = event.timestamp() else {
            tracing::warn!(date = %event.date, "event with unparseable date");
            continue;
        };
        // Comments on subjects without a series cannot be retested.
        let Some(series_id) = client.event_series_id(event)? else {
            continue;
        };
        let Some(body) = client.event_comment_body(event)? else {
            continue;
        };
        collector.observe(series_id, timestamp, &body);
    }

    println!("{}", serde_json::to_string_pretty(&collector.into_report())?);
    Ok(())
}
