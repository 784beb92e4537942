//! Recheck-request trailer parsing
//!
//! CI labs watch patch comments for a `Recheck-request:` trailer listing the
//! test contexts to re-run, optionally with `key=value` arguments:
//!
//! ```text
//! Recheck-request: iol-unit-testing, rebase=latest, iol-compile-testing,
//! loongarch-unit-testing
//! ```
//!
//! The trailer is a comma-separated run of labels; a single wrapped
//! continuation line is accepted when the previous line ends with a comma.
//! Labels are filtered against the lab's own contexts, and only known
//! argument keys are honoured.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use chrono::{DateTime, Duration, Utc};
use regex::Regex;
use serde::Serialize;

/// Argument keys a retest request may carry.
pub const VALID_ARGUMENTS: &[&str] = &["rebase"];

/// The contexts and arguments requested for one patch series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecheckRequest {
    pub contexts: BTreeSet<String>,
    pub arguments: BTreeMap<String, String>,
}

impl RecheckRequest {
    fn merge(&mut self, other: RecheckRequest) {
        self.contexts.extend(other.contexts);
        self.arguments.extend(other.arguments);
    }
}

/// Parse the `Recheck-request:` trailer of one comment body.
///
/// Returns the requested contexts intersected with `desired_contexts`, plus
/// any arguments. `None` when the body carries no trailer, when no requested
/// context is one of ours and no arguments were given, or when an unknown
/// argument key appears.
pub fn parse_trailer(body: &str, desired_contexts: &[String]) -> Option<RecheckRequest> {
    static TRAILER: OnceLock<Regex> = OnceLock::new();
    let re = TRAILER.get_or_init(|| {
        Regex::new(r"(?m)^Recheck-request: ((?:(?:[\w-]+=)?[\w-]+(?:, ?\n?)?)+)")
            .expect("static regex")
    });

    let caps = re.captures(body)?;
    let mut request = RecheckRequest::default();
    for item in caps[1].split(',').map(str::trim).filter(|s| !s.is_empty()) {
        match item.split_once('=') {
            Some((key, value)) => {
                request
                    .arguments
                    .insert(key.to_string(), value.to_string());
            }
            None => {
                if desired_contexts.iter().any(|c| c == item) {
                    request.contexts.insert(item.to_string());
                }
            }
        }
    }

    if !request.contexts.is_empty()
        || (!request.arguments.is_empty()
            && request
                .arguments
                .keys()
                .all(|k| VALID_ARGUMENTS.contains(&k.as_str())))
    {
        Some(request)
    } else {
        None
    }
}

/// The JSON report handed to the retest scheduler.
#[derive(Debug, Default, Serialize)]
pub struct RecheckReport {
    /// Requests keyed by patch series id
    pub retests: BTreeMap<u64, RecheckRequest>,
    /// One microsecond past the newest comment seen, so the next poll
    /// excludes it
    pub last_comment_timestamp: Option<String>,
}

/// Accumulates recheck requests across a poll of comment events.
#[derive(Debug)]
pub struct RecheckCollector {
    desired_contexts: Vec<String>,
    retests: BTreeMap<u64, RecheckRequest>,
    newest_comment: Option<DateTime<Utc>>,
}

impl RecheckCollector {
    pub fn new(desired_contexts: Vec<String>) -> Self {
        Self {
            desired_contexts,
            retests: BTreeMap::new(),
            newest_comment: None,
        }
    }

    /// Feed one comment: its series, timestamp, and body.
    pub fn observe(&mut self, series_id: u64, date: DateTime<Utc>, body: &str) {
        if self.newest_comment.is_none_or(|newest| date > newest) {
            self.newest_comment = Some(date);
        }
        if let Some(request) = parse_trailer(body, &self.desired_contexts) {
            tracing::debug!(series_id, contexts = ?request.contexts, "recheck requested");
            self.retests.entry(series_id).or_default().merge(request);
        }
    }

    pub fn into_report(self) -> RecheckReport {
        RecheckReport {
            retests: self.retests,
            last_comment_timestamp: self
                .newest_comment
                .map(|t| (t + Duration::microseconds(1)).format("%Y-%m-%dT%H:%M:%S%.6f").to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn desired() -> Vec<String> {
        vec![
            "iol-unit-testing".to_string(),
            "iol-compile-testing".to_string(),
        ]
    }

    #[test]
    fn test_parses_comma_separated_contexts() {
        let req =
            parse_trailer("Recheck-request: iol-unit-testing, iol-compile-testing", &desired())
                .unwrap();
        assert_eq!(req.contexts.len(), 2);
        assert!(req.arguments.is_empty());
    }

    #[test]
    fn test_undesired_contexts_are_filtered_out() {
        let req =
            parse_trailer("Recheck-request: iol-unit-testing, other-lab-testing", &desired())
                .unwrap();
        assert_eq!(
            req.contexts.iter().collect::<Vec<_>>(),
            vec!["iol-unit-testing"]
        );
    }

    #[test]
    fn test_arguments_are_split_from_contexts() {
        let req = parse_trailer(
            "Recheck-request: rebase=latest, iol-unit-testing",
            &desired(),
        )
        .unwrap();
        assert_eq!(req.arguments.get("rebase").map(String::as_str), Some("latest"));
        assert!(req.contexts.contains("iol-unit-testing"));
    }

    #[test]
    fn test_wrapped_continuation_line_is_accepted() {
        let body = "Recheck-request: iol-unit-testing,\niol-compile-testing";
        let req = parse_trailer(body, &desired()).unwrap();
        assert_eq!(req.contexts.len(), 2);
    }

    #[test]
    fn test_body_without_trailer_is_ignored() {
        assert_eq!(parse_trailer("Looks good to me.", &desired()), None);
    }

    #[test]
    fn test_only_unknown_arguments_is_rejected() {
        assert_eq!(
            parse_trailer("Recheck-request: frobnicate=yes", &desired()),
            None
        );
    }

    #[test]
    fn test_trailer_must_start_the_line() {
        assert_eq!(
            parse_trailer("> Recheck-request: iol-unit-testing", &desired()),
            None
        );
    }

    #[test]
    fn test_collector_merges_requests_per_series() {
        let mut collector = RecheckCollector::new(desired());
        let t0 = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        collector.observe(17, t0, "Recheck-request: iol-unit-testing");
        collector.observe(
            17,
            t0 + Duration::minutes(5),
            "Recheck-request: iol-compile-testing",
        );
        collector.observe(9, t0 + Duration::minutes(1), "no trailer here");

        let report = collector.into_report();
        assert_eq!(report.retests.len(), 1);
        assert_eq!(report.retests[&17].contexts.len(), 2);
        assert_eq!(
            report.last_comment_timestamp.as_deref(),
            Some("2024-05-01T12:05:00.000001")
        );
    }
}
