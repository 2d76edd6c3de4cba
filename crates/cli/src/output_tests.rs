// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use orc_engine::{DispatchFailure, TimeoutKind};
use std::time::Duration;

#[yare::parameterized(
    seconds = { 45, "45s" },
    minutes = { 150, "2m30s" },
    exact_minute = { 60, "1m00s" },
    hours = { 3720, "1h02m" },
)]
fn elapsed_is_compact(secs: u64, expected: &str) {
    assert_eq!(format_elapsed(secs), expected);
}

fn request() -> DispatchRequest {
    DispatchRequest {
        agent: "post-click".to_string(),
        cycle: "550e8400-e29b-41d4-a716-446655440000".to_string(),
        task: "660f8400-e29b-41d4-a716-446655440111".to_string(),
        brand: "770f8400-e29b-41d4-a716-446655440222".to_string(),
        host: "runner@machine-b".to_string(),
        timeout: Duration::from_secs(1800),
        poll_interval: Duration::from_secs(5),
    }
}

#[test]
fn banner_names_the_resolved_worker_and_target() {
    let banner = dispatch_banner(&request(), "meta-ads-postclick-analyst");
    assert!(banner.contains("post-click → meta-ads-postclick-analyst"));
    assert!(banner.contains("runner@machine-b"));
    assert!(banner.contains("30m00s"));
}

#[test]
fn delivered_report_carries_summary_and_timing() {
    let report = outcome_report(&DispatchOutcome::Delivered {
        delivered_at: Some("2026-03-01T10:04:00Z".to_string()),
        summary: Some("landing pages scored".to_string()),
        waited: Duration::from_secs(240),
        polls: 48,
    });
    assert!(report.contains("DELIVERED"));
    assert!(report.contains("4m00s"));
    assert!(report.contains("48 polls"));
    assert!(report.contains("landing pages scored"));
}

#[test]
fn blocked_report_prints_the_agent_reason_verbatim() {
    let report = outcome_report(&DispatchOutcome::Blocked {
        reason: Some("missing GA4 export".to_string()),
        waited: Duration::from_secs(30),
        polls: 6,
    });
    assert!(report.contains("BLOCKED"));
    assert!(report.contains("missing GA4 export"));
}

#[test]
fn timeout_report_explains_the_unknown_remote_outcome() {
    let report = outcome_report(&DispatchOutcome::TimedOut {
        kind: TimeoutKind::Stalled,
        waited: Duration::from_secs(1800),
        polls: 360,
    });
    assert!(report.contains("TIMEOUT"));
    assert!(report.contains("may still be running"));
}

#[test]
fn failure_report_includes_the_cause_chain() {
    let report = outcome_report(&DispatchOutcome::Failed(DispatchFailure::Trigger {
        attempts: 3,
        source: orc_adapters::InvokeError::Channel {
            exit_code: 255,
            stderr: "Connection refused".to_string(),
        },
    }));
    assert!(report.contains("DISPATCH_FAILED"));
    assert!(report.contains("after 3 attempt(s)"));
    assert!(report.contains("caused by: ssh channel failure"));
}
