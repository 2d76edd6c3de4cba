// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn poll_outcomes_convert_losslessly() {
    let poll = PollOutcome::Delivered {
        delivered_at: Some("2026-03-01T10:25:00Z".into()),
        summary: Some("done".into()),
        waited: Duration::from_secs(90),
        polls: 18,
    };
    match DispatchOutcome::from(poll) {
        DispatchOutcome::Delivered { delivered_at, summary, waited, polls } => {
            assert_eq!(delivered_at.as_deref(), Some("2026-03-01T10:25:00Z"));
            assert_eq!(summary.as_deref(), Some("done"));
            assert_eq!(waited, Duration::from_secs(90));
            assert_eq!(polls, 18);
        }
        other => panic!("expected Delivered, got {other:?}"),
    }
}

#[yare::parameterized(
    delivered = {
        DispatchOutcome::Delivered {
            delivered_at: None, summary: None, waited: Duration::ZERO, polls: 1,
        },
        "DELIVERED"
    },
    blocked = {
        DispatchOutcome::Blocked { reason: None, waited: Duration::ZERO, polls: 1 },
        "BLOCKED"
    },
    timed_out = {
        DispatchOutcome::TimedOut {
            kind: TimeoutKind::Stalled, waited: Duration::ZERO, polls: 1,
        },
        "TIMEOUT"
    },
    failed = {
        DispatchOutcome::Failed(DispatchFailure::Rejected {
            exit_code: 4, stderr: String::new(),
        }),
        "DISPATCH_FAILED"
    },
)]
fn outcome_labels_are_distinguishable(outcome: DispatchOutcome, label: &str) {
    assert_eq!(outcome.to_string(), label);
}

#[test]
fn timeout_kinds_carry_distinct_diagnostics() {
    assert!(TimeoutKind::NeverAppeared.diagnostic().contains("never appeared"));
    assert!(TimeoutKind::Stalled.diagnostic().contains("may still be running"));
    assert_ne!(TimeoutKind::NeverAppeared.diagnostic(), TimeoutKind::Stalled.diagnostic());
}

#[test]
fn failure_messages_preserve_diagnostic_detail() {
    let failure = DispatchFailure::Rejected {
        exit_code: 7,
        stderr: "unknown skill: meta-ads-postclick-analyst".into(),
    };
    let text = failure.to_string();
    assert!(text.contains("exit 7"));
    assert!(text.contains("unknown skill"));

    let failure = DispatchFailure::Trigger {
        attempts: 3,
        source: InvokeError::Channel { exit_code: 255, stderr: "Connection refused".into() },
    };
    assert!(failure.to_string().contains("after 3 attempt(s)"));
}
