// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Report rendering for dispatch and status commands.

use crate::color;
use orc_core::TaskRecord;
use orc_engine::{DispatchOutcome, DispatchRequest};
use std::fmt::Write;

const RULE: &str = "──────────────────────────────────────────────────────────";

/// Format elapsed seconds compactly: "45s", "2m30s", "1h02m".
pub fn format_elapsed(secs: u64) -> String {
    if secs < 60 {
        format!("{secs}s")
    } else if secs < 3600 {
        format!("{}m{:02}s", secs / 60, secs % 60)
    } else {
        format!("{}h{:02}m", secs / 3600, (secs % 3600) / 60)
    }
}

/// Banner printed before the dispatch starts.
pub fn dispatch_banner(request: &DispatchRequest, worker: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", color::header(RULE));
    let _ = writeln!(
        out,
        " {} {} → {}",
        color::header("agent dispatch:"),
        request.agent,
        worker
    );
    let _ = writeln!(out, "{}", color::header(RULE));
    let _ = writeln!(out, " cycle   {}", request.cycle);
    let _ = writeln!(out, " task    {}", request.task);
    let _ = writeln!(out, " brand   {}", request.brand);
    let _ = writeln!(out, " host    {}", request.host);
    let _ = writeln!(
        out,
        " timeout {} (poll every {})",
        format_elapsed(request.timeout.as_secs()),
        format_elapsed(request.poll_interval.as_secs()),
    );
    out
}

/// Final report for one dispatch outcome.
pub fn outcome_report(outcome: &DispatchOutcome) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", color::header(RULE));
    match outcome {
        DispatchOutcome::Delivered { delivered_at, summary, waited, polls } => {
            let _ = writeln!(
                out,
                " {}  waited {} ({} polls)",
                color::good("DELIVERED"),
                format_elapsed(waited.as_secs()),
                polls,
            );
            if let Some(at) = delivered_at {
                let _ = writeln!(out, " delivered at {at}");
            }
            if let Some(summary) = summary {
                let _ = writeln!(out, " summary: {summary}");
            }
        }
        DispatchOutcome::Blocked { reason, waited, .. } => {
            let _ = writeln!(
                out,
                " {}  after {}",
                color::warn("BLOCKED"),
                format_elapsed(waited.as_secs()),
            );
            let _ = writeln!(
                out,
                " reason: {}",
                reason.as_deref().unwrap_or("(agent gave no reason)")
            );
        }
        DispatchOutcome::TimedOut { kind, waited, polls } => {
            let _ = writeln!(
                out,
                " {}  gave up after {} ({} polls)",
                color::fail("TIMEOUT"),
                format_elapsed(waited.as_secs()),
                polls,
            );
            let _ = writeln!(out, " {}", kind.diagnostic());
        }
        DispatchOutcome::Failed(failure) => {
            let _ = writeln!(out, " {}", color::fail("DISPATCH_FAILED"));
            let _ = writeln!(out, " {failure}");
            let mut source = std::error::Error::source(failure);
            while let Some(cause) = source {
                let _ = writeln!(out, "   caused by: {cause}");
                source = cause.source();
            }
        }
    }
    let _ = writeln!(out, "{}", color::header(RULE));
    out
}

/// One-shot record report for `orc status`.
pub fn record_report(record: &TaskRecord) -> String {
    let mut out = String::new();
    let status = record.status.to_string();
    let colored = match record.status {
        orc_core::TaskStatus::Delivered => color::good(&status),
        orc_core::TaskStatus::Blocked => color::warn(&status),
        _ => color::header(&status),
    };
    let _ = writeln!(out, " task    {}", record.id);
    let _ = writeln!(out, " agent   {}", record.agent_name);
    let _ = writeln!(out, " status  {colored}");
    if let Some(at) = &record.started_at {
        let _ = writeln!(out, " started    {at}");
    }
    if let Some(at) = &record.runner_picked_at {
        let _ = writeln!(out, " picked up  {at}");
    }
    if let Some(at) = &record.delivered_at {
        let _ = writeln!(out, " delivered  {at}");
    }
    if let Some(reason) = &record.blocked_reason {
        let _ = writeln!(out, " blocked: {reason}");
    }
    if let Some(summary) = &record.summary {
        let _ = writeln!(out, " summary: {summary}");
    }
    out
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
