// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Outcome and failure taxonomy for one dispatch.
//!
//! Everything a dispatch can end in is a value, never a propagated panic or
//! an uncaught error: the caller gets one of four distinguishable outcomes,
//! with diagnostic detail preserved for operators.

use orc_adapters::InvokeError;
use orc_core::id::ParseIdError;
use orc_core::UnknownAgent;
use std::time::Duration;
use thiserror::Error;

/// Why a poll wait ended in a timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeoutKind {
    /// The record never became visible — possible silent trigger failure.
    NeverAppeared,
    /// The record was seen but never reached a terminal state.
    Stalled,
}

impl TimeoutKind {
    /// Operator-facing explanation of what the timeout means.
    pub fn diagnostic(&self) -> &'static str {
        match self {
            Self::NeverAppeared => {
                "task record never appeared in the store (possible silent trigger failure)"
            }
            Self::Stalled => {
                "task record stayed non-terminal; the remote agent may still be running \
                 and may deliver after this timeout"
            }
        }
    }
}

orc_core::simple_display! {
    TimeoutKind {
        NeverAppeared => "never-appeared",
        Stalled => "stalled",
    }
}

/// Result of one polling wait.
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    /// Agent finished; carries what it wrote.
    Delivered {
        delivered_at: Option<String>,
        summary: Option<String>,
        waited: Duration,
        polls: u32,
    },
    /// Agent gave up and said why.
    Blocked { reason: Option<String>, waited: Duration, polls: u32 },
    /// Local give-up. Nothing was written; the remote outcome is unknown.
    TimedOut { kind: TimeoutKind, waited: Duration, polls: u32 },
}

/// Result of one full dispatch.
#[derive(Debug)]
pub enum DispatchOutcome {
    Delivered {
        delivered_at: Option<String>,
        summary: Option<String>,
        waited: Duration,
        polls: u32,
    },
    Blocked { reason: Option<String>, waited: Duration, polls: u32 },
    TimedOut { kind: TimeoutKind, waited: Duration, polls: u32 },
    /// The dispatch never reached a completed poll: validation, preflight,
    /// or trigger failed.
    Failed(DispatchFailure),
}

impl From<PollOutcome> for DispatchOutcome {
    fn from(outcome: PollOutcome) -> Self {
        match outcome {
            PollOutcome::Delivered { delivered_at, summary, waited, polls } => {
                Self::Delivered { delivered_at, summary, waited, polls }
            }
            PollOutcome::Blocked { reason, waited, polls } => {
                Self::Blocked { reason, waited, polls }
            }
            PollOutcome::TimedOut { kind, waited, polls } => {
                Self::TimedOut { kind, waited, polls }
            }
        }
    }
}

impl DispatchOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered { .. })
    }
}

orc_core::simple_display! {
    DispatchOutcome {
        Delivered { .. } => "DELIVERED",
        Blocked { .. } => "BLOCKED",
        TimedOut { .. } => "TIMEOUT",
        Failed(..) => "DISPATCH_FAILED",
    }
}

/// Ways a dispatch fails before polling can complete.
#[derive(Debug, Error)]
pub enum DispatchFailure {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The channel probe failed before any side effect.
    #[error("preflight probe failed: {source}")]
    Preflight {
        #[source]
        source: InvokeError,
    },

    /// Connectivity retries exhausted; the record was already claimed and is
    /// left IN_PROGRESS.
    #[error("trigger failed after {attempts} attempt(s): {source}")]
    Trigger {
        attempts: u32,
        #[source]
        source: InvokeError,
    },

    /// The remote runner refused the task. Never retried; the record is left
    /// IN_PROGRESS.
    #[error("agent rejected the task (exit {exit_code}): {stderr}")]
    Rejected { exit_code: i32, stderr: String },
}

/// Input rejections. Fail fast, before any side effect.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error(transparent)]
    Id(#[from] ParseIdError),

    #[error(transparent)]
    Agent(#[from] UnknownAgent),

    #[error("timeout {got:?} is below the minimum {min:?}")]
    TimeoutTooShort { got: Duration, min: Duration },

    #[error("poll interval must be shorter than the timeout")]
    IntervalExceedsTimeout,

    #[error("host must not be empty")]
    EmptyHost,
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
