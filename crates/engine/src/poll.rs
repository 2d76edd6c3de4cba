// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Completion polling: re-read the task record until terminal or timed out.

use crate::outcome::{PollOutcome, TimeoutKind};
use orc_adapters::TaskStore;
use orc_core::{Clock, TaskId, TaskStatus};
use std::time::Duration;

/// Polls one task record until it reaches a terminal state or the execution
/// timeout elapses.
///
/// The timeout is a purely local give-up: nothing is sent to the remote side,
/// nothing is written back, and the agent may still be running afterward.
pub struct StatusPoller<S, C> {
    store: S,
    clock: C,
    /// How long record absence is tolerated before it is folded into a
    /// timeout (record creation may lag visibility after the trigger).
    grace: Duration,
}

impl<S: TaskStore, C: Clock> StatusPoller<S, C> {
    pub fn new(store: S, clock: C, grace: Duration) -> Self {
        Self { store, clock, grace }
    }

    pub async fn poll(
        &self,
        task_id: &TaskId,
        timeout: Duration,
        interval: Duration,
    ) -> PollOutcome {
        let start = self.clock.now();
        let mut polls: u32 = 0;
        let mut seen = false;

        loop {
            let waited = self.clock.now().saturating_duration_since(start);
            if waited >= timeout {
                let kind =
                    if seen { TimeoutKind::Stalled } else { TimeoutKind::NeverAppeared };
                tracing::warn!(
                    task = %task_id, ?waited, polls, %kind,
                    "gave up waiting for terminal status"
                );
                return PollOutcome::TimedOut { kind, waited, polls };
            }

            polls += 1;
            match self.store.read(task_id).await {
                Err(error) => {
                    // A flaky read is a missed observation, not a failure of
                    // the wait itself.
                    tracing::warn!(task = %task_id, poll = polls, %error, "status read failed");
                }
                Ok(None) => {
                    if !seen && waited >= self.grace {
                        tracing::warn!(
                            task = %task_id, ?waited,
                            "record still absent past the grace window"
                        );
                        return PollOutcome::TimedOut {
                            kind: TimeoutKind::NeverAppeared,
                            waited,
                            polls,
                        };
                    }
                    tracing::debug!(task = %task_id, poll = polls, "record not yet visible");
                }
                Ok(Some(record)) => {
                    seen = true;
                    match record.status {
                        TaskStatus::Delivered => {
                            tracing::info!(task = %task_id, ?waited, polls, "task delivered");
                            return PollOutcome::Delivered {
                                delivered_at: record.delivered_at,
                                summary: record.summary,
                                waited,
                                polls,
                            };
                        }
                        TaskStatus::Blocked => {
                            tracing::warn!(
                                task = %task_id,
                                reason = record.blocked_reason.as_deref().unwrap_or("-"),
                                "task blocked"
                            );
                            return PollOutcome::Blocked {
                                reason: record.blocked_reason,
                                waited,
                                polls,
                            };
                        }
                        TaskStatus::InProgress => {
                            tracing::debug!(
                                task = %task_id, poll = polls,
                                picked_up = record.runner_picked_at.as_deref().unwrap_or("-"),
                                "task in progress"
                            );
                        }
                        TaskStatus::Pending => {
                            tracing::debug!(
                                task = %task_id, poll = polls,
                                "task still pending pickup"
                            );
                        }
                        TaskStatus::Unknown => {
                            tracing::warn!(
                                task = %task_id, poll = polls,
                                "record carries an unrecognized status; still waiting"
                            );
                        }
                    }
                }
            }

            self.clock.sleep(interval).await;
        }
    }
}

#[cfg(test)]
#[path = "poll_tests.rs"]
mod tests;
