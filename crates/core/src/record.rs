// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Task record: the single source of truth for one dispatched unit of work.
//!
//! Records are created upstream in `PENDING`, moved to `IN_PROGRESS` by the
//! dispatcher immediately before triggering, and moved to a terminal state by
//! the remote agent itself — from another machine, asynchronously, with no
//! shared lock. Status transitions are monotonic; nothing ever leaves a
//! terminal state.

use crate::id::{BrandId, CycleId, TaskId};
use serde::{Deserialize, Serialize};

/// Persisted lifecycle state of a task record.
///
/// Wire form is SCREAMING_SNAKE_CASE, matching the store schema. Statuses this
/// version does not know deserialize as [`TaskStatus::Unknown`] and are
/// treated as non-terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Created by the upstream scheduler; not yet dispatched.
    Pending,
    /// Dispatcher has claimed the task and is about to trigger the agent.
    InProgress,
    /// Agent finished and wrote its deliverable.
    Delivered,
    /// Agent gave up and self-reported a reason.
    Blocked,
    /// A status string this version does not know.
    #[serde(other)]
    Unknown,
}

impl TaskStatus {
    /// True for the two persisted terminal states.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Blocked)
    }
}

crate::simple_display! {
    TaskStatus {
        Pending => "PENDING",
        InProgress => "IN_PROGRESS",
        Delivered => "DELIVERED",
        Blocked => "BLOCKED",
        Unknown => "UNKNOWN",
    }
}

/// One row of the `agent_deliverables` table.
///
/// Timestamps are kept as the store's RFC 3339 strings; this subsystem only
/// ever displays them, never does arithmetic on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: TaskId,
    pub cycle_id: CycleId,
    pub brand_id: BrandId,
    /// Fully-qualified worker identity the task is assigned to.
    pub agent_name: String,
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
    /// When the remote runner picked the task up.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runner_picked_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivered_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocked_reason: Option<String>,
    /// Free-form deliverable summary written by the agent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// Partial update written by the dispatcher.
///
/// The dispatcher performs exactly one record mutation per dispatch — the
/// `PENDING → IN_PROGRESS` claim — so the patch surface is deliberately this
/// small.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
}

impl TaskPatch {
    /// The claim patch written immediately before triggering the agent.
    pub fn in_progress(started_at: String) -> Self {
        Self { status: Some(TaskStatus::InProgress), started_at: Some(started_at) }
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
