// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted in-memory task store for tests.

use super::{StoreError, TaskStore};
use crate::testing::CallLog;
use async_trait::async_trait;
use orc_core::{TaskId, TaskPatch, TaskRecord};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

/// One scripted answer to a `read` call.
enum ReadScript {
    Row(Option<TaskRecord>),
    Error(StoreError),
}

/// Fake store driven by a scripted sequence of read results.
///
/// Each `read` consumes the next scripted entry; once the script is
/// exhausted, the last non-error entry repeats (a terminal record stays
/// terminal). Updates are recorded, and optionally fail.
#[derive(Clone, Default)]
pub struct FakeStore {
    reads: Arc<Mutex<VecDeque<ReadScript>>>,
    repeat: Arc<Mutex<Option<Option<TaskRecord>>>>,
    updates: Arc<Mutex<Vec<(TaskId, TaskPatch)>>>,
    fail_updates: Arc<Mutex<bool>>,
    log: Arc<Mutex<Option<CallLog>>>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the next read to return this row (or absence).
    pub fn push_read(&self, row: Option<TaskRecord>) -> &Self {
        self.reads.lock().push_back(ReadScript::Row(row));
        self
    }

    /// Script the next read to fail.
    pub fn push_read_error(&self, error: StoreError) -> &Self {
        self.reads.lock().push_back(ReadScript::Error(error));
        self
    }

    /// Make all subsequent updates fail.
    pub fn fail_updates(&self) -> &Self {
        *self.fail_updates.lock() = true;
        self
    }

    /// Attach a shared call log for cross-adapter ordering assertions.
    pub fn with_log(self, log: CallLog) -> Self {
        *self.log.lock() = Some(log);
        self
    }

    /// Updates applied so far, in order.
    pub fn updates(&self) -> Vec<(TaskId, TaskPatch)> {
        self.updates.lock().clone()
    }

    /// Number of reads consumed so far is implicit in the log; expose the
    /// remaining script length for exhaustion assertions.
    pub fn remaining_reads(&self) -> usize {
        self.reads.lock().len()
    }

    fn record(&self, entry: &str) {
        if let Some(log) = self.log.lock().as_ref() {
            log.push(entry);
        }
    }
}

#[async_trait]
impl TaskStore for FakeStore {
    async fn read(&self, task_id: &TaskId) -> Result<Option<TaskRecord>, StoreError> {
        self.record("store.read");
        let _ = task_id;
        match self.reads.lock().pop_front() {
            Some(ReadScript::Row(row)) => {
                *self.repeat.lock() = Some(row.clone());
                Ok(row)
            }
            Some(ReadScript::Error(error)) => Err(error),
            None => Ok(self.repeat.lock().clone().unwrap_or(None)),
        }
    }

    async fn update(&self, task_id: &TaskId, patch: &TaskPatch) -> Result<(), StoreError> {
        self.record("store.update");
        if *self.fail_updates.lock() {
            return Err(StoreError::Status { status: 503, body: "unavailable".into() });
        }
        self.updates.lock().push((*task_id, patch.clone()));
        Ok(())
    }
}
