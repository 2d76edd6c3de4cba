// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Task-record store adapter.
//!
//! The store is the only synchronization point between the dispatcher and the
//! remote agent: both sides read and write the same row, last-write-wins,
//! with no lock or versioning.

use async_trait::async_trait;
use orc_core::{TaskId, TaskPatch, TaskRecord};
use thiserror::Error;

mod rest;

#[cfg(any(test, feature = "test-support"))]
mod fake;

pub use rest::RestStore;

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeStore;

/// Errors from store operations.
///
/// Raw response bodies are preserved so operators can see what the store
/// actually said.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("store returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed store payload: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("service key contains characters not valid in a header")]
    InvalidKey,
}

/// Adapter for the shared task-record store.
#[async_trait]
pub trait TaskStore: Clone + Send + Sync + 'static {
    /// Read one record by task id; `None` if the row does not exist (yet).
    async fn read(&self, task_id: &TaskId) -> Result<Option<TaskRecord>, StoreError>;

    /// Apply a partial update to one record.
    async fn update(&self, task_id: &TaskId, patch: &TaskPatch) -> Result<(), StoreError>;
}
