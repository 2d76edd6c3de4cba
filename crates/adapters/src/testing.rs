// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for the fake adapters.

use parking_lot::Mutex;
use std::sync::Arc;

/// Ordered log of adapter calls, shareable across fakes.
///
/// Lets a test hand the same log to a fake store and a fake invoker and then
/// assert cross-adapter ordering (e.g. the in-progress write strictly before
/// the trigger).
#[derive(Clone, Default)]
pub struct CallLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, entry: impl Into<String>) {
        self.entries.lock().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }
}
