// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! orc-adapters: External-interface adapters for the dispatch protocol.
//!
//! Two collaborators live behind traits here: the shared task-record store
//! (REST) and the one-way remote trigger channel (SSH). Both ship scripted
//! fakes behind the `test-support` feature.

pub mod invoker;
pub mod store;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use invoker::{ExecResult, InvokeError, RemoteInvoker, SshInvoker};
pub use store::{RestStore, StoreError, TaskStore};

#[cfg(any(test, feature = "test-support"))]
pub use invoker::FakeInvoker;
#[cfg(any(test, feature = "test-support"))]
pub use store::FakeStore;
#[cfg(any(test, feature = "test-support"))]
pub use testing::CallLog;
