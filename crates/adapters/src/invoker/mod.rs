// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Remote trigger channel adapter.
//!
//! The channel is one-way and fire-and-forget: a successful invocation only
//! means the remote side accepted the command, never that the underlying
//! work finished. Nothing about the task outcome comes back synchronously.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

mod ssh;

#[cfg(any(test, feature = "test-support"))]
mod fake;

pub use ssh::SshInvoker;

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeInvoker, InvokerCall};

/// Outcome of a remote command that actually ran.
///
/// A nonzero exit code here is the remote process refusing the task, not a
/// channel problem — the two are kept apart because only channel problems
/// are worth retrying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ExecResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Errors from the trigger channel itself.
#[derive(Debug, Error)]
pub enum InvokeError {
    /// No ssh client, or it could not be started.
    #[error("failed to spawn ssh: {0}")]
    Spawn(#[source] std::io::Error),

    /// The handshake did not complete within the trigger timeout.
    #[error("trigger timed out after {timeout:?}")]
    TriggerTimeout { timeout: Duration },

    /// Channel-level failure: unreachable host, refused key, protocol error.
    #[error("ssh channel failure (exit {exit_code}): {stderr}")]
    Channel { exit_code: i32, stderr: String },

    /// The ssh process was terminated by a signal.
    #[error("ssh terminated by signal")]
    Killed,
}

impl InvokeError {
    /// Connectivity-class failures are retryable with backoff; a missing ssh
    /// client or a signal kill is not going to improve on retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::TriggerTimeout { .. } | Self::Channel { .. })
    }
}

/// Adapter for the one-way remote trigger channel.
#[async_trait]
pub trait RemoteInvoker: Send + Sync + 'static {
    /// Run one command on `host` under `timeout`.
    ///
    /// `Ok` means the command ran to completion (whatever its exit code);
    /// `Err` means the channel itself failed.
    async fn execute(
        &self,
        host: &str,
        command: &str,
        timeout: Duration,
    ) -> Result<ExecResult, InvokeError>;
}
