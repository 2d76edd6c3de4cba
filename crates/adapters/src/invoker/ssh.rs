// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Trigger channel over the system ssh client.

use super::{ExecResult, InvokeError, RemoteInvoker};
use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// ssh(1) reserves exit 255 for its own connection and protocol errors; any
/// other exit code came from the remote command.
const SSH_CHANNEL_FAILURE: i32 = 255;

/// Invoker driving the system `ssh` binary.
///
/// `BatchMode=yes` keeps a missing key from degrading into an interactive
/// password prompt that would hang until the trigger timeout.
#[derive(Debug, Clone)]
pub struct SshInvoker {
    connect_timeout: Duration,
}

impl SshInvoker {
    pub fn new() -> Self {
        Self { connect_timeout: Duration::from_secs(10) }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    fn build_args(&self, host: &str, command: &str) -> Vec<String> {
        vec![
            "-o".to_string(),
            "BatchMode=yes".to_string(),
            "-o".to_string(),
            format!("ConnectTimeout={}", self.connect_timeout.as_secs()),
            host.to_string(),
            command.to_string(),
        ]
    }
}

impl Default for SshInvoker {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify a finished ssh process into channel errors vs remote results.
fn classify(code: Option<i32>, stdout: String, stderr: String) -> Result<ExecResult, InvokeError> {
    match code {
        None => Err(InvokeError::Killed),
        Some(SSH_CHANNEL_FAILURE) => Err(InvokeError::Channel {
            exit_code: SSH_CHANNEL_FAILURE,
            stderr: stderr.trim().to_string(),
        }),
        Some(exit_code) => Ok(ExecResult { exit_code, stdout, stderr }),
    }
}

#[async_trait]
impl RemoteInvoker for SshInvoker {
    async fn execute(
        &self,
        host: &str,
        command: &str,
        timeout: Duration,
    ) -> Result<ExecResult, InvokeError> {
        let args = self.build_args(host, command);
        tracing::debug!(host, command, ?timeout, "invoking remote command");

        let mut cmd = Command::new("ssh");
        cmd.args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let output = tokio::time::timeout(timeout, cmd.output())
            .await
            .map_err(|_| InvokeError::TriggerTimeout { timeout })?
            .map_err(InvokeError::Spawn)?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        classify(output.status.code(), stdout, stderr)
    }
}

#[cfg(test)]
#[path = "ssh_tests.rs"]
mod tests;
