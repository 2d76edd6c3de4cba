// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted remote invoker for tests.

use super::{ExecResult, InvokeError, RemoteInvoker};
use crate::testing::CallLog;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

/// One recorded `execute` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvokerCall {
    pub host: String,
    pub command: String,
    pub timeout: Duration,
}

/// Fake invoker driven by a scripted queue of results.
///
/// Each `execute` consumes the next scripted entry; once the queue is empty,
/// calls succeed with exit 0 and empty output.
#[derive(Clone, Default)]
pub struct FakeInvoker {
    results: Arc<Mutex<VecDeque<Result<ExecResult, InvokeError>>>>,
    calls: Arc<Mutex<Vec<InvokerCall>>>,
    log: Arc<Mutex<Option<CallLog>>>,
}

impl FakeInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the next call to return a completed command with this exit code.
    pub fn push_exit(&self, exit_code: i32, stderr: &str) -> &Self {
        self.results.lock().push_back(Ok(ExecResult {
            exit_code,
            stdout: String::new(),
            stderr: stderr.to_string(),
        }));
        self
    }

    /// Script the next call to return a full result.
    pub fn push_result(&self, result: ExecResult) -> &Self {
        self.results.lock().push_back(Ok(result));
        self
    }

    /// Script the next call to fail at the channel level.
    pub fn push_error(&self, error: InvokeError) -> &Self {
        self.results.lock().push_back(Err(error));
        self
    }

    /// Attach a shared call log for cross-adapter ordering assertions.
    pub fn with_log(self, log: CallLog) -> Self {
        *self.log.lock() = Some(log);
        self
    }

    /// Calls made so far, in order.
    pub fn calls(&self) -> Vec<InvokerCall> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl RemoteInvoker for FakeInvoker {
    async fn execute(
        &self,
        host: &str,
        command: &str,
        timeout: Duration,
    ) -> Result<ExecResult, InvokeError> {
        if let Some(log) = self.log.lock().as_ref() {
            log.push("invoker.execute");
        }
        self.calls.lock().push(InvokerCall {
            host: host.to_string(),
            command: command.to_string(),
            timeout,
        });
        self.results.lock().pop_front().unwrap_or_else(|| {
            Ok(ExecResult { exit_code: 0, stdout: String::new(), stderr: String::new() })
        })
    }
}
