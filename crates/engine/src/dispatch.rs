// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dispatch sequencing: validate → probe → claim → trigger → poll.

use crate::outcome::{DispatchFailure, DispatchOutcome, ValidationError};
use crate::poll::StatusPoller;
use orc_adapters::{InvokeError, RemoteInvoker, TaskStore};
use orc_core::{
    AgentKind, AgentRegistry, BrandId, Clock, CycleId, DispatchConfig, TaskId, TaskPatch,
};
use std::time::Duration;

/// Marker echoed by the preflight probe to prove the remote shell ran it.
const PROBE_MARKER: &str = "CONNECTION_OK";

/// One dispatch request, as it arrives from the caller.
///
/// Identifiers come in as raw strings and are parsed during validation so a
/// malformed id is a fail-fast outcome, not a panic deeper in.
#[derive(Debug, Clone)]
pub struct DispatchRequest {
    /// Agent short name, resolved through the registry.
    pub agent: String,
    pub cycle: String,
    pub task: String,
    pub brand: String,
    /// Trigger target, `user@host` or bare host.
    pub host: String,
    /// Overall execution timeout bounding the polling wait.
    pub timeout: Duration,
    pub poll_interval: Duration,
}

/// A request that passed validation.
#[derive(Debug)]
struct Validated {
    kind: AgentKind,
    worker: String,
    cycle: CycleId,
    task: TaskId,
    brand: BrandId,
}

/// Sequences one dispatch end to end.
///
/// Owns no state between dispatches; everything observable lives in the
/// task record. After the trigger call the dispatcher never writes the
/// record again — ownership of further transitions passes to the remote
/// agent.
pub struct Dispatcher<S, R, C> {
    store: S,
    invoker: R,
    clock: C,
    registry: AgentRegistry,
    config: DispatchConfig,
}

impl<S, R, C> Dispatcher<S, R, C>
where
    S: TaskStore,
    R: RemoteInvoker,
    C: Clock,
{
    pub fn new(
        store: S,
        invoker: R,
        clock: C,
        registry: AgentRegistry,
        config: DispatchConfig,
    ) -> Self {
        Self { store, invoker, clock, registry, config }
    }

    /// Run one dispatch to a distinguishable outcome. Never panics, never
    /// returns an uncaught error: every failure mode is an outcome value.
    pub async fn dispatch(&self, request: &DispatchRequest) -> DispatchOutcome {
        let validated = match self.validate(request) {
            Ok(validated) => validated,
            Err(error) => {
                tracing::error!(%error, "request rejected");
                return DispatchOutcome::Failed(DispatchFailure::Validation(error));
            }
        };

        tracing::info!(
            agent = %validated.worker,
            cycle = %validated.cycle,
            task = %validated.task,
            brand = %validated.brand,
            host = %request.host,
            "dispatching agent"
        );

        if self.config.preflight {
            if let Err(source) = self.preflight(&request.host).await {
                tracing::error!(host = %request.host, error = %source, "preflight probe failed");
                return DispatchOutcome::Failed(DispatchFailure::Preflight { source });
            }
        }

        // Claim strictly before the trigger. From here on the record belongs
        // to the remote agent.
        self.mark_in_progress(&validated.task).await;

        if let Err(failure) = self.trigger(&validated, &request.host).await {
            return DispatchOutcome::Failed(failure);
        }

        let poller = StatusPoller::new(
            self.store.clone(),
            self.clock.clone(),
            self.config.not_found_grace,
        );
        poller
            .poll(&validated.task, request.timeout, request.poll_interval)
            .await
            .into()
    }

    fn validate(&self, request: &DispatchRequest) -> Result<Validated, ValidationError> {
        let (kind, worker) = self.registry.resolve(&request.agent)?;
        let cycle = CycleId::parse(&request.cycle)?;
        let task = TaskId::parse(&request.task)?;
        let brand = BrandId::parse(&request.brand)?;
        if request.host.trim().is_empty() {
            return Err(ValidationError::EmptyHost);
        }
        if request.timeout < self.config.min_timeout {
            return Err(ValidationError::TimeoutTooShort {
                got: request.timeout,
                min: self.config.min_timeout,
            });
        }
        if request.poll_interval >= request.timeout {
            return Err(ValidationError::IntervalExceedsTimeout);
        }
        Ok(Validated { kind, worker, cycle, task, brand })
    }

    /// Probe the channel with a cheap echo before touching the record, so a
    /// dead host aborts the dispatch while it is still side-effect-free.
    async fn preflight(&self, host: &str) -> Result<(), InvokeError> {
        let command = format!("echo {PROBE_MARKER}");
        let result = self
            .invoker
            .execute(host, &command, self.config.preflight_timeout)
            .await?;
        if result.success() && result.stdout.contains(PROBE_MARKER) {
            tracing::debug!(host, "preflight probe ok");
            Ok(())
        } else {
            Err(InvokeError::Channel {
                exit_code: result.exit_code,
                stderr: result.stderr.trim().to_string(),
            })
        }
    }

    /// The single record mutation this subsystem performs. A failed write is
    /// tolerated: the trigger is the authoritative side effect, and refusing
    /// to dispatch over failed bookkeeping would strand the cycle.
    async fn mark_in_progress(&self, task: &TaskId) {
        let patch = TaskPatch::in_progress(self.clock.timestamp_rfc3339());
        if let Err(error) = self.store.update(task, &patch).await {
            tracing::warn!(task = %task, %error, "could not mark task in progress; proceeding");
        }
    }

    /// Fire the trigger under the short handshake timeout. Connectivity
    /// failures are retried with a fixed backoff; a rejection from the remote
    /// runner is final.
    async fn trigger(&self, validated: &Validated, host: &str) -> Result<(), DispatchFailure> {
        let command = format!(
            "openclaw run {} --cycle {} --task {} --brand {}",
            validated.worker, validated.cycle, validated.task, validated.brand,
        );

        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            match self
                .invoker
                .execute(host, &command, self.config.trigger_timeout)
                .await
            {
                Ok(result) if result.success() => {
                    tracing::info!(
                        agent = %validated.worker,
                        kind = %validated.kind,
                        attempt,
                        "agent triggered"
                    );
                    return Ok(());
                }
                Ok(result) => {
                    return Err(DispatchFailure::Rejected {
                        exit_code: result.exit_code,
                        stderr: result.stderr.trim().to_string(),
                    });
                }
                Err(source) if source.is_retryable() && attempt < self.config.trigger_attempts => {
                    tracing::warn!(attempt, error = %source, "trigger failed; backing off");
                    self.clock.sleep(self.config.trigger_backoff).await;
                }
                Err(source) => {
                    return Err(DispatchFailure::Trigger { attempts: attempt, source });
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
