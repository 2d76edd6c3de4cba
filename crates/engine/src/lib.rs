// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! orc-engine: Dispatch sequencing and completion polling.
//!
//! The dispatcher is fully sequential: validate, probe, claim the record,
//! trigger, poll, report. The only concurrency in the protocol is the remote
//! agent writing the terminal status from another machine; the engine's job
//! is to observe that write under a timeout, never to race it.

pub mod dispatch;
pub mod outcome;
pub mod poll;

pub use dispatch::{DispatchRequest, Dispatcher};
pub use outcome::{
    DispatchFailure, DispatchOutcome, PollOutcome, TimeoutKind, ValidationError,
};
pub use poll::StatusPoller;
