// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Invocation capture and recording for test assertions.
//!
//! Parrot owns both standard output channels while it impersonates a tool, so
//! this log is where it reports what it did: one JSON line per invocation,
//! either the behavior it replayed or the reason it refused.

mod invocation;
mod log;

pub use invocation::{CapturedInvocation, CapturedOutcome};
pub use log::CaptureLog;
