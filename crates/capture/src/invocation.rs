// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Captured invocation data types.

use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime};

/// Captured invocation record
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CapturedInvocation {
    /// Sequence number within this log handle
    pub seq: u64,

    /// Wall-clock timestamp
    pub timestamp: SystemTime,

    /// Elapsed time since capture started
    pub elapsed: Duration,

    /// Full argv as received, program name first
    pub argv: Vec<String>,

    /// Behavior identity derived from `argv`
    pub identity: String,

    /// What parrot did with the invocation
    pub outcome: CapturedOutcome,
}

/// Captured outcome (replay or failure)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CapturedOutcome {
    Replayed {
        return_code: i32,
        stdout_bytes: usize,
        stderr_bytes: usize,
    },
    Failure {
        kind: String,
        message: String,
        exit_code: i32,
    },
}

impl CapturedOutcome {
    /// Exit code the process terminated (or will terminate) with.
    pub fn exit_code(&self) -> i32 {
        match self {
            CapturedOutcome::Replayed { return_code, .. } => *return_code,
            CapturedOutcome::Failure { exit_code, .. } => *exit_code,
        }
    }
}

#[cfg(test)]
#[path = "invocation_tests.rs"]
mod tests;
