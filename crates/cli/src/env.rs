// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by parrot are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

// Re-export name constants for callers that need the raw name string.
pub use names::*;

use std::path::PathBuf;

/// `PARROT_BEHAVIORS_FILE` — Behavior catalog override.
///
/// Set means authoritative, even when the value is empty.
pub fn behaviors_file() -> Option<PathBuf> {
    std::env::var_os(names::PARROT_BEHAVIORS_FILE).map(PathBuf::from)
}

/// `PARROT_CAPTURE_FILE` — JSONL log of every impersonated invocation.
pub fn capture_file() -> Option<PathBuf> {
    std::env::var_os(names::PARROT_CAPTURE_FILE)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
