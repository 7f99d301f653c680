// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error kinds that abort an impersonation run.

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes used when parrot cannot replay a behavior.
///
/// Values follow `sysexits.h` so they stay clear of the small codes real
/// tools usually return. A behavior may still declare one of them; the
/// capture log tells the two apart.
pub mod exit_codes {
    /// Self mode, or a replayed behavior returning zero
    pub const SUCCESS: i32 = 0;
    /// Catalog document found but structurally invalid (EX_DATAERR)
    pub const MALFORMED_CATALOG: i32 = 65;
    /// No usable catalog document (EX_NOINPUT)
    pub const MISSING_CATALOG: i32 = 66;
    /// Catalog has no behavior for the invocation (EX_UNAVAILABLE)
    pub const UNKNOWN_BEHAVIOR: i32 = 69;
    /// Replay output could not be written (EX_IOERR)
    pub const REPLAY_FAILED: i32 = 74;
}

/// Errors that can occur while resolving or replaying a behavior
#[derive(Debug, Error)]
pub enum ParrotError {
    #[error("No usable behavior catalog at {}", path.display())]
    MissingCatalog {
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Malformed behavior catalog: {0}")]
    MalformedCatalog(#[from] Malformed),

    #[error("No known behavior \"{identity}\"")]
    UnknownBehavior { identity: String },

    #[error("Failed to replay behavior: {0}")]
    Replay(#[source] std::io::Error),
}

/// Structural defects that make a catalog document unusable
#[derive(Debug, Error)]
pub enum Malformed {
    #[error("failed to parse JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("expected an array of behaviors, found {found}")]
    NotAnArray { found: &'static str },

    #[error("no behaviors defined")]
    Empty,

    #[error("behavior #{index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl ParrotError {
    /// Stable snake_case name recorded in the capture log.
    pub fn kind(&self) -> &'static str {
        match self {
            ParrotError::MissingCatalog { .. } => "missing_catalog",
            ParrotError::MalformedCatalog(_) => "malformed_catalog",
            ParrotError::UnknownBehavior { .. } => "unknown_behavior",
            ParrotError::Replay(_) => "replay_failed",
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ParrotError::MissingCatalog { .. } => exit_codes::MISSING_CATALOG,
            ParrotError::MalformedCatalog(_) => exit_codes::MALFORMED_CATALOG,
            ParrotError::UnknownBehavior { .. } => exit_codes::UNKNOWN_BEHAVIOR,
            ParrotError::Replay(_) => exit_codes::REPLAY_FAILED,
        }
    }

    /// Message including the underlying I/O cause, if any.
    pub fn detail(&self) -> String {
        match self {
            ParrotError::MissingCatalog {
                source: Some(source),
                ..
            } => format!("{}: {}", self, source),
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
