// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Top-level control: self mode or impersonation.

use crate::catalog::Catalog;
use crate::cli;
use crate::env;
use crate::error::ParrotError;
use crate::identity::identity;
use crate::locator::CatalogLocator;
use crate::replay::Replayer;
use parrot_capture::{CaptureLog, CapturedOutcome};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Executable name that selects self mode
pub const SELF_NAME: &str = "parrot";

/// Operating mode, fixed for the lifetime of a process
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Invoked as parrot itself: usage only, no catalog work
    SelfUsage,
    /// Invoked under any other name: replay a behavior
    Impersonate,
}

impl Mode {
    /// Select the mode from the file name of `argv[0]`.
    pub fn detect<S: AsRef<str>>(argv: &[S], self_name: &str) -> Self {
        let name = argv
            .first()
            .and_then(|program| Path::new(program.as_ref()).file_name())
            .and_then(|name| name.to_str());
        match name {
            Some(name) if strip_exe_suffix(name) == self_name => Mode::SelfUsage,
            _ => Mode::Impersonate,
        }
    }
}

fn strip_exe_suffix(name: &str) -> &str {
    name.strip_suffix(std::env::consts::EXE_SUFFIX).unwrap_or(name)
}

/// Runs one invocation and turns its outcome into an exit code.
///
/// This is the only place an error becomes a process exit code. Failures
/// never reach the replay sinks; they go to the capture log, if any.
pub struct Dispatcher {
    self_name: String,
    locator: Option<CatalogLocator>,
    capture: Option<CaptureLog>,
    capture_file: Option<PathBuf>,
}

impl Dispatcher {
    /// Dispatcher that locates the catalog from the environment and keeps
    /// no capture log.
    pub fn new() -> Self {
        Self {
            self_name: SELF_NAME.to_string(),
            locator: None,
            capture: None,
            capture_file: None,
        }
    }

    /// Dispatcher for the running process, logging to `PARROT_CAPTURE_FILE`
    /// when it is set and can be opened.
    pub fn from_env() -> Self {
        Self {
            capture_file: env::capture_file(),
            ..Self::new()
        }
    }

    pub fn with_self_name(mut self, name: impl Into<String>) -> Self {
        self.self_name = name.into();
        self
    }

    pub fn with_locator(mut self, locator: CatalogLocator) -> Self {
        self.locator = Some(locator);
        self
    }

    pub fn with_capture(mut self, capture: CaptureLog) -> Self {
        self.capture = Some(capture);
        self
    }

    /// Append to `path`, opened only once an impersonation starts. An
    /// injected log from [`Dispatcher::with_capture`] takes precedence.
    pub fn with_capture_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.capture_file = Some(path.into());
        self
    }

    pub fn mode(&self, argv: &[String]) -> Mode {
        Mode::detect(argv, &self.self_name)
    }

    /// Handle `argv` in whichever mode its program name selects.
    pub fn dispatch<O, E, X>(&self, argv: &[String], replayer: &mut Replayer<O, E, X>) -> i32
    where
        O: Write,
        E: Write,
        X: FnMut(i32),
    {
        match self.mode(argv) {
            Mode::SelfUsage => cli::run_self(argv),
            Mode::Impersonate => self.impersonate(argv, replayer),
        }
    }

    /// Locate, load, resolve and replay.
    ///
    /// Returns the replayed return code when the exit hook hands control
    /// back, or the error's exit code.
    pub fn impersonate<O, E, X>(&self, argv: &[String], replayer: &mut Replayer<O, E, X>) -> i32
    where
        O: Write,
        E: Write,
        X: FnMut(i32),
    {
        let id = identity(argv);
        let capture = self.open_capture();
        match self.try_impersonate(argv, &id, capture.as_ref(), replayer) {
            Ok(code) => code,
            Err(err) => {
                record(
                    capture.as_ref(),
                    argv,
                    &id,
                    CapturedOutcome::Failure {
                        kind: err.kind().to_string(),
                        message: err.detail(),
                        exit_code: err.exit_code(),
                    },
                );
                err.exit_code()
            }
        }
    }

    fn try_impersonate<O, E, X>(
        &self,
        argv: &[String],
        id: &str,
        capture: Option<&CaptureLog>,
        replayer: &mut Replayer<O, E, X>,
    ) -> Result<i32, ParrotError>
    where
        O: Write,
        E: Write,
        X: FnMut(i32),
    {
        let locator = match &self.locator {
            Some(locator) => locator.clone(),
            None => CatalogLocator::from_env()?,
        };
        let path = locator.locate()?;
        let catalog = Catalog::load(&path)?;
        let behavior = catalog.resolve(id)?;

        // Recorded up front: the exit hook does not return in production.
        record(
            capture,
            argv,
            id,
            CapturedOutcome::Replayed {
                return_code: behavior.return_code(),
                stdout_bytes: behavior.stdout().len(),
                stderr_bytes: behavior.stderr().len(),
            },
        );
        replayer.replay(behavior)?;
        Ok(behavior.return_code())
    }

    /// An unopenable capture file leaves the invocation unlogged.
    fn open_capture(&self) -> Option<CaptureLog> {
        match (&self.capture, &self.capture_file) {
            (Some(capture), _) => Some(capture.clone()),
            (None, Some(path)) => CaptureLog::with_file(path).ok(),
            (None, None) => None,
        }
    }
}

fn record(capture: Option<&CaptureLog>, argv: &[String], id: &str, outcome: CapturedOutcome) {
    if let Some(capture) = capture {
        capture.record(argv.to_vec(), id.to_string(), outcome);
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
