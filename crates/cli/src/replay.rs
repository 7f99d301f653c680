// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavior replay onto injected output sinks.

use crate::behavior::Behavior;
use crate::error::ParrotError;
use std::io::{self, Write};

/// Writes a behavior's recorded output, then terminates with its code.
///
/// Both sinks and the exit hook are injected so tests can capture them
/// without touching the real process.
pub struct Replayer<O, E, X> {
    stdout: O,
    stderr: E,
    exit: X,
}

/// Replayer bound to the real process streams and `std::process::exit`.
pub type ProcessReplayer = Replayer<io::Stdout, io::Stderr, fn(i32)>;

impl<O, E, X> Replayer<O, E, X>
where
    O: Write,
    E: Write,
    X: FnMut(i32),
{
    pub fn new(stdout: O, stderr: E, exit: X) -> Self {
        Self {
            stdout,
            stderr,
            exit,
        }
    }

    /// Emit `stdout` and `stderr` verbatim, then call the exit hook with
    /// the behavior's return code.
    ///
    /// Nothing is appended to the recorded text. If a sink fails the exit
    /// hook is not called.
    pub fn replay(&mut self, behavior: &Behavior) -> Result<(), ParrotError> {
        write_all(&mut self.stdout, behavior.stdout())?;
        write_all(&mut self.stderr, behavior.stderr())?;
        (self.exit)(behavior.return_code());
        Ok(())
    }

    /// Recover the sinks, dropping the exit hook.
    pub fn into_parts(self) -> (O, E) {
        (self.stdout, self.stderr)
    }
}

impl ProcessReplayer {
    pub fn process() -> Self {
        Replayer::new(io::stdout(), io::stderr(), exit_process as fn(i32))
    }
}

fn write_all<W: Write>(sink: &mut W, text: &str) -> Result<(), ParrotError> {
    sink.write_all(text.as_bytes())
        .and_then(|()| sink.flush())
        .map_err(ParrotError::Replay)
}

fn exit_process(code: i32) {
    std::process::exit(code)
}

#[cfg(test)]
#[path = "replay_tests.rs"]
mod tests;
