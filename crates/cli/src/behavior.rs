// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavior records: what to replay for one exact invocation.

use crate::identity::identity;
use serde::Deserialize;

/// A recorded invocation and the output it produces
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Behavior {
    command: String,
    args: Vec<String>,
    stdout: String,
    stderr: String,
    return_code: i32,
    identity: String,
}

/// Catalog element as written in the document.
///
/// Every field is required; unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct BehaviorRecord {
    command: String,
    args: Vec<String>,
    stdout: String,
    stderr: String,
    return_code: i32,
}

impl Behavior {
    pub fn new(
        command: impl Into<String>,
        args: Vec<String>,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
        return_code: i32,
    ) -> Self {
        let command = command.into();
        let identity = identity(&invocation(&command, &args));
        Self {
            command,
            args,
            stdout: stdout.into(),
            stderr: stderr.into(),
            return_code,
            identity,
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    pub fn return_code(&self) -> i32 {
        self.return_code
    }

    /// Catalog key, derived from `command` and `args`
    pub fn identity(&self) -> &str {
        &self.identity
    }
}

impl BehaviorRecord {
    pub(crate) fn into_behavior(self) -> Behavior {
        Behavior::new(
            self.command,
            self.args,
            self.stdout,
            self.stderr,
            self.return_code,
        )
    }
}

fn invocation<'a>(command: &'a str, args: &'a [String]) -> Vec<&'a str> {
    std::iter::once(command)
        .chain(args.iter().map(String::as_str))
        .collect()
}

#[cfg(test)]
#[path = "behavior_tests.rs"]
mod tests;
