// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Self-mode surface, shown when parrot runs under its own name.

use crate::error::exit_codes;
use clap::Parser;
use std::ffi::OsString;

const LONG_ABOUT: &str = "\
Fake command line tools for testing scripts that depend on them.

Copy or symlink parrot to the name of the tool you want to fake and put it
ahead of the real tool in PATH. Each invocation is matched against a catalog
of behaviors; the matching behavior's stdout, stderr and return code are
replayed instead of running the real tool.

The catalog is read from the file named by PARROT_BEHAVIORS_FILE. When that
variable is unset, parrot reads `parrot_behaviors` from the directory holding
the parrot executable. A set but missing PARROT_BEHAVIORS_FILE is an error;
there is no fallback.

The catalog is a JSON array of objects with the fields `command`, `args`,
`stdout`, `stderr` and `return_code`.

Because stdout and stderr belong to the replayed behavior, parrot reports its
own failures only through its exit code (65 malformed catalog, 66 missing
catalog, 69 unknown behavior, 74 output failure) and, when
PARROT_CAPTURE_FILE is set, as JSON lines appended to that file.";

/// Command line tool impersonator
#[derive(Parser, Debug)]
#[command(
    name = "parrot",
    version,
    about = "Command line tool impersonator",
    long_about = LONG_ABOUT
)]
pub struct Cli {}

/// Handle a self-mode invocation.
///
/// Prints help or version text when asked. Always succeeds, even when the
/// arguments don't parse.
pub fn run_self<I, T>(argv: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    if let Err(e) = Cli::try_parse_from(argv) {
        let _ = e.print();
    }
    exit_codes::SUCCESS
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
