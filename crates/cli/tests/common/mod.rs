// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for running the parrot binary under borrowed names.

#![allow(dead_code)]

use std::io::Write;
use std::os::unix::process::CommandExt;
use std::path::{Path, PathBuf};
use tempfile::{NamedTempFile, TempDir};

pub const BEHAVIORS_VAR: &str = "PARROT_BEHAVIORS_FILE";
pub const CAPTURE_VAR: &str = "PARROT_CAPTURE_FILE";

pub const ECHO_AND_LS: &str = r#"[
    {"command": "echo",
     "args": ["Hello", "world!"],
     "stdout": "Hello world!",
     "stderr": "",
     "return_code": 0
    },
    {"command": "ls",
     "args": ["*.cc"],
     "stdout": "",
     "stderr": "ls: cannot access '*.cc': No such file or directory",
     "return_code": 2
    }
]"#;

/// Path to the compiled parrot binary
pub fn parrot_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_parrot"))
}

/// Create a temporary catalog file
pub fn write_catalog(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Run the parrot binary with `argv[0]` set to `name`.
///
/// Catalog and capture variables from the outer environment are removed.
pub fn as_tool(name: &str) -> assert_cmd::Command {
    at_path(&parrot_bin(), name)
}

/// Run the executable at `path` with `argv[0]` set to `name`.
pub fn at_path(path: &Path, name: &str) -> assert_cmd::Command {
    let mut cmd = std::process::Command::new(path);
    cmd.arg0(name)
        .env_remove(BEHAVIORS_VAR)
        .env_remove(CAPTURE_VAR);
    assert_cmd::Command::from_std(cmd)
}

/// Install parrot as `name` in a fresh directory, the way a tool would be
/// installed, so the executable's own directory is that directory.
///
/// Hard links avoid writing an executable while other tests fork.
pub fn install_as(name: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir_in(env!("CARGO_TARGET_TMPDIR")).unwrap();
    let tool = dir.path().join(name);
    if std::fs::hard_link(parrot_bin(), &tool).is_err() {
        std::fs::copy(parrot_bin(), &tool).unwrap();
    }
    (dir, tool)
}
