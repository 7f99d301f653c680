// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command Line Tool Impersonator
//!
//! A test double for arbitrary command line tools. Installed under a tool's
//! name ahead of the real tool in `PATH`, parrot derives an identity from its
//! argv, looks it up in a catalog of recorded behaviors, and replays that
//! behavior's stdout, stderr and return code.
//!
//! ```json
//! [
//!   {"command": "ls", "args": ["*.cc"], "stdout": "",
//!    "stderr": "ls: cannot access '*.cc': No such file or directory",
//!    "return_code": 2}
//! ]
//! ```

pub mod behavior;
pub mod catalog;
pub mod cli;
pub mod dispatch;
pub mod env;
pub mod error;
pub mod identity;
pub mod locator;
pub mod replay;

/// Re-exported capture types from parrot-capture crate.
pub mod capture {
    pub use parrot_capture::{CaptureLog, CapturedInvocation, CapturedOutcome};
}

pub use behavior::Behavior;
pub use catalog::Catalog;
pub use dispatch::{Dispatcher, Mode};
pub use error::{Malformed, ParrotError};
pub use identity::identity;
pub use locator::CatalogLocator;
pub use replay::Replayer;
