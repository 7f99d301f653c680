// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavior identity derivation.

/// Relative-path prefix stripped from the program name.
const RELATIVE_PREFIX: &str = "./";

/// Build the catalog key for an invocation.
///
/// The program name loses a leading `./`, then it and every argument are
/// joined with single spaces. Arguments are neither quoted nor escaped, so
/// `["echo", "a b"]` and `["echo", "a", "b"]` share an identity.
pub fn identity<S: AsRef<str>>(argv: &[S]) -> String {
    let Some((program, args)) = argv.split_first() else {
        return String::new();
    };
    let program = program.as_ref();
    let program = program.strip_prefix(RELATIVE_PREFIX).unwrap_or(program);

    let mut id = String::from(program);
    for arg in args {
        id.push(' ');
        id.push_str(arg.as_ref());
    }
    id
}

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;
