// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command line tool impersonator binary entry point.

use parrot::dispatch::Dispatcher;
use parrot::replay::ProcessReplayer;

fn main() {
    // Lossy so that odd bytes in an argument still yield an identity.
    let argv: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let dispatcher = Dispatcher::from_env();
    let code = dispatcher.dispatch(&argv, &mut ProcessReplayer::process());
    std::process::exit(code);
}
