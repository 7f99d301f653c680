// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use yare::parameterized;

struct Captured {
    stdout: String,
    stderr: String,
    exit_code: Option<i32>,
}

fn replay(behavior: &Behavior) -> Captured {
    let mut exit_code = None;
    let mut replayer = Replayer::new(Vec::new(), Vec::new(), |code| exit_code = Some(code));
    replayer.replay(behavior).unwrap();
    let (stdout, stderr) = replayer.into_parts();
    Captured {
        stdout: String::from_utf8(stdout).unwrap(),
        stderr: String::from_utf8(stderr).unwrap(),
        exit_code,
    }
}

fn behavior(command: &str, args: &[&str], stdout: &str, stderr: &str, code: i32) -> Behavior {
    Behavior::new(
        command,
        args.iter().map(|s| s.to_string()).collect(),
        stdout,
        stderr,
        code,
    )
}

#[parameterized(
    ls_no_such_files_fail = { behavior("ls", &["*.cc"], "", "ls: cannot access '*.cc': No such file or directory", 2) },
    ls_empty_success = { behavior("ls", &[], "", "", 0) },
    grep_stderr_stdout_fail = { behavior("grep", &["-niRI", "\"hi\""], "test:1:hi there!", "grep: neat_file: No such file or directory", 2) },
    grep_multiline_stdout_success = { behavior("grep", &["-niRI", "\"hi|hello\""], "1:hi there!\n2:hello joe.", "", 0) },
    no_args_success = { behavior("true", &[], "", "", 0) },
    no_args_fail = { behavior("false", &[], "", "", 1) },
)]
fn replays_recorded_output(recorded: Behavior) {
    let captured = replay(&recorded);
    assert_eq!(captured.stdout, recorded.stdout());
    assert_eq!(captured.stderr, recorded.stderr());
    assert_eq!(captured.exit_code, Some(recorded.return_code()));
}

#[test]
fn no_trailing_newline_is_added() {
    let captured = replay(&behavior("echo", &["Hello", "world!"], "Hello world!", "", 0));
    assert_eq!(captured.stdout, "Hello world!");
}

#[test]
fn recorded_newlines_are_kept() {
    let captured = replay(&behavior("printf", &[], "a\n\nb\n", "warn\n", 0));
    assert_eq!(captured.stdout, "a\n\nb\n");
    assert_eq!(captured.stderr, "warn\n");
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn failing_sink_skips_exit() {
    let mut exit_code = None;
    let mut replayer = Replayer::new(BrokenPipe, Vec::new(), |code| exit_code = Some(code));

    let err = replayer
        .replay(&behavior("echo", &["hi"], "hi", "", 0))
        .unwrap_err();
    let (_, stderr) = replayer.into_parts();

    assert!(matches!(err, ParrotError::Replay(_)));
    assert!(stderr.is_empty());
    assert_eq!(exit_code, None);
}

#[test]
fn stdout_is_written_before_stderr() {
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Tagged(&'static str, Rc<RefCell<Vec<&'static str>>>);

    impl Write for Tagged {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.1.borrow_mut().push(self.0);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let order = Rc::new(RefCell::new(Vec::new()));
    let exit_order = Rc::clone(&order);
    let mut replayer = Replayer::new(
        Tagged("stdout", Rc::clone(&order)),
        Tagged("stderr", Rc::clone(&order)),
        move |_| exit_order.borrow_mut().push("exit"),
    );
    replayer
        .replay(&behavior("grep", &["x"], "out", "err", 1))
        .unwrap();

    assert_eq!(*order.borrow(), vec!["stdout", "stderr", "exit"]);
}
