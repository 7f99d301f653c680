// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capture log shared by a parrot process and, through its JSONL file, by
//! the test harness that spawned it.

use crate::invocation::{CapturedInvocation, CapturedOutcome};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::{Instant, SystemTime};

/// In-memory record of invocations, optionally mirrored to an append-only
/// JSONL file. Clones share the same records.
#[derive(Clone)]
pub struct CaptureLog {
    inner: Arc<Inner>,
}

struct Inner {
    opened: Instant,
    records: Mutex<Vec<CapturedInvocation>>,
    sink: Option<Mutex<File>>,
}

impl CaptureLog {
    pub fn new() -> Self {
        Self::from_sink(None)
    }

    /// Open (or create) `path` for appending.
    ///
    /// Several parrot processes may share one file over a test run; each
    /// record is written as one complete line with a single `write_all`.
    pub fn with_file(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::from_sink(Some(file)))
    }

    fn from_sink(sink: Option<File>) -> Self {
        Self {
            inner: Arc::new(Inner {
                opened: Instant::now(),
                records: Mutex::new(Vec::new()),
                sink: sink.map(Mutex::new),
            }),
        }
    }

    /// Parse a JSONL capture file written by any number of processes.
    pub fn read_file(path: &Path) -> io::Result<Vec<CapturedInvocation>> {
        let reader = BufReader::new(File::open(path)?);
        serde_json::Deserializer::from_reader(reader)
            .into_iter::<CapturedInvocation>()
            .map(|record| record.map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)))
            .collect()
    }

    /// Append one invocation. Sequence numbers count records made through
    /// this handle and its clones, starting at zero.
    ///
    /// File errors are swallowed: parrot's own exit code must not depend
    /// on whether the log could be written.
    pub fn record(&self, argv: Vec<String>, identity: String, outcome: CapturedOutcome) {
        let mut records = self.inner.records.lock();
        let invocation = CapturedInvocation {
            seq: records.len() as u64,
            timestamp: SystemTime::now(),
            elapsed: self.inner.opened.elapsed(),
            argv,
            identity,
            outcome,
        };

        if let Some(sink) = &self.inner.sink {
            if let Ok(mut line) = serde_json::to_vec(&invocation) {
                line.push(b'\n');
                let _ = sink.lock().write_all(&line);
            }
        }
        records.push(invocation);
    }

    pub fn invocations(&self) -> Vec<CapturedInvocation> {
        self.inner.records.lock().clone()
    }

    pub fn count(&self, pred: impl Fn(&CapturedInvocation) -> bool) -> usize {
        self.inner.records.lock().iter().filter(|i| pred(i)).count()
    }

    /// Invocations that replayed a behavior
    pub fn find_replays(&self) -> Vec<CapturedInvocation> {
        self.matching(|outcome| matches!(outcome, CapturedOutcome::Replayed { .. }))
    }

    /// Invocations that ended in a parrot error
    pub fn find_failures(&self) -> Vec<CapturedInvocation> {
        self.matching(|outcome| matches!(outcome, CapturedOutcome::Failure { .. }))
    }

    fn matching(&self, pred: impl Fn(&CapturedOutcome) -> bool) -> Vec<CapturedInvocation> {
        self.inner
            .records
            .lock()
            .iter()
            .filter(|i| pred(&i.outcome))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.records.lock().is_empty()
    }
}

impl Default for CaptureLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
