// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake sink for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{DrainListener, Sink, SinkError, SinkFactory, WriteOutcome};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

/// Recorded sink call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkCall {
    Write { chunk: String },
    OnceDrain,
    Finalize,
}

#[derive(Default)]
struct FakeSinkState {
    calls: Vec<SinkCall>,
    contents: Vec<u8>,
    saturated: bool,
    fail_writes: bool,
    listeners: Vec<DrainListener>,
}

/// In-memory sink with scriptable saturation and failures
#[derive(Clone, Default)]
pub struct FakeSink {
    state: Arc<Mutex<FakeSinkState>>,
}

impl FakeSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, FakeSinkState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Report every subsequent write as saturated (or not)
    pub fn set_saturated(&self, saturated: bool) {
        self.lock().saturated = saturated;
    }

    /// Reject every subsequent write
    pub fn set_fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }

    /// Clear saturation and fire all pending drain listeners. Returns how many fired.
    pub fn drain(&self) -> usize {
        let listeners = {
            let mut state = self.lock();
            state.saturated = false;
            std::mem::take(&mut state.listeners)
        };
        let count = listeners.len();
        for listener in listeners {
            listener();
        }
        count
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<SinkCall> {
        self.lock().calls.clone()
    }

    /// Bytes accepted so far, as text
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock().contents).into_owned()
    }

    pub fn pending_listeners(&self) -> usize {
        self.lock().listeners.len()
    }

    pub fn finalize_count(&self) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|c| matches!(c, SinkCall::Finalize))
            .count()
    }
}

#[async_trait]
impl Sink for FakeSink {
    fn write(&mut self, chunk: &[u8]) -> Result<WriteOutcome, SinkError> {
        let mut state = self.lock();
        state.calls.push(SinkCall::Write {
            chunk: String::from_utf8_lossy(chunk).into_owned(),
        });
        if state.fail_writes {
            return Err(SinkError::Rejected("injected failure".to_string()));
        }
        state.contents.extend_from_slice(chunk);
        if state.saturated {
            Ok(WriteOutcome::Saturated)
        } else {
            Ok(WriteOutcome::Accepted)
        }
    }

    fn once_drain(&mut self, listener: DrainListener) {
        let mut state = self.lock();
        state.calls.push(SinkCall::OnceDrain);
        state.listeners.push(listener);
    }

    async fn finalize(&mut self) -> Result<(), SinkError> {
        self.lock().calls.push(SinkCall::Finalize);
        Ok(())
    }
}

/// Factory handing out clones of one [`FakeSink`], or failing every open
#[derive(Clone, Default)]
pub struct FakeSinkFactory {
    sink: FakeSink,
    fail: bool,
    opened: Arc<Mutex<Vec<PathBuf>>>,
}

impl FakeSinkFactory {
    pub fn new(sink: FakeSink) -> Self {
        Self {
            sink,
            ..Self::default()
        }
    }

    /// Factory whose every open fails
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// The sink handed out by successful opens
    pub fn sink(&self) -> &FakeSink {
        &self.sink
    }

    /// Destinations passed to `open`, including failed attempts
    pub fn opened(&self) -> Vec<PathBuf> {
        self.opened.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl SinkFactory for FakeSinkFactory {
    type Sink = FakeSink;

    fn open(&self, destination: &Path) -> Result<FakeSink, SinkError> {
        self.opened
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(destination.to_path_buf());
        if self.fail {
            return Err(SinkError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "injected open failure",
            )));
        }
        Ok(self.sink.clone())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
