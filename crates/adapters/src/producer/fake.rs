// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake producer for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::Producer;
use std::sync::{Arc, Mutex};

/// Recorded producer call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProducerCall {
    Pause,
    Resume,
}

/// Fake producer that records pause/resume requests
#[derive(Clone, Default)]
pub struct FakeProducer {
    calls: Arc<Mutex<Vec<ProducerCall>>>,
}

impl FakeProducer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ProducerCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn pause_count(&self) -> usize {
        self.count(ProducerCall::Pause)
    }

    pub fn resume_count(&self) -> usize {
        self.count(ProducerCall::Resume)
    }

    /// Whether the most recent call was a pause
    pub fn is_paused(&self) -> bool {
        self.calls().last() == Some(&ProducerCall::Pause)
    }

    fn count(&self, call: ProducerCall) -> usize {
        self.calls().iter().filter(|c| **c == call).count()
    }

    fn record(&self, call: ProducerCall) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(call);
    }
}

impl Producer for FakeProducer {
    fn pause(&self) {
        self.record(ProducerCall::Pause);
    }

    fn resume(&self) {
        self.record(ProducerCall::Resume);
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
