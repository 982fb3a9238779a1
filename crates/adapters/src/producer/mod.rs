// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Upstream producer adapters

mod gate;
mod noop;

pub use gate::PauseGate;
pub use noop::NoOpProducer;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeProducer, ProducerCall};

/// Upstream record source that can be told to pause and resume.
///
/// Both calls are idempotent and must return immediately.
pub trait Producer: Clone + Send + Sync + 'static {
    fn pause(&self);

    fn resume(&self);
}
