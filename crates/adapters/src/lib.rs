// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for the writer's external collaborators: sinks and producers

pub mod producer;
pub mod sink;
pub mod traced;

pub use producer::{NoOpProducer, PauseGate, Producer};
pub use sink::{
    DrainListener, FileSink, FileSinkFactory, Sink, SinkError, SinkFactory, WriteOutcome,
};
pub use traced::{TracedSink, TracedSinkFactory};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use producer::{FakeProducer, ProducerCall};
#[cfg(any(test, feature = "test-support"))]
pub use sink::{FakeSink, FakeSinkFactory, SinkCall};
