// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only sink adapters

mod file;

pub use file::{FileSink, FileSinkFactory};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeSink, FakeSinkFactory, SinkCall};

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// One-shot callback fired when a saturated sink has drained
pub type DrainListener = Box<dyn FnOnce() + Send + 'static>;

/// Errors from sink operations
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no tokio runtime available to drive the sink")]
    NoRuntime,
    #[error("sink already finalized")]
    Finalized,
    #[error("sink closed: background writer stopped")]
    Closed,
    #[error("sink task failed: {0}")]
    Task(String),
    #[error("write rejected: {0}")]
    Rejected(String),
}

/// Result of handing a chunk to a sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Chunk buffered, capacity remains
    Accepted,
    /// Chunk buffered, but the sink's buffer is over its threshold
    Saturated,
}

/// Append-only byte destination with asynchronous flow-control signaling
#[async_trait]
pub trait Sink: Send + 'static {
    /// Append a chunk. Never blocks; reports saturation instead.
    fn write(&mut self, chunk: &[u8]) -> Result<WriteOutcome, SinkError>;

    /// Register a listener that fires exactly once when buffer pressure clears
    fn once_drain(&mut self, listener: DrainListener);

    /// Flush pending data and release the destination
    async fn finalize(&mut self) -> Result<(), SinkError>;
}

/// Opens sinks for destinations
pub trait SinkFactory: Send + Sync {
    type Sink: Sink;

    fn open(&self, destination: &Path) -> Result<Self::Sink, SinkError>;
}
