// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced sink wrappers for consistent observability

use crate::sink::{DrainListener, Sink, SinkError, SinkFactory, WriteOutcome};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::Instrument;

/// Wrapper that adds tracing to any Sink
pub struct TracedSink<S> {
    inner: S,
    destination: PathBuf,
}

impl<S> TracedSink<S> {
    pub fn new(inner: S, destination: impl Into<PathBuf>) -> Self {
        Self {
            inner,
            destination: destination.into(),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S: Sink> Sink for TracedSink<S> {
    fn write(&mut self, chunk: &[u8]) -> Result<WriteOutcome, SinkError> {
        let result = self.inner.write(chunk);

        match &result {
            Ok(WriteOutcome::Accepted) => tracing::trace!(bytes = chunk.len(), "write accepted"),
            Ok(WriteOutcome::Saturated) => tracing::debug!(
                destination = %self.destination.display(),
                bytes = chunk.len(),
                "sink saturated"
            ),
            Err(e) => tracing::warn!(
                destination = %self.destination.display(),
                bytes = chunk.len(),
                error = %e,
                "write failed"
            ),
        }

        result
    }

    fn once_drain(&mut self, listener: DrainListener) {
        let destination = self.destination.clone();
        self.inner.once_drain(Box::new(move || {
            tracing::debug!(destination = %destination.display(), "sink drained");
            listener();
        }));
    }

    async fn finalize(&mut self) -> Result<(), SinkError> {
        let span = tracing::info_span!("sink.finalize", destination = %self.destination.display());

        let start = std::time::Instant::now();
        let result = self.inner.finalize().instrument(span.clone()).await;
        let elapsed = start.elapsed();

        let _guard = span.enter();
        match &result {
            Ok(()) => tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "finalized"),
            Err(e) => tracing::warn!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "finalize failed"
            ),
        }

        result
    }
}

/// Wrapper that adds tracing to any SinkFactory
#[derive(Clone, Debug, Default)]
pub struct TracedSinkFactory<F> {
    inner: F,
}

impl<F> TracedSinkFactory<F> {
    pub fn new(inner: F) -> Self {
        Self { inner }
    }
}

impl<F: SinkFactory> SinkFactory for TracedSinkFactory<F> {
    type Sink = TracedSink<F::Sink>;

    fn open(&self, destination: &Path) -> Result<Self::Sink, SinkError> {
        let span = tracing::info_span!("sink.open", destination = %destination.display());
        let _guard = span.enter();

        let result = self.inner.open(destination);
        match result {
            Ok(sink) => {
                tracing::info!("opened");
                Ok(TracedSink::new(sink, destination))
            }
            Err(e) => {
                tracing::warn!(error = %e, "open failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
