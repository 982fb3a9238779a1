// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append writer with a size ceiling and producer flow control
//!
//! The writer never reports an error to its caller. A destination that
//! cannot be opened yields an inert writer; lines that are blank, over the
//! ceiling, or rejected by the sink are dropped. A missing or truncated
//! output file is the only symptom.
//!
//! ## Flow control
//!
//! ```text
//! write_line → sink.write ─ Saturated ─→ producer.pause()
//!                                        sink.once_drain(listener)
//!                                                  ↓
//!                                 listener → producer.resume() (unless closed)
//! ```

use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use sw_adapters::{
    FileSink, FileSinkFactory, Producer, Sink, SinkFactory, TracedSink, TracedSinkFactory,
    WriteOutcome,
};
use sw_core::{ByteBudget, Config, FlowControl, FlowState, Record, WriterConfig};

/// Writer over the platform file sink
pub type FileAppendWriter<P> = AppendWriter<TracedSink<FileSink>, P>;

/// Bounded append writer.
///
/// The variant is chosen once, at construction or close, so writes never
/// check for a missing sink.
pub enum AppendWriter<S, P> {
    /// Destination open and accepting lines
    Active(ActiveWriter<S, P>),
    /// Closed; the sink has been finalized and released
    Closed { bytes_written: u64, max_bytes: u64 },
    /// No destination, or it could not be opened. Every operation is a no-op.
    Inert,
}

impl<P: Producer> FileAppendWriter<P> {
    /// Open an append-mode file writer, or an inert one if `destination` is
    /// `None`, empty, or cannot be opened.
    pub fn open(destination: Option<&Path>, producer: P, config: WriterConfig) -> Self {
        Self::from_config(destination, producer, &Config {
            writer: config,
            ..Config::default()
        })
    }

    /// Like `open`, also applying the file sink settings
    pub fn from_config(destination: Option<&Path>, producer: P, config: &Config) -> Self {
        let factory = TracedSinkFactory::new(FileSinkFactory::new(config.sink));
        Self::open_with(destination, producer, config.writer, &factory)
    }
}

impl<S: Sink, P: Producer> AppendWriter<S, P> {
    /// Open a writer through a custom sink factory.
    ///
    /// The factory is not consulted for a missing or empty destination, or
    /// for a config with a zero ceiling; those yield an inert writer.
    pub fn open_with<F>(
        destination: Option<&Path>,
        producer: P,
        config: WriterConfig,
        factory: &F,
    ) -> Self
    where
        F: SinkFactory<Sink = S>,
    {
        let Some(destination) = destination.filter(|p| !p.as_os_str().is_empty()) else {
            return Self::Inert;
        };
        if let Err(e) = config.validate() {
            tracing::warn!(error = %e, "invalid writer config, output disabled");
            return Self::Inert;
        }

        match factory.open(destination) {
            Ok(sink) => Self::Active(ActiveWriter::new(sink, producer, config)),
            Err(e) => {
                tracing::warn!(
                    destination = %destination.display(),
                    error = %e,
                    "cannot open destination, output disabled"
                );
                Self::Inert
            }
        }
    }

    pub fn inert() -> Self {
        Self::Inert
    }

    /// Append one line. Blank, over-ceiling, and post-close lines are dropped.
    pub fn write_line(&mut self, line: &str) {
        if let Self::Active(writer) = self {
            writer.write_line(line);
        }
    }

    /// Serialize `value` as one JSON line and append it
    pub fn write_record<T: Serialize + ?Sized>(&mut self, value: &T) {
        let Self::Active(writer) = self else {
            return;
        };
        match Record::from_json(value) {
            Ok(Some(record)) => writer.write(record),
            Ok(None) => {}
            Err(e) => tracing::debug!(error = %e, "record not serializable, dropped"),
        }
    }

    /// Close the writer and wait for the sink to flush. Idempotent.
    pub async fn close(&mut self) {
        match std::mem::replace(self, Self::Inert) {
            Self::Active(writer) => {
                *self = Self::Closed {
                    bytes_written: writer.budget.written(),
                    max_bytes: writer.budget.max(),
                };
                writer.finalize().await;
            }
            other => *self = other,
        }
    }

    /// Bytes handed to the sink so far
    pub fn bytes_written(&self) -> u64 {
        match self {
            Self::Active(writer) => writer.budget.written(),
            Self::Closed { bytes_written, .. } => *bytes_written,
            Self::Inert => 0,
        }
    }

    /// Size ceiling, or `None` for an inert writer
    pub fn max_bytes(&self) -> Option<u64> {
        match self {
            Self::Active(writer) => Some(writer.budget.max()),
            Self::Closed { max_bytes, .. } => Some(*max_bytes),
            Self::Inert => None,
        }
    }

    pub fn is_inert(&self) -> bool {
        matches!(self, Self::Inert)
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed { .. })
    }

    pub fn is_backpressured(&self) -> bool {
        match self {
            Self::Active(writer) => writer.flow.is_backpressured(),
            _ => false,
        }
    }

    /// Flow state, or `None` for an inert writer
    pub fn flow_state(&self) -> Option<FlowState> {
        match self {
            Self::Active(writer) => Some(writer.flow.state()),
            Self::Closed { .. } => Some(FlowState::Closed),
            Self::Inert => None,
        }
    }
}

/// State of an open writer
pub struct ActiveWriter<S, P> {
    sink: S,
    producer: P,
    flow: Arc<FlowControl>,
    budget: ByteBudget,
}

impl<S: Sink, P: Producer> ActiveWriter<S, P> {
    fn new(sink: S, producer: P, config: WriterConfig) -> Self {
        Self {
            sink,
            producer,
            flow: Arc::new(FlowControl::new()),
            budget: ByteBudget::new(config.max_bytes),
        }
    }

    fn write_line(&mut self, line: &str) {
        match Record::frame(line) {
            Some(record) => self.write(record),
            None => tracing::trace!("blank line dropped"),
        }
    }

    fn write(&mut self, record: Record) {
        let len = record.byte_len();
        if !self.budget.try_charge(len) {
            tracing::trace!(
                bytes = len,
                written = self.budget.written(),
                max_bytes = self.budget.max(),
                "size ceiling reached, line dropped"
            );
            return;
        }

        // The charge stands even if the sink rejects the chunk
        match self.sink.write(record.as_bytes()) {
            Ok(WriteOutcome::Accepted) => {}
            Ok(WriteOutcome::Saturated) => self.apply_backpressure(),
            Err(e) => tracing::trace!(error = %e, "write failed, line dropped"),
        }
    }

    fn apply_backpressure(&mut self) {
        let producer = &self.producer;
        let Some(armed) = self.flow.enter_backpressure(|| producer.pause()) else {
            return;
        };
        tracing::debug!(written = self.budget.written(), "producer paused");

        let flow = Arc::clone(&self.flow);
        let producer = self.producer.clone();
        self.sink.once_drain(Box::new(move || {
            if flow.drained(armed, || producer.resume()) {
                tracing::debug!("producer resumed");
            }
        }));
    }

    async fn finalize(mut self) {
        self.flow.close();
        if let Err(e) = self.sink.finalize().await {
            tracing::warn!(error = %e, "finalize failed");
        }
    }
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
