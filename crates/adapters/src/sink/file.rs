// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-mode file sink
//!
//! Writes are queued on a channel and drained by a background tokio task,
//! so `write` never blocks the caller. The sink tracks how many bytes are
//! queued but not yet written and reports saturation once that reaches the
//! high-water mark.

use super::{DrainListener, Sink, SinkError, SinkFactory, WriteOutcome};
use async_trait::async_trait;
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use sw_core::SinkConfig;
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Opens [`FileSink`]s with a shared configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSinkFactory {
    config: SinkConfig,
}

impl FileSinkFactory {
    pub fn new(config: SinkConfig) -> Self {
        Self { config }
    }
}

impl SinkFactory for FileSinkFactory {
    type Sink = FileSink;

    fn open(&self, destination: &Path) -> Result<FileSink, SinkError> {
        FileSink::open(destination, self.config)
    }
}

/// State shared between the sink handle and its background task
#[derive(Default)]
struct Shared {
    buffered: AtomicUsize,
    stopped: AtomicBool,
    listeners: Mutex<Vec<DrainListener>>,
}

impl Shared {
    fn lock_listeners(&self) -> MutexGuard<'_, Vec<DrainListener>> {
        self.listeners.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Nothing left to drain, either because the queue is empty or the task is gone
    fn is_idle(&self) -> bool {
        self.buffered.load(Ordering::Acquire) == 0 || self.stopped.load(Ordering::Acquire)
    }

    /// Fire every pending listener if the sink is idle
    fn notify_if_drained(&self) {
        let ready = {
            let mut listeners = self.lock_listeners();
            if !self.is_idle() {
                return;
            }
            std::mem::take(&mut *listeners)
        };
        for listener in ready {
            listener();
        }
    }
}

/// Append-mode file sink driven by a background tokio task
pub struct FileSink {
    path: PathBuf,
    high_water_mark: usize,
    tx: Option<mpsc::UnboundedSender<Vec<u8>>>,
    task: Option<JoinHandle<io::Result<()>>>,
    shared: Arc<Shared>,
}

impl FileSink {
    /// Open `path` for appending, creating the file if needed.
    ///
    /// Parent directories are not created. Must be called from within a
    /// tokio runtime.
    pub fn open(path: &Path, config: SinkConfig) -> Result<Self, SinkError> {
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| SinkError::NoRuntime)?;
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        let (tx, rx) = mpsc::unbounded_channel();
        let shared = Arc::new(Shared::default());
        let task = runtime.spawn(pump(
            tokio::fs::File::from_std(file),
            rx,
            Arc::clone(&shared),
        ));

        Ok(Self {
            path: path.to_path_buf(),
            high_water_mark: config.high_water_mark,
            tx: Some(tx),
            task: Some(task),
            shared,
        })
    }

    /// Get the path of the destination file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Bytes queued but not yet written to the file
    pub fn buffered(&self) -> usize {
        self.shared.buffered.load(Ordering::Acquire)
    }
}

#[async_trait]
impl Sink for FileSink {
    fn write(&mut self, chunk: &[u8]) -> Result<WriteOutcome, SinkError> {
        let Some(tx) = self.tx.as_ref() else {
            return Err(SinkError::Finalized);
        };
        if self.shared.stopped.load(Ordering::Acquire) {
            return Err(SinkError::Closed);
        }

        let queued = self.shared.buffered.fetch_add(chunk.len(), Ordering::AcqRel);
        let buffered = queued + chunk.len();
        if tx.send(chunk.to_vec()).is_err() {
            self.shared
                .buffered
                .fetch_sub(chunk.len(), Ordering::AcqRel);
            return Err(SinkError::Closed);
        }

        if buffered >= self.high_water_mark {
            Ok(WriteOutcome::Saturated)
        } else {
            Ok(WriteOutcome::Accepted)
        }
    }

    fn once_drain(&mut self, listener: DrainListener) {
        let fire_now = {
            let mut listeners = self.shared.lock_listeners();
            if self.shared.is_idle() {
                Some(listener)
            } else {
                listeners.push(listener);
                None
            }
        };
        if let Some(listener) = fire_now {
            listener();
        }
    }

    async fn finalize(&mut self) -> Result<(), SinkError> {
        // Closing the channel lets the task flush and exit
        self.tx.take();
        let Some(task) = self.task.take() else {
            return Ok(());
        };
        match task.await {
            Ok(result) => result.map_err(SinkError::from),
            Err(e) => Err(SinkError::Task(e.to_string())),
        }
    }
}

async fn pump(
    mut file: tokio::fs::File,
    mut rx: mpsc::UnboundedReceiver<Vec<u8>>,
    shared: Arc<Shared>,
) -> io::Result<()> {
    let result = write_chunks(&mut file, &mut rx, &shared).await;
    if let Err(e) = &result {
        tracing::warn!(error = %e, "file sink stopped");
    }
    // Release anyone still waiting for a drain, including after a failure
    shared.stopped.store(true, Ordering::Release);
    shared.notify_if_drained();
    result
}

async fn write_chunks(
    file: &mut tokio::fs::File,
    rx: &mut mpsc::UnboundedReceiver<Vec<u8>>,
    shared: &Shared,
) -> io::Result<()> {
    while let Some(chunk) = rx.recv().await {
        let written = file.write_all(&chunk).await;
        shared.buffered.fetch_sub(chunk.len(), Ordering::AcqRel);
        written?;
        shared.notify_if_drained();
    }
    file.flush().await
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
