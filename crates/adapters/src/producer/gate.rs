// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pause gate for async producer loops
//!
//! The writer holds one clone and flips the gate; the upstream loop holds
//! another and awaits [`PauseGate::ready`] before producing each record.

use super::Producer;
use std::sync::Arc;
use tokio::sync::watch;

/// Producer handle backed by a watch channel (`true` = paused)
#[derive(Clone, Debug)]
pub struct PauseGate {
    paused: Arc<watch::Sender<bool>>,
}

impl Default for PauseGate {
    fn default() -> Self {
        Self::new()
    }
}

impl PauseGate {
    pub fn new() -> Self {
        let (paused, _) = watch::channel(false);
        Self {
            paused: Arc::new(paused),
        }
    }

    pub fn is_paused(&self) -> bool {
        *self.paused.borrow()
    }

    /// Wait until the gate is open. Returns immediately if not paused.
    pub async fn ready(&self) {
        let mut rx = self.paused.subscribe();
        // The sender lives as long as `self`, so this cannot fail
        let _ = rx.wait_for(|paused| !*paused).await;
    }
}

impl Producer for PauseGate {
    fn pause(&self) {
        if !self.paused.send_replace(true) {
            tracing::trace!("producer paused");
        }
    }

    fn resume(&self) {
        if self.paused.send_replace(false) {
            tracing::trace!("producer resumed");
        }
    }
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
