// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Flow-control toggle shared between a writer and its drain listener.
//!
//! ```text
//! Flowing --saturated write--> Backpressured --drain--> Flowing
//!    |                              |
//!    +----------close()-------------+--> Closed (terminal)
//! ```
//!
//! The drain listener may run on another thread than the writer. Every
//! transition runs its producer side effect while holding the toggle's
//! lock, so a pause and a resume can never land out of order. `Closed`
//! always wins: once closed, the toggle never reports backpressure again
//! and a late drain never asks for a resume.

use std::sync::{Mutex, MutexGuard};

/// Observable flow state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    /// Sink is accepting data
    Flowing,
    /// Waiting for the sink's drain signal; the producer is paused
    Backpressured,
    /// Writer closed; no further pause/resume side effects
    Closed,
}

#[derive(Debug, Default)]
struct Toggle {
    closed: bool,
    backpressured: bool,
    /// Bumped on every pause so a drain armed for an earlier one is ignored
    generation: u64,
}

/// Identifies the pause a drain listener was armed for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pause(u64);

/// Shared closed/backpressured state
#[derive(Debug, Default)]
pub struct FlowControl {
    toggle: Mutex<Toggle>,
}

impl FlowControl {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Toggle> {
        self.toggle.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Enter backpressure after a saturating write.
    ///
    /// On the Flowing -> Backpressured transition only, runs `pause` under
    /// the lock and returns the pause to arm a drain listener for.
    pub fn enter_backpressure(&self, pause: impl FnOnce()) -> Option<Pause> {
        let mut toggle = self.lock();
        if toggle.closed || toggle.backpressured {
            return None;
        }
        toggle.backpressured = true;
        toggle.generation += 1;
        pause();
        Some(Pause(toggle.generation))
    }

    /// Handle the drain signal for `armed`.
    ///
    /// Runs `resume` under the lock and returns true if `armed` is still the
    /// current pause and the toggle is not closed.
    pub fn drained(&self, armed: Pause, resume: impl FnOnce()) -> bool {
        let mut toggle = self.lock();
        if toggle.closed || !toggle.backpressured || toggle.generation != armed.0 {
            return false;
        }
        toggle.backpressured = false;
        resume();
        true
    }

    /// Mark closed. Terminal.
    pub fn close(&self) {
        let mut toggle = self.lock();
        toggle.closed = true;
        toggle.backpressured = false;
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    pub fn is_backpressured(&self) -> bool {
        self.lock().backpressured
    }

    pub fn state(&self) -> FlowState {
        let toggle = self.lock();
        if toggle.closed {
            FlowState::Closed
        } else if toggle.backpressured {
            FlowState::Backpressured
        } else {
            FlowState::Flowing
        }
    }
}

#[cfg(test)]
#[path = "flow_tests.rs"]
mod tests;
