// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op producer for sources that cannot be paused.

use super::Producer;

/// Producer that ignores pause and resume requests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpProducer;

impl NoOpProducer {
    pub fn new() -> Self {
        Self
    }
}

impl Producer for NoOpProducer {
    fn pause(&self) {}

    fn resume(&self) {}
}
