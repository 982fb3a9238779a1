// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Byte budget enforcing the total-size ceiling

/// Running total of bytes handed to a sink, capped at a fixed ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteBudget {
    written: u64,
    max: u64,
}

impl ByteBudget {
    pub fn new(max: u64) -> Self {
        Self { written: 0, max }
    }

    /// Whether a chunk of `len` bytes fits under the ceiling
    pub fn fits(&self, len: u64) -> bool {
        self.written
            .checked_add(len)
            .is_some_and(|total| total <= self.max)
    }

    /// Charge `len` bytes if they fit. Returns false (and charges nothing) otherwise.
    pub fn try_charge(&mut self, len: u64) -> bool {
        if !self.fits(len) {
            return false;
        }
        self.written += len;
        true
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn max(&self) -> u64 {
        self.max
    }

    pub fn remaining(&self) -> u64 {
        self.max - self.written
    }
}

#[cfg(test)]
#[path = "budget_tests.rs"]
mod tests;
