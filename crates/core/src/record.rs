// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Record framing
//!
//! A record is one line of already-serialized text. Framing appends the
//! newline terminator; the content itself is never inspected.

use serde::Serialize;

/// A framed record ready to hand to a sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    chunk: String,
}

impl Record {
    /// Frame a line, or `None` if it is empty or whitespace-only
    pub fn frame(line: &str) -> Option<Self> {
        if line.trim().is_empty() {
            return None;
        }
        let mut chunk = String::with_capacity(line.len() + 1);
        chunk.push_str(line);
        chunk.push('\n');
        Some(Self { chunk })
    }

    /// Serialize a value as a single JSON line and frame it
    pub fn from_json<T: Serialize + ?Sized>(value: &T) -> Result<Option<Self>, serde_json::Error> {
        let line = serde_json::to_string(value)?;
        Ok(Self::frame(&line))
    }

    /// UTF-8 length of the line including the terminator
    pub fn byte_len(&self) -> u64 {
        self.chunk.len() as u64
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.chunk.as_bytes()
    }

    pub fn as_str(&self) -> &str {
        &self.chunk
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
