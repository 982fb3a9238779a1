// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Bounded, backpressure-aware append writer

mod writer;

pub use writer::{ActiveWriter, AppendWriter, FileAppendWriter};

pub use sw_adapters::{PauseGate, Producer, Sink, SinkFactory};
pub use sw_core::{Config, FlowState, WriterConfig, DEFAULT_MAX_BYTES};
