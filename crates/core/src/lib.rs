// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sw-core: pure building blocks for the spillway append writer
//!
//! This crate provides:
//! - Writer and sink configuration, loadable from TOML
//! - Record framing (one line of text plus its trailing newline)
//! - The byte budget that enforces the total-size ceiling
//! - The flowing/backpressured/closed flow-control toggle

pub mod budget;
pub mod config;
pub mod flow;
pub mod record;

pub use budget::ByteBudget;
pub use config::{
    Config, ConfigError, SinkConfig, WriterConfig, DEFAULT_HIGH_WATER_MARK, DEFAULT_MAX_BYTES,
};
pub use flow::{FlowControl, FlowState, Pause};
pub use record::Record;
