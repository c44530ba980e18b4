// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the dispatch layer's own logging, grouped by subsystem:
//!
//! * `catalog` - event catalog initialization
//! * `config` - configuration file loading
//! * `policy` - warnings policy construction
//! * `listener` - structured subscriber registration

pub mod catalog;
pub mod config;
pub mod listener;
pub mod policy;

/// Emit a message as a `tracing` event with structured fields.
pub trait StructuredLog: std::fmt::Display {
    fn log(&self);
}
