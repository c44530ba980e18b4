// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Sink implementations for the two dispatch channels.
//!
//! # Leveled (text) sinks
//! - [`TracingSink`]: forwards to the active `tracing` subscriber, one target
//!   per category
//! - [`RecordingLeveledSink`]: keeps copies in memory
//!
//! # Structured sinks
//! - [`JsonLinesSink`]: one JSON object per event to any `Write`
//! - [`DiagnosticListener`]: fans payloads out to subscribed observers
//! - [`RecordingStructuredSink`]: keeps serialized copies in memory
//!
//! [`NullSink`] implements both and is never enabled.

pub mod json_lines;
pub mod listener;
pub mod memory;
pub mod null;
pub mod tracing_sink;

pub use json_lines::JsonLinesSink;
pub use listener::{DiagnosticListener, SubscriptionId};
pub use memory::{RecordedEvent, RecordedLog, RecordingLeveledSink, RecordingStructuredSink};
pub use null::NullSink;
pub use tracing_sink::TracingSink;
