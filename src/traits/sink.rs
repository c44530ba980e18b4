// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::catalog::{Category, EventId, LogLevel};
use crate::errors::SinkError;
use crate::payloads::EventPayload;
use std::error::Error;

/// One rendered event on its way to a leveled sink.
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    pub category: Category,
    pub level: LogLevel,
    pub event_id: EventId,
    pub message: &'a str,
    pub exception: Option<&'a (dyn Error + 'static)>,
}

/// Text-logging consumer gated by a severity threshold.
///
/// `is_enabled` is always asked first; a message is only rendered, and
/// `write` only called, when it answers `true`.
pub trait LeveledSink: Send + Sync {
    fn is_enabled(&self, category: Category, level: LogLevel) -> bool;

    fn write(&self, record: &LogRecord<'_>) -> Result<(), SinkError>;
}

/// Consumer of typed payloads keyed by event name, independent of level.
///
/// A payload is only built when `is_enabled` answers `true` for the event's
/// name. The payload is borrowed for the duration of `write`.
pub trait StructuredSink: Send + Sync {
    fn is_enabled(&self, event_name: &str) -> bool;

    fn write(&self, event_name: &str, payload: &EventPayload<'_>) -> Result<(), SinkError>;
}

/// A subscriber attached to a [`crate::backends::DiagnosticListener`].
pub trait EventObserver: Send + Sync {
    fn on_event(&self, event_name: &str, payload: &EventPayload<'_>);
}

impl<F> EventObserver for F
where
    F: Fn(&str, &EventPayload<'_>) + Send + Sync,
{
    fn on_event(&self, event_name: &str, payload: &EventPayload<'_>) {
        self(event_name, payload)
    }
}

/// Subscription filter shared by the structured sinks: `Database` matches
/// `Database.Sql.CommandExecuting` but not `DatabaseX.Anything`.
pub fn name_matches(event_name: &str, prefix: &str) -> bool {
    match event_name.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('.') || prefix.is_empty(),
        None => false,
    }
}
