// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! In-memory sinks that copy out everything they receive. Used by tests and
//! by harnesses that want to assert on both channels of a dispatch.

use crate::catalog::{Category, EventId, LogLevel};
use crate::errors::SinkError;
use crate::payloads::EventPayload;
use crate::traits::{name_matches, LeveledSink, LogRecord, StructuredSink};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedLog {
    pub category: Category,
    pub level: LogLevel,
    pub event_id: EventId,
    pub message: String,
    pub exception: Option<String>,
}

/// Leveled sink that records every write at or above `min_level`.
#[derive(Debug)]
pub struct RecordingLeveledSink {
    min_level: Option<LogLevel>,
    enabled_checks: AtomicUsize,
    records: Mutex<Vec<RecordedLog>>,
}

impl RecordingLeveledSink {
    pub fn new(min_level: LogLevel) -> Self {
        Self {
            min_level: Some(min_level),
            enabled_checks: AtomicUsize::new(0),
            records: Mutex::new(Vec::new()),
        }
    }

    /// Never enabled at any level.
    pub fn disabled() -> Self {
        Self {
            min_level: None,
            ..Self::new(LogLevel::Trace)
        }
    }

    pub fn records(&self) -> Vec<RecordedLog> {
        lock(&self.records).clone()
    }

    /// Number of `is_enabled` queries answered so far.
    pub fn enabled_checks(&self) -> usize {
        self.enabled_checks.load(Ordering::SeqCst)
    }
}

impl LeveledSink for RecordingLeveledSink {
    fn is_enabled(&self, _category: Category, level: LogLevel) -> bool {
        self.enabled_checks.fetch_add(1, Ordering::SeqCst);
        self.min_level.is_some_and(|min| level >= min)
    }

    fn write(&self, record: &LogRecord<'_>) -> Result<(), SinkError> {
        let recorded = RecordedLog {
            category: record.category,
            level: record.level,
            event_id: record.event_id,
            message: record.message.to_string(),
            exception: record.exception.map(|error| error.to_string()),
        };
        self.records
            .lock()
            .map_err(|error| SinkError::Poisoned(error.to_string()))?
            .push(recorded);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedEvent {
    pub event_name: String,
    pub event_id: EventId,
    pub level: LogLevel,
    pub kind: &'static str,
    /// The payload's fields, serialized.
    pub data: serde_json::Value,
    /// Only captured when the sink was built with `capture_messages`.
    pub message: Option<String>,
}

/// Structured sink that serializes and keeps every payload it accepts.
#[derive(Debug)]
pub struct RecordingStructuredSink {
    subscriptions: Option<Vec<String>>,
    capture_messages: bool,
    enabled_checks: AtomicUsize,
    events: Mutex<Vec<RecordedEvent>>,
}

impl RecordingStructuredSink {
    /// Enabled for every event.
    pub fn all() -> Self {
        Self {
            subscriptions: Some(Vec::new()),
            capture_messages: false,
            enabled_checks: AtomicUsize::new(0),
            events: Mutex::new(Vec::new()),
        }
    }

    /// Enabled for no event.
    pub fn disabled() -> Self {
        Self {
            subscriptions: None,
            ..Self::all()
        }
    }

    /// Enabled for events under any of `prefixes`.
    pub fn subscribed(prefixes: &[&str]) -> Self {
        Self {
            subscriptions: Some(prefixes.iter().map(|prefix| prefix.to_string()).collect()),
            ..Self::all()
        }
    }

    /// Also render and keep each payload's message.
    pub fn capturing_messages(mut self) -> Self {
        self.capture_messages = true;
        self
    }

    pub fn events(&self) -> Vec<RecordedEvent> {
        lock(&self.events).clone()
    }

    pub fn enabled_checks(&self) -> usize {
        self.enabled_checks.load(Ordering::SeqCst)
    }
}

impl StructuredSink for RecordingStructuredSink {
    fn is_enabled(&self, event_name: &str) -> bool {
        self.enabled_checks.fetch_add(1, Ordering::SeqCst);
        match &self.subscriptions {
            None => false,
            Some(prefixes) if prefixes.is_empty() => true,
            Some(prefixes) => prefixes.iter().any(|prefix| name_matches(event_name, prefix)),
        }
    }

    fn write(&self, event_name: &str, payload: &EventPayload<'_>) -> Result<(), SinkError> {
        let recorded = RecordedEvent {
            event_name: event_name.to_string(),
            event_id: payload.event_id(),
            level: payload.level(),
            kind: payload.kind(),
            data: serde_json::to_value(payload)?,
            message: self.capture_messages.then(|| payload.message().to_string()),
        };
        self.events
            .lock()
            .map_err(|error| SinkError::Poisoned(error.to_string()))?
            .push(recorded);
        Ok(())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
