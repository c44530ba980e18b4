// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::catalog::{Category, LogLevel};
use crate::errors::SinkError;
use crate::payloads::EventPayload;
use crate::traits::{LeveledSink, LogRecord, StructuredSink};

/// A sink that is never enabled. Used for whichever channel has not been
/// configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl LeveledSink for NullSink {
    fn is_enabled(&self, _category: Category, _level: LogLevel) -> bool {
        false
    }

    fn write(&self, _record: &LogRecord<'_>) -> Result<(), SinkError> {
        Ok(())
    }
}

impl StructuredSink for NullSink {
    fn is_enabled(&self, _event_name: &str) -> bool {
        false
    }

    fn write(&self, _event_name: &str, _payload: &EventPayload<'_>) -> Result<(), SinkError> {
        Ok(())
    }
}
