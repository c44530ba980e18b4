// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::catalog::category::DatabaseDataReader;
use crate::catalog::definition::{EventDefinition, EventDescriptor};
use crate::catalog::event_id::{EventId, LogLevel};

pub static DISPOSING_DATA_READER: EventDefinition<DatabaseDataReader, 0> = EventDefinition::new(
    EventId::new(20300, "Database.DataReader.DataReaderDisposing"),
    LogLevel::Debug,
    "A data reader was disposed.",
);

pub(super) fn definitions() -> Vec<&'static dyn EventDescriptor> {
    vec![&DISPOSING_DATA_READER]
}
