// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Connection lifecycle events (`Database.Connection`, ids 20000..).

use crate::catalog::category::DatabaseConnection;
use crate::catalog::definition::{EventDefinition, EventDescriptor};
use crate::catalog::event_id::{EventId, LogLevel};

pub static OPENING_CONNECTION: EventDefinition<DatabaseConnection, 2> = EventDefinition::new(
    EventId::new(20000, "Database.Connection.ConnectionOpening"),
    LogLevel::Debug,
    "Opening connection to database '{0}' on server '{1}'.",
);

pub static OPENED_CONNECTION: EventDefinition<DatabaseConnection, 2> = EventDefinition::new(
    EventId::new(20001, "Database.Connection.ConnectionOpened"),
    LogLevel::Debug,
    "Opened connection to database '{0}' on server '{1}'.",
);

pub static CLOSING_CONNECTION: EventDefinition<DatabaseConnection, 2> = EventDefinition::new(
    EventId::new(20002, "Database.Connection.ConnectionClosing"),
    LogLevel::Debug,
    "Closing connection to database '{0}' on server '{1}'.",
);

pub static CLOSED_CONNECTION: EventDefinition<DatabaseConnection, 2> = EventDefinition::new(
    EventId::new(20003, "Database.Connection.ConnectionClosed"),
    LogLevel::Debug,
    "Closed connection to database '{0}' on server '{1}'.",
);

pub static CONNECTION_ERROR: EventDefinition<DatabaseConnection, 2> = EventDefinition::new(
    EventId::new(20004, "Database.Connection.ConnectionError"),
    LogLevel::Error,
    "An error occurred using the connection to database '{0}' on server '{1}'.",
);

pub(super) fn definitions() -> Vec<&'static dyn EventDescriptor> {
    vec![
        &OPENING_CONNECTION,
        &OPENED_CONNECTION,
        &CLOSING_CONNECTION,
        &CLOSED_CONNECTION,
        &CONNECTION_ERROR,
    ]
}
