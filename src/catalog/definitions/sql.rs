// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Command execution events (`Database.Sql`, ids 20100..).
//!
//! The three events share argument order: elapsed time (executed/failed
//! only), formatted parameters, command type, timeout, command text.

use crate::catalog::category::DatabaseSql;
use crate::catalog::definition::{EventDefinition, EventDescriptor};
use crate::catalog::event_id::{EventId, LogLevel};

pub static EXECUTING_COMMAND: EventDefinition<DatabaseSql, 4> = EventDefinition::new(
    EventId::new(20100, "Database.Sql.CommandExecuting"),
    LogLevel::Debug,
    "Executing command [Parameters=[{0}], CommandType='{1}', CommandTimeout='{2}']\n{3}",
);

pub static EXECUTED_COMMAND: EventDefinition<DatabaseSql, 5> = EventDefinition::new(
    EventId::new(20101, "Database.Sql.CommandExecuted"),
    LogLevel::Information,
    "Executed command ({0}ms) [Parameters=[{1}], CommandType='{2}', CommandTimeout='{3}']\n{4}",
);

pub static COMMAND_FAILED: EventDefinition<DatabaseSql, 5> = EventDefinition::new(
    EventId::new(20102, "Database.Sql.CommandError"),
    LogLevel::Error,
    "Failed executing command ({0}ms) [Parameters=[{1}], CommandType='{2}', CommandTimeout='{3}']\n{4}",
);

pub(super) fn definitions() -> Vec<&'static dyn EventDescriptor> {
    vec![&EXECUTING_COMMAND, &EXECUTED_COMMAND, &COMMAND_FAILED]
}
