// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::catalog::category::Migrations;
use crate::catalog::definition::{EventDefinition, EventDescriptor};
use crate::catalog::event_id::{EventId, LogLevel};

pub static USING_CONNECTION: EventDefinition<Migrations, 2> = EventDefinition::new(
    EventId::new(20400, "Migrations.MigrateUsingConnection"),
    LogLevel::Information,
    "Migrating using database '{0}' on server '{1}'.",
);

pub static REVERTING_MIGRATION: EventDefinition<Migrations, 1> = EventDefinition::new(
    EventId::new(20401, "Migrations.MigrationReverting"),
    LogLevel::Information,
    "Reverting migration '{0}'.",
);

pub static APPLYING_MIGRATION: EventDefinition<Migrations, 1> = EventDefinition::new(
    EventId::new(20402, "Migrations.MigrationApplying"),
    LogLevel::Information,
    "Applying migration '{0}'.",
);

pub static GENERATING_DOWN_SCRIPT: EventDefinition<Migrations, 1> = EventDefinition::new(
    EventId::new(20403, "Migrations.MigrationGeneratingDownScript"),
    LogLevel::Debug,
    "Generating down script for migration '{0}'.",
);

pub static GENERATING_UP_SCRIPT: EventDefinition<Migrations, 1> = EventDefinition::new(
    EventId::new(20404, "Migrations.MigrationGeneratingUpScript"),
    LogLevel::Debug,
    "Generating up script for migration '{0}'.",
);

pub(super) fn definitions() -> Vec<&'static dyn EventDescriptor> {
    vec![
        &USING_CONNECTION,
        &REVERTING_MIGRATION,
        &APPLYING_MIGRATION,
        &GENERATING_DOWN_SCRIPT,
        &GENERATING_UP_SCRIPT,
    ]
}
