// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::catalog::category::Update;
use crate::catalog::definition::{EventDefinition, EventDescriptor};
use crate::catalog::event_id::{EventId, LogLevel};

pub static EXCEPTION_DURING_SAVE_CHANGES: EventDefinition<Update, 2> = EventDefinition::new(
    EventId::new(10000, "Update.SaveChangesFailed"),
    LogLevel::Error,
    "An exception occurred in the database while saving changes for context type '{0}'.\n{1}",
);

pub static DUPLICATE_DIET_INSTANCE: EventDefinition<Update, 2> = EventDefinition::new(
    EventId::new(10001, "Update.DuplicateDietInstanceWarning"),
    LogLevel::Warning,
    "The same row is being tracked by two dependent entity type instances, '{0}' and '{1}'. Only one will be saved.",
);

pub(super) fn definitions() -> Vec<&'static dyn EventDescriptor> {
    vec![&EXCEPTION_DURING_SAVE_CHANGES, &DUPLICATE_DIET_INSTANCE]
}
