// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::catalog::category::ModelValidation;
use crate::catalog::definition::{EventDefinition, EventDescriptor};
use crate::catalog::event_id::{EventId, LogLevel};

pub static KEY_HAS_DEFAULT_VALUE: EventDefinition<ModelValidation, 2> = EventDefinition::new(
    EventId::new(20600, "Model.Validation.ModelValidationKeyDefaultValueWarning"),
    LogLevel::Warning,
    "The '{0}' property on entity type '{1}' is part of a key and is configured with a database-generated default. The default will be used whenever the property holds its type's default value, so explicit values equal to that default cannot be saved.",
);

pub(super) fn definitions() -> Vec<&'static dyn EventDescriptor> {
    vec![&KEY_HAS_DEFAULT_VALUE]
}
