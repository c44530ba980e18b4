// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::catalog::category::Infrastructure;
use crate::catalog::definition::{EventDefinition, EventDescriptor};
use crate::catalog::event_id::{EventId, LogLevel};

pub static SENSITIVE_DATA_LOGGING_ENABLED: EventDefinition<Infrastructure, 0> = EventDefinition::new(
    EventId::new(10400, "Infrastructure.SensitiveDataLoggingEnabledWarning"),
    LogLevel::Warning,
    "Sensitive data logging is enabled. Log entries and exception messages may include sensitive application data; this mode should only be enabled during development.",
);

pub static SERVICE_PROVIDER_CREATED: EventDefinition<Infrastructure, 0> = EventDefinition::new(
    EventId::new(10401, "Infrastructure.ServiceProviderCreated"),
    LogLevel::Debug,
    "A service provider was created for internal use.",
);

pub static MANY_SERVICE_PROVIDERS_CREATED: EventDefinition<Infrastructure, 0> = EventDefinition::new(
    EventId::new(10402, "Infrastructure.ManyServiceProvidersCreatedWarning"),
    LogLevel::Warning,
    "More than twenty service providers have been created for internal use. This is commonly caused by building a new provider for every context instance instead of sharing one.",
);

pub(super) fn definitions() -> Vec<&'static dyn EventDescriptor> {
    vec![
        &SENSITIVE_DATA_LOGGING_ENABLED,
        &SERVICE_PROVIDER_CREATED,
        &MANY_SERVICE_PROVIDERS_CREATED,
    ]
}
