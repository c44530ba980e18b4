// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::catalog::definitions::infrastructure;
use crate::catalog::Infrastructure;
use crate::diagnostics::DiagnosticsLogger;
use crate::domain::ServiceProviderInfo;
use crate::errors::DiagnosticsError;
use crate::payloads::model::{NoticePayload, ServiceProviderPayload, ServiceProvidersPayload};
use crate::payloads::LazyMessage;

impl DiagnosticsLogger<Infrastructure> {
    pub fn sensitive_data_logging_enabled_warning(&self) -> Result<(), DiagnosticsError> {
        let definition = &infrastructure::SENSITIVE_DATA_LOGGING_ENABLED;
        let render = || definition.generate_message([]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| NoticePayload { base }.into())
    }

    pub fn service_provider_created(
        &self,
        service_provider: &ServiceProviderInfo,
    ) -> Result<(), DiagnosticsError> {
        let definition = &infrastructure::SERVICE_PROVIDER_CREATED;
        let render = || definition.generate_message([]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            ServiceProviderPayload {
                base,
                service_provider,
            }
            .into()
        })
    }

    pub fn many_service_providers_created_warning(
        &self,
        service_providers: &[ServiceProviderInfo],
    ) -> Result<(), DiagnosticsError> {
        let definition = &infrastructure::MANY_SERVICE_PROVIDERS_CREATED;
        let render = || definition.generate_message([]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            ServiceProvidersPayload {
                base,
                service_providers,
            }
            .into()
        })
    }
}
