// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::catalog::definitions::model;
use crate::catalog::ModelValidation;
use crate::diagnostics::DiagnosticsLogger;
use crate::domain::PropertyInfo;
use crate::errors::DiagnosticsError;
use crate::payloads::model::PropertyPayload;
use crate::payloads::LazyMessage;

impl DiagnosticsLogger<ModelValidation> {
    pub fn model_validation_key_default_value_warning(
        &self,
        property: &PropertyInfo,
    ) -> Result<(), DiagnosticsError> {
        let definition = &model::KEY_HAS_DEFAULT_VALUE;
        let render = || definition.generate_message([&property.name, &property.declaring_entity_type]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            PropertyPayload { base, property }.into()
        })
    }
}
