// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::catalog::definitions::update;
use crate::catalog::Update;
use crate::diagnostics::DiagnosticsLogger;
use crate::errors::DiagnosticsError;
use crate::payloads::query::ContextErrorPayload;
use crate::payloads::update::DuplicateDietInstancePayload;
use crate::payloads::LazyMessage;
use std::error::Error;

impl DiagnosticsLogger<Update> {
    pub fn save_changes_failed(
        &self,
        context_type: &str,
        error: &(dyn Error + 'static),
    ) -> Result<(), DiagnosticsError> {
        let definition = &update::EXCEPTION_DURING_SAVE_CHANGES;
        let render = || definition.generate_message([&context_type, &error]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, Some(error), |base| {
            ContextErrorPayload {
                base,
                context_type,
                error,
            }
            .into()
        })
    }

    /// `diet1` and `diet2` name the two dependent entity type instances.
    pub fn duplicate_diet_instance_warning(&self, diet1: &str, diet2: &str) -> Result<(), DiagnosticsError> {
        let definition = &update::DUPLICATE_DIET_INSTANCE;
        let render = || definition.generate_message([&diet1, &diet2]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            DuplicateDietInstancePayload { base, diet1, diet2 }.into()
        })
    }
}
