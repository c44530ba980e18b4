// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::catalog::{EventDefinition, LoggerCategory};
use crate::errors::DiagnosticsError;
use crate::payloads::{EventBase, EventPayload, LazyMessage};
use crate::policy::{WarningBehavior, WarningsPolicy};
use crate::traits::{LeveledSink, LogRecord, StructuredSink};
use std::error::Error;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// The per-category facade call sites dispatch through.
///
/// A `DiagnosticsLogger<C>` only accepts definitions declared for category
/// `C`, so handing it an event from another category does not compile. It
/// holds no mutable state and is cheap to clone and share across threads.
pub struct DiagnosticsLogger<C: LoggerCategory> {
    leveled: Arc<dyn LeveledSink>,
    structured: Arc<dyn StructuredSink>,
    policy: Arc<WarningsPolicy>,
    sensitive_data_logging: bool,
    _category: PhantomData<fn() -> C>,
}

impl<C: LoggerCategory> DiagnosticsLogger<C> {
    pub(crate) fn new(
        leveled: Arc<dyn LeveledSink>,
        structured: Arc<dyn StructuredSink>,
        policy: Arc<WarningsPolicy>,
        sensitive_data_logging: bool,
    ) -> Self {
        Self {
            leveled,
            structured,
            policy,
            sensitive_data_logging,
            _category: PhantomData,
        }
    }

    pub fn sensitive_data_logging(&self) -> bool {
        self.sensitive_data_logging
    }

    /// Dispatch one event to both channels.
    ///
    /// * The policy is resolved first. `Throw` fails with the rendered
    ///   message before either sink is consulted; `Ignore` suppresses the
    ///   event on both channels.
    /// * The leveled sink is asked whether it wants the effective level; the
    ///   message is rendered only if it does.
    /// * Independently, the structured sink is asked whether it wants the
    ///   event name; `payload` is only invoked if it does.
    ///
    /// Both channels run even when the first one fails; the first error is
    /// returned.
    pub fn dispatch<'a, const N: usize>(
        &self,
        definition: &'static EventDefinition<C, N>,
        message: &'a LazyMessage<'a>,
        exception: Option<&'a (dyn Error + 'static)>,
        payload: impl FnOnce(EventBase<'a>) -> EventPayload<'a>,
    ) -> Result<(), DiagnosticsError> {
        let event_id = definition.event_id();
        let resolution = self.policy.resolve(definition);

        match resolution.behavior {
            WarningBehavior::Throw => {
                return Err(DiagnosticsError::WarningAsError {
                    event_id,
                    message: message.get().to_string(),
                })
            }
            WarningBehavior::Ignore => return Ok(()),
            WarningBehavior::Log => {}
        }

        let mut first_error = None;

        if self.leveled.is_enabled(C::CATEGORY, resolution.level) {
            let record = LogRecord {
                category: C::CATEGORY,
                level: resolution.level,
                event_id,
                message: message.get(),
                exception,
            };
            if let Err(error) = self.leveled.write(&record) {
                first_error.get_or_insert(error);
            }
        }

        if self.structured.is_enabled(event_id.name()) {
            let payload = payload(EventBase::new(event_id, resolution.level, message));
            if let Err(error) = self.structured.write(event_id.name(), &payload) {
                first_error.get_or_insert(error);
            }
        }

        match first_error {
            Some(error) => Err(error.into()),
            None => Ok(()),
        }
    }
}

impl<C: LoggerCategory> Clone for DiagnosticsLogger<C> {
    fn clone(&self) -> Self {
        Self {
            leveled: Arc::clone(&self.leveled),
            structured: Arc::clone(&self.structured),
            policy: Arc::clone(&self.policy),
            sensitive_data_logging: self.sensitive_data_logging,
            _category: PhantomData,
        }
    }
}

impl<C: LoggerCategory> fmt::Debug for DiagnosticsLogger<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticsLogger")
            .field("category", &C::CATEGORY)
            .field("sensitive_data_logging", &self.sensitive_data_logging)
            .finish_non_exhaustive()
    }
}
