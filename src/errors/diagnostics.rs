// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::catalog::EventId;
use crate::errors::SinkError;
use thiserror::Error;

/// Failure of a single dispatch call.
#[derive(Error, Debug)]
pub enum DiagnosticsError {
    /// The warnings policy escalated this event to a hard failure. Raised
    /// before either sink is invoked.
    #[error(
        "Error generated for warning '{}': {message} This can be suppressed or logged by adding a warnings rule for event id {}.",
        .event_id.name(),
        .event_id.id()
    )]
    WarningAsError { event_id: EventId, message: String },

    #[error(transparent)]
    Sink(#[from] SinkError),
}

impl DiagnosticsError {
    /// The rendered event message for an escalated warning; identical to
    /// what the leveled sink would have received.
    pub fn message(&self) -> Option<&str> {
        match self {
            DiagnosticsError::WarningAsError { message, .. } => Some(message),
            DiagnosticsError::Sink(_) => None,
        }
    }

    pub fn event_id(&self) -> Option<EventId> {
        match self {
            DiagnosticsError::WarningAsError { event_id, .. } => Some(*event_id),
            DiagnosticsError::Sink(_) => None,
        }
    }
}
