// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::catalog::definitions::connection;
use crate::catalog::DatabaseConnection;
use crate::diagnostics::DiagnosticsLogger;
use crate::domain::RelationalConnection;
use crate::errors::DiagnosticsError;
use crate::payloads::connection::{ConnectionEndPayload, ConnectionErrorPayload, ConnectionPayload};
use crate::payloads::LazyMessage;
use chrono::{DateTime, Utc};
use std::error::Error;
use std::time::Duration;

impl DiagnosticsLogger<DatabaseConnection> {
    pub fn connection_opening(
        &self,
        connection: &RelationalConnection,
        start_time: DateTime<Utc>,
    ) -> Result<(), DiagnosticsError> {
        let definition = &connection::OPENING_CONNECTION;
        let render = || definition.generate_message([&connection.database, &connection.data_source]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            ConnectionPayload {
                base,
                connection,
                start_time,
            }
            .into()
        })
    }

    pub fn connection_opened(
        &self,
        connection: &RelationalConnection,
        start_time: DateTime<Utc>,
        duration: Duration,
    ) -> Result<(), DiagnosticsError> {
        let definition = &connection::OPENED_CONNECTION;
        let render = || definition.generate_message([&connection.database, &connection.data_source]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            ConnectionEndPayload {
                base,
                connection,
                start_time,
                duration,
            }
            .into()
        })
    }

    pub fn connection_closing(
        &self,
        connection: &RelationalConnection,
        start_time: DateTime<Utc>,
    ) -> Result<(), DiagnosticsError> {
        let definition = &connection::CLOSING_CONNECTION;
        let render = || definition.generate_message([&connection.database, &connection.data_source]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            ConnectionPayload {
                base,
                connection,
                start_time,
            }
            .into()
        })
    }

    pub fn connection_closed(
        &self,
        connection: &RelationalConnection,
        start_time: DateTime<Utc>,
        duration: Duration,
    ) -> Result<(), DiagnosticsError> {
        let definition = &connection::CLOSED_CONNECTION;
        let render = || definition.generate_message([&connection.database, &connection.data_source]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            ConnectionEndPayload {
                base,
                connection,
                start_time,
                duration,
            }
            .into()
        })
    }

    pub fn connection_error(
        &self,
        connection: &RelationalConnection,
        error: &(dyn Error + 'static),
        start_time: DateTime<Utc>,
        duration: Duration,
    ) -> Result<(), DiagnosticsError> {
        let definition = &connection::CONNECTION_ERROR;
        let render = || definition.generate_message([&connection.database, &connection.data_source]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, Some(error), |base| {
            ConnectionErrorPayload {
                base,
                connection,
                start_time,
                duration,
                error,
            }
            .into()
        })
    }
}
