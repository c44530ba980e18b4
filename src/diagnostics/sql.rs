// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Command execution events.
//!
//! Parameter values appear in the message only when sensitive-data logging
//! is enabled and the command actually has parameters; otherwise each value
//! is masked.

use crate::catalog::definitions::sql;
use crate::catalog::DatabaseSql;
use crate::diagnostics::DiagnosticsLogger;
use crate::domain::{DbCommand, DbCommandMethod, RelationalConnection};
use crate::errors::DiagnosticsError;
use crate::payloads::command::{
    CommandErrorPayload, CommandExecutedPayload, CommandPayload, ParameterValues,
};
use crate::payloads::LazyMessage;
use crate::utils::{format_elapsed_ms, format_parameters};
use chrono::{DateTime, Utc};
use std::error::Error;
use std::time::Duration;

impl DiagnosticsLogger<DatabaseSql> {
    fn log_parameter_values(&self, command: &DbCommand) -> bool {
        self.sensitive_data_logging() && !command.parameters.is_empty()
    }

    pub fn command_executing(
        &self,
        command: &DbCommand,
        connection: &RelationalConnection,
        execute_method: DbCommandMethod,
        start_time: DateTime<Utc>,
    ) -> Result<(), DiagnosticsError> {
        let definition = &sql::EXECUTING_COMMAND;
        let log_values = self.log_parameter_values(command);
        let render = || {
            definition.generate_message([
                &format_parameters(&command.parameters, log_values),
                &command.command_type,
                &command.timeout.as_secs(),
                &command.text.trim_end(),
            ])
        };
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            CommandPayload {
                base,
                command,
                parameters: ParameterValues {
                    parameters: &command.parameters,
                    log_values,
                },
                execute_method,
                connection_id: connection.connection_id,
                start_time,
            }
            .into()
        })
    }

    pub fn command_executed(
        &self,
        command: &DbCommand,
        connection: &RelationalConnection,
        execute_method: DbCommandMethod,
        start_time: DateTime<Utc>,
        duration: Duration,
    ) -> Result<(), DiagnosticsError> {
        let definition = &sql::EXECUTED_COMMAND;
        let log_values = self.log_parameter_values(command);
        let render = || {
            definition.generate_message([
                &format_elapsed_ms(duration),
                &format_parameters(&command.parameters, log_values),
                &command.command_type,
                &command.timeout.as_secs(),
                &command.text.trim_end(),
            ])
        };
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            CommandExecutedPayload {
                base,
                command,
                parameters: ParameterValues {
                    parameters: &command.parameters,
                    log_values,
                },
                execute_method,
                connection_id: connection.connection_id,
                start_time,
                duration,
            }
            .into()
        })
    }

    pub fn command_error(
        &self,
        command: &DbCommand,
        connection: &RelationalConnection,
        execute_method: DbCommandMethod,
        error: &(dyn Error + 'static),
        start_time: DateTime<Utc>,
        duration: Duration,
    ) -> Result<(), DiagnosticsError> {
        let definition = &sql::COMMAND_FAILED;
        let log_values = self.log_parameter_values(command);
        let render = || {
            definition.generate_message([
                &format_elapsed_ms(duration),
                &format_parameters(&command.parameters, log_values),
                &command.command_type,
                &command.timeout.as_secs(),
                &command.text.trim_end(),
            ])
        };
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, Some(error), |base| {
            CommandErrorPayload {
                base,
                command,
                parameters: ParameterValues {
                    parameters: &command.parameters,
                    log_values,
                },
                execute_method,
                connection_id: connection.connection_id,
                start_time,
                duration,
                error,
            }
            .into()
        })
    }
}
