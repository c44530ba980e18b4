// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::catalog::definitions::data_reader;
use crate::catalog::DatabaseDataReader;
use crate::diagnostics::DiagnosticsLogger;
use crate::domain::{DbCommand, DbDataReader, RelationalConnection};
use crate::errors::DiagnosticsError;
use crate::payloads::command::DataReaderDisposingPayload;
use crate::payloads::LazyMessage;
use chrono::{DateTime, Utc};
use std::time::Duration;

impl DiagnosticsLogger<DatabaseDataReader> {
    pub fn data_reader_disposing(
        &self,
        connection: &RelationalConnection,
        command: &DbCommand,
        data_reader: &DbDataReader,
        start_time: DateTime<Utc>,
        duration: Duration,
    ) -> Result<(), DiagnosticsError> {
        let definition = &data_reader::DISPOSING_DATA_READER;
        let render = || definition.generate_message([]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            DataReaderDisposingPayload {
                base,
                command_id: command.command_id,
                connection,
                data_reader,
                start_time,
                duration,
            }
            .into()
        })
    }
}
