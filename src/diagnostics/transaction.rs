// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::catalog::definitions::transaction;
use crate::catalog::DatabaseTransaction;
use crate::diagnostics::DiagnosticsLogger;
use crate::domain::{DbTransaction, RelationalConnection};
use crate::errors::DiagnosticsError;
use crate::payloads::connection::{
    ConnectionPayload, TransactionEndPayload, TransactionErrorPayload, TransactionPayload,
};
use crate::payloads::LazyMessage;
use chrono::{DateTime, Utc};
use std::error::Error;
use std::time::Duration;

impl DiagnosticsLogger<DatabaseTransaction> {
    pub fn transaction_started(
        &self,
        connection: &RelationalConnection,
        transaction: &DbTransaction,
        start_time: DateTime<Utc>,
    ) -> Result<(), DiagnosticsError> {
        let definition = &transaction::BEGINNING_TRANSACTION;
        let render = || definition.generate_message([&transaction.isolation_level]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            TransactionPayload {
                base,
                transaction,
                connection,
                start_time,
            }
            .into()
        })
    }

    pub fn transaction_used(
        &self,
        connection: &RelationalConnection,
        transaction: &DbTransaction,
        start_time: DateTime<Utc>,
    ) -> Result<(), DiagnosticsError> {
        let definition = &transaction::USING_TRANSACTION;
        let render = || definition.generate_message([&transaction.isolation_level]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            TransactionPayload {
                base,
                transaction,
                connection,
                start_time,
            }
            .into()
        })
    }

    pub fn transaction_committed(
        &self,
        connection: &RelationalConnection,
        transaction: &DbTransaction,
        start_time: DateTime<Utc>,
        duration: Duration,
    ) -> Result<(), DiagnosticsError> {
        let definition = &transaction::COMMITTING_TRANSACTION;
        let render = || definition.generate_message([]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            TransactionEndPayload {
                base,
                transaction,
                connection,
                start_time,
                duration,
            }
            .into()
        })
    }

    pub fn transaction_rolled_back(
        &self,
        connection: &RelationalConnection,
        transaction: &DbTransaction,
        start_time: DateTime<Utc>,
        duration: Duration,
    ) -> Result<(), DiagnosticsError> {
        let definition = &transaction::ROLLING_BACK_TRANSACTION;
        let render = || definition.generate_message([]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            TransactionEndPayload {
                base,
                transaction,
                connection,
                start_time,
                duration,
            }
            .into()
        })
    }

    pub fn transaction_disposed(
        &self,
        connection: &RelationalConnection,
        transaction: &DbTransaction,
        start_time: DateTime<Utc>,
    ) -> Result<(), DiagnosticsError> {
        let definition = &transaction::DISPOSING_TRANSACTION;
        let render = || definition.generate_message([]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            TransactionPayload {
                base,
                transaction,
                connection,
                start_time,
            }
            .into()
        })
    }

    /// `action` names the operation that failed, e.g. `Commit`.
    pub fn transaction_error(
        &self,
        connection: &RelationalConnection,
        transaction: &DbTransaction,
        action: &str,
        error: &(dyn Error + 'static),
        start_time: DateTime<Utc>,
        duration: Duration,
    ) -> Result<(), DiagnosticsError> {
        let definition = &transaction::TRANSACTION_ERROR;
        let render = || definition.generate_message([&action]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, Some(error), |base| {
            TransactionErrorPayload {
                base,
                transaction,
                connection,
                action,
                start_time,
                duration,
                error,
            }
            .into()
        })
    }

    pub fn ambient_transaction_warning(
        &self,
        connection: &RelationalConnection,
        start_time: DateTime<Utc>,
    ) -> Result<(), DiagnosticsError> {
        let definition = &transaction::AMBIENT_TRANSACTION;
        let render = || definition.generate_message([]);
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
}
