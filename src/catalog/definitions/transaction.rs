// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::catalog::category::DatabaseTransaction;
use crate::catalog::definition::{EventDefinition, EventDescriptor};
use crate::catalog::event_id::{EventId, LogLevel};

pub static BEGINNING_TRANSACTION: EventDefinition<DatabaseTransaction, 1> = EventDefinition::new(
    EventId::new(20200, "Database.Transaction.TransactionStarted"),
    LogLevel::Debug,
    "Beginning transaction with isolation level '{0}'.",
);

pub static USING_TRANSACTION: EventDefinition<DatabaseTransaction, 1> = EventDefinition::new(
    EventId::new(20201, "Database.Transaction.TransactionUsed"),
    LogLevel::Debug,
    "Using an existing transaction with isolation level '{0}'.",
);

pub static COMMITTING_TRANSACTION: EventDefinition<DatabaseTransaction, 0> = EventDefinition::new(
    EventId::new(20202, "Database.Transaction.TransactionCommitted"),
    LogLevel::Debug,
    "Committing transaction.",
);

pub static ROLLING_BACK_TRANSACTION: EventDefinition<DatabaseTransaction, 0> = EventDefinition::new(
    EventId::new(20203, "Database.Transaction.TransactionRolledBack"),
    LogLevel::Debug,
    "Rolling back transaction.",
);

pub static DISPOSING_TRANSACTION: EventDefinition<DatabaseTransaction, 0> = EventDefinition::new(
    EventId::new(20204, "Database.Transaction.TransactionDisposed"),
    LogLevel::Debug,
    "Disposing transaction.",
);

pub static TRANSACTION_ERROR: EventDefinition<DatabaseTransaction, 1> = EventDefinition::new(
    EventId::new(20205, "Database.Transaction.TransactionError"),
    LogLevel::Error,
    "An error occurred using a transaction during '{0}'.",
);

pub static AMBIENT_TRANSACTION: EventDefinition<DatabaseTransaction, 0> = EventDefinition::new(
    EventId::new(20206, "Database.Transaction.AmbientTransactionWarning"),
    LogLevel::Warning,
    "An ambient transaction has been detected. Ambient transactions are not supported and the connection will not enlist in it.",
);

pub(super) fn definitions() -> Vec<&'static dyn EventDescriptor> {
    vec![
        &BEGINNING_TRANSACTION,
        &USING_TRANSACTION,
        &COMMITTING_TRANSACTION,
        &ROLLING_BACK_TRANSACTION,
        &DISPOSING_TRANSACTION,
        &TRANSACTION_ERROR,
        &AMBIENT_TRANSACTION,
    ]
}
