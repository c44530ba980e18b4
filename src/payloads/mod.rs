// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Typed payloads for the structured channel.
//!
//! Each payload is a fixed record of one event's domain arguments plus an
//! [`EventBase`] holding the event identity and the lazily rendered message.
//! Payloads borrow everything they carry and live only for the duration of a
//! single dispatch call; a sink that keeps data must copy it out (for
//! example by serializing with `serde_json`).
//!
//! Building a payload never formats text. The message is rendered the first
//! time anyone asks for it and cached for the rest of the call.

mod base;
pub mod command;
pub mod connection;
pub mod migrations;
pub mod model;
pub mod query;
pub mod scaffolding;
pub mod update;

pub use base::{EventBase, LazyMessage};

use crate::catalog::{EventId, LogLevel};
use command::*;
use connection::*;
use migrations::*;
use model::*;
use query::*;
use scaffolding::*;
use update::*;
use serde::Serialize;

macro_rules! event_payloads {
    ($($variant:ident($payload:ident)),* $(,)?) => {
        /// Every payload shape the structured channel can carry.
        ///
        /// Serializes as the inner record's fields; the record kind is
        /// available from [`EventPayload::kind`].
        #[derive(Debug, Serialize)]
        #[serde(untagged)]
        pub enum EventPayload<'a> {
            $($variant($payload<'a>),)*
        }

        impl<'a> EventPayload<'a> {
            pub fn base(&self) -> &EventBase<'a> {
                match self {
                    $(EventPayload::$variant(payload) => &payload.base,)*
                }
            }

            /// Name of the payload record, e.g. `"Command"`.
            pub fn kind(&self) -> &'static str {
                match self {
                    $(EventPayload::$variant(_) => stringify!($variant),)*
                }
            }
        }

        $(
            impl<'a> From<$payload<'a>> for EventPayload<'a> {
                fn from(payload: $payload<'a>) -> Self {
                    EventPayload::$variant(payload)
                }
            }
        )*
    };
}

event_payloads! {
    Command(CommandPayload),
    CommandExecuted(CommandExecutedPayload),
    CommandError(CommandErrorPayload),
    DataReaderDisposing(DataReaderDisposingPayload),
    Connection(ConnectionPayload),
    ConnectionEnd(ConnectionEndPayload),
    ConnectionError(ConnectionErrorPayload),
    Transaction(TransactionPayload),
    TransactionEnd(TransactionEndPayload),
    TransactionError(TransactionErrorPayload),
    MigratorConnection(MigratorConnectionPayload),
    Migration(MigrationPayload),
    MigrationScripting(MigrationScriptingPayload),
    QueryModel(QueryModelPayload),
    Expression(ExpressionPayload),
    BinaryExpression(BinaryExpressionPayload),
    NavigationPath(NavigationPathPayload),
    ContextError(ContextErrorPayload),
    Property(PropertyPayload),
    ServiceProvider(ServiceProviderPayload),
    ServiceProviders(ServiceProvidersPayload),
    Notice(NoticePayload),
    Schema(SchemaPayload),
    Table(TablePayload),
    Column(ColumnPayload),
    ColumnType(ColumnTypePayload),
    Index(IndexPayload),
    IndexFound(IndexFoundPayload),
    IndexColumn(IndexColumnPayload),
    IndexColumnFound(IndexColumnFoundPayload),
    UnmappedColumns(UnmappedColumnsPayload),
    ForeignKey(ForeignKeyPayload),
    ForeignKeyTable(ForeignKeyTablePayload),
    ForeignKeyColumn(ForeignKeyColumnPayload),
    PrincipalTable(PrincipalTablePayload),
    PrincipalColumn(PrincipalColumnPayload),
    PrincipalKey(PrincipalKeyPayload),
    NullablePrincipalColumns(NullablePrincipalColumnsPayload),
    Sequence(SequencePayload),
    SequenceType(SequenceTypePayload),
    DuplicateDietInstance(DuplicateDietInstancePayload),
}

impl<'a> EventPayload<'a> {
    pub fn event_id(&self) -> EventId {
        self.base().event_id
    }

    pub fn level(&self) -> LogLevel {
        self.base().level
    }

    /// Render (or reuse) the event message.
    pub fn message(&self) -> &'a str {
        self.base().message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::definitions::scaffolding::FOUND_TABLE;
    use std::cell::Cell;

    #[test]
    fn payload_exposes_base_and_serializes_fields_only() {
        let calls = Cell::new(0);
        let render = || {
            calls.set(calls.get() + 1);
            FOUND_TABLE.generate_message([&"dbo.Orders"])
        };
        let message = LazyMessage::new(&render);
        let payload: EventPayload = TablePayload {
            base: EventBase::new(FOUND_TABLE.event_id(), FOUND_TABLE.level(), &message),
            table: "dbo.Orders",
        }
        .into();

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({"table": "dbo.Orders"}));
        assert_eq!(calls.get(), 0);

        assert_eq!(payload.kind(), "Table");
        assert_eq!(payload.event_id().name(), "Scaffolding.TableFound");
        assert_eq!(payload.message(), "Found table with name: dbo.Orders.");
        assert_eq!(payload.message(), "Found table with name: dbo.Orders.");
        assert_eq!(calls.get(), 1);
    }
}
