// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Descriptors of the domain objects call sites report on.
//!
//! These are deliberately thin: the data-access runtime owns the real
//! commands, connections and migrations, and hands the dispatch layer just
//! enough of each to build a message and a payload. Payloads borrow them, so
//! nothing here is cloned on the dispatch path.

mod command;
mod connection;
mod migrations;
mod model;
mod schema;

pub use command::{CommandType, DbCommand, DbCommandMethod, DbDataReader, DbParameter};
pub use connection::{DbTransaction, IsolationLevel, RelationalConnection};
pub use migrations::{Migration, MigratorInfo};
pub use model::{Expression, PropertyInfo, QueryModel, ServiceProviderInfo};
pub use schema::DatabaseSequence;
