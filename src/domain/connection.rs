// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// An open (or opening) connection. The id is assigned by the runtime and
/// correlates every event raised while the connection is in use.
#[derive(Debug, Clone, Serialize)]
pub struct RelationalConnection {
    pub connection_id: Uuid,
    pub database: String,
    pub data_source: String,
}

impl RelationalConnection {
    pub fn new(database: impl Into<String>, data_source: impl Into<String>) -> Self {
        Self {
            connection_id: Uuid::new_v4(),
            database: database.into(),
            data_source: data_source.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum IsolationLevel {
    #[default]
    Unspecified,
    Chaos,
    ReadUncommitted,
    ReadCommitted,
    RepeatableRead,
    Serializable,
    Snapshot,
}

impl Display for IsolationLevel {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(match self {
            IsolationLevel::Unspecified => "Unspecified",
            IsolationLevel::Chaos => "Chaos",
            IsolationLevel::ReadUncommitted => "ReadUncommitted",
            IsolationLevel::ReadCommitted => "ReadCommitted",
            IsolationLevel::RepeatableRead => "RepeatableRead",
            IsolationLevel::Serializable => "Serializable",
            IsolationLevel::Snapshot => "Snapshot",
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DbTransaction {
    pub transaction_id: Uuid,
    pub isolation_level: IsolationLevel,
}

impl DbTransaction {
    pub fn new(isolation_level: IsolationLevel) -> Self {
        Self {
            transaction_id: Uuid::new_v4(),
            isolation_level,
        }
    }
}
