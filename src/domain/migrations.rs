// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;

/// The migrator driving a migration run, identified by its context type.
#[derive(Debug, Clone, Serialize)]
pub struct MigratorInfo {
    pub context_type: String,
}

impl MigratorInfo {
    pub fn new(context_type: impl Into<String>) -> Self {
        Self {
            context_type: context_type.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Migration {
    /// e.g. `20240301120000_AddOrders`
    pub id: String,
}

impl Migration {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
