// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::domain::{Migration, MigratorInfo, RelationalConnection};
use crate::payloads::base::EventBase;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MigratorConnectionPayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub migrator: &'a MigratorInfo,
    pub connection: &'a RelationalConnection,
}

/// Applying or reverting a single migration.
#[derive(Debug, Serialize)]
pub struct MigrationPayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub migrator: &'a MigratorInfo,
    pub migration: &'a Migration,
}

/// Generating an up or down script for a migration.
#[derive(Debug, Serialize)]
pub struct MigrationScriptingPayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub migrator: &'a MigratorInfo,
    pub migration: &'a Migration,
    pub from_migration: Option<&'a str>,
    pub to_migration: Option<&'a str>,
    pub idempotent: bool,
}
