// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::catalog::definitions::migrations;
use crate::catalog::Migrations;
use crate::diagnostics::DiagnosticsLogger;
use crate::domain::{Migration, MigratorInfo, RelationalConnection};
use crate::errors::DiagnosticsError;
use crate::payloads::migrations::{
    MigrationPayload, MigrationScriptingPayload, MigratorConnectionPayload,
};
use crate::payloads::LazyMessage;

/// Range and mode of a script being generated.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptRange<'a> {
    pub from_migration: Option<&'a str>,
    pub to_migration: Option<&'a str>,
    pub idempotent: bool,
}

impl DiagnosticsLogger<Migrations> {
    pub fn migrate_using_connection(
        &self,
        migrator: &MigratorInfo,
        connection: &RelationalConnection,
    ) -> Result<(), DiagnosticsError> {
        let definition = &migrations::USING_CONNECTION;
        let render = || definition.generate_message([&connection.database, &connection.data_source]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            MigratorConnectionPayload {
                base,
                migrator,
                connection,
            }
            .into()
        })
    }

    pub fn migration_reverting(
        &self,
        migrator: &MigratorInfo,
        migration: &Migration,
    ) -> Result<(), DiagnosticsError> {
        let definition = &migrations::REVERTING_MIGRATION;
        let render = || definition.generate_message([&migration.id]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            MigrationPayload {
                base,
                migrator,
                migration,
            }
            .into()
        })
    }

    pub fn migration_applying(
        &self,
        migrator: &MigratorInfo,
        migration: &Migration,
    ) -> Result<(), DiagnosticsError> {
        let definition = &migrations::APPLYING_MIGRATION;
        let render = || definition.generate_message([&migration.id]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            MigrationPayload {
                base,
                migrator,
                migration,
            }
            .into()
        })
    }

    pub fn migration_generating_down_script(
        &self,
        migrator: &MigratorInfo,
        migration: &Migration,
        range: ScriptRange<'_>,
    ) -> Result<(), DiagnosticsError> {
        let definition = &migrations::GENERATING_DOWN_SCRIPT;
        let render = || definition.generate_message([&migration.id]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            MigrationScriptingPayload {
                base,
                migrator,
                migration,
                from_migration: range.from_migration,
                to_migration: range.to_migration,
                idempotent: range.idempotent,
            }
            .into()
        })
    }

    pub fn migration_generating_up_script(
        &self,
        migrator: &MigratorInfo,
        migration: &Migration,
        range: ScriptRange<'_>,
    ) -> Result<(), DiagnosticsError> {
        let definition = &migrations::GENERATING_UP_SCRIPT;
        let render = || definition.generate_message([&migration.id]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            MigrationScriptingPayload {
                base,
                migrator,
                migration,
                from_migration: range.from_migration,
                to_migration: range.to_migration,
                idempotent: range.idempotent,
            }
            .into()
        })
    }
}
