// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Reverse-engineering discoveries and warnings.
//!
//! The "found" and "skipped" notices are Debug-level and therefore never
//! escalate, even under warnings-as-errors.

use crate::catalog::definitions::scaffolding;
use crate::catalog::Scaffolding;
use crate::diagnostics::DiagnosticsLogger;
use crate::domain::DatabaseSequence;
use crate::errors::DiagnosticsError;
use crate::payloads::model::NoticePayload;
use crate::payloads::scaffolding::*;
use crate::payloads::LazyMessage;
use crate::utils::join_names;
use std::fmt::Display;

struct OptionalValue(Option<i64>);

impl Display for OptionalValue {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.0 {
            Some(value) => value.fmt(f),
            None => Ok(()),
        }
    }
}

impl DiagnosticsLogger<Scaffolding> {
    pub fn missing_schema_warning(&self, schema: &str) -> Result<(), DiagnosticsError> {
        let definition = &scaffolding::MISSING_SCHEMA;
        let render = || definition.generate_message([&schema]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            SchemaPayload { base, schema }.into()
        })
    }

    pub fn table_found(&self, table: &str) -> Result<(), DiagnosticsError> {
        let definition = &scaffolding::FOUND_TABLE;
        let render = || definition.generate_message([&table]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            TablePayload { base, table }.into()
        })
    }

    pub fn table_skipped(&self, table: &str) -> Result<(), DiagnosticsError> {
        let definition = &scaffolding::TABLE_NOT_IN_SELECTION_SET;
        let render = || definition.generate_message([&table]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            TablePayload { base, table }.into()
        })
    }

    pub fn missing_table_warning(&self, table: &str) -> Result<(), DiagnosticsError> {
        let definition = &scaffolding::MISSING_TABLE;
        let render = || definition.generate_message([&table]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            TablePayload { base, table }.into()
        })
    }

    pub fn column_skipped(&self, table: &str, column: &str) -> Result<(), DiagnosticsError> {
        let definition = &scaffolding::COLUMN_NOT_IN_SELECTION_SET;
        let render = || definition.generate_message([&column, &table]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            ColumnPayload { base, table, column }.into()
        })
    }

    pub fn column_not_named_warning(&self, table: &str) -> Result<(), DiagnosticsError> {
        let definition = &scaffolding::COLUMN_NAME_EMPTY_ON_TABLE;
        let render = || definition.generate_message([&table]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            TablePayload { base, table }.into()
        })
    }

    pub fn column_type_not_mapped_warning(
        &self,
        column: &str,
        data_type: &str,
    ) -> Result<(), DiagnosticsError> {
        let definition = &scaffolding::CANNOT_FIND_TYPE_MAPPING_FOR_COLUMN;
        let render = || definition.generate_message([&column, &data_type]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            ColumnTypePayload {
                base,
                column,
                data_type,
            }
            .into()
        })
    }

    pub fn unable_to_generate_entity_type_warning(&self, table: &str) -> Result<(), DiagnosticsError> {
        let definition = &scaffolding::UNABLE_TO_GENERATE_ENTITY_TYPE;
        let render = || definition.generate_message([&table]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            TablePayload { base, table }.into()
        })
    }

    pub fn missing_primary_key_warning(&self, table: &str) -> Result<(), DiagnosticsError> {
        let definition = &scaffolding::MISSING_PRIMARY_KEY;
        let render = || definition.generate_message([&table]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            TablePayload { base, table }.into()
        })
    }

    pub fn primary_key_columns_not_mapped_warning(
        &self,
        table: &str,
        unmapped_columns: &[String],
    ) -> Result<(), DiagnosticsError> {
        let definition = &scaffolding::PRIMARY_KEY_COLUMNS_NOT_MAPPED;
        let render = || definition.generate_message([&table, &join_names(unmapped_columns)]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            UnmappedColumnsPayload {
                base,
                name: table,
                unmapped_columns,
            }
            .into()
        })
    }

    pub fn index_found(&self, index: &str, table: &str, is_unique: bool) -> Result<(), DiagnosticsError> {
        let definition = &scaffolding::FOUND_INDEX;
        let render = || definition.generate_message([&index, &table, &is_unique]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            IndexFoundPayload {
                base,
                index,
                table,
                is_unique,
            }
            .into()
        })
    }

    pub fn index_column_found(
        &self,
        index: &str,
        table: &str,
        column: &str,
        ordinal: i32,
    ) -> Result<(), DiagnosticsError> {
        let definition = &scaffolding::FOUND_INDEX_COLUMN;
        let render = || definition.generate_message([&index, &table, &column, &ordinal]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            IndexColumnFoundPayload {
                base,
                index,
                table,
                column,
                ordinal,
            }
            .into()
        })
    }

    pub fn index_column_skipped(
        &self,
        index: &str,
        table: &str,
        column: &str,
    ) -> Result<(), DiagnosticsError> {
        let definition = &scaffolding::INDEX_COLUMN_NOT_IN_SELECTION_SET;
        let render = || definition.generate_message([&column, &index, &table]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            IndexColumnPayload {
                base,
                index,
                table,
                column,
            }
            .into()
        })
    }

    pub fn index_column_not_named_warning(&self, index: &str, table: &str) -> Result<(), DiagnosticsError> {
        let definition = &scaffolding::COLUMN_NAME_EMPTY_ON_INDEX;
        let render = || definition.generate_message([&index, &table]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            IndexPayload { base, index, table }.into()
        })
    }

    pub fn index_not_named_warning(&self, table: &str) -> Result<(), DiagnosticsError> {
        let definition = &scaffolding::INDEX_NAME_EMPTY;
        let render = || definition.generate_message([&table]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            TablePayload { base, table }.into()
        })
    }

    pub fn index_table_missing_warning(&self, index: &str, table: &str) -> Result<(), DiagnosticsError> {
        let definition = &scaffolding::UNABLE_TO_FIND_TABLE_FOR_INDEX;
        let render = || definition.generate_message([&index, &table]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            IndexPayload { base, index, table }.into()
        })
    }

    pub fn index_columns_not_mapped_warning(
        &self,
        index: &str,
        unmapped_columns: &[String],
    ) -> Result<(), DiagnosticsError> {
        let definition = &scaffolding::INDEX_COLUMNS_NOT_MAPPED;
        let render = || definition.generate_message([&index, &join_names(unmapped_columns)]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            UnmappedColumnsPayload {
                base,
                name: index,
                unmapped_columns,
            }
            .into()
        })
    }

    pub fn foreign_key_not_named_warning(&self, table: &str) -> Result<(), DiagnosticsError> {
        let definition = &scaffolding::FOREIGN_KEY_NAME_EMPTY;
        let render = || definition.generate_message([&table]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            TablePayload { base, table }.into()
        })
    }

    pub fn foreign_key_column_missing_warning(
        &self,
        column: &str,
        foreign_key: &str,
        table: &str,
    ) -> Result<(), DiagnosticsError> {
        let definition = &scaffolding::FOREIGN_KEY_COLUMN_NOT_IN_SELECTION_SET;
        let render = || definition.generate_message([&column, &foreign_key, &table]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            ForeignKeyColumnPayload {
                base,
                foreign_key,
                table,
                column,
            }
            .into()
        })
    }

    pub fn foreign_key_references_missing_table_warning(
        &self,
        foreign_key: &str,
    ) -> Result<(), DiagnosticsError> {
        let definition = &scaffolding::FOREIGN_KEY_PRINCIPAL_TABLE_NOT_FOUND;
        let render = || definition.generate_message([&foreign_key]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            ForeignKeyPayload { base, foreign_key }.into()
        })
    }

    pub fn foreign_key_references_missing_principal_table_warning(
        &self,
        foreign_key: &str,
        table: &str,
        principal_table: &str,
    ) -> Result<(), DiagnosticsError> {
        let definition = &scaffolding::PRINCIPAL_TABLE_NOT_IN_SELECTION_SET;
        let render = || definition.generate_message([&foreign_key, &table, &principal_table]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            PrincipalTablePayload {
                base,
                foreign_key,
                table,
                principal_table,
            }
            .into()
        })
    }

    pub fn foreign_key_principal_column_missing_warning(
        &self,
        foreign_key: &str,
        table: &str,
        principal_column: &str,
        principal_table: &str,
    ) -> Result<(), DiagnosticsError> {
        let definition = &scaffolding::PRINCIPAL_COLUMN_NOT_FOUND;
        let render = || {
            definition.generate_message([&foreign_key, &table, &principal_column, &principal_table])
        };
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            PrincipalColumnPayload {
                base,
                foreign_key,
                table,
                principal_column,
                principal_table,
            }
            .into()
        })
    }

    pub fn foreign_key_column_not_named_warning(
        &self,
        table: &str,
        foreign_key: &str,
    ) -> Result<(), DiagnosticsError> {
        let definition = &scaffolding::COLUMN_NAME_EMPTY_ON_FOREIGN_KEY;
        let render = || definition.generate_message([&table, &foreign_key]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            ForeignKeyTablePayload {
                base,
                foreign_key,
                table,
            }
            .into()
        })
    }

    pub fn foreign_key_columns_not_mapped_warning(
        &self,
        foreign_key: &str,
        unmapped_columns: &[String],
    ) -> Result<(), DiagnosticsError> {
        let definition = &scaffolding::FOREIGN_KEY_COLUMNS_NOT_MAPPED;
        let render = || definition.generate_message([&foreign_key, &join_names(unmapped_columns)]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            UnmappedColumnsPayload {
                base,
                name: foreign_key,
                unmapped_columns,
            }
            .into()
        })
    }

    /// `referenced_table` is the principal table that could not be scaffolded.
    pub fn foreign_key_references_not_mapped_table_warning(
        &self,
        foreign_key: &str,
        referenced_table: &str,
    ) -> Result<(), DiagnosticsError> {
        let definition = &scaffolding::FOREIGN_KEY_REFERENCES_NOT_MAPPED_TABLE;
        let render = || definition.generate_message([&foreign_key, &referenced_table]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            ForeignKeyTablePayload {
                base,
                foreign_key,
                table: referenced_table,
            }
            .into()
        })
    }

    pub fn foreign_key_references_missing_principal_key_warning(
        &self,
        foreign_key: &str,
        principal_columns: &[String],
        principal_entity_type: &str,
    ) -> Result<(), DiagnosticsError> {
        let definition = &scaffolding::FOREIGN_KEY_PRINCIPAL_KEY_NOT_FOUND;
        let render = || {
            definition.generate_message([
                &foreign_key,
                &join_names(principal_columns),
                &principal_entity_type,
            ])
        };
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            PrincipalKeyPayload {
                base,
                foreign_key,
                principal_columns,
                principal_entity_type,
            }
            .into()
        })
    }

    pub fn foreign_key_principal_end_contains_nullable_columns_warning(
        &self,
        foreign_key: &str,
        unique_index: &str,
        nullable_columns: &[String],
    ) -> Result<(), DiagnosticsError> {
        let definition = &scaffolding::FOREIGN_KEY_PRINCIPAL_END_CONTAINS_NULLABLE_COLUMNS;
        let render = || {
            definition.generate_message([&foreign_key, &unique_index, &join_names(nullable_columns)])
        };
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            NullablePrincipalColumnsPayload {
                base,
                foreign_key,
                unique_index,
                nullable_columns,
            }
            .into()
        })
    }

    pub fn sequence_found(&self, sequence: &DatabaseSequence) -> Result<(), DiagnosticsError> {
        let definition = &scaffolding::FOUND_SEQUENCE;
        let render = || {
            definition.generate_message([
                &sequence.name,
                &sequence.data_type,
                &sequence.cyclic,
                &sequence.increment,
                &sequence.start,
                &OptionalValue(sequence.minimum),
                &OptionalValue(sequence.maximum),
            ])
        };
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            SequencePayload { base, sequence }.into()
        })
    }

    pub fn sequence_not_named_warning(&self) -> Result<(), DiagnosticsError> {
        let definition = &scaffolding::SEQUENCES_REQUIRE_NAME;
        let render = || definition.generate_message([]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| NoticePayload { base }.into())
    }

    pub fn sequence_type_not_supported_warning(
        &self,
        sequence: &str,
        data_type: &str,
    ) -> Result<(), DiagnosticsError> {
        let definition = &scaffolding::BAD_SEQUENCE_TYPE;
        let render = || definition.generate_message([&sequence, &data_type]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            SequenceTypePayload {
                base,
                sequence,
                data_type,
            }
            .into()
        })
    }
}
