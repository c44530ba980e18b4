// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Reverse-engineering events (`Scaffolding`).
//!
//! Database model discovery uses ids 25000..; code generation notices use
//! 25100... Discovery notices are Debug and therefore never escalate.

use crate::catalog::category::Scaffolding;
use crate::catalog::definition::{EventDefinition, EventDescriptor};
use crate::catalog::event_id::{EventId, LogLevel};

pub static FOUND_TABLE: EventDefinition<Scaffolding, 1> = EventDefinition::new(
    EventId::new(25000, "Scaffolding.TableFound"),
    LogLevel::Debug,
    "Found table with name: {0}.",
);

pub static TABLE_NOT_IN_SELECTION_SET: EventDefinition<Scaffolding, 1> = EventDefinition::new(
    EventId::new(25001, "Scaffolding.TableSkipped"),
    LogLevel::Debug,
    "Table {0} is not included in the selection set. Skipping.",
);

pub static COLUMN_NOT_IN_SELECTION_SET: EventDefinition<Scaffolding, 2> = EventDefinition::new(
    EventId::new(25002, "Scaffolding.ColumnSkipped"),
    LogLevel::Debug,
    "Column {0} belongs to table {1} which is not included in the selection set. Skipping.",
);

pub static COLUMN_NAME_EMPTY_ON_TABLE: EventDefinition<Scaffolding, 1> = EventDefinition::new(
    EventId::new(25003, "Scaffolding.ColumnNotNamedWarning"),
    LogLevel::Warning,
    "Found a column on table {0} with an empty or null name. Skipping column.",
);

pub static MISSING_TABLE: EventDefinition<Scaffolding, 1> = EventDefinition::new(
    EventId::new(25004, "Scaffolding.MissingTableWarning"),
    LogLevel::Warning,
    "Unable to find a table in the database matching the selected table {0}.",
);

pub static FOUND_INDEX: EventDefinition<Scaffolding, 3> = EventDefinition::new(
    EventId::new(25005, "Scaffolding.IndexFound"),
    LogLevel::Debug,
    "Found index with name: {0}, table: {1}, is unique: {2}.",
);

pub static FOUND_INDEX_COLUMN: EventDefinition<Scaffolding, 4> = EventDefinition::new(
    EventId::new(25006, "Scaffolding.IndexColumnFound"),
    LogLevel::Debug,
    "Found index column on index {0} on table {1}, column name: {2}, ordinal: {3}.",
);

pub static INDEX_COLUMN_NOT_IN_SELECTION_SET: EventDefinition<Scaffolding, 3> = EventDefinition::new(
    EventId::new(25007, "Scaffolding.IndexColumnSkipped"),
    LogLevel::Debug,
    "Index column {0} belongs to index {1} on table {2} which is not included in the selection set. Skipping.",
);

pub static COLUMN_NAME_EMPTY_ON_INDEX: EventDefinition<Scaffolding, 2> = EventDefinition::new(
    EventId::new(25008, "Scaffolding.IndexColumnNotNamedWarning"),
    LogLevel::Warning,
    "Found a column on index {0} on table {1} with an empty or null name. Not including column in index.",
);

pub static INDEX_NAME_EMPTY: EventDefinition<Scaffolding, 1> = EventDefinition::new(
    EventId::new(25009, "Scaffolding.IndexNotNamedWarning"),
    LogLevel::Warning,
    "Found an index on table {0} with an empty or null name. Skipping index.",
);

pub static UNABLE_TO_FIND_TABLE_FOR_INDEX: EventDefinition<Scaffolding, 2> = EventDefinition::new(
    EventId::new(25010, "Scaffolding.IndexTableMissingWarning"),
    LogLevel::Warning,
    "Unable to find a table in the database for index {0} on table {1}. Skipping index.",
);

pub static INDEX_COLUMNS_NOT_MAPPED: EventDefinition<Scaffolding, 2> = EventDefinition::new(
    EventId::new(25011, "Scaffolding.IndexColumnsNotMappedWarning"),
    LogLevel::Warning,
    "Unable to scaffold the index '{0}'. The following columns could not be scaffolded: {1}.",
);

pub static FOREIGN_KEY_NAME_EMPTY: EventDefinition<Scaffolding, 1> = EventDefinition::new(
    EventId::new(25012, "Scaffolding.ForeignKeyNotNamedWarning"),
    LogLevel::Warning,
    "Found a foreign key on table {0} with an empty or null name. Skipping foreign key.",
);

pub static FOREIGN_KEY_COLUMN_NOT_IN_SELECTION_SET: EventDefinition<Scaffolding, 3> = EventDefinition::new(
    EventId::new(25013, "Scaffolding.ForeignKeyColumnMissingWarning"),
    LogLevel::Warning,
    "Foreign key column {0} belongs to foreign key {1} on table {2} which is not included in the selection set. Skipping.",
);

pub static FOREIGN_KEY_PRINCIPAL_TABLE_NOT_FOUND: EventDefinition<Scaffolding, 1> = EventDefinition::new(
    EventId::new(25014, "Scaffolding.ForeignKeyReferencesMissingTableWarning"),
    LogLevel::Warning,
    "Could not find the principal table for foreign key {0}. Skipping foreign key.",
);

pub static PRINCIPAL_TABLE_NOT_IN_SELECTION_SET: EventDefinition<Scaffolding, 3> = EventDefinition::new(
    EventId::new(25015, "Scaffolding.ForeignKeyReferencesMissingPrincipalTableWarning"),
    LogLevel::Warning,
    "For foreign key {0} on table {1}, unable to model the end of the foreign key on principal table {2}. This is usually because the principal table was not included in the selection set.",
);

pub static PRINCIPAL_COLUMN_NOT_FOUND: EventDefinition<Scaffolding, 4> = EventDefinition::new(
    EventId::new(25016, "Scaffolding.ForeignKeyPrincipalColumnMissingWarning"),
    LogLevel::Warning,
    "For foreign key {0} on table {1}, unable to find the column called {2} on the foreign key's principal table, {3}. Skipping foreign key.",
);

pub static COLUMN_NAME_EMPTY_ON_FOREIGN_KEY: EventDefinition<Scaffolding, 2> = EventDefinition::new(
    EventId::new(25017, "Scaffolding.ForeignKeyColumnNotNamedWarning"),
    LogLevel::Warning,
    "Found a column on foreign key {0}.{1} with an empty or null name. Not including column in foreign key.",
);

pub static FOREIGN_KEY_COLUMNS_NOT_MAPPED: EventDefinition<Scaffolding, 2> = EventDefinition::new(
    EventId::new(25018, "Scaffolding.ForeignKeyColumnsNotMappedWarning"),
    LogLevel::Warning,
    "Could not scaffold the foreign key '{0}'. The following columns in the foreign key could not be scaffolded: {1}.",
);

pub static FOUND_SEQUENCE: EventDefinition<Scaffolding, 7> = EventDefinition::new(
    EventId::new(25019, "Scaffolding.SequenceFound"),
    LogLevel::Debug,
    "Found sequence name: {0}, data type: {1}, cyclic: {2}, increment: {3}, start: {4}, minimum: {5}, maximum: {6}.",
);

pub static SEQUENCES_REQUIRE_NAME: EventDefinition<Scaffolding, 0> = EventDefinition::new(
    EventId::new(25020, "Scaffolding.SequenceNotNamedWarning"),
    LogLevel::Warning,
    "Sequence name cannot be null or empty. A sequence without a name cannot be modeled.",
);

pub static MISSING_SCHEMA: EventDefinition<Scaffolding, 1> = EventDefinition::new(
    EventId::new(25100, "Scaffolding.MissingSchemaWarning"),
    LogLevel::Warning,
    "Unable to find a schema in the database matching the selected schema {0}.",
);

pub static BAD_SEQUENCE_TYPE: EventDefinition<Scaffolding, 2> = EventDefinition::new(
    EventId::new(25101, "Scaffolding.SequenceTypeNotSupportedWarning"),
    LogLevel::Warning,
    "For sequence '{0}'. Unable to scaffold because it uses an unsupported type: '{1}'.",
);

pub static UNABLE_TO_GENERATE_ENTITY_TYPE: EventDefinition<Scaffolding, 1> = EventDefinition::new(
    EventId::new(25102, "Scaffolding.UnableToGenerateEntityTypeWarning"),
    LogLevel::Warning,
    "Unable to generate entity type for table '{0}'.",
);

pub static CANNOT_FIND_TYPE_MAPPING_FOR_COLUMN: EventDefinition<Scaffolding, 2> = EventDefinition::new(
    EventId::new(25103, "Scaffolding.ColumnTypeNotMappedWarning"),
    LogLevel::Warning,
    "Could not find type mapping for column '{0}' with data type '{1}'. Skipping column.",
);

pub static MISSING_PRIMARY_KEY: EventDefinition<Scaffolding, 1> = EventDefinition::new(
    EventId::new(25104, "Scaffolding.MissingPrimaryKeyWarning"),
    LogLevel::Warning,
    "Unable to identify the primary key for table '{0}'.",
);

pub static PRIMARY_KEY_COLUMNS_NOT_MAPPED: EventDefinition<Scaffolding, 2> = EventDefinition::new(
    EventId::new(25105, "Scaffolding.PrimaryKeyColumnsNotMappedWarning"),
    LogLevel::Warning,
    "Unable to identify the primary key for table '{0}'. The following columns in the primary key could not be scaffolded: {1}.",
);

pub static FOREIGN_KEY_REFERENCES_NOT_MAPPED_TABLE: EventDefinition<Scaffolding, 2> = EventDefinition::new(
    EventId::new(25106, "Scaffolding.ForeignKeyReferencesNotMappedTableWarning"),
    LogLevel::Warning,
    "Could not scaffold the foreign key '{0}'. The referenced table '{1}' could not be scaffolded.",
);

pub static FOREIGN_KEY_PRINCIPAL_KEY_NOT_FOUND: EventDefinition<Scaffolding, 3> = EventDefinition::new(
    EventId::new(25107, "Scaffolding.ForeignKeyReferencesMissingPrincipalKeyWarning"),
    LogLevel::Warning,
    "Could not scaffold the foreign key '{0}'. A key for '{1}' was not found in the principal entity type '{2}'.",
);

pub static FOREIGN_KEY_PRINCIPAL_END_CONTAINS_NULLABLE_COLUMNS: EventDefinition<Scaffolding, 3> =
    EventDefinition::new(
        EventId::new(25108, "Scaffolding.ForeignKeyPrincipalEndContainsNullableColumnsWarning"),
        LogLevel::Warning,
        "The principal end of the foreign key '{0}' is supported by the unique index '{1}' and contains the following nullable columns '{2}'. Nullable principal key columns are not supported, so the foreign key will not be scaffolded.",
    );

pub(super) fn definitions() -> Vec<&'static dyn EventDescriptor> {
    vec![
        &FOUND_TABLE,
        &TABLE_NOT_IN_SELECTION_SET,
        &COLUMN_NOT_IN_SELECTION_SET,
        &COLUMN_NAME_EMPTY_ON_TABLE,
        &MISSING_TABLE,
        &FOUND_INDEX,
        &FOUND_INDEX_COLUMN,
        &INDEX_COLUMN_NOT_IN_SELECTION_SET,
        &COLUMN_NAME_EMPTY_ON_INDEX,
        &INDEX_NAME_EMPTY,
        &UNABLE_TO_FIND_TABLE_FOR_INDEX,
        &INDEX_COLUMNS_NOT_MAPPED,
        &FOREIGN_KEY_NAME_EMPTY,
        &FOREIGN_KEY_COLUMN_NOT_IN_SELECTION_SET,
        &FOREIGN_KEY_PRINCIPAL_TABLE_NOT_FOUND,
        &PRINCIPAL_TABLE_NOT_IN_SELECTION_SET,
        &PRINCIPAL_COLUMN_NOT_FOUND,
        &COLUMN_NAME_EMPTY_ON_FOREIGN_KEY,
        &FOREIGN_KEY_COLUMNS_NOT_MAPPED,
        &FOUND_SEQUENCE,
        &SEQUENCES_REQUIRE_NAME,
        &MISSING_SCHEMA,
        &BAD_SEQUENCE_TYPE,
        &UNABLE_TO_GENERATE_ENTITY_TYPE,
        &CANNOT_FIND_TYPE_MAPPING_FOR_COLUMN,
        &MISSING_PRIMARY_KEY,
        &PRIMARY_KEY_COLUMNS_NOT_MAPPED,
        &FOREIGN_KEY_REFERENCES_NOT_MAPPED_TABLE,
        &FOREIGN_KEY_PRINCIPAL_KEY_NOT_FOUND,
        &FOREIGN_KEY_PRINCIPAL_END_CONTAINS_NULLABLE_COLUMNS,
    ]
}
