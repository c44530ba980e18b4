// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Small fixed-shape records for reverse-engineering notices. Events with
//! the same fields share a record type.

use crate::domain::DatabaseSequence;
use crate::payloads::base::EventBase;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SchemaPayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub schema: &'a str,
}

#[derive(Debug, Serialize)]
pub struct TablePayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub table: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ColumnPayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub table: &'a str,
    pub column: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ColumnTypePayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub column: &'a str,
    pub data_type: &'a str,
}

#[derive(Debug, Serialize)]
pub struct IndexPayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub index: &'a str,
    pub table: &'a str,
}

#[derive(Debug, Serialize)]
pub struct IndexFoundPayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub index: &'a str,
    pub table: &'a str,
    pub is_unique: bool,
}

#[derive(Debug, Serialize)]
pub struct IndexColumnPayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub index: &'a str,
    pub table: &'a str,
    pub column: &'a str,
}

#[derive(Debug, Serialize)]
pub struct IndexColumnFoundPayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub index: &'a str,
    pub table: &'a str,
    pub column: &'a str,
    pub ordinal: i32,
}

/// A key, index or foreign key some of whose columns could not be mapped.
#[derive(Debug, Serialize)]
pub struct UnmappedColumnsPayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub name: &'a str,
    pub unmapped_columns: &'a [String],
}

#[derive(Debug, Serialize)]
pub struct ForeignKeyPayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub foreign_key: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ForeignKeyTablePayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub foreign_key: &'a str,
    pub table: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ForeignKeyColumnPayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub foreign_key: &'a str,
    pub table: &'a str,
    pub column: &'a str,
}

#[derive(Debug, Serialize)]
pub struct PrincipalTablePayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub foreign_key: &'a str,
    pub table: &'a str,
    pub principal_table: &'a str,
}

#[derive(Debug, Serialize)]
pub struct PrincipalColumnPayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub foreign_key: &'a str,
    pub table: &'a str,
    pub principal_column: &'a str,
    pub principal_table: &'a str,
}

#[derive(Debug, Serialize)]
pub struct PrincipalKeyPayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub foreign_key: &'a str,
    pub principal_columns: &'a [String],
    pub principal_entity_type: &'a str,
}

#[derive(Debug, Serialize)]
pub struct NullablePrincipalColumnsPayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub foreign_key: &'a str,
    pub unique_index: &'a str,
    pub nullable_columns: &'a [String],
}

#[derive(Debug, Serialize)]
pub struct SequencePayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub sequence: &'a DatabaseSequence,
}

#[derive(Debug, Serialize)]
pub struct SequenceTypePayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub sequence: &'a str,
    pub data_type: &'a str,
}
