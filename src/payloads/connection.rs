// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Payloads for connection and transaction lifecycles.

use crate::domain::{DbTransaction, RelationalConnection};
use crate::payloads::base::{serialize_duration_ms, serialize_error, EventBase};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::error::Error;
use std::time::Duration;

/// Opening/closing a connection, or an ambient transaction seen on it.
#[derive(Debug, Serialize)]
pub struct ConnectionPayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub connection: &'a RelationalConnection,
    pub start_time: DateTime<Utc>,
}

/// Connection opened or closed.
#[derive(Debug, Serialize)]
pub struct ConnectionEndPayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub connection: &'a RelationalConnection,
    pub start_time: DateTime<Utc>,
    #[serde(rename = "duration_ms", serialize_with = "serialize_duration_ms")]
    pub duration: Duration,
}

#[derive(Debug, Serialize)]
pub struct ConnectionErrorPayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub connection: &'a RelationalConnection,
    pub start_time: DateTime<Utc>,
    #[serde(rename = "duration_ms", serialize_with = "serialize_duration_ms")]
    pub duration: Duration,
    #[serde(serialize_with = "serialize_error")]
    pub error: &'a (dyn Error + 'static),
}

/// Transaction started, used or disposed.
#[derive(Debug, Serialize)]
pub struct TransactionPayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub transaction: &'a DbTransaction,
    pub connection: &'a RelationalConnection,
    pub start_time: DateTime<Utc>,
}

/// Transaction committed or rolled back.
#[derive(Debug, Serialize)]
pub struct TransactionEndPayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub transaction: &'a DbTransaction,
    pub connection: &'a RelationalConnection,
    pub start_time: DateTime<Utc>,
    #[serde(rename = "duration_ms", serialize_with = "serialize_duration_ms")]
    pub duration: Duration,
}

#[derive(Debug, Serialize)]
pub struct TransactionErrorPayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub transaction: &'a DbTransaction,
    pub connection: &'a RelationalConnection,
    /// The operation that failed, e.g. `Commit`.
    pub action: &'a str,
    pub start_time: DateTime<Utc>,
    #[serde(rename = "duration_ms", serialize_with = "serialize_duration_ms")]
    pub duration: Duration,
    #[serde(serialize_with = "serialize_error")]
    pub error: &'a (dyn Error + 'static),
}
