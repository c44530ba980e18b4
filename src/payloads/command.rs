// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Payloads for command execution and data readers.

use crate::domain::{DbCommand, DbCommandMethod, DbDataReader, DbParameter, RelationalConnection};
use crate::payloads::base::{serialize_duration_ms, serialize_error, EventBase};
use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::error::Error;
use std::time::Duration;
use uuid::Uuid;

/// Parameter values as exported to structured consumers. Values are masked
/// unless sensitive-data logging is on.
#[derive(Debug, Clone, Copy)]
pub struct ParameterValues<'a> {
    pub parameters: &'a [DbParameter],
    pub log_values: bool,
}

impl Serialize for ParameterValues<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.parameters.len()))?;
        for parameter in self.parameters {
            let value = match (&parameter.value, self.log_values) {
                (value, true) => value.as_deref(),
                (_, false) => Some("?"),
            };
            map.serialize_entry(&parameter.name, &value)?;
        }
        map.end()
    }
}

/// A command about to execute.
#[derive(Debug, Serialize)]
pub struct CommandPayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub command: &'a DbCommand,
    pub parameters: ParameterValues<'a>,
    pub execute_method: DbCommandMethod,
    pub connection_id: Uuid,
    pub start_time: DateTime<Utc>,
}

/// A command that completed.
#[derive(Debug, Serialize)]
pub struct CommandExecutedPayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub command: &'a DbCommand,
    pub parameters: ParameterValues<'a>,
    pub execute_method: DbCommandMethod,
    pub connection_id: Uuid,
    pub start_time: DateTime<Utc>,
    #[serde(rename = "duration_ms", serialize_with = "serialize_duration_ms")]
    pub duration: Duration,
}

/// A command that failed.
#[derive(Debug, Serialize)]
pub struct CommandErrorPayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub command: &'a DbCommand,
    pub parameters: ParameterValues<'a>,
    pub execute_method: DbCommandMethod,
    pub connection_id: Uuid,
    pub start_time: DateTime<Utc>,
    #[serde(rename = "duration_ms", serialize_with = "serialize_duration_ms")]
    pub duration: Duration,
    #[serde(serialize_with = "serialize_error")]
    pub error: &'a (dyn Error + 'static),
}

#[derive(Debug, Serialize)]
pub struct DataReaderDisposingPayload<'a> {
    #[serde(skip)]
    pub base: EventBase<'a>,
    pub command_id: Uuid,
    pub connection: &'a RelationalConnection,
    pub data_reader: &'a DbDataReader,
    pub start_time: DateTime<Utc>,
    #[serde(rename = "duration_ms", serialize_with = "serialize_duration_ms")]
    pub duration: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masked_parameters_serialize_as_question_marks() {
        let parameters = vec![
            DbParameter::new("@p0", Some("42")),
            DbParameter::new("@p1", None::<&str>),
        ];
        let masked = ParameterValues { parameters: &parameters, log_values: false };
        let visible = ParameterValues { parameters: &parameters, log_values: true };
        assert_eq!(
            serde_json::to_value(masked).unwrap(),
            serde_json::json!({"@p0": "?", "@p1": "?"})
        );
        assert_eq!(
            serde_json::to_value(visible).unwrap(),
            serde_json::json!({"@p0": "42", "@p1": null})
        );
    }
}
