// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum CommandType {
    #[default]
    Text,
    StoredProcedure,
    TableDirect,
}

impl Display for CommandType {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(match self {
            CommandType::Text => "Text",
            CommandType::StoredProcedure => "StoredProcedure",
            CommandType::TableDirect => "TableDirect",
        })
    }
}

/// How the command is being executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DbCommandMethod {
    ExecuteNonQuery,
    ExecuteScalar,
    ExecuteReader,
}

/// A named command parameter. `None` is a database NULL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbParameter {
    pub name: String,
    pub value: Option<String>,
}

impl DbParameter {
    pub fn new(name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            value: value.map(Into::into),
        }
    }
}

/// A command about to be, or just, sent to the database.
///
/// Parameter values are not serialized with the command; payloads expose
/// them separately so sensitive-data logging can mask them.
#[derive(Debug, Clone, Serialize)]
pub struct DbCommand {
    pub command_id: Uuid,
    pub text: String,
    pub command_type: CommandType,
    #[serde(rename = "timeout_secs", serialize_with = "serialize_secs")]
    pub timeout: Duration,
    #[serde(skip)]
    pub parameters: Vec<DbParameter>,
}

impl DbCommand {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(text: impl Into<String>) -> Self {
        Self {
            command_id: Uuid::new_v4(),
            text: text.into(),
            command_type: CommandType::Text,
            timeout: Self::DEFAULT_TIMEOUT,
            parameters: Vec::new(),
        }
    }

    pub fn with_type(mut self, command_type: CommandType) -> Self {
        self.command_type = command_type;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        self.parameters.push(DbParameter::new(name, value));
        self
    }
}

fn serialize_secs<S: serde::Serializer>(timeout: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(timeout.as_secs())
}

/// State of a data reader at the point it is disposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DbDataReader {
    pub records_affected: i64,
    pub read_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_parameters_in_order() {
        let command = DbCommand::new("SELECT 1")
            .with_parameter("@p0", Some("a"))
            .with_parameter("@p1", None::<String>)
            .with_timeout(Duration::from_secs(5));
        assert_eq!(command.parameters.len(), 2);
        assert_eq!(command.parameters[0].name, "@p0");
        assert_eq!(command.parameters[1].value, None);
        assert_eq!(command.timeout.as_secs(), 5);
    }

    #[test]
    fn serialized_command_omits_parameter_values() {
        let command = DbCommand::new("SELECT @p0").with_parameter("@p0", Some("secret"));
        let json = serde_json::to_string(&command).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("\"timeout_secs\":30"));
        assert!(json.contains("\"command_type\":\"Text\""));
    }
}
