// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::SinkError;
use crate::payloads::EventPayload;
use crate::traits::{name_matches, StructuredSink};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;
use std::sync::Mutex;

/// Structured sink writing one JSON object per event.
///
/// ```json
/// {"timestamp":"...","event_id":25000,"event_name":"Scaffolding.TableFound",
///  "level":"debug","kind":"Table","message":"Found table with name: dbo.Orders.",
///  "payload":{"table":"dbo.Orders"}}
/// ```
///
/// `message` is only present when the sink was built with
/// [`JsonLinesSink::include_message`]; otherwise the template is never
/// rendered on this sink's behalf.
pub struct JsonLinesSink<W: Write + Send> {
    writer: Mutex<W>,
    subscriptions: Vec<String>,
    include_message: bool,
}

#[derive(Serialize)]
struct JsonLine<'p, 'a> {
    timestamp: DateTime<Utc>,
    event_id: u32,
    event_name: &'p str,
    level: crate::catalog::LogLevel,
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    payload: &'p EventPayload<'a>,
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            subscriptions: Vec::new(),
            include_message: false,
        }
    }

    /// Only accept events whose names fall under one of `prefixes`. An empty
    /// list accepts everything.
    pub fn subscribe<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subscriptions.extend(prefixes.into_iter().map(Into::into));
        self
    }

    pub fn include_message(mut self, include: bool) -> Self {
        self.include_message = include;
        self
    }

    pub fn into_inner(self) -> Result<W, SinkError> {
        self.writer
            .into_inner()
            .map_err(|error| SinkError::Poisoned(error.to_string()))
    }
}

impl<W: Write + Send> StructuredSink for JsonLinesSink<W> {
    fn is_enabled(&self, event_name: &str) -> bool {
        self.subscriptions.is_empty()
            || self
                .subscriptions
                .iter()
                .any(|prefix| name_matches(event_name, prefix))
    }

    fn write(&self, event_name: &str, payload: &EventPayload<'_>) -> Result<(), SinkError> {
        let line = JsonLine {
            timestamp: Utc::now(),
            event_id: payload.event_id().id(),
            event_name,
            level: payload.level(),
            kind: payload.kind(),
            message: self.include_message.then(|| payload.message()),
            payload,
        };
        let mut writer = self
            .writer
            .lock()
            .map_err(|error| SinkError::Poisoned(error.to_string()))?;
        serde_json::to_writer(&mut *writer, &line)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::definitions::scaffolding::FOUND_TABLE;
    use crate::payloads::scaffolding::TablePayload;
    use crate::payloads::{EventBase, LazyMessage};

    fn write_table_found(sink: &JsonLinesSink<Vec<u8>>, table: &str) {
        let render = || FOUND_TABLE.generate_message([&table]);
        let message = LazyMessage::new(&render);
        let payload: EventPayload = TablePayload {
            base: EventBase::new(FOUND_TABLE.event_id(), FOUND_TABLE.level(), &message),
            table,
        }
        .into();
        sink.write(FOUND_TABLE.event_id().name(), &payload).unwrap();
    }

    #[test]
    fn writes_one_json_object_per_line() {
        let sink = JsonLinesSink::new(Vec::new()).include_message(true);
        write_table_found(&sink, "Orders");
        write_table_found(&sink, "Customers");

        let output = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["event_id"], 25000);
        assert_eq!(lines[0]["event_name"], "Scaffolding.TableFound");
        assert_eq!(lines[0]["level"], "debug");
        assert_eq!(lines[0]["kind"], "Table");
        assert_eq!(lines[0]["payload"]["table"], "Orders");
        assert_eq!(lines[1]["message"], "Found table with name: Customers.");
    }

    #[test]
    fn message_is_omitted_unless_requested() {
        let sink = JsonLinesSink::new(Vec::new());
        let render = || -> String { panic!("message must not be rendered") };
        let message = LazyMessage::new(&render);
        let payload: EventPayload = TablePayload {
            base: EventBase::new(FOUND_TABLE.event_id(), FOUND_TABLE.level(), &message),
            table: "Orders",
        }
        .into();
        sink.write("Scaffolding.TableFound", &payload).unwrap();

        let output = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        assert!(!output.contains("\"message\""));
    }

    #[test]
    fn subscriptions_filter_by_name_prefix() {
        let all = JsonLinesSink::new(Vec::new());
        assert!(all.is_enabled("Scaffolding.TableFound"));

        let database = JsonLinesSink::new(Vec::new()).subscribe(["Database", "Migrations"]);
        assert!(database.is_enabled("Database.Sql.CommandExecuting"));
        assert!(database.is_enabled("Migrations.MigrationApplying"));
        assert!(!database.is_enabled("Scaffolding.TableFound"));
    }
}
