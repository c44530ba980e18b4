// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Leveled sink backed by `tracing`.
//!
//! Each category maps to its own target (see [`Category::target`]) so
//! subscriber filters such as `bellwether::database::sql=debug` decide what
//! is enabled. `tracing` needs the target and level at compile time, hence
//! the match tables below.

use crate::catalog::{Category, LogLevel};
use crate::errors::SinkError;
use crate::traits::{LeveledSink, LogRecord};
use tracing::Level;

macro_rules! by_category {
    ($category:expr, $action:ident, $arg:expr) => {
        match $category {
            Category::Database => $action!("bellwether::database", $arg),
            Category::DatabaseSql => $action!("bellwether::database::sql", $arg),
            Category::DatabaseConnection => $action!("bellwether::database::connection", $arg),
            Category::DatabaseTransaction => $action!("bellwether::database::transaction", $arg),
            Category::DatabaseDataReader => $action!("bellwether::database::data_reader", $arg),
            Category::Migrations => $action!("bellwether::migrations", $arg),
            Category::Query => $action!("bellwether::query", $arg),
            Category::Model => $action!("bellwether::model", $arg),
            Category::ModelValidation => $action!("bellwether::model::validation", $arg),
            Category::Scaffolding => $action!("bellwether::scaffolding", $arg),
            Category::Infrastructure => $action!("bellwether::infrastructure", $arg),
            Category::Update => $action!("bellwether::update", $arg),
        }
    };
}

macro_rules! enabled_at {
    ($target:literal, $level:expr) => {
        match $level {
            LogLevel::Trace => tracing::enabled!(target: $target, Level::TRACE),
            LogLevel::Debug => tracing::enabled!(target: $target, Level::DEBUG),
            LogLevel::Information => tracing::enabled!(target: $target, Level::INFO),
            LogLevel::Warning => tracing::enabled!(target: $target, Level::WARN),
            LogLevel::Error | LogLevel::Critical => tracing::enabled!(target: $target, Level::ERROR),
        }
    };
}

macro_rules! emit_at {
    ($target:literal, $record:expr) => {{
        let record: &LogRecord<'_> = $record;
        let event_id = record.event_id.id();
        let event_name = record.event_id.name();
        let exception = record.exception.map(tracing::field::display);
        match record.level {
            LogLevel::Trace => tracing::event!(target: $target, Level::TRACE, event_id, event_name, exception, "{}", record.message),
            LogLevel::Debug => tracing::event!(target: $target, Level::DEBUG, event_id, event_name, exception, "{}", record.message),
            LogLevel::Information => tracing::event!(target: $target, Level::INFO, event_id, event_name, exception, "{}", record.message),
            LogLevel::Warning => tracing::event!(target: $target, Level::WARN, event_id, event_name, exception, "{}", record.message),
            LogLevel::Error => tracing::event!(target: $target, Level::ERROR, event_id, event_name, exception, "{}", record.message),
            LogLevel::Critical => tracing::event!(target: $target, Level::ERROR, event_id, event_name, exception, critical = true, "{}", record.message),
        }
    }};
}

/// Forwards text events to the current `tracing` subscriber.
///
/// `Critical` has no `tracing` equivalent and is emitted at `ERROR` with a
/// `critical = true` field.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl LeveledSink for TracingSink {
    fn is_enabled(&self, category: Category, level: LogLevel) -> bool {
        by_category!(category, enabled_at, level)
    }

    fn write(&self, record: &LogRecord<'_>) -> Result<(), SinkError> {
        by_category!(record.category, emit_at, record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EventId;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::EnvFilter;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn subscriber(filter: &str, buffer: SharedBuffer) -> impl tracing::Subscriber + Send + Sync {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_writer(move || buffer.clone())
            .with_ansi(false)
            .finish()
    }

    #[test]
    fn targets_match_category_targets() {
        let buffer = SharedBuffer::default();
        let sink = TracingSink::new();
        tracing::subscriber::with_default(subscriber("trace", buffer.clone()), || {
            for category in Category::ALL {
                let record = LogRecord {
                    category,
                    level: LogLevel::Information,
                    event_id: EventId::new(1, "Test.Event"),
                    message: "hello",
                    exception: None,
                };
                sink.write(&record).unwrap();
            }
        });
        let output = buffer.contents();
        for category in Category::ALL {
            assert!(output.contains(category.target()), "missing target {}", category.target());
        }
    }

    #[test]
    fn enablement_follows_subscriber_filter() {
        let sink = TracingSink::new();
        let filter = "warn,bellwether::database::sql=debug";
        tracing::subscriber::with_default(subscriber(filter, SharedBuffer::default()), || {
            assert!(sink.is_enabled(Category::DatabaseSql, LogLevel::Debug));
            assert!(!sink.is_enabled(Category::DatabaseSql, LogLevel::Trace));
            assert!(!sink.is_enabled(Category::Scaffolding, LogLevel::Debug));
            assert!(sink.is_enabled(Category::Scaffolding, LogLevel::Warning));
            assert!(sink.is_enabled(Category::Query, LogLevel::Critical));
        });
    }

    #[test]
    fn write_includes_event_fields_and_exception() {
        let buffer = SharedBuffer::default();
        let sink = TracingSink::new();
        let error = std::io::Error::new(std::io::ErrorKind::Other, "socket closed");
        tracing::subscriber::with_default(subscriber("debug", buffer.clone()), || {
            sink.write(&LogRecord {
                category: Category::DatabaseConnection,
                level: LogLevel::Error,
                event_id: EventId::new(20004, "Database.Connection.ConnectionError"),
                message: "connection failed",
                exception: Some(&error),
            })
            .unwrap();
        });
        let output = buffer.contents();
        assert!(output.contains("ERROR"));
        assert!(output.contains("event_id=20004"));
        assert!(output.contains("event_name=\"Database.Connection.ConnectionError\""));
        assert!(output.contains("exception=socket closed"));
        assert!(output.contains("connection failed"));
    }
}
