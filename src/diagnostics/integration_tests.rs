// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::backends::{DiagnosticListener, RecordingLeveledSink, RecordingStructuredSink};
use crate::catalog::definitions::scaffolding::FOUND_TABLE;
use crate::catalog::definitions::{connection, query, sql, update};
use crate::catalog::{
    self, Category, DatabaseConnection, DatabaseSql, DatabaseTransaction, EventDescriptor, LogLevel,
    Migrations, Query, Scaffolding, Update,
};
use crate::diagnostics::{Diagnostics, ScriptRange};
use crate::domain::{
    DatabaseSequence, DbCommand, DbCommandMethod, DbTransaction, Expression, IsolationLevel,
    Migration, MigratorInfo, QueryModel, RelationalConnection,
};
use crate::errors::{DiagnosticsError, SinkError};
use crate::payloads::{EventPayload, LazyMessage};
use crate::policy::{WarningBehavior, WarningRule, WarningsPolicy};
use crate::traits::{LeveledSink, LogRecord};
use chrono::Utc;
use std::cell::Cell;
use std::sync::{Arc, Mutex};
use std::time::Duration;

struct Harness {
    text: Arc<RecordingLeveledSink>,
    structured: Arc<RecordingStructuredSink>,
    diagnostics: Diagnostics,
}

fn harness(text: RecordingLeveledSink, structured: RecordingStructuredSink, policy: WarningsPolicy) -> Harness {
    let text = Arc::new(text);
    let structured = Arc::new(structured);
    let diagnostics = Diagnostics::builder()
        .leveled_sink(text.clone())
        .structured_sink(structured.clone())
        .policy(policy)
        .build();
    Harness {
        text,
        structured,
        diagnostics,
    }
}

fn northwind() -> RelationalConnection {
    RelationalConnection::new("Northwind", "(localdb)\\mssqllocaldb")
}

/// Leveled sink that is always enabled and always fails.
struct FailingLeveledSink;

impl LeveledSink for FailingLeveledSink {
    fn is_enabled(&self, _category: Category, _level: LogLevel) -> bool {
        true
    }

    fn write(&self, record: &LogRecord<'_>) -> Result<(), SinkError> {
        Err(SinkError::Rejected {
            event_name: record.event_id.name().to_string(),
            reason: "disk full".to_string(),
        })
    }
}

#[test]
fn scenario_a_structured_only_command_executing() {
    let h = harness(
        RecordingLeveledSink::disabled(),
        RecordingStructuredSink::all(),
        WarningsPolicy::default(),
    );
    let connection = northwind();
    let command = DbCommand::new("SELECT [o].[Id] FROM [Orders] AS [o]  \n");
    let start_time = Utc::now();

    h.diagnostics
        .for_category::<DatabaseSql>()
        .command_executing(&command, &connection, DbCommandMethod::ExecuteReader, start_time)
        .unwrap();

    assert!(h.text.records().is_empty());
    let events = h.structured.events();
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.event_name, "Database.Sql.CommandExecuting");
    assert_eq!(event.kind, "Command");
    assert_eq!(event.data["command"]["text"], command.text.as_str());
    assert_eq!(event.data["command"]["command_id"], command.command_id.to_string());
    assert_eq!(event.data["connection_id"], connection.connection_id.to_string());
    assert_eq!(event.data["execute_method"], "ExecuteReader");
    assert!(event.data["start_time"].is_string());
    assert_eq!(event.message, None);
}

#[test]
fn scenario_b_connection_error_escalates_before_any_sink() {
    let policy = WarningsPolicy::builder()
        .category(Category::DatabaseConnection, WarningRule::throw())
        .build();
    let h = harness(
        RecordingLeveledSink::new(LogLevel::Trace),
        RecordingStructuredSink::all(),
        policy,
    );
    let connection = northwind();
    let error = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "connection reset");

    let result = h
        .diagnostics
        .for_category::<DatabaseConnection>()
        .connection_error(&connection, &error, Utc::now(), Duration::from_millis(3));

    let error = result.unwrap_err();
    assert_eq!(
        error.message(),
        Some("An error occurred using the connection to database 'Northwind' on server '(localdb)\\mssqllocaldb'.")
    );
    assert_eq!(error.event_id(), Some(connection::CONNECTION_ERROR.event_id()));
    assert!(error.to_string().contains("Database.Connection.ConnectionError"));
    assert_eq!(h.text.enabled_checks(), 0);
    assert_eq!(h.structured.enabled_checks(), 0);
    assert!(h.text.records().is_empty());
    assert!(h.structured.events().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn scenario_c_concurrent_table_found_keeps_payloads_separate() {
    let h = harness(
        RecordingLeveledSink::new(LogLevel::Debug),
        RecordingStructuredSink::all().capturing_messages(),
        WarningsPolicy::default(),
    );

    let mut handles = Vec::new();
    for round in 0..50 {
        for table in ["Orders", "Customers"] {
            let logger = h.diagnostics.for_category::<Scaffolding>();
            let table = format!("{table}{round}");
            handles.push(tokio::spawn(async move { logger.table_found(&table) }));
        }
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let events = h.structured.events();
    assert_eq!(events.len(), 100);
    for event in &events {
        let table = event.data["table"].as_str().unwrap();
        assert_eq!(
            event.message.as_deref(),
            Some(format!("Found table with name: {table}.").as_str())
        );
    }
    let texts = h.text.records();
    assert_eq!(texts.len(), 100);
    assert!(texts.iter().any(|record| record.message == "Found table with name: Orders7."));
    assert!(texts.iter().any(|record| record.message == "Found table with name: Customers42."));
}

#[test]
fn scenario_d_discovery_notice_never_throws_under_warnings_as_errors() {
    let h = harness(
        RecordingLeveledSink::new(LogLevel::Debug),
        RecordingStructuredSink::disabled(),
        WarningsPolicy::builder().warnings_as_errors().build(),
    );
    let logger = h.diagnostics.for_category::<Scaffolding>();
    let sequence = DatabaseSequence::new("OrderNumbers", "bigint").with_bounds(Some(1), None);

    logger.sequence_found(&sequence).unwrap();
    logger.table_found("Orders").unwrap();

    let records = h.text.records();
    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0].message,
        "Found sequence name: OrderNumbers, data type: bigint, cyclic: false, increment: 1, start: 1, minimum: 1, maximum: ."
    );

    // a warning in the same category does escalate
    let error = logger.missing_table_warning("Invoices").unwrap_err();
    assert!(matches!(error, DiagnosticsError::WarningAsError { .. }));
}

#[test]
fn ignore_touches_neither_sink_and_never_renders() {
    let policy = WarningsPolicy::builder()
        .event(&FOUND_TABLE, WarningRule::ignore())
        .build();
    let h = harness(
        RecordingLeveledSink::new(LogLevel::Trace),
        RecordingStructuredSink::all(),
        policy,
    );
    let render = || -> String { panic!("ignored events must not render") };
    let message = LazyMessage::new(&render);

    h.diagnostics
        .for_category::<Scaffolding>()
        .dispatch(&FOUND_TABLE, &message, None, |_| panic!("ignored events must not build payloads"))
        .unwrap();

    assert!(!message.is_rendered());
    assert_eq!(h.text.enabled_checks(), 0);
    assert_eq!(h.structured.enabled_checks(), 0);
}

#[test]
fn disabled_leveled_sink_skips_rendering_but_payload_can_render() {
    let listener = Arc::new(DiagnosticListener::new("test"));
    let rendered = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&rendered);
    listener
        .subscribe(Some("Query"), move |_: &str, payload: &EventPayload<'_>| {
            assert!(!payload.base().is_message_rendered());
            seen.lock().unwrap().push(payload.message().to_string());
        })
        .unwrap();

    let text = Arc::new(RecordingLeveledSink::disabled());
    let diagnostics = Diagnostics::builder()
        .leveled_sink(text.clone())
        .structured_sink(listener)
        .build();

    let expression = Expression::new("o => o.Total.ToString() == \"100\"");
    diagnostics
        .for_category::<Query>()
        .client_evaluation_warning(&expression)
        .unwrap();

    assert_eq!(text.enabled_checks(), 1);
    assert!(text.records().is_empty());
    assert_eq!(
        *rendered.lock().unwrap(),
        vec![query::CLIENT_EVALUATION.generate_message([&expression])]
    );
}

#[test]
fn escalated_message_equals_logged_message() {
    let connection = northwind();
    let command = DbCommand::new("DELETE FROM [Orders] WHERE [Id] = @p0").with_parameter("@p0", Some("7"));
    let error = std::io::Error::new(std::io::ErrorKind::Other, "deadlock victim");
    let start_time = Utc::now();
    let duration = Duration::from_millis(1500);

    let logged = harness(
        RecordingLeveledSink::new(LogLevel::Trace),
        RecordingStructuredSink::disabled(),
        WarningsPolicy::default(),
    );
    logged
        .diagnostics
        .for_category::<DatabaseSql>()
        .command_error(&command, &connection, DbCommandMethod::ExecuteNonQuery, &error, start_time, duration)
        .unwrap();

    let thrown = harness(
        RecordingLeveledSink::new(LogLevel::Trace),
        RecordingStructuredSink::all(),
        WarningsPolicy::builder().event(&sql::COMMAND_FAILED, WarningRule::throw()).build(),
    );
    let error = thrown
        .diagnostics
        .for_category::<DatabaseSql>()
        .command_error(&command, &connection, DbCommandMethod::ExecuteNonQuery, &error, start_time, duration)
        .unwrap_err();

    let records = logged.text.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].exception.as_deref(), Some("deadlock victim"));
    assert_eq!(error.message(), Some(records[0].message.as_str()));
    assert!(records[0].message.starts_with("Failed executing command (1,500ms) [Parameters=[@p0='?']"));
}

#[test]
fn message_renders_once_per_dispatch_across_both_channels() {
    let h = harness(
        RecordingLeveledSink::new(LogLevel::Trace),
        RecordingStructuredSink::all().capturing_messages(),
        WarningsPolicy::default(),
    );
    let calls = Cell::new(0);
    let render = || {
        calls.set(calls.get() + 1);
        FOUND_TABLE.generate_message([&"Orders"])
    };
    let message = LazyMessage::new(&render);

    h.diagnostics
        .for_category::<Scaffolding>()
        .dispatch(&FOUND_TABLE, &message, None, |base| {
            crate::payloads::scaffolding::TablePayload { base, table: "Orders" }.into()
        })
        .unwrap();

    assert_eq!(calls.get(), 1);
    assert_eq!(h.text.records()[0].message, h.structured.events()[0].message.clone().unwrap());
}

#[test]
fn both_channels_see_one_write_with_the_same_event_id() {
    let h = harness(
        RecordingLeveledSink::new(LogLevel::Debug),
        RecordingStructuredSink::all(),
        WarningsPolicy::default(),
    );
    let connection = northwind();
    let transaction = DbTransaction::new(IsolationLevel::ReadCommitted);

    h.diagnostics
        .for_category::<DatabaseTransaction>()
        .transaction_started(&connection, &transaction, Utc::now())
        .unwrap();

    let records = h.text.records();
    let events = h.structured.events();
    assert_eq!(records.len(), 1);
    assert_eq!(events.len(), 1);
    assert_eq!(records[0].event_id, events[0].event_id);
    assert_eq!(records[0].event_id.name(), events[0].event_name);
    assert_eq!(records[0].category, Category::DatabaseTransaction);
    assert_eq!(records[0].message, "Beginning transaction with isolation level 'ReadCommitted'.");
    assert_eq!(events[0].data["transaction"]["transaction_id"], transaction.transaction_id.to_string());
}

#[test]
fn leveled_threshold_is_applied_to_the_effective_level() {
    let policy = WarningsPolicy::builder()
        .event(&sql::EXECUTING_COMMAND, WarningRule::at_level(LogLevel::Warning))
        .build();
    let h = harness(
        RecordingLeveledSink::new(LogLevel::Warning),
        RecordingStructuredSink::disabled(),
        policy,
    );
    let connection = northwind();
    let command = DbCommand::new("SELECT 1");
    let logger = h.diagnostics.for_category::<DatabaseSql>();

    logger
        .command_executing(&command, &connection, DbCommandMethod::ExecuteScalar, Utc::now())
        .unwrap();
    logger
        .command_executed(&command, &connection, DbCommandMethod::ExecuteScalar, Utc::now(), Duration::from_millis(2))
        .unwrap();

    let records = h.text.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, LogLevel::Warning);
    assert_eq!(records[0].event_id, sql::EXECUTING_COMMAND.event_id());
}

#[test]
fn parameter_values_follow_sensitive_data_logging() {
    let command = DbCommand::new("SELECT * FROM [Orders] WHERE [Id] = @p0 AND [Note] = @p1\n")
        .with_parameter("@p0", Some("42"))
        .with_parameter("@p1", None::<&str>);
    let connection = northwind();

    for (sensitive, expected) in [(false, "@p0='?', @p1='?'"), (true, "@p0='42', @p1=NULL")] {
        let text = Arc::new(RecordingLeveledSink::new(LogLevel::Trace));
        let structured = Arc::new(RecordingStructuredSink::all());
        let diagnostics = Diagnostics::builder()
            .leveled_sink(text.clone())
            .structured_sink(structured.clone())
            .sensitive_data_logging(sensitive)
            .build();

        diagnostics
            .for_category::<DatabaseSql>()
            .command_executing(&command, &connection, DbCommandMethod::ExecuteReader, Utc::now())
            .unwrap();

        assert_eq!(
            text.records()[0].message,
            format!(
                "Executing command [Parameters=[{expected}], CommandType='Text', CommandTimeout='30']\nSELECT * FROM [Orders] WHERE [Id] = @p0 AND [Note] = @p1"
            )
        );
        let data = &structured.events()[0].data;
        assert_eq!(data["parameters"]["@p0"], if sensitive { "42" } else { "?" });
    }
}

#[test]
fn sink_failure_surfaces_after_both_channels_run() {
    let structured = Arc::new(RecordingStructuredSink::all());
    let diagnostics = Diagnostics::builder()
        .leveled_sink(Arc::new(FailingLeveledSink))
        .structured_sink(structured.clone())
        .build();

    let error = diagnostics
        .for_category::<Migrations>()
        .migration_applying(&MigratorInfo::new("ShopContext"), &Migration::new("20240301_AddOrders"))
        .unwrap_err();

    assert!(matches!(
        error,
        DiagnosticsError::Sink(SinkError::Rejected { ref event_name, .. }) if event_name == "Migrations.MigrationApplying"
    ));
    assert_eq!(structured.events().len(), 1);
}

#[test]
fn structured_subscription_filters_by_event_name() {
    let h = harness(
        RecordingLeveledSink::disabled(),
        RecordingStructuredSink::subscribed(&["Migrations"]),
        WarningsPolicy::default(),
    );
    let migrator = MigratorInfo::new("ShopContext");
    let migration = Migration::new("20240301_AddOrders");

    h.diagnostics
        .for_category::<Migrations>()
        .migration_generating_up_script(
            &migrator,
            &migration,
            ScriptRange {
                from_migration: None,
                to_migration: Some("20240301_AddOrders"),
                idempotent: true,
            },
        )
        .unwrap();
    h.diagnostics.for_category::<Scaffolding>().table_found("Orders").unwrap();

    let events = h.structured.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_name, "Migrations.MigrationGeneratingUpScript");
    assert_eq!(events[0].data["idempotent"], true);
    assert_eq!(events[0].data["migration"]["id"], "20240301_AddOrders");
}

#[test]
fn query_warnings_quote_a_truncated_single_line_model() {
    let h = harness(
        RecordingLeveledSink::new(LogLevel::Warning),
        RecordingStructuredSink::disabled(),
        WarningsPolicy::default(),
    );
    let long_query = format!("from Order o in DbSet<Order>\n    where {}\n    select o", "o.Id > 0 && ".repeat(20));
    let model = QueryModel::new(long_query);

    h.diagnostics
        .for_category::<Query>()
        .row_limiting_operation_without_order_by_warning(&model)
        .unwrap();

    let message = &h.text.records()[0].message;
    let quoted = model.print(true, Some(QueryModel::INLINE_CHARACTER_LIMIT));
    assert!(message.contains(&quoted));
    assert!(quoted.ends_with("..."));
    assert!(!quoted.contains('\n'));
}

#[test]
fn default_ignore_behavior_spares_non_escalatable_events() {
    let h = harness(
        RecordingLeveledSink::new(LogLevel::Trace),
        RecordingStructuredSink::disabled(),
        WarningsPolicy::builder()
            .default_behavior(WarningBehavior::Ignore)
            .build(),
    );
    let connection = northwind();
    let logger = h.diagnostics.for_category::<DatabaseConnection>();

    logger.connection_opening(&connection, Utc::now()).unwrap();
    logger
        .connection_error(&connection, &std::fmt::Error, Utc::now(), Duration::ZERO)
        .unwrap();

    let records = h.text.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].event_id, connection::OPENING_CONNECTION.event_id());
}

#[test]
fn building_diagnostics_validates_the_catalog() {
    let diagnostics = Diagnostics::builder().build();

    assert!(catalog::is_initialized());
    assert!(std::ptr::eq(diagnostics.catalog(), catalog::catalog()));
    let table_found = diagnostics.catalog().by_id(FOUND_TABLE.event_id().id()).unwrap();
    assert_eq!(table_found.event_id(), FOUND_TABLE.event_id());
}

#[test]
fn duplicate_diet_instance_renders_the_same_text_on_both_channels() {
    let h = harness(
        RecordingLeveledSink::new(LogLevel::Warning),
        RecordingStructuredSink::all().capturing_messages(),
        WarningsPolicy::default(),
    );

    h.diagnostics
        .for_category::<Update>()
        .duplicate_diet_instance_warning("OrderDetails", "OrderShipping")
        .unwrap();

    let records = h.text.records();
    let events = h.structured.events();
    assert_eq!(records.len(), 1);
    assert_eq!(events.len(), 1);
    assert_eq!(records[0].category, Category::Update);
    assert_eq!(records[0].level, LogLevel::Warning);
    assert_eq!(
        records[0].message,
        update::DUPLICATE_DIET_INSTANCE.generate_message([&"OrderDetails", &"OrderShipping"])
    );
    assert_eq!(events[0].message.as_deref(), Some(records[0].message.as_str()));
    assert_eq!(events[0].event_name, "Update.DuplicateDietInstanceWarning");
    assert_eq!(events[0].kind, "DuplicateDietInstance");
    assert_eq!(events[0].data["diet1"], "OrderDetails");
    assert_eq!(events[0].data["diet2"], "OrderShipping");
}

#[test]
fn duplicate_diet_instance_escalates_under_warnings_as_errors() {
    assert!(update::DUPLICATE_DIET_INSTANCE.is_escalatable());
    let h = harness(
        RecordingLeveledSink::new(LogLevel::Trace),
        RecordingStructuredSink::all(),
        WarningsPolicy::builder().warnings_as_errors().build(),
    );

    let error = h
        .diagnostics
        .for_category::<Update>()
        .duplicate_diet_instance_warning("OrderDetails", "OrderShipping")
        .unwrap_err();

    assert_eq!(error.event_id(), Some(update::DUPLICATE_DIET_INSTANCE.event_id()));
    assert_eq!(
        error.message(),
        Some(update::DUPLICATE_DIET_INSTANCE.generate_message([&"OrderDetails", &"OrderShipping"]).as_str())
    );
    assert_eq!(h.text.enabled_checks(), 0);
    assert_eq!(h.structured.enabled_checks(), 0);
}
