// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::Context;
use chrono::Utc;
use std::env;
use std::sync::Arc;
use std::time::{Duration, Instant};
use the_bellwether::backends::{JsonLinesSink, TracingSink};
use the_bellwether::catalog::{
    DatabaseConnection, DatabaseDataReader, DatabaseSql, DatabaseTransaction, Infrastructure,
    Query, Scaffolding,
};
use the_bellwether::config::{load_and_validate_config, DiagnosticsConfig};
use the_bellwether::domain::{
    DatabaseSequence, DbCommand, DbCommandMethod, DbDataReader, DbTransaction, Expression,
    IsolationLevel, RelationalConnection,
};
use the_bellwether::policy::WarningsPolicy;
use the_bellwether::{Diagnostics, DiagnosticsError};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [diagnostics.yaml|diagnostics.toml]", args[0]);
        eprintln!("Example: {} configs/warnings-as-errors.yaml", args[0]);
        std::process::exit(1);
    }

    let config = match args.get(1) {
        Some(path) => load_and_validate_config(path).with_context(|| format!("loading {}", path))?,
        None => DiagnosticsConfig::default(),
    };

    // text channel to stderr, JSON lines to stdout
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let json = JsonLinesSink::new(std::io::stdout())
        .subscribe(config.structured.subscriptions.iter().cloned())
        .include_message(config.structured.include_message);
    let diagnostics = Diagnostics::builder()
        .leveled_sink(Arc::new(TracingSink::new()))
        .structured_sink(Arc::new(json))
        .configure(&config)?
        .build();

    eprintln!("🔔 Bellwether diagnostics demo");
    eprintln!("🛡️  Default warning behavior: {:?}", diagnostics.policy().default_behavior());
    eprintln!("🔒 Sensitive data logging: {}", diagnostics.sensitive_data_logging());
    eprintln!();

    if diagnostics.sensitive_data_logging() {
        report(
            "sensitive data warning",
            diagnostics
                .for_category::<Infrastructure>()
                .sensitive_data_logging_enabled_warning(),
        );
    }

    let started = Instant::now();
    let mut units = Vec::new();
    for (unit, order_id) in [(1, "1001"), (2, "1002"), (3, "1003")] {
        let diagnostics = diagnostics.clone();
        units.push(tokio::spawn(async move {
            (unit, run_unit_of_work(&diagnostics, order_id).await)
        }));
    }
    for handle in units {
        let (unit, result) = handle.await?;
        report(&format!("unit of work {}", unit), result);
    }
    eprintln!("⏱️  Units of work finished in {:?}", started.elapsed());

    report("scaffolding pass", scaffold(&diagnostics));

    let expression = Expression::new("o => o.Customer.Name.Normalize() == \"ACME\"");
    report(
        "query translation",
        diagnostics
            .for_category::<Query>()
            .client_evaluation_warning(&expression),
    );

    // same warning with warnings-as-errors switched on
    let strict = Diagnostics::builder()
        .leveled_sink(Arc::new(TracingSink::new()))
        .policy(WarningsPolicy::builder().warnings_as_errors().build())
        .build();
    report(
        "query translation (warnings as errors)",
        strict.for_category::<Query>().client_evaluation_warning(&expression),
    );

    Ok(())
}

fn report(what: &str, result: Result<(), DiagnosticsError>) {
    match result {
        Ok(()) => eprintln!("✅ {}", what),
        Err(error) => eprintln!("❌ {}: {}", what, error),
    }
}

/// Open, transact, query, commit, close.
async fn run_unit_of_work(diagnostics: &Diagnostics, order_id: &str) -> Result<(), DiagnosticsError> {
    let connections = diagnostics.for_category::<DatabaseConnection>();
    let transactions = diagnostics.for_category::<DatabaseTransaction>();
    let commands = diagnostics.for_category::<DatabaseSql>();
    let readers = diagnostics.for_category::<DatabaseDataReader>();

    let connection = RelationalConnection::new("Northwind", "(localdb)\\mssqllocaldb");
    let start_time = Utc::now();
    let opening = Instant::now();
    connections.connection_opening(&connection, start_time)?;
    tokio::time::sleep(Duration::from_millis(5)).await;
    connections.connection_opened(&connection, start_time, opening.elapsed())?;

    let transaction = DbTransaction::new(IsolationLevel::ReadCommitted);
    let transaction_start = Utc::now();
    let transaction_timer = Instant::now();
    transactions.transaction_started(&connection, &transaction, transaction_start)?;

    let command = DbCommand::new("SELECT [o].[Id], [o].[Total]\nFROM [Orders] AS [o]\nWHERE [o].[Id] = @p0")
        .with_parameter("@p0", Some(order_id));
    let command_start = Utc::now();
    let executing = Instant::now();
    commands.command_executing(&command, &connection, DbCommandMethod::ExecuteReader, command_start)?;
    tokio::time::sleep(Duration::from_millis(10)).await;
    commands.command_executed(
        &command,
        &connection,
        DbCommandMethod::ExecuteReader,
        command_start,
        executing.elapsed(),
    )?;

    let data_reader = DbDataReader {
        records_affected: -1,
        read_count: 1,
    };
    readers.data_reader_disposing(&connection, &command, &data_reader, command_start, executing.elapsed())?;

    transactions.transaction_committed(&connection, &transaction, transaction_start, transaction_timer.elapsed())?;
    transactions.transaction_disposed(&connection, &transaction, transaction_start)?;

    let closing = Instant::now();
    let close_start = Utc::now();
    connections.connection_closing(&connection, close_start)?;
    connections.connection_closed(&connection, close_start, closing.elapsed())?;
    Ok(())
}

fn scaffold(diagnostics: &Diagnostics) -> Result<(), DiagnosticsError> {
    let scaffolding = diagnostics.for_category::<Scaffolding>();
    for table in ["Orders", "Customers", "OrderLines"] {
        scaffolding.table_found(table)?;
    }
    scaffolding.index_found("IX_Orders_CustomerId", "Orders", false)?;
    scaffolding.sequence_found(&DatabaseSequence::new("OrderNumbers", "bigint").with_bounds(Some(1), None))?;
    scaffolding.column_type_not_mapped_warning("Orders.Location", "geography")?;
    Ok(())
}
