// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::catalog::definitions::{connection, infrastructure, query, scaffolding, sql};
use crate::catalog::LogLevel;
use crate::config::{load_and_validate_config, load_config, EventSelector};
use crate::errors::ConfigError;
use crate::policy::WarningBehavior;
use std::io::Write;

/// The development profile loads and its rules take effect.
#[test]
fn test_diagnostics_yaml_loading() {
    let config = load_and_validate_config("configs/diagnostics.yaml").unwrap();

    assert!(config.sensitive_data_logging);
    assert_eq!(config.warnings.default, WarningBehavior::Log);
    assert_eq!(config.warnings.rules.len(), 4);
    assert_eq!(config.warnings.rules[1].event, Some(EventSelector::Id(20100)));
    assert!(config.structured.include_message);
    assert_eq!(config.structured.subscriptions, vec!["Database", "Migrations"]);
    assert_eq!(config.logging.filter, "info,bellwether::database::sql=debug");

    let policy = config.warnings_policy().unwrap();
    assert_eq!(policy.resolve(&query::CLIENT_EVALUATION).behavior, WarningBehavior::Throw);
    assert_eq!(policy.resolve(&sql::EXECUTING_COMMAND).level, LogLevel::Information);
    assert_eq!(policy.resolve(&scaffolding::FOUND_TABLE).level, LogLevel::Trace);
    assert_eq!(policy.resolve(&connection::CONNECTION_ERROR).level, LogLevel::Debug);
}

#[test]
fn test_warnings_as_errors_yaml_loading() {
    let config = load_and_validate_config("configs/warnings-as-errors.yaml").unwrap();
    let policy = config.warnings_policy().unwrap();

    assert_eq!(policy.resolve(&query::IGNORED_INCLUDE).behavior, WarningBehavior::Throw);
    assert_eq!(policy.resolve(&connection::CONNECTION_ERROR).behavior, WarningBehavior::Throw);
    assert_eq!(
        policy.resolve(&infrastructure::SENSITIVE_DATA_LOGGING_ENABLED).behavior,
        WarningBehavior::Log
    );
    assert_eq!(
        policy.resolve(&infrastructure::MANY_SERVICE_PROVIDERS_CREATED).behavior,
        WarningBehavior::Ignore
    );
    // discovery notices are never escalated
    assert_eq!(policy.resolve(&scaffolding::FOUND_SEQUENCE).behavior, WarningBehavior::Log);
    assert_eq!(config.logging.filter, "warn");
}

#[test]
fn test_toml_loading_matches_yaml_semantics() {
    let config = load_and_validate_config("configs/diagnostics.toml").unwrap();

    assert!(!config.sensitive_data_logging);
    assert_eq!(config.warnings.rules.len(), 3);
    assert_eq!(config.warnings.rules[1].event, Some(EventSelector::Id(20101)));
    assert!(config.structured.subscriptions.is_empty());

    let policy = config.warnings_policy().unwrap();
    assert_eq!(policy.resolve(&connection::CONNECTION_ERROR).behavior, WarningBehavior::Throw);
    assert_eq!(policy.resolve(&sql::EXECUTED_COMMAND).level, LogLevel::Debug);
    assert_eq!(policy.resolve(&scaffolding::MISSING_TABLE).behavior, WarningBehavior::Ignore);
}

#[test]
fn test_invalid_rule_fails_validation_but_not_loading() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(file, "warnings:\n  rules:\n    - event: Query.DoesNotExist\n      behavior: throw").unwrap();

    assert!(load_config(file.path()).is_ok());
    let error = load_and_validate_config(file.path()).unwrap_err();
    assert!(matches!(error, ConfigError::UnknownEvent(name) if name == "Query.DoesNotExist"));
}

#[test]
fn test_unsupported_extension_is_rejected() {
    let file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    assert!(matches!(load_config(file.path()), Err(ConfigError::UnsupportedFormat(_))));
}

#[test]
fn test_missing_file_is_io_error() {
    assert!(matches!(load_config("configs/does-not-exist.yaml"), Err(ConfigError::Io(_))));
}

#[test]
fn test_malformed_toml_is_reported() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[warnings\ndefault = ").unwrap();
    assert!(matches!(load_config(file.path()), Err(ConfigError::Toml(_))));
}
