// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::catalog::{catalog, Category, EventDescriptor, LogLevel};
use crate::config::consts::DEFAULT_LOG_FILTER;
use crate::errors::ConfigError;
use crate::observability::messages::config::ConfigurationLoaded;
use crate::observability::messages::StructuredLog;
use crate::policy::{WarningBehavior, WarningRule, WarningsPolicy};
use serde::Deserialize;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;

/// Complete diagnostics configuration.
///
/// Every section is optional; a missing section takes its defaults.
///
/// # Example
/// ```yaml
/// sensitive_data_logging: false
/// warnings:
///   default: log
///   rules:
///     - event: Database.Connection.ConnectionError
///       behavior: throw
///     - event: 20100
///       level: information
///     - category: Scaffolding
///       behavior: ignore
/// structured:
///   include_message: true
///   subscriptions: [Database, Migrations]
/// logging:
///   filter: "info,bellwether::database::sql=debug"
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiagnosticsConfig {
    /// Include parameter values in command messages.
    pub sensitive_data_logging: bool,
    pub warnings: WarningsConfig,
    pub structured: StructuredConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WarningsConfig {
    /// Behavior for escalatable events no rule covers.
    pub default: WarningBehavior,
    pub rules: Vec<RuleConfig>,
}

/// One warnings rule. Exactly one of `event` or `category` selects what it
/// applies to; `behavior` and `level` are each optional but not both absent.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleConfig {
    pub event: Option<EventSelector>,
    pub category: Option<String>,
    pub behavior: Option<WarningBehavior>,
    pub level: Option<LogLevel>,
}

/// An event referenced by numeric id or by stable name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum EventSelector {
    Id(u32),
    Name(String),
}

impl EventSelector {
    fn resolve(&self) -> Result<&'static dyn EventDescriptor, ConfigError> {
        let definition = match self {
            EventSelector::Id(id) => catalog().by_id(*id),
            EventSelector::Name(name) => catalog().by_name(name),
        };
        definition.ok_or_else(|| ConfigError::UnknownEvent(self.to_string()))
    }
}

impl Display for EventSelector {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            EventSelector::Id(id) => write!(f, "{}", id),
            EventSelector::Name(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StructuredConfig {
    /// Render each event's message into the JSON output.
    pub include_message: bool,
    /// Event-name prefixes to export; empty exports everything.
    pub subscriptions: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl DiagnosticsConfig {
    /// Build the warnings policy the rules describe.
    ///
    /// Fails on a rule that names an unknown event or category, names both
    /// or neither, or sets nothing.
    pub fn warnings_policy(&self) -> Result<WarningsPolicy, ConfigError> {
        let mut builder = WarningsPolicy::builder().default_behavior(self.warnings.default);

        for (index, rule) in self.warnings.rules.iter().enumerate() {
            let warning_rule = WarningRule {
                behavior: rule.behavior,
                level: rule.level,
            };
            if warning_rule.is_empty() {
                return Err(ConfigError::EmptyRule { index });
            }

            builder = match (&rule.event, &rule.category) {
                (Some(selector), None) => builder.event(selector.resolve()?, warning_rule),
                (None, Some(path)) => {
                    let category = path
                        .parse::<Category>()
                        .map_err(ConfigError::UnknownCategory)?;
                    builder.category(category, warning_rule)
                }
                _ => return Err(ConfigError::AmbiguousRule { index }),
            };
        }

        Ok(builder.build())
    }
}

/// Supported configuration file formats, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            Some("toml") => Ok(ConfigFormat::Toml),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigFormat::Yaml => "yaml",
            ConfigFormat::Toml => "toml",
        }
    }

    pub fn parse(&self, content: &str) -> Result<DiagnosticsConfig, ConfigError> {
        match self {
            ConfigFormat::Yaml => Ok(serde_yaml::from_str(content)?),
            ConfigFormat::Toml => Ok(toml::from_str(content)?),
        }
    }
}

/// Load a config from a YAML or TOML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<DiagnosticsConfig, ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    let config = format.parse(&content)?;

    ConfigurationLoaded {
        path: &path.display().to_string(),
        format: format.as_str(),
        rule_count: config.warnings.rules.len(),
    }
    .log();
    Ok(config)
}

/// Load a config and check that its warnings rules resolve.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<DiagnosticsConfig, ConfigError> {
    let config = load_config(path)?;
    config.warnings_policy()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::definitions::{connection, query, sql};

    #[test]
    fn parse_basic_config() {
        let yaml = r#"
sensitive_data_logging: true
warnings:
  default: throw
  rules:
    - event: Database.Connection.ConnectionError
      behavior: ignore
    - event: 20100
      level: information
"#;
        let config: DiagnosticsConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(config.sensitive_data_logging);
        assert_eq!(config.warnings.default, WarningBehavior::Throw);
        assert_eq!(config.warnings.rules.len(), 2);
        assert_eq!(
            config.warnings.rules[0].event,
            Some(EventSelector::Name("Database.Connection.ConnectionError".to_string()))
        );
        assert_eq!(config.warnings.rules[1].event, Some(EventSelector::Id(20100)));
        assert_eq!(config.logging.filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn empty_document_uses_defaults() {
        let config: DiagnosticsConfig = serde_yaml::from_str("{}").unwrap();
        assert!(!config.sensitive_data_logging);
        assert_eq!(config.warnings.default, WarningBehavior::Log);
        assert!(config.structured.subscriptions.is_empty());
    }

    #[test]
    fn rules_build_a_policy() {
        let yaml = r#"
warnings:
  default: throw
  rules:
    - event: Database.Connection.ConnectionError
      behavior: ignore
    - event: 20100
      level: information
    - category: Query
      behavior: log
"#;
        let config: DiagnosticsConfig = serde_yaml::from_str(yaml).unwrap();
        let policy = config.warnings_policy().unwrap();
        assert_eq!(policy.resolve(&connection::CONNECTION_ERROR).behavior, WarningBehavior::Ignore);
        assert_eq!(policy.resolve(&sql::EXECUTING_COMMAND).level, LogLevel::Information);
        assert_eq!(policy.resolve(&query::CLIENT_EVALUATION).behavior, WarningBehavior::Log);
        assert_eq!(policy.resolve(&sql::COMMAND_FAILED).behavior, WarningBehavior::Throw);
    }

    #[test]
    fn test_invalid_rules() {
        struct TestCase {
            name: &'static str,
            yaml: &'static str,
            check: fn(&ConfigError) -> bool,
        }

        let cases = vec![
            TestCase {
                name: "unknown event name",
                yaml: "warnings:\n  rules:\n    - event: Database.Nope\n      behavior: throw\n",
                check: |e| matches!(e, ConfigError::UnknownEvent(name) if name == "Database.Nope"),
            },
            TestCase {
                name: "unknown event id",
                yaml: "warnings:\n  rules:\n    - event: 1\n      behavior: throw\n",
                check: |e| matches!(e, ConfigError::UnknownEvent(name) if name == "1"),
            },
            TestCase {
                name: "unknown category",
                yaml: "warnings:\n  rules:\n    - category: Sql\n      behavior: ignore\n",
                check: |e| matches!(e, ConfigError::UnknownCategory(name) if name == "Sql"),
            },
            TestCase {
                name: "both selectors",
                yaml: "warnings:\n  rules:\n    - event: 20100\n      category: Query\n      behavior: ignore\n",
                check: |e| matches!(e, ConfigError::AmbiguousRule { index: 0 }),
            },
            TestCase {
                name: "no selector",
                yaml: "warnings:\n  rules:\n    - behavior: ignore\n",
                check: |e| matches!(e, ConfigError::AmbiguousRule { index: 0 }),
            },
            TestCase {
                name: "empty rule",
                yaml: "warnings:\n  rules:\n    - event: 20100\n",
                check: |e| matches!(e, ConfigError::EmptyRule { index: 0 }),
            },
        ];

        for case in cases {
            let config: DiagnosticsConfig = serde_yaml::from_str(case.yaml).unwrap();
            let error = config.warnings_policy().unwrap_err();
            assert!((case.check)(&error), "{}: unexpected error {:?}", case.name, error);
        }
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<DiagnosticsConfig, _> = serde_yaml::from_str("sensitive_logging: true");
        assert!(result.is_err());
    }

    #[test]
    fn format_is_chosen_by_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("a.yaml")).unwrap(), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.YML")).unwrap(), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.toml")).unwrap(), ConfigFormat::Toml);
        assert!(matches!(
            ConfigFormat::from_path(Path::new("a.json")),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }
}
