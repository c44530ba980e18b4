// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a diagnostics configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported configuration format for '{}': expected .yaml, .yml or .toml", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("warnings rule references unknown event '{0}'")]
    UnknownEvent(String),

    #[error("warnings rule references unknown category '{0}'")]
    UnknownCategory(String),

    #[error("warnings rule #{index} must name exactly one of 'event' or 'category'")]
    AmbiguousRule { index: usize },

    #[error("warnings rule #{index} sets neither 'behavior' nor 'level'")]
    EmptyRule { index: usize },
}
