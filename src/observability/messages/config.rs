// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};

/// Configuration file parsed.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ConfigurationLoaded<'a> {
    pub path: &'a str,
    pub format: &'a str,
    pub rule_count: usize,
}

impl Display for ConfigurationLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded {} diagnostics configuration from {} ({} warnings rules)",
            self.format, self.path, self.rule_count
        )
    }
}

impl StructuredLog for ConfigurationLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = self.path,
            format = self.format,
            rule_count = self.rule_count,
            "{}", self
        );
    }
}
