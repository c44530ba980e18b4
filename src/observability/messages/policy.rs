// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for warnings policy construction.

use crate::catalog::LogLevel;
use crate::observability::messages::StructuredLog;
use crate::policy::WarningBehavior;
use std::fmt::{Display, Formatter};

/// Warnings policy assembled from its rules.
///
/// # Log Level
/// `debug!` - Configuration detail
pub struct WarningsPolicyBuilt {
    pub default_behavior: WarningBehavior,
    pub event_rule_count: usize,
    pub category_rule_count: usize,
}

impl Display for WarningsPolicyBuilt {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Warnings policy built: default={:?}, {} event rules, {} category rules",
            self.default_behavior, self.event_rule_count, self.category_rule_count
        )
    }
}

impl StructuredLog for WarningsPolicyBuilt {
    fn log(&self) {
        tracing::debug!(
            default_behavior = ?self.default_behavior,
            event_rule_count = self.event_rule_count,
            category_rule_count = self.category_rule_count,
            "{}", self
        );
    }
}

/// An explicit `throw` rule targets an event that is never escalated.
///
/// # Log Level
/// `warn!` - Configuration does not do what it says
pub struct EscalationDowngraded<'a> {
    pub event_name: &'a str,
    pub level: LogLevel,
}

impl Display for EscalationDowngraded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Event '{}' has default level {} and cannot be escalated; it will be logged instead",
            self.event_name, self.level
        )
    }
}

impl StructuredLog for EscalationDowngraded<'_> {
    fn log(&self) {
        tracing::warn!(
            event_name = self.event_name,
            level = %self.level,
            "{}", self
        );
    }
}
