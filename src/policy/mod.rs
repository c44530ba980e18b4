// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Warnings policy: decides, before any formatting happens, whether an event
//! is logged, ignored or escalated to a hard failure, and at which level.
//!
//! # Resolution order
//!
//! For each of `behavior` and `level` independently, the first rule that sets
//! the field wins:
//!
//! 1. the rule registered for the event's id
//! 2. the rule for the event's category, then each ancestor category
//!
//! When nothing sets `level`, the definition's default level is used. When
//! nothing sets `behavior`, escalatable events get the policy's default
//! behavior and all other events get `Log`.
//!
//! Only events whose *default* level is Warning or above are escalatable. A
//! `Throw` resolved for any other event degrades to `Log`, so discovery
//! notices keep logging even with warnings-as-errors switched on.

use crate::catalog::{Category, EventDescriptor, LogLevel};
use crate::observability::messages::policy::{EscalationDowngraded, WarningsPolicyBuilt};
use crate::observability::messages::StructuredLog;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// What dispatch does with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningBehavior {
    /// Emit at the effective level, subject to the sink's own threshold.
    #[default]
    Log,
    /// Suppress the event on both channels.
    Ignore,
    /// Fail the dispatch call with the rendered message.
    Throw,
}

/// Override for one event or one category subtree. Unset fields fall
/// through to the next rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WarningRule {
    pub behavior: Option<WarningBehavior>,
    pub level: Option<LogLevel>,
}

impl WarningRule {
    pub const fn behavior(behavior: WarningBehavior) -> Self {
        Self {
            behavior: Some(behavior),
            level: None,
        }
    }

    pub const fn log() -> Self {
        Self::behavior(WarningBehavior::Log)
    }

    pub const fn ignore() -> Self {
        Self::behavior(WarningBehavior::Ignore)
    }

    pub const fn throw() -> Self {
        Self::behavior(WarningBehavior::Throw)
    }

    /// Re-level without touching the behavior.
    pub const fn at_level(level: LogLevel) -> Self {
        Self {
            behavior: None,
            level: Some(level),
        }
    }

    pub const fn with_level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }

    pub const fn is_empty(&self) -> bool {
        self.behavior.is_none() && self.level.is_none()
    }
}

/// Outcome of [`WarningsPolicy::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub level: LogLevel,
    pub behavior: WarningBehavior,
}

/// Immutable after construction; shared across loggers and threads.
#[derive(Debug, Clone, Default)]
pub struct WarningsPolicy {
    default_behavior: WarningBehavior,
    event_rules: HashMap<u32, WarningRule>,
    category_rules: HashMap<Category, WarningRule>,
}

impl WarningsPolicy {
    pub fn builder() -> WarningsPolicyBuilder {
        WarningsPolicyBuilder::default()
    }

    pub fn default_behavior(&self) -> WarningBehavior {
        self.default_behavior
    }

    pub fn resolve(&self, definition: &dyn EventDescriptor) -> Resolution {
        let event_rule = self.event_rules.get(&definition.event_id().id());
        let category_rules = definition
            .category()
            .ancestors()
            .filter_map(|category| self.category_rules.get(&category));
        let mut rules = event_rule.into_iter().chain(category_rules);

        let mut behavior = None;
        let mut level = None;
        for rule in &mut rules {
            behavior = behavior.or(rule.behavior);
            level = level.or(rule.level);
            if behavior.is_some() && level.is_some() {
                break;
            }
        }

        let escalatable = definition.is_escalatable();
        let behavior = match behavior {
            Some(WarningBehavior::Throw) if !escalatable => WarningBehavior::Log,
            Some(behavior) => behavior,
            None if escalatable => self.default_behavior,
            None => WarningBehavior::Log,
        };

        Resolution {
            level: level.unwrap_or(definition.level()),
            behavior,
        }
    }
}

#[derive(Debug, Default)]
pub struct WarningsPolicyBuilder {
    default_behavior: WarningBehavior,
    event_rules: HashMap<u32, WarningRule>,
    category_rules: HashMap<Category, WarningRule>,
    downgraded: Vec<(&'static str, LogLevel)>,
}

impl WarningsPolicyBuilder {
    /// Behavior for escalatable events that no rule covers.
    pub fn default_behavior(mut self, behavior: WarningBehavior) -> Self {
        self.default_behavior = behavior;
        self
    }

    /// Shorthand for `default_behavior(WarningBehavior::Throw)`.
    pub fn warnings_as_errors(self) -> Self {
        self.default_behavior(WarningBehavior::Throw)
    }

    /// Rule for a single event. A later rule for the same event replaces the
    /// earlier one.
    pub fn event(mut self, definition: &'static dyn EventDescriptor, rule: WarningRule) -> Self {
        let event_id = definition.event_id();
        if rule.behavior == Some(WarningBehavior::Throw) && !definition.is_escalatable() {
            self.downgraded.push((event_id.name(), definition.level()));
        }
        self.event_rules.insert(event_id.id(), rule);
        self
    }

    /// Rule for every event in `category` and below it.
    pub fn category(mut self, category: Category, rule: WarningRule) -> Self {
        self.category_rules.insert(category, rule);
        self
    }

    pub fn build(self) -> WarningsPolicy {
        for (event_name, level) in &self.downgraded {
            EscalationDowngraded {
                event_name: *event_name,
                level: *level,
            }
            .log();
        }

        let policy = WarningsPolicy {
            default_behavior: self.default_behavior,
            event_rules: self.event_rules,
            category_rules: self.category_rules,
        };

        WarningsPolicyBuilt {
            default_behavior: policy.default_behavior,
            event_rule_count: policy.event_rules.len(),
            category_rule_count: policy.category_rules.len(),
        }
        .log();

        policy
    }
}
