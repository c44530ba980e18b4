// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The dispatch facade.
//!
//! [`Diagnostics`] owns the two channel handles and the warnings policy and
//! hands out one [`DiagnosticsLogger`] per category. Each category's call
//! sites live in their own file as inherent methods on
//! `DiagnosticsLogger<Category>`, one method per event.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use the_bellwether::backends::{RecordingLeveledSink, RecordingStructuredSink};
//! use the_bellwether::catalog::{LogLevel, Scaffolding};
//! use the_bellwether::diagnostics::Diagnostics;
//!
//! let text = Arc::new(RecordingLeveledSink::new(LogLevel::Debug));
//! let diagnostics = Diagnostics::builder()
//!     .leveled_sink(text.clone())
//!     .structured_sink(Arc::new(RecordingStructuredSink::disabled()))
//!     .build();
//!
//! diagnostics.for_category::<Scaffolding>().table_found("dbo.Orders").unwrap();
//! assert_eq!(text.records()[0].message, "Found table with name: dbo.Orders.");
//! ```

mod connection;
mod data_reader;
mod infrastructure;
mod logger;
mod migrations;
mod model;
mod query;
mod scaffolding;
mod sql;
mod transaction;
mod update;

#[cfg(test)]
mod integration_tests;

pub use logger::DiagnosticsLogger;
pub use migrations::ScriptRange;

use crate::backends::NullSink;
use crate::catalog::{self, EventCatalog, LoggerCategory};
use crate::config::DiagnosticsConfig;
use crate::errors::ConfigError;
use crate::policy::WarningsPolicy;
use crate::traits::{LeveledSink, StructuredSink};
use std::sync::Arc;

/// Shared entry point: sinks, policy and options. Cheap to clone.
#[derive(Clone)]
pub struct Diagnostics {
    leveled: Arc<dyn LeveledSink>,
    structured: Arc<dyn StructuredSink>,
    policy: Arc<WarningsPolicy>,
    sensitive_data_logging: bool,
    catalog: &'static EventCatalog,
}

impl Diagnostics {
    pub fn builder() -> DiagnosticsBuilder {
        DiagnosticsBuilder::default()
    }

    /// A logger bound to category `C`.
    pub fn for_category<C: LoggerCategory>(&self) -> DiagnosticsLogger<C> {
        DiagnosticsLogger::new(
            Arc::clone(&self.leveled),
            Arc::clone(&self.structured),
            Arc::clone(&self.policy),
            self.sensitive_data_logging,
        )
    }

    pub fn policy(&self) -> &WarningsPolicy {
        &self.policy
    }

    pub fn sensitive_data_logging(&self) -> bool {
        self.sensitive_data_logging
    }

    /// The validated catalog every logger dispatches from.
    pub fn catalog(&self) -> &'static EventCatalog {
        self.catalog
    }
}

impl std::fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Diagnostics")
            .field("policy", &self.policy)
            .field("sensitive_data_logging", &self.sensitive_data_logging)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Diagnostics`]. Unset channels default to [`NullSink`].
#[derive(Default)]
pub struct DiagnosticsBuilder {
    leveled: Option<Arc<dyn LeveledSink>>,
    structured: Option<Arc<dyn StructuredSink>>,
    policy: WarningsPolicy,
    sensitive_data_logging: bool,
}

impl DiagnosticsBuilder {
    pub fn leveled_sink(mut self, sink: Arc<dyn LeveledSink>) -> Self {
        self.leveled = Some(sink);
        self
    }

    pub fn structured_sink(mut self, sink: Arc<dyn StructuredSink>) -> Self {
        self.structured = Some(sink);
        self
    }

    pub fn policy(mut self, policy: WarningsPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Include parameter values in command messages and payload exports.
    pub fn sensitive_data_logging(mut self, enabled: bool) -> Self {
        self.sensitive_data_logging = enabled;
        self
    }

    /// Apply the policy and options from a loaded configuration.
    pub fn configure(self, config: &DiagnosticsConfig) -> Result<Self, ConfigError> {
        let policy = config.warnings_policy()?;
        Ok(self
            .policy(policy)
            .sensitive_data_logging(config.sensitive_data_logging))
    }

    /// Forces the process-wide event catalog; a catalog defect panics here.
    pub fn build(self) -> Diagnostics {
        Diagnostics {
            catalog: catalog::catalog(),
            leveled: self.leveled.unwrap_or_else(|| Arc::new(NullSink)),
            structured: self.structured.unwrap_or_else(|| Arc::new(NullSink)),
            policy: Arc::new(self.policy),
            sensitive_data_logging: self.sensitive_data_logging,
        }
    }
}
