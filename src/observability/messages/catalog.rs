// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};

/// Event catalog built and validated.
///
/// # Log Level
/// `debug!` - Happens once per process
pub struct CatalogInitialized {
    pub definition_count: usize,
}

impl Display for CatalogInitialized {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Event catalog initialized with {} definitions",
            self.definition_count
        )
    }
}

impl StructuredLog for CatalogInitialized {
    fn log(&self) {
        tracing::debug!(
            definition_count = self.definition_count,
            "{}", self
        );
    }
}
