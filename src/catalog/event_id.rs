// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Identity of a diagnostic event.
///
/// The numeric id and the stable name are both assigned once, when the event's
/// definition is declared. The id is the key for policy rules; the name is the
/// key structured subscribers filter on.
///
/// The category half of the identity is carried by the definition
/// ([`EventDescriptor::category`](crate::catalog::EventDescriptor::category))
/// and repeated as the name's prefix: `Database.Connection.ConnectionError`
/// belongs to `Database.Connection`. The catalog rejects a name filed outside
/// its definition's category, so ids from different categories are always
/// told apart by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EventId {
    id: u32,
    name: &'static str,
}

impl EventId {
    pub const fn new(id: u32, name: &'static str) -> Self {
        Self { id, name }
    }

    pub const fn id(&self) -> u32 {
        self.id
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl Display for EventId {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Severity of a text-channel event, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Trace,
    Debug,
    Information,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    pub const fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Information => "information",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
            LogLevel::Critical => "critical",
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
