// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;

/// A sequence discovered while reading a database schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseSequence {
    pub name: String,
    pub data_type: String,
    pub cyclic: bool,
    pub increment: i64,
    pub start: i64,
    pub minimum: Option<i64>,
    pub maximum: Option<i64>,
}

impl DatabaseSequence {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            cyclic: false,
            increment: 1,
            start: 1,
            minimum: None,
            maximum: None,
        }
    }

    pub fn with_bounds(mut self, minimum: Option<i64>, maximum: Option<i64>) -> Self {
        self.minimum = minimum;
        self.maximum = maximum;
        self
    }
}
