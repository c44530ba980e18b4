// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::utils::{collapse_whitespace, truncate_chars};
use serde::Serialize;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Printed form of a query model as produced by the query pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryModel {
    pub text: String,
}

impl QueryModel {
    /// Messages that quote a query inline use this many characters at most.
    pub const INLINE_CHARACTER_LIMIT: usize = 100;

    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Optionally flatten to a single line and cut at `character_limit`.
    pub fn print(&self, remove_formatting: bool, character_limit: Option<usize>) -> String {
        let text = if remove_formatting {
            collapse_whitespace(&self.text)
        } else {
            self.text.clone()
        };
        match character_limit {
            Some(limit) => truncate_chars(&text, limit),
            None => text,
        }
    }
}

impl Display for QueryModel {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// A query expression fragment, already printed by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expression {
    pub text: String,
}

impl Expression {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyInfo {
    pub name: String,
    pub declaring_entity_type: String,
}

impl PropertyInfo {
    pub fn new(name: impl Into<String>, declaring_entity_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declaring_entity_type: declaring_entity_type.into(),
        }
    }
}

/// An internal service provider built by the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceProviderInfo {
    pub provider_id: Uuid,
}

impl ServiceProviderInfo {
    pub fn new() -> Self {
        Self {
            provider_id: Uuid::new_v4(),
        }
    }
}

impl Default for ServiceProviderInfo {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_flattens_and_truncates() {
        let model = QueryModel::new("from Order o in DbSet<Order>\n    where o.Total > 100\n    select o");
        assert_eq!(
            model.print(true, None),
            "from Order o in DbSet<Order> where o.Total > 100 select o"
        );
        assert_eq!(model.print(true, Some(10)), "from Order...");
        assert_eq!(model.print(false, None), model.text);
    }
}
