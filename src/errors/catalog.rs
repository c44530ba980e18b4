// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::catalog::Category;
use thiserror::Error;

/// Catalog authoring mistakes, detected while the catalog is built.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("event id {id} is declared by both '{first}' and '{second}'")]
    DuplicateEventId {
        id: u32,
        first: &'static str,
        second: &'static str,
    },

    #[error("event name '{name}' is declared more than once")]
    DuplicateEventName { name: &'static str },

    #[error("event '{name}' is not named under its category '{category}'")]
    CategoryMismatch {
        name: &'static str,
        category: Category,
    },

    #[error("event '{name}' takes {arity} arguments but its template has {placeholders} placeholders")]
    ArityMismatch {
        name: &'static str,
        arity: usize,
        placeholders: usize,
    },
}
