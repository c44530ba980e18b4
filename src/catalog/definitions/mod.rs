// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Every event definition, grouped by category.
//!
//! Each definition is a `static`, so it is created once and shared by every
//! logger in the process. Adding a definition means adding it to the
//! category file's `definitions()` list so the catalog can check it.

pub mod connection;
pub mod data_reader;
pub mod infrastructure;
pub mod migrations;
pub mod model;
pub mod query;
pub mod scaffolding;
pub mod sql;
pub mod transaction;
pub mod update;

use crate::catalog::definition::EventDescriptor;

/// All built-in definitions in id order of their category blocks.
pub fn all() -> Vec<&'static dyn EventDescriptor> {
    [
        update::definitions(),
        query::definitions(),
        infrastructure::definitions(),
        connection::definitions(),
        sql::definitions(),
        transaction::definitions(),
        data_reader::definitions(),
        migrations::definitions(),
        model::definitions(),
        scaffolding::definitions(),
    ]
    .concat()
}
