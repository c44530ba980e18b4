// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The category tree events are filed under.
//!
//! `Category` is the runtime value used for enablement checks and policy
//! rules. The uninhabited marker types ([`DatabaseSql`], [`Scaffolding`], ...)
//! carry the same information at the type level so that a
//! `DiagnosticsLogger<DatabaseSql>` can only dispatch definitions declared
//! for `Database.Sql`.

use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Database,
    DatabaseSql,
    DatabaseConnection,
    DatabaseTransaction,
    DatabaseDataReader,
    Migrations,
    Query,
    Model,
    ModelValidation,
    Scaffolding,
    Infrastructure,
    Update,
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::Database,
        Category::DatabaseSql,
        Category::DatabaseConnection,
        Category::DatabaseTransaction,
        Category::DatabaseDataReader,
        Category::Migrations,
        Category::Query,
        Category::Model,
        Category::ModelValidation,
        Category::Scaffolding,
        Category::Infrastructure,
        Category::Update,
    ];

    /// Hierarchical path, e.g. `Database.Connection`.
    pub const fn path(&self) -> &'static str {
        match self {
            Category::Database => "Database",
            Category::DatabaseSql => "Database.Sql",
            Category::DatabaseConnection => "Database.Connection",
            Category::DatabaseTransaction => "Database.Transaction",
            Category::DatabaseDataReader => "Database.DataReader",
            Category::Migrations => "Migrations",
            Category::Query => "Query",
            Category::Model => "Model",
            Category::ModelValidation => "Model.Validation",
            Category::Scaffolding => "Scaffolding",
            Category::Infrastructure => "Infrastructure",
            Category::Update => "Update",
        }
    }

    /// `tracing` target used by the tracing-backed leveled sink.
    pub const fn target(&self) -> &'static str {
        match self {
            Category::Database => "bellwether::database",
            Category::DatabaseSql => "bellwether::database::sql",
            Category::DatabaseConnection => "bellwether::database::connection",
            Category::DatabaseTransaction => "bellwether::database::transaction",
            Category::DatabaseDataReader => "bellwether::database::data_reader",
            Category::Migrations => "bellwether::migrations",
            Category::Query => "bellwether::query",
            Category::Model => "bellwether::model",
            Category::ModelValidation => "bellwether::model::validation",
            Category::Scaffolding => "bellwether::scaffolding",
            Category::Infrastructure => "bellwether::infrastructure",
            Category::Update => "bellwether::update",
        }
    }

    pub const fn parent(&self) -> Option<Category> {
        match self {
            Category::DatabaseSql
            | Category::DatabaseConnection
            | Category::DatabaseTransaction
            | Category::DatabaseDataReader => Some(Category::Database),
            Category::ModelValidation => Some(Category::Model),
            _ => None,
        }
    }

    pub const fn is_leaf(&self) -> bool {
        !matches!(self, Category::Database | Category::Model)
    }

    /// True when `self` is `ancestor` or sits somewhere below it.
    pub fn is_within(&self, ancestor: Category) -> bool {
        self.ancestors().any(|category| category == ancestor)
    }

    /// `self` followed by each parent up to the root.
    pub fn ancestors(&self) -> impl Iterator<Item = Category> {
        std::iter::successors(Some(*self), |category| category.parent())
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.path().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| s.to_string())
    }
}

/// Type-level handle for a leaf category.
pub trait LoggerCategory: Send + Sync + 'static {
    const CATEGORY: Category;
}

macro_rules! logger_categories {
    ($($(#[$doc:meta])* $marker:ident => $category:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            #[derive(Debug)]
            pub enum $marker {}

            impl LoggerCategory for $marker {
                const CATEGORY: Category = Category::$category;
            }
        )*
    };
}

logger_categories! {
    /// `Database.Sql`: command execution.
    DatabaseSql => DatabaseSql,
    /// `Database.Connection`: connection lifecycle.
    DatabaseConnection => DatabaseConnection,
    /// `Database.Transaction`: transaction lifecycle.
    DatabaseTransaction => DatabaseTransaction,
    /// `Database.DataReader`
    DatabaseDataReader => DatabaseDataReader,
    Migrations => Migrations,
    Query => Query,
    /// `Model.Validation`
    ModelValidation => ModelValidation,
    /// Reverse-engineering discoveries and scaffolding warnings.
    Scaffolding => Scaffolding,
    Infrastructure => Infrastructure,
    Update => Update,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_categories_report_their_parent() {
        assert_eq!(Category::DatabaseConnection.parent(), Some(Category::Database));
        assert_eq!(Category::ModelValidation.parent(), Some(Category::Model));
        assert_eq!(Category::Scaffolding.parent(), None);
    }

    #[test]
    fn is_within_walks_the_hierarchy() {
        assert!(Category::DatabaseSql.is_within(Category::Database));
        assert!(Category::DatabaseSql.is_within(Category::DatabaseSql));
        assert!(!Category::DatabaseSql.is_within(Category::DatabaseConnection));
        assert!(!Category::Migrations.is_within(Category::Database));
    }

    #[test]
    fn parses_paths_case_insensitively() {
        assert_eq!("database.connection".parse::<Category>(), Ok(Category::DatabaseConnection));
        assert_eq!("Scaffolding".parse::<Category>(), Ok(Category::Scaffolding));
        assert!("Database.Nope".parse::<Category>().is_err());
    }

    #[test]
    fn markers_map_to_leaf_categories() {
        assert_eq!(<DatabaseSql as LoggerCategory>::CATEGORY, Category::DatabaseSql);
        assert_eq!(<ModelValidation as LoggerCategory>::CATEGORY, Category::ModelValidation);
        assert!(<Scaffolding as LoggerCategory>::CATEGORY.is_leaf());
    }
}
