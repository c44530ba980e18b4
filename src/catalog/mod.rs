// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The event catalog: categories, identities, definitions and the
//! process-wide lookup table built from them.
//!
//! The catalog is built once, on first use, and is read-only afterwards, so
//! lookups need no synchronization. A catalog authoring mistake (two
//! definitions sharing an id or a name, a name filed outside its category, a
//! template whose placeholders disagree with its arity) is a programming
//! error and aborts initialization.

pub mod category;
pub mod definition;
pub mod definitions;
mod event_id;

pub use category::{
    Category, DatabaseConnection, DatabaseDataReader, DatabaseSql, DatabaseTransaction,
    Infrastructure, LoggerCategory, Migrations, ModelValidation, Query, Scaffolding, Update,
};
pub use definition::{placeholder_arity, EventDefinition, EventDescriptor, MALFORMED_TEMPLATE};
pub use event_id::{EventId, LogLevel};

use crate::errors::CatalogError;
use crate::observability::messages::catalog::CatalogInitialized;
use crate::observability::messages::StructuredLog;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::LazyLock;

static INITIALIZED: AtomicBool = AtomicBool::new(false);

static CATALOG: LazyLock<EventCatalog> = LazyLock::new(|| {
    let catalog = EventCatalog::build(definitions::all())
        .unwrap_or_else(|error| panic!("invalid event catalog: {}", error));
    INITIALIZED.store(true, Ordering::SeqCst);
    CatalogInitialized {
        definition_count: catalog.len(),
    }
    .log();
    catalog
});

/// The process-wide catalog of built-in definitions.
pub fn catalog() -> &'static EventCatalog {
    &CATALOG
}

/// Whether the process-wide catalog has been built and validated.
pub fn is_initialized() -> bool {
    INITIALIZED.load(Ordering::SeqCst)
}

/// Lookup table over a validated set of definitions.
pub struct EventCatalog {
    definitions: Vec<&'static dyn EventDescriptor>,
    by_id: HashMap<u32, usize>,
    by_name: HashMap<&'static str, usize>,
}

impl EventCatalog {
    /// Validate `definitions` and index them by id and by name.
    pub fn build(definitions: Vec<&'static dyn EventDescriptor>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(definitions.len());
        let mut by_name = HashMap::with_capacity(definitions.len());

        for (index, definition) in definitions.iter().enumerate() {
            let event_id = definition.event_id();

            if let Some(&existing) = by_id.get(&event_id.id()) {
                let existing: &dyn EventDescriptor = definitions[existing];
                return Err(CatalogError::DuplicateEventId {
                    id: event_id.id(),
                    first: existing.event_id().name(),
                    second: event_id.name(),
                });
            }
            if by_name.contains_key(event_id.name()) {
                return Err(CatalogError::DuplicateEventName {
                    name: event_id.name(),
                });
            }

            let category = definition.category();
            let in_category = event_id
                .name()
                .strip_prefix(category.path())
                .is_some_and(|rest| rest.starts_with('.') && rest.len() > 1);
            if !in_category {
                return Err(CatalogError::CategoryMismatch {
                    name: event_id.name(),
                    category,
                });
            }

            let placeholders = placeholder_arity(definition.template());
            if placeholders != definition.arity() {
                return Err(CatalogError::ArityMismatch {
                    name: event_id.name(),
                    arity: definition.arity(),
                    placeholders,
                });
            }

            by_id.insert(event_id.id(), index);
            by_name.insert(event_id.name(), index);
        }

        Ok(Self {
            definitions,
            by_id,
            by_name,
        })
    }

    pub fn by_id(&self, id: u32) -> Option<&'static dyn EventDescriptor> {
        self.by_id.get(&id).map(|&index| self.definitions[index])
    }

    pub fn by_name(&self, name: &str) -> Option<&'static dyn EventDescriptor> {
        self.by_name.get(name).map(|&index| self.definitions[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static dyn EventDescriptor> + '_ {
        self.definitions.iter().copied()
    }

    /// Definitions filed under `category` or any of its descendants.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &'static dyn EventDescriptor> + '_ {
        self.iter().filter(move |definition| definition.category().is_within(category))
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static FIRST: EventDefinition<Scaffolding, 0> =
        EventDefinition::new(EventId::new(90000, "Scaffolding.First"), LogLevel::Debug, "First.");
    static SAME_ID: EventDefinition<Scaffolding, 0> =
        EventDefinition::new(EventId::new(90000, "Scaffolding.Second"), LogLevel::Debug, "Second.");
    static SAME_NAME: EventDefinition<Scaffolding, 0> =
        EventDefinition::new(EventId::new(90001, "Scaffolding.First"), LogLevel::Debug, "Again.");
    static WRONG_CATEGORY: EventDefinition<Scaffolding, 0> =
        EventDefinition::new(EventId::new(90002, "Migrations.Elsewhere"), LogLevel::Debug, "Lost.");

    #[test]
    fn built_in_catalog_is_valid() {
        let catalog = EventCatalog::build(definitions::all()).unwrap();
        assert_eq!(catalog.len(), definitions::all().len());
        assert!(catalog.len() >= 60);
    }

    #[test]
    fn event_names_resolve_to_their_definitions_category() {
        for definition in catalog().iter() {
            let name = definition.event_id().name();
            let (path, _) = name.rsplit_once('.').unwrap();
            assert_eq!(path.parse::<Category>(), Ok(definition.category()), "event: {}", name);
        }
    }

    #[test]
    fn lookup_by_id_and_name_agree() {
        let by_id = catalog().by_id(20004).unwrap();
        let by_name = catalog().by_name("Database.Connection.ConnectionError").unwrap();
        assert_eq!(by_id.event_id(), by_name.event_id());
        assert_eq!(by_id.category(), Category::DatabaseConnection);
        assert_eq!(by_id.level(), LogLevel::Error);
    }

    #[test]
    fn unknown_lookups_return_none() {
        assert!(catalog().by_id(1).is_none());
        assert!(catalog().by_name("Database.Connection.Nope").is_none());
    }

    #[test]
    fn in_category_includes_descendants() {
        let database: Vec<_> = catalog().in_category(Category::Database).collect();
        assert!(database.iter().any(|d| d.category() == Category::DatabaseSql));
        assert!(database.iter().any(|d| d.category() == Category::DatabaseTransaction));
        assert!(database.iter().all(|d| d.category().is_within(Category::Database)));
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let result = EventCatalog::build(vec![&FIRST, &SAME_ID]);
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateEventId { id: 90000, first: "Scaffolding.First", second: "Scaffolding.Second" })
        ));
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let result = EventCatalog::build(vec![&FIRST, &SAME_NAME]);
        assert!(matches!(result, Err(CatalogError::DuplicateEventName { name: "Scaffolding.First" })));
    }

    #[test]
    fn name_outside_category_is_rejected() {
        let result = EventCatalog::build(vec![&WRONG_CATEGORY]);
        assert!(matches!(
            result,
            Err(CatalogError::CategoryMismatch { category: Category::Scaffolding, .. })
        ));
    }
}
