use std::sync::atomic::{AtomicUsize, Ordering};

use indexmap::{IndexMap, IndexSet};
use serde_json::Value;

use crate::catalog::{
    CatalogError, PropertyCatalog, PropertyCategory, PropertyDefinition, PropertyKind,
};

/// Catalog backed by a plain list of definitions.
///
/// Counts the lookups it serves so callers can check how many round trips a
/// pass would have cost against a real store. Safe to share between
/// threads running independent passes.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    definitions: Vec<PropertyDefinition>,
    lookups: AtomicUsize,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, definition: PropertyDefinition) {
        self.definitions.push(definition);
    }

    /// Builder-style shortcut for a typed definition.
    pub fn with(
        mut self,
        team_id: i64,
        name: &str,
        category: Option<PropertyCategory>,
        kind: PropertyKind,
    ) -> Self {
        self.insert(PropertyDefinition::new(team_id, name, category, Some(kind)));
        self
    }

    /// Load definitions from a JSON array of rows.
    pub fn load_from_json(&mut self, rows: Value) -> Result<usize, CatalogError> {
        let rows: Vec<PropertyDefinition> = serde_json::from_value(rows)?;
        let count = rows.len();
        self.definitions.extend(rows);
        Ok(count)
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl PropertyCatalog for InMemoryCatalog {
    fn lookup(
        &self,
        names: &IndexSet<String>,
        team_id: i64,
        category: PropertyCategory,
    ) -> Result<IndexMap<String, Option<PropertyKind>>, CatalogError> {
        self.lookups.fetch_add(1, Ordering::Relaxed);

        let found = self
            .definitions
            .iter()
            .filter(|def| def.team_id == team_id && def.matches_category(category))
            .filter(|def| names.contains(&def.name))
            .map(|def| (def.name.clone(), def.property_type))
            .collect();

        Ok(found)
    }
}
