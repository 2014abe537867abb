use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use crate::{
    catalog::{CatalogError, PropertyCatalog, PropertyCategory, PropertyKind},
    transforms::{PropertyFinder, PropertyScope},
};

/// Resolved property types for one pass, split by scope.
///
/// Only names the catalog knows a type for are kept.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PropertyTypeMaps {
    pub event_properties: IndexMap<String, PropertyKind>,
    pub person_properties: IndexMap<String, PropertyKind>,
}

impl PropertyTypeMaps {
    /// Look up everything the finder collected. Issues at most one lookup
    /// per scope, none for an empty scope or when there is no team.
    pub fn fetch(
        finder: &PropertyFinder,
        team_id: Option<i64>,
        catalog: &dyn PropertyCatalog,
    ) -> Result<Self, CatalogError> {
        let Some(team_id) = team_id else {
            if finder.has_properties() {
                debug!("no team in context, skipping property type lookups");
            }
            return Ok(Self::default());
        };

        let person_properties = Self::fetch_scope(
            &finder.person_properties,
            team_id,
            PropertyCategory::Person,
            catalog,
        )?;
        let event_properties =
            Self::fetch_scope(&finder.event_properties, team_id, PropertyCategory::Event, catalog)?;

        Ok(Self { event_properties, person_properties })
    }

    fn fetch_scope(
        names: &IndexSet<String>,
        team_id: i64,
        category: PropertyCategory,
        catalog: &dyn PropertyCatalog,
    ) -> Result<IndexMap<String, PropertyKind>, CatalogError> {
        if names.is_empty() {
            return Ok(IndexMap::new());
        }

        let found = catalog.lookup(names, team_id, category)?;
        let typed = found
            .into_iter()
            .filter_map(|(name, kind)| kind.map(|kind| (name, kind)))
            .collect::<IndexMap<_, _>>();

        debug!(?category, requested = names.len(), typed = typed.len(), "looked up property types");
        Ok(typed)
    }

    pub fn get(&self, scope: PropertyScope, name: &str) -> Option<PropertyKind> {
        match scope {
            PropertyScope::Event => self.event_properties.get(name).copied(),
            PropertyScope::Person => self.person_properties.get(name).copied(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.event_properties.is_empty() && self.person_properties.is_empty()
    }

    /// True when a rewrite could not change anything.
    pub fn is_noop(&self, found_timestamps: bool) -> bool {
        self.is_empty() && !found_timestamps
    }
}
