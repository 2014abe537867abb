use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogError, PropertyCategory, PropertyKind};

/// One row of the property catalog.
///
/// `category` is `None` for legacy rows written before categories existed;
/// those count as event properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDefinition {
    pub team_id: i64,
    pub name: String,
    #[serde(default)]
    pub category: Option<PropertyCategory>,
    #[serde(default)]
    pub property_type: Option<PropertyKind>,
}

impl PropertyDefinition {
    pub fn new(
        team_id: i64,
        name: &str,
        category: Option<PropertyCategory>,
        property_type: Option<PropertyKind>,
    ) -> Self {
        Self { team_id, name: name.to_string(), category, property_type }
    }

    /// Whether this row answers a lookup for `category`.
    pub fn matches_category(&self, category: PropertyCategory) -> bool {
        match category {
            PropertyCategory::Event => {
                matches!(self.category, None | Some(PropertyCategory::Event))
            }
            PropertyCategory::Person => self.category == Some(PropertyCategory::Person),
        }
    }
}

/// Read access to property type definitions.
///
/// The map contains an entry for every requested name the catalog knows
/// about; the value is `None` when the type was never inferred.
pub trait PropertyCatalog {
    fn lookup(
        &self,
        names: &IndexSet<String>,
        team_id: i64,
        category: PropertyCategory,
    ) -> Result<IndexMap<String, Option<PropertyKind>>, CatalogError>;
}
