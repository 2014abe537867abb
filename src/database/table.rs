use indexmap::IndexMap;

use crate::database::DatabaseField;

/// A concrete table known to the database binding.
///
/// `fields` keeps declaration order so printed schemas stay stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Name used when the table is printed back into query text
    pub name: String,
    /// Map of column name -> classification
    pub fields: IndexMap<String, DatabaseField>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), fields: IndexMap::new() }
    }

    /// Builder-style column registration.
    pub fn with_field(mut self, name: impl Into<String>, field: DatabaseField) -> Self {
        self.fields.insert(name.into(), field);
        self
    }

    /// Return the classification for a column if the table declares it.
    pub fn get_field(&self, name: &str) -> Option<DatabaseField> {
        self.fields.get(name).copied()
    }

    pub fn to_printed(&self) -> &str {
        &self.name
    }
}
