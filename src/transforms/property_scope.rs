use crate::ast::PropertyType;

pub const PROPERTIES_FIELD: &str = "properties";
pub const PERSON_PROPERTIES_FIELD: &str = "person_properties";
pub const EVENTS_TABLE: &str = "events";
pub const PERSON_TABLES: [&str; 2] = ["persons", "raw_persons"];
/// Discriminator of the person-on-event virtual table.
pub const PERSON_ON_EVENT: &str = "poe";

/// Which half of the catalog a property name is looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyScope {
    Event,
    Person,
}

impl PropertyScope {
    /// Classify a property binding, returning the scope and the property name.
    ///
    /// Only single-segment paths are classified. `properties` on a person
    /// table or on the person-on-event virtual table is person-scoped,
    /// `properties` on `events` is event-scoped, and `person_properties` on
    /// `events` is person-scoped.
    pub fn of(property_type: &PropertyType) -> Option<(PropertyScope, &str)> {
        let name = property_type.single_segment()?;
        let table_type = &property_type.field_type.table_type;

        let scope = match property_type.field_type.name.as_str() {
            PROPERTIES_FIELD => {
                if table_type.virtual_field() == Some(PERSON_ON_EVENT) {
                    PropertyScope::Person
                } else if !table_type.is_base_table() {
                    return None;
                } else {
                    match table_type.resolve_table_name()? {
                        table if PERSON_TABLES.contains(&table) => PropertyScope::Person,
                        EVENTS_TABLE => PropertyScope::Event,
                        _ => return None,
                    }
                }
            }
            PERSON_PROPERTIES_FIELD => {
                if !table_type.is_base_table() || table_type.resolve_table_name()? != EVENTS_TABLE {
                    return None;
                }
                PropertyScope::Person
            }
            _ => return None,
        };

        Some((scope, name))
    }
}
