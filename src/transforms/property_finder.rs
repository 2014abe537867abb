use indexmap::IndexSet;

use crate::{
    ast::{walk_field, Expr, Field, PropertyType, Type, Visitor},
    transforms::{PropertyScope, PROPERTIES_FIELD},
};

/// Collects the property names a tree references, split by scope, and
/// notes whether any date/time column is read.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PropertyFinder {
    pub person_properties: IndexSet<String>,
    pub event_properties: IndexSet<String>,
    pub found_timestamps: bool,
}

impl PropertyFinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(node: &Expr) -> Self {
        let mut finder = Self::new();
        finder.visit(node);
        finder
    }

    pub fn has_properties(&self) -> bool {
        !self.person_properties.is_empty() || !self.event_properties.is_empty()
    }
}

impl Visitor for PropertyFinder {
    fn visit_field(&mut self, field: &Field) {
        walk_field(self, field);
        if let Some(Type::Field(field_type)) = &field.ty {
            if field_type.is_datetime() {
                self.found_timestamps = true;
            }
        }
    }

    fn visit_property_type(&mut self, property_type: &PropertyType) {
        if property_type.field_type.name != PROPERTIES_FIELD {
            return;
        }
        match PropertyScope::of(property_type) {
            Some((PropertyScope::Person, name)) => {
                self.person_properties.insert(name.to_string());
            }
            Some((PropertyScope::Event, name)) => {
                self.event_properties.insert(name.to_string());
            }
            None => {}
        }
    }
}
