use std::fmt;

use serde::{Deserialize, Serialize};

/// Inferred value type of a property, as recorded in the catalog.
///
/// Legacy or unrecognized tags deserialize into `Unknown`, which coerces
/// like `String`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyKind {
    String,
    Numeric,
    Boolean,
    DateTime,
    #[serde(other)]
    Unknown,
}

impl PropertyKind {
    /// Name shown to users in notices.
    pub fn display_name(&self) -> &'static str {
        match self {
            PropertyKind::DateTime => "DateTime",
            PropertyKind::Numeric => "Float",
            PropertyKind::Boolean => "Boolean",
            PropertyKind::String | PropertyKind::Unknown => "String",
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Which kind of entity a property definition belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyCategory {
    Event,
    Person,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_tags_become_unknown() {
        let kind: PropertyKind = serde_json::from_str("\"Duration\"").unwrap();
        assert_eq!(kind, PropertyKind::Unknown);
        assert_eq!(kind.display_name(), "String");
    }

    #[test]
    fn numeric_is_reported_as_float() {
        let kind: PropertyKind = serde_json::from_str("\"Numeric\"").unwrap();
        assert_eq!(kind.to_string(), "Float");
    }
}
