use serde::{Deserialize, Serialize};

/// Classification of a concrete column as declared by a table.
///
/// The pass only cares about two things here: whether the column holds a
/// date/time that must be normalized to the query timezone, and whether it
/// is one of the schema-less property bags (`properties`,
/// `person_properties`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatabaseField {
    /// Integer number
    Integer,
    /// Floating-point number
    Float,
    /// Plain string
    String,
    /// JSON string holding dynamic properties
    StringJson,
    /// Boolean
    Boolean,
    /// Calendar date without time
    Date,
    /// Timestamp, stored in UTC
    DateTime,
}

impl DatabaseField {
    pub fn is_datetime(&self) -> bool {
        matches!(self, DatabaseField::DateTime)
    }
}
