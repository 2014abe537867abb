use serde::{Deserialize, Serialize};

pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Configuration for a database binding.
///
/// - `timezone` is the IANA name every date/time column is normalized to
///   when a query is compiled against this database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DbConfig {
    /// Timezone used for date/time normalization
    pub timezone: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self { timezone: DEFAULT_TIMEZONE.to_string() }
    }
}

impl DbConfig {
    /// Create default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration bound to an explicit timezone.
    pub fn with_timezone(timezone: &str) -> Self {
        Self { timezone: timezone.to_string() }
    }

    /// Parse a configuration from JSON. Missing keys fall back to defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
