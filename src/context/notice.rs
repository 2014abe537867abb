use serde::{Deserialize, Serialize};

/// Informational diagnostic tied to a range of the query text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub start: Option<usize>,
    pub end: Option<usize>,
    pub message: String,
}

impl Notice {
    pub fn new(start: Option<usize>, end: Option<usize>, message: impl Into<String>) -> Self {
        Self { start, end, message: message.into() }
    }
}
