use thiserror::Error;

use crate::catalog::PropertyCategory;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
    #[error("lookup of {category:?} properties for team {team_id} failed: {message}")]
    LookupFailed { team_id: i64, category: PropertyCategory, message: String },
    #[error("invalid property definitions: {0}")]
    InvalidDefinitions(#[from] serde_json::Error),
}
