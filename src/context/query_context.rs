use crate::{context::Notices, database::Database};

/// Execution context a query is compiled in.
#[derive(Debug, Clone, Default)]
pub struct QueryContext {
    /// Tenant whose catalog entries apply; lookups are skipped without it
    pub team_id: Option<i64>,
    /// Database binding, source of the query timezone
    pub database: Option<Database>,
    pub notices: Notices,
}

impl QueryContext {
    pub fn new(team_id: i64, database: Database) -> Self {
        Self { team_id: Some(team_id), database: Some(database), notices: Notices::new() }
    }

    pub fn timezone(&self) -> Option<&str> {
        self.database.as_ref().map(Database::get_timezone)
    }
}
