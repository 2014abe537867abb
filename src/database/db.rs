use std::{collections::HashMap, sync::Arc};

use crate::database::{DbConfig, Table};

/// The database binding a query is compiled against.
///
/// Holds the concrete tables a bound tree can point at, plus the
/// configuration that decides the query timezone.
#[derive(Debug, Clone, Default)]
pub struct Database {
    config: DbConfig,
    tables: HashMap<String, Arc<Table>>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_with_config(config: DbConfig) -> Self {
        Self { config, tables: HashMap::new() }
    }

    /// Register a table, returning the shared handle bindings should hold.
    pub fn add_table(&mut self, table: Table) -> Arc<Table> {
        let table = Arc::new(table);
        self.tables.insert(table.name.clone(), Arc::clone(&table));
        table
    }

    pub fn get_timezone(&self) -> &str {
        &self.config.timezone
    }
}
