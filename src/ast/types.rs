use std::{fmt, sync::Arc};

use crate::database::{DatabaseField, Table};

/// Table kind a field binding is attached to.
#[derive(Clone, PartialEq, Eq)]
pub enum TableType {
    /// A concrete table from the database binding.
    Base(Arc<Table>),
    /// `FROM events AS e`: an alias over another table binding.
    Alias { alias: String, table_type: Box<TableType> },
    /// A synthetic join exposed as a field of its parent table,
    /// e.g. the "poe" (person-on-event) table hanging off `events`.
    Virtual { field: String, parent: Box<TableType> },
    /// Output of a subquery; has no backing table.
    Subquery,
}

impl TableType {
    pub fn base(table: Arc<Table>) -> Self {
        TableType::Base(table)
    }

    pub fn alias(alias: impl Into<String>, table_type: TableType) -> Self {
        TableType::Alias { alias: alias.into(), table_type: Box::new(table_type) }
    }

    pub fn virtual_table(field: impl Into<String>, parent: TableType) -> Self {
        TableType::Virtual { field: field.into(), parent: Box::new(parent) }
    }

    /// True for every binding that ultimately reads a concrete table.
    pub fn is_base_table(&self) -> bool {
        !matches!(self, TableType::Subquery)
    }

    /// Discriminator of a virtual table, `None` for every other kind.
    pub fn virtual_field(&self) -> Option<&str> {
        match self {
            TableType::Virtual { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }

    pub fn resolve_database_table(&self) -> Option<&Table> {
        match self {
            TableType::Base(table) => Some(table.as_ref()),
            TableType::Alias { table_type, .. } => table_type.resolve_database_table(),
            TableType::Virtual { parent, .. } => parent.resolve_database_table(),
            TableType::Subquery => None,
        }
    }

    /// Printed name of the resolved table, if any.
    pub fn resolve_table_name(&self) -> Option<&str> {
        self.resolve_database_table().map(Table::to_printed)
    }
}

impl fmt::Debug for TableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableType::Base(table) => write!(f, "Base({})", table.name),
            TableType::Alias { alias, table_type } => {
                write!(f, "Alias({} -> {:?})", alias, table_type)
            }
            TableType::Virtual { field, parent } => write!(f, "Virtual({} on {:?})", field, parent),
            TableType::Subquery => write!(f, "Subquery"),
        }
    }
}

/// Binding of a plain column reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldType {
    pub name: String,
    pub table_type: TableType,
}

impl FieldType {
    pub fn new(name: impl Into<String>, table_type: TableType) -> Self {
        Self { name: name.into(), table_type }
    }

    pub fn resolve_database_field(&self) -> Option<DatabaseField> {
        self.table_type
            .resolve_database_table()
            .and_then(|table| table.get_field(&self.name))
    }

    pub fn is_datetime(&self) -> bool {
        self.resolve_database_field().is_some_and(|field| field.is_datetime())
    }
}

/// Binding of a dynamic-property access: `properties.<chain...>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyType {
    pub chain: Vec<String>,
    pub field_type: FieldType,
}

impl PropertyType {
    pub fn new(chain: Vec<String>, field_type: FieldType) -> Self {
        Self { chain, field_type }
    }

    /// The property name when the path has exactly one segment.
    pub fn single_segment(&self) -> Option<&str> {
        match self.chain.as_slice() {
            [name] => Some(name.as_str()),
            _ => None,
        }
    }
}

/// Resolved metadata attached to a field reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Field(FieldType),
    Property(PropertyType),
}
