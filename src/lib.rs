pub mod ast;

pub mod database;
pub use database::{Database, DatabaseField, DbConfig, Table};

pub mod catalog;
pub use catalog::{CatalogError, InMemoryCatalog, PropertyCatalog, PropertyCategory, PropertyKind};

pub mod context;
pub use context::{Notice, Notices, QueryContext};

pub mod transforms;
pub use transforms::resolve_property_types;
