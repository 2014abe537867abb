pub mod database_field;
pub use database_field::*;

pub mod table;
pub use table::*;

pub mod db_config;
pub use db_config::*;

pub mod db;
pub use db::*;
