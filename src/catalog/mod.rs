pub mod property_kind;
pub use property_kind::*;

pub mod catalog_error;
pub use catalog_error::*;

pub mod property_catalog;
pub use property_catalog::*;

pub mod memory_catalog;
pub use memory_catalog::*;
