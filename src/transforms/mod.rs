pub mod property_scope;
pub use property_scope::*;

pub mod property_finder;
pub use property_finder::*;

pub mod property_type_maps;
pub use property_type_maps::*;

pub mod property_swapper;
pub use property_swapper::*;

pub mod property_types;
pub use property_types::*;

#[cfg(test)]
pub(crate) use _tests::fixtures;
