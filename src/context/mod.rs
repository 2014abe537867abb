pub mod notice;
pub use notice::*;

pub mod notices;
pub use notices::*;

pub mod query_context;
pub use query_context::*;
