pub mod constant;
pub use constant::*;

pub mod operators;
pub use operators::*;

pub mod escape;
pub use escape::*;

pub mod types;
pub use types::*;

pub mod expr;
pub use expr::*;

pub mod visitor;
pub use visitor::*;
