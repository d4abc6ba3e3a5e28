pub mod book;
pub mod commands;
pub mod errors;
pub mod member;
pub mod value_objects;

pub use commands::*;
pub use errors::*;
pub use value_objects::*;
