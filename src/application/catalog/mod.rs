mod catalog_service;
mod errors;

pub use catalog_service::Catalog;
pub use errors::{CatalogError, Result};
