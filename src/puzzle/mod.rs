pub mod catalog;
pub mod loader;
pub mod types;

pub use catalog::{Catalog, CatalogError};
pub use loader::{builtin_catalog, load_catalog};
pub use types::Level;
