//! Course catalog: record stores and the loader that turns rows into facts

pub mod loader;
pub mod store;

pub use loader::{load_facts, CatalogFacts};
pub use store::{CatalogRow, CatalogStore, CsvCatalogStore, MemoryCatalogStore};
