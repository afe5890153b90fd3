//! Protocol catalog library exports

pub mod catalog;

pub use catalog::{CatalogStore, Protocol, ResourceTier, SortDirection, SortKey, SortOrder};
