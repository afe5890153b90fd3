//! Protocol catalog - storage, filtering and ranking
//!
//! This module provides the read-only catalog of health protocols and the
//! queries the list and detail views are built from.
//!
//! # Overview
//!
//! - `CatalogStore` holds every protocol, keyed by slug, in catalog order
//! - `query` filters by resource tier and looks protocols up by slug
//! - `sort` ranks a filtered list by importance, cost or ease
//! - `view` combines the two for a list view's current selections
//!
//! # Architecture
//!
//! ```text
//! data/protocols.yaml   ← Embedded catalog document
//!        │
//!        ▼
//!   CatalogStore        ← Parsed and validated once, never mutated
//!        │
//!        ├── protocols_by_tier / protocol_by_slug / all_protocol_slugs
//!        │
//!        ▼
//!   sort_protocols      ← Stable ranking over a filtered list
//! ```

mod error;
mod model;
mod query;
mod sort;
mod store;
mod view;

pub use error::{
    CatalogError, ParseDirectionError, ParseSortKeyError, ParseTierError, ScoreOutOfRange,
};
pub use model::{
    CatalogDocument, DeepDive, DeepDiveSection, Evidence, Product, Protocol, Reference,
    ResourceTier, Score, CATALOG_API_VERSION, CATALOG_KIND, ROUTE_PREFIX,
};
pub use query::{
    all_protocol_slugs, get_all_protocol_slugs, get_protocol_by_slug, get_protocols_by_tier,
    protocol_by_slug, protocols_by_tier, tier_counts,
};
pub use sort::{sort_protocols, SortDirection, SortKey, SortOrder};
pub use store::{CatalogStore, BUILTIN_CATALOG_YAML};
pub use view::{ListItem, ViewState};
