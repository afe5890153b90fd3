//! Catalog error types with clear, actionable messages

use std::path::PathBuf;
use thiserror::Error;

use super::model::ResourceTier;

/// Errors raised while loading or validating a protocol catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog document is not valid YAML or does not match the schema
    #[error("Failed to parse protocol catalog YAML")]
    Parse {
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// Failed to read a catalog file from disk
    #[error("Failed to read protocol catalog from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported apiVersion '{found}'. Expected '{expected}'")]
    UnsupportedApiVersion {
        found: String,
        expected: &'static str,
    },

    #[error("Invalid kind '{found}'. Expected '{expected}'")]
    InvalidKind {
        found: String,
        expected: &'static str,
    },

    /// Slug is not usable as a route segment
    #[error(
        "Protocol slug '{slug}' must be lowercase alphanumeric words joined by single hyphens"
    )]
    InvalidSlug { slug: String },

    #[error("Duplicate protocol slug '{slug}' (records {first} and {second})")]
    DuplicateSlug {
        slug: String,
        first: usize,
        second: usize,
    },

    /// A protocol with no tiers would be unreachable from every list view
    #[error("Protocol '{slug}' must list at least one resource tier")]
    EmptyTiers { slug: String },

    #[error("Protocol '{slug}' lists tier '{tier}' more than once")]
    DuplicateTier { slug: String, tier: ResourceTier },
}

/// A resource tier name outside `max`, `average`, `limited`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown resource tier '{0}'. Valid tiers: max, average, limited")]
pub struct ParseTierError(pub String);

/// A sort key name outside `importance`, `cost`, `ease`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown sort key '{0}'. Valid keys: importance, cost, ease")]
pub struct ParseSortKeyError(pub String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown sort direction '{0}'. Valid directions: asc, desc")]
pub struct ParseDirectionError(pub String);

/// A score outside the inclusive 1..=10 range
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Score {0} is out of range (expected 1-10)")]
pub struct ScoreOutOfRange(pub u8);
