//! Immutable protocol catalog store
//!
//! A `CatalogStore` is built once from a catalog document, validated, and
//! then only ever read. The built-in store is parsed lazily from the
//! embedded `data/protocols.yaml` on first access and shared process-wide.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{debug, warn};

use super::error::CatalogError;
use super::model::{CatalogDocument, Protocol, CATALOG_API_VERSION, CATALOG_KIND};

/// Catalog shipped with the crate
pub const BUILTIN_CATALOG_YAML: &str = include_str!("../../data/protocols.yaml");

static BUILTIN: Lazy<CatalogStore> = Lazy::new(|| {
    CatalogStore::from_yaml(BUILTIN_CATALOG_YAML)
        .unwrap_or_else(|err| panic!("embedded protocol catalog is invalid: {err}"))
});

/// Read-only mapping from slug to protocol, in catalog order
#[derive(Debug, Clone)]
pub struct CatalogStore {
    title: String,
    introduction: Vec<String>,
    protocols: Vec<Protocol>,
    by_slug: HashMap<String, usize>,
}

impl CatalogStore {
    /// The process-wide catalog built from the embedded data
    pub fn builtin() -> &'static CatalogStore {
        &BUILTIN
    }

    /// Parse and validate a catalog from YAML
    pub fn from_yaml(content: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument =
            serde_yaml_ng::from_str(content).map_err(|source| CatalogError::Parse { source })?;
        Self::from_document(document)
    }

    /// Load a catalog from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loading protocol catalog from {}", path.display());
        Self::from_yaml(&content)
    }

    /// Validate a parsed document and index it by slug
    pub fn from_document(document: CatalogDocument) -> Result<Self, CatalogError> {
        if document.api_version != CATALOG_API_VERSION {
            return Err(CatalogError::UnsupportedApiVersion {
                found: document.api_version,
                expected: CATALOG_API_VERSION,
            });
        }

        if document.kind != CATALOG_KIND {
            return Err(CatalogError::InvalidKind {
                found: document.kind,
                expected: CATALOG_KIND,
            });
        }

        let mut by_slug = HashMap::with_capacity(document.protocols.len());
        for (position, protocol) in document.protocols.iter().enumerate() {
            validate_protocol(protocol)?;

            if let Some(first) = by_slug.insert(protocol.slug.clone(), position) {
                return Err(CatalogError::DuplicateSlug {
                    slug: protocol.slug.clone(),
                    first,
                    second: position,
                });
            }

            if protocol.references.is_empty() {
                warn!(slug = %protocol.slug, "Protocol has no references");
            }
        }

        debug!(
            count = document.protocols.len(),
            "Protocol catalog loaded"
        );

        Ok(Self {
            title: document.title,
            introduction: document.introduction,
            protocols: document.protocols,
            by_slug,
        })
    }

    /// Every protocol, in catalog order
    pub fn all(&self) -> &[Protocol] {
        &self.protocols
    }

    /// Exact, case-sensitive lookup
    pub fn get(&self, slug: &str) -> Option<&Protocol> {
        self.by_slug.get(slug).map(|&position| &self.protocols[position])
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.by_slug.contains_key(slug)
    }

    /// Every slug, in catalog order
    pub fn slugs(&self) -> Vec<&str> {
        self.protocols.iter().map(|p| p.slug.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.protocols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.protocols.is_empty()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn introduction(&self) -> &[String] {
        &self.introduction
    }
}

/// Check the per-record invariants that serde cannot express
fn validate_protocol(protocol: &Protocol) -> Result<(), CatalogError> {
    if !is_valid_slug(&protocol.slug) {
        return Err(CatalogError::InvalidSlug {
            slug: protocol.slug.clone(),
        });
    }

    if protocol.tiers.is_empty() {
        return Err(CatalogError::EmptyTiers {
            slug: protocol.slug.clone(),
        });
    }

    let mut seen = HashSet::with_capacity(protocol.tiers.len());
    for tier in &protocol.tiers {
        if !seen.insert(*tier) {
            return Err(CatalogError::DuplicateTier {
                slug: protocol.slug.clone(),
                tier: *tier,
            });
        }
    }

    Ok(())
}

/// Lowercase alphanumeric words joined by single hyphens
fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.split('-').all(|word| {
            !word.is_empty()
                && word
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
}
