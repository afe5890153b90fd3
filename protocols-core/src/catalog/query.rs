//! Read-only catalog queries used by the list and detail views

use tracing::trace;

use super::model::{Protocol, ResourceTier};
use super::store::CatalogStore;

/// Protocols listed under `tier`, in catalog order
///
/// Returns a fresh vector; each matching protocol appears exactly once.
pub fn protocols_by_tier(store: &CatalogStore, tier: ResourceTier) -> Vec<&Protocol> {
    let protocols: Vec<&Protocol> = store.all().iter().filter(|p| p.has_tier(tier)).collect();
    trace!(%tier, count = protocols.len(), "Filtered protocols by tier");
    protocols
}

/// Look up a protocol by slug; `None` when the slug is unknown
pub fn protocol_by_slug<'a>(store: &'a CatalogStore, slug: &str) -> Option<&'a Protocol> {
    store.get(slug)
}

/// Every routable slug, in catalog order
pub fn all_protocol_slugs(store: &CatalogStore) -> Vec<&str> {
    store.slugs()
}

/// Number of protocols per tier, in selector order
pub fn tier_counts(store: &CatalogStore) -> Vec<(ResourceTier, usize)> {
    ResourceTier::ALL
        .iter()
        .map(|&tier| (tier, store.all().iter().filter(|p| p.has_tier(tier)).count()))
        .collect()
}

/// `protocols_by_tier` over the built-in catalog
pub fn get_protocols_by_tier(tier: ResourceTier) -> Vec<&'static Protocol> {
    protocols_by_tier(CatalogStore::builtin(), tier)
}

/// `protocol_by_slug` over the built-in catalog
pub fn get_protocol_by_slug(slug: &str) -> Option<&'static Protocol> {
    protocol_by_slug(CatalogStore::builtin(), slug)
}

/// `all_protocol_slugs` over the built-in catalog
pub fn get_all_protocol_slugs() -> Vec<&'static str> {
    all_protocol_slugs(CatalogStore::builtin())
}

#[cfg(test)]
mod query_tests {
    use super::*;

    fn sample_store() -> CatalogStore {
        CatalogStore::from_yaml(
            r#"
apiVersion: protocols/v1
kind: ProtocolCatalog
protocols:
  - slug: ketogenic-diet
    name: Ketogenic Diet
    importance: 8
    cost: 4
    ease: 5
    tiers: [max, average, limited]
    summary: Keto.
  - slug: pbm
    name: Photobiomodulation
    importance: 6
    cost: 7
    ease: 6
    tiers: [max]
    summary: Light.
  - slug: sleep
    name: Sleep Hygiene
    importance: 7
    cost: 2
    ease: 6
    tiers: [average, limited]
    summary: Sleep.
  - slug: electrolytes
    name: Electrolytes
    importance: 5
    cost: 2
    ease: 9
    tiers: [limited]
    summary: Minerals.
"#,
        )
        .unwrap()
    }

    fn slugs(list: &[&Protocol]) -> Vec<String> {
        list.iter().map(|p| p.slug.clone()).collect()
    }

    #[test]
    fn test_filter_keeps_catalog_order() {
        let store = sample_store();

        assert_eq!(
            slugs(&protocols_by_tier(&store, ResourceTier::Max)),
            vec!["ketogenic-diet", "pbm"]
        );
        assert_eq!(
            slugs(&protocols_by_tier(&store, ResourceTier::Average)),
            vec!["ketogenic-diet", "sleep"]
        );
        assert_eq!(
            slugs(&protocols_by_tier(&store, ResourceTier::Limited)),
            vec!["ketogenic-diet", "sleep", "electrolytes"]
        );
    }

    #[test]
    fn test_lookup_and_slugs() {
        let store = sample_store();

        assert_eq!(protocol_by_slug(&store, "pbm").unwrap().importance.get(), 6);
        assert!(protocol_by_slug(&store, "unknown-protocol-xyz").is_none());
        assert_eq!(
            all_protocol_slugs(&store),
            vec!["ketogenic-diet", "pbm", "sleep", "electrolytes"]
        );
    }

    #[test]
    fn test_tier_counts() {
        let store = sample_store();

        assert_eq!(
            tier_counts(&store),
            vec![
                (ResourceTier::Max, 2),
                (ResourceTier::Average, 2),
                (ResourceTier::Limited, 3),
            ]
        );
    }
}
