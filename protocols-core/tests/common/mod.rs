//! Test helper functions for integration tests
//!
//! Shared across test files using the tests/common/ pattern.

use std::sync::Once;

/// Initialize logging for tests (only once per test run)
static INIT: Once = Once::new();

#[allow(dead_code)]
pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_level(true)
                    .with_thread_ids(false)
                    .with_thread_names(false),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Build a catalog document with one protocol entry per `(slug, tiers, importance, cost, ease)`
#[allow(dead_code)]
pub fn catalog_yaml(entries: &[(&str, &str, u8, u8, u8)]) -> String {
    let mut yaml = String::from("apiVersion: protocols/v1\nkind: ProtocolCatalog\nprotocols:\n");
    for (slug, tiers, importance, cost, ease) in entries {
        yaml.push_str(&format!(
            "  - slug: {slug}\n    name: {slug} protocol\n    importance: {importance}\n    cost: {cost}\n    ease: {ease}\n    tiers: [{tiers}]\n    summary: Summary of {slug}.\n    references:\n      - label: {slug} reference\n        citation: Journal.\n"
        ));
    }
    yaml
}
