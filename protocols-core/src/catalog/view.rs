//! Ephemeral list-view state: selected tier, sort key and direction
//!
//! The state lives only as long as a render. Every transition is valid since
//! each field is a closed enum.

use serde::Serialize;

use super::model::{ResourceTier, ROUTE_PREFIX};
use super::query::protocols_by_tier;
use super::sort::{sort_protocols, SortDirection, SortKey, SortOrder};
use super::store::CatalogStore;

/// Current selections of a list view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    pub tier: ResourceTier,
    pub sort_key: SortKey,

    /// `None` until the direction is toggled or set explicitly
    pub direction: Option<SortDirection>,
}

/// One ranked row of a list view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem<'a> {
    /// 1-based position in the ranked list
    pub rank: usize,
    pub slug: &'a str,
    pub name: &'a str,
    pub importance: u8,
    pub cost: u8,
    pub ease: u8,
    pub route: String,
}

impl ViewState {
    pub fn new(tier: ResourceTier, sort_key: SortKey) -> Self {
        Self {
            tier,
            sort_key,
            direction: None,
        }
    }

    pub fn select_tier(&mut self, tier: ResourceTier) {
        self.tier = tier;
    }

    /// Switch the ranking key, returning to that key's natural direction
    pub fn select_sort_key(&mut self, sort_key: SortKey) {
        self.sort_key = sort_key;
        self.direction = None;
    }

    pub fn set_direction(&mut self, direction: SortDirection) {
        self.direction = Some(direction);
    }

    /// Flip the effective direction
    pub fn toggle_direction(&mut self) {
        self.direction = Some(self.sort_order().effective_direction().toggled());
    }

    pub fn sort_order(&self) -> SortOrder {
        SortOrder {
            key: self.sort_key,
            direction: self.direction,
        }
    }

    /// Filter by the selected tier and rank by the selected order
    pub fn render_list<'a>(&self, store: &'a CatalogStore) -> Vec<ListItem<'a>> {
        self.render_list_with_prefix(store, ROUTE_PREFIX)
    }

    pub fn render_list_with_prefix<'a>(
        &self,
        store: &'a CatalogStore,
        route_prefix: &str,
    ) -> Vec<ListItem<'a>> {
        let filtered = protocols_by_tier(store, self.tier);
        sort_protocols(&filtered, self.sort_order())
            .into_iter()
            .enumerate()
            .map(|(index, protocol)| ListItem {
                rank: index + 1,
                slug: &protocol.slug,
                name: &protocol.name,
                importance: protocol.importance.get(),
                cost: protocol.cost.get(),
                ease: protocol.ease.get(),
                route: protocol.route_with_prefix(route_prefix),
            })
            .collect()
    }
}

#[cfg(test)]
mod view_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_store() -> CatalogStore {
        CatalogStore::from_yaml(
            r#"
apiVersion: protocols/v1
kind: ProtocolCatalog
protocols:
  - slug: nad
    name: NAD+ Support
    importance: 7
    cost: 6
    ease: 6
    tiers: [max, average]
    summary: NAD.
  - slug: movement
    name: Functional Movement
    importance: 9
    cost: 3
    ease: 6
    tiers: [max, average]
    summary: Move.
  - slug: hbot
    name: Hyperbaric Oxygen
    importance: 5
    cost: 8
    ease: 4
    tiers: [max]
    summary: Oxygen.
"#,
        )
        .unwrap()
    }

    fn ranked_slugs(items: &[ListItem<'_>]) -> Vec<String> {
        items.iter().map(|item| item.slug.to_string()).collect()
    }

    #[test]
    fn test_initial_state() {
        let state = ViewState::default();
        assert_eq!(state.tier, ResourceTier::Max);
        assert_eq!(state.sort_key, SortKey::Importance);
        assert_eq!(state.direction, None);
        assert_eq!(
            state.sort_order().effective_direction(),
            SortDirection::Descending
        );
    }

    #[test]
    fn test_render_default_list() {
        let store = sample_store();
        let items = ViewState::default().render_list(&store);

        assert_eq!(ranked_slugs(&items), vec!["movement", "nad", "hbot"]);
        assert_eq!(
            items[0],
            ListItem {
                rank: 1,
                slug: "movement",
                name: "Functional Movement",
                importance: 9,
                cost: 3,
                ease: 6,
                route: "/pd/protocols/movement".to_string(),
            }
        );
        assert_eq!(items[2].rank, 3);
    }

    #[test]
    fn test_transitions() {
        let store = sample_store();
        let mut state = ViewState::default();

        state.select_tier(ResourceTier::Average);
        assert_eq!(ranked_slugs(&state.render_list(&store)), vec!["movement", "nad"]);

        state.select_sort_key(SortKey::Cost);
        assert_eq!(ranked_slugs(&state.render_list(&store)), vec!["movement", "nad"]);

        state.toggle_direction();
        assert_eq!(state.direction, Some(SortDirection::Descending));
        assert_eq!(ranked_slugs(&state.render_list(&store)), vec!["nad", "movement"]);

        // Changing key returns to the natural direction of the new key
        state.select_sort_key(SortKey::Ease);
        assert_eq!(state.direction, None);
        // Equal ease keeps catalog order
        assert_eq!(ranked_slugs(&state.render_list(&store)), vec!["nad", "movement"]);

        state.select_tier(ResourceTier::Max);
        state.set_direction(SortDirection::Ascending);
        assert_eq!(
            ranked_slugs(&state.render_list(&store)),
            vec!["hbot", "nad", "movement"]
        );
    }

    #[test]
    fn test_list_item_json_shape() {
        let store = sample_store();
        let items = ViewState::default().render_list(&store);

        let value = serde_json::to_value(&items[0]).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "rank": 1,
                "slug": "movement",
                "name": "Functional Movement",
                "importance": 9,
                "cost": 3,
                "ease": 6,
                "route": "/pd/protocols/movement",
            })
        );
    }

    #[test]
    fn test_custom_route_prefix() {
        let store = sample_store();
        let items = ViewState::new(ResourceTier::Max, SortKey::Cost)
            .render_list_with_prefix(&store, "https://example.org/p/");

        assert_eq!(items[0].slug, "movement");
        assert_eq!(items[0].route, "https://example.org/p/movement");
    }
}
