//! Catalog Filter Reducer

use crate::actions::FilterAction;
use crate::state::FilterState;

/// Reduce filter actions
pub fn reduce_filter(mut state: FilterState, action: &FilterAction) -> FilterState {
    match action {
        FilterAction::SetCategory(category) => {
            state.category = category.clone();
        }
        FilterAction::SetSortKey(sort_key) => {
            state.sort_key = *sort_key;
        }
        FilterAction::SetSortDirection(direction) => {
            state.sort_direction = *direction;
        }
        FilterAction::SetSearchQuery(query) => {
            state.search_query = query.clone();
        }
        FilterAction::SetPriceRange(range) => {
            state.price_range = *range;
        }
        FilterAction::Reset => {
            log::debug!("Filters reset to defaults");
            state = FilterState::default();
        }
        FilterAction::Update(update) => {
            state.merge(update);
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FilterUpdate, PriceRange, SortDirection, SortKey};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_setters() {
        let state = reduce_filter(
            FilterState::default(),
            &FilterAction::SetCategory("nearby".to_string()),
        );
        let state = reduce_filter(state, &FilterAction::SetSortKey(SortKey::Distance));
        let state = reduce_filter(
            state,
            &FilterAction::SetSortDirection(SortDirection::Ascending),
        );
        let state = reduce_filter(state, &FilterAction::SetSearchQuery("sate".to_string()));
        let state = reduce_filter(
            state,
            &FilterAction::SetPriceRange(PriceRange::new(10_000, 50_000)),
        );

        assert_eq!(
            state,
            FilterState {
                category: "nearby".to_string(),
                search_query: "sate".to_string(),
                sort_key: SortKey::Distance,
                sort_direction: SortDirection::Ascending,
                price_range: PriceRange::new(10_000, 50_000),
            }
        );
    }

    #[test]
    fn test_reset_restores_defaults() {
        let state = reduce_filter(
            FilterState::default(),
            &FilterAction::SetSearchQuery("pizza".to_string()),
        );
        assert!(state.is_active());
        let state = reduce_filter(state, &FilterAction::Reset);
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn test_update_merges_only_provided_fields() {
        let state = reduce_filter(
            FilterState::default(),
            &FilterAction::SetCategory("lunch".to_string()),
        );
        let state = reduce_filter(
            state,
            &FilterAction::Update(FilterUpdate {
                sort_key: Some(SortKey::Name),
                ..Default::default()
            }),
        );
        assert_eq!(state.category, "lunch");
        assert_eq!(state.sort_key, SortKey::Name);
        assert_eq!(state.sort_direction, SortDirection::Descending);
    }
}
