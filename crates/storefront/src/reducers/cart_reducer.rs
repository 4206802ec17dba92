//! Cart Reducer

use crate::actions::CartAction;
use crate::state::CartState;

/// Reduce cart actions
pub fn reduce_cart(mut state: CartState, action: &CartAction) -> CartState {
    match action {
        CartAction::AddItem { line, quantity } => {
            log::debug!("Cart: add {} x{}", line.id, quantity);
            state.add_item(line.clone(), *quantity);
        }
        CartAction::SetQuantity { id, quantity } => {
            if state.line(id).is_none() {
                log::debug!("Cart: set quantity on unknown line {}, ignoring", id);
            }
            state.set_quantity(id, *quantity);
        }
        CartAction::RemoveItem(id) => {
            state.remove_item(id);
        }
        CartAction::Clear => {
            state.clear();
        }
        CartAction::SetNotes { id, notes } => {
            state.set_notes(id, notes);
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NewCartLine;
    use pretty_assertions::assert_eq;

    fn special() -> NewCartLine {
        NewCartLine::new("r1-special", "Chef's Special", 25_000, "r1")
    }

    #[test]
    fn test_add_then_set_quantity_then_remove() {
        let state = reduce_cart(CartState::default(), &CartAction::add(special()));
        assert_eq!(state.lines().len(), 1);
        assert_eq!(state.lines()[0].quantity, 1);
        assert_eq!(state.subtotal(), 25_000);
        assert_eq!(state.line_count(), 1);

        let state = reduce_cart(
            state,
            &CartAction::SetQuantity {
                id: "r1-special".to_string(),
                quantity: 3,
            },
        );
        assert_eq!(state.subtotal(), 75_000);
        assert_eq!(state.line_count(), 3);

        let state = reduce_cart(state, &CartAction::RemoveItem("r1-special".to_string()));
        assert_eq!(state, CartState::default());
    }

    #[test]
    fn test_add_same_id_twice_merges() {
        let state = reduce_cart(CartState::default(), &CartAction::add(special()));
        let state = reduce_cart(state, &CartAction::add(special()));
        assert_eq!(state.lines().len(), 1);
        assert_eq!(state.lines()[0].quantity, 2);
    }

    #[test]
    fn test_set_quantity_missing_id_is_noop() {
        let before = reduce_cart(CartState::default(), &CartAction::add(special()));
        let after = reduce_cart(
            before.clone(),
            &CartAction::SetQuantity {
                id: "missing".to_string(),
                quantity: 5,
            },
        );
        assert_eq!(after, before);
    }

    #[test]
    fn test_clear_always_empties() {
        let state = reduce_cart(
            CartState::default(),
            &CartAction::AddItem {
                line: special(),
                quantity: 4,
            },
        );
        let state = reduce_cart(state, &CartAction::Clear);
        assert!(state.lines().is_empty());
        assert_eq!(state.subtotal(), 0);
        assert_eq!(state.line_count(), 0);
    }

    #[test]
    fn test_set_notes_keeps_aggregates() {
        let state = reduce_cart(CartState::default(), &CartAction::add(special()));
        let state = reduce_cart(
            state,
            &CartAction::SetNotes {
                id: "r1-special".to_string(),
                notes: "no onions".to_string(),
            },
        );
        assert_eq!(state.lines()[0].notes.as_deref(), Some("no onions"));
        assert_eq!(state.subtotal(), 25_000);
    }
}
