//! Cart State
//!
//! The cart is the sole authority for quantities and totals. Aggregates are
//! private and recomputed from `lines` after every mutation, so they can never
//! drift from the lines they summarize.

use serde::Serialize;
use storefront_client::{MenuItemRecord, OrderLine};

/// One purchasable line in the cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub id: String,
    pub name: String,
    /// Smallest currency unit
    pub unit_price: u64,
    /// Always >= 1 while the line exists
    pub quantity: u32,
    pub restaurant_id: String,
    pub notes: Option<String>,
    pub image_url: Option<String>,
}

impl CartLine {
    pub fn line_total(&self) -> u64 {
        self.unit_price.saturating_mul(u64::from(self.quantity))
    }
}

/// A line about to be added; the cart owns the quantity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCartLine {
    pub id: String,
    pub name: String,
    pub unit_price: u64,
    pub restaurant_id: String,
    pub notes: Option<String>,
    pub image_url: Option<String>,
}

impl NewCartLine {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        unit_price: u64,
        restaurant_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
            restaurant_id: restaurant_id.into(),
            notes: None,
            image_url: None,
        }
    }

    fn with_quantity(self, quantity: u32) -> CartLine {
        CartLine {
            id: self.id,
            name: self.name,
            unit_price: self.unit_price,
            quantity,
            restaurant_id: self.restaurant_id,
            notes: self.notes,
            image_url: self.image_url,
        }
    }
}

/// Missing or negative menu prices contribute 0 to the subtotal.
impl From<&MenuItemRecord> for NewCartLine {
    fn from(item: &MenuItemRecord) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            unit_price: item
                .price
                .and_then(|p| u64::try_from(p).ok())
                .unwrap_or(0),
            restaurant_id: item.restaurant_id.clone(),
            notes: None,
            image_url: item.image_url.clone(),
        }
    }
}

/// Flat fees charged on a non-empty order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckoutFees {
    pub delivery_fee: u64,
    pub service_fee: u64,
}

impl From<&storefront_config::AppConfig> for CheckoutFees {
    fn from(config: &storefront_config::AppConfig) -> Self {
        Self {
            delivery_fee: config.delivery_fee,
            service_fee: config.service_fee,
        }
    }
}

/// Totals shown in the cart drawer footer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckoutSummary {
    pub subtotal: u64,
    pub delivery_fee: u64,
    pub service_fee: u64,
    pub total: u64,
}

/// Cart state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CartState {
    lines: Vec<CartLine>,
    subtotal: u64,
    line_count: u64,
}

impl CartState {
    /// Lines in insertion order
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Σ(unit_price × quantity)
    pub fn subtotal(&self) -> u64 {
        self.subtotal
    }

    /// Σ(quantity), the badge count
    pub fn line_count(&self) -> u64 {
        self.line_count
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == id)
    }

    fn line_mut(&mut self, id: &str) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.id == id)
    }

    fn recalculate(&mut self) {
        self.subtotal = self
            .lines
            .iter()
            .fold(0u64, |acc, l| acc.saturating_add(l.line_total()));
        self.line_count = self
            .lines
            .iter()
            .fold(0u64, |acc, l| acc.saturating_add(u64::from(l.quantity)));
    }

    /// Add `quantity` of a line. An existing id is incremented in place;
    /// a quantity of 0 changes nothing.
    pub fn add_item(&mut self, line: NewCartLine, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.line_mut(&line.id) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(quantity);
            }
            None => self.lines.push(line.with_quantity(quantity)),
        }
        self.recalculate();
    }

    /// Absolute quantity set; `<= 0` removes the line, unknown ids are ignored
    pub fn set_quantity(&mut self, id: &str, quantity: i64) {
        let Some(line) = self.line_mut(id) else {
            return;
        };
        if quantity <= 0 {
            self.lines.retain(|l| l.id != id);
        } else {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
        self.recalculate();
    }

    pub fn remove_item(&mut self, id: &str) {
        self.lines.retain(|l| l.id != id);
        self.recalculate();
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.subtotal = 0;
        self.line_count = 0;
    }

    /// Set notes on an existing line; empty notes clear them
    pub fn set_notes(&mut self, id: &str, notes: &str) {
        if let Some(line) = self.line_mut(id) {
            line.notes = Some(notes.to_string()).filter(|n| !n.trim().is_empty());
        }
    }

    /// Checkout totals; an empty cart is charged nothing
    pub fn summary(&self, fees: CheckoutFees) -> CheckoutSummary {
        if self.is_empty() {
            return CheckoutSummary::default();
        }
        CheckoutSummary {
            subtotal: self.subtotal,
            delivery_fee: fees.delivery_fee,
            service_fee: fees.service_fee,
            total: self
                .subtotal
                .saturating_add(fees.delivery_fee)
                .saturating_add(fees.service_fee),
        }
    }

    /// Lines as submitted to the order service
    pub fn order_lines(&self) -> Vec<OrderLine> {
        self.lines
            .iter()
            .map(|l| OrderLine {
                id: l.id.clone(),
                name: l.name.clone(),
                price: l.unit_price,
                quantity: l.quantity,
                restaurant_id: l.restaurant_id.clone(),
                notes: l.notes.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn special() -> NewCartLine {
        NewCartLine::new("r1-special", "House Special", 25_000, "r1")
    }

    fn drink() -> NewCartLine {
        NewCartLine::new("r1-drink", "Iced Tea", 8_000, "r1")
    }

    fn assert_consistent(cart: &CartState) {
        let subtotal: u64 = cart
            .lines()
            .iter()
            .map(|l| l.unit_price * u64::from(l.quantity))
            .sum();
        let count: u64 = cart.lines().iter().map(|l| u64::from(l.quantity)).sum();
        assert_eq!(cart.subtotal(), subtotal);
        assert_eq!(cart.line_count(), count);
        assert!(cart.lines().iter().all(|l| l.quantity >= 1));
    }

    #[test]
    fn test_add_same_id_increments() {
        let mut cart = CartState::default();
        cart.add_item(special(), 1);
        cart.add_item(special(), 1);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.subtotal(), 50_000);
        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut cart = CartState::default();
        cart.add_item(special(), 1);
        cart.add_item(drink(), 2);
        cart.add_item(special(), 3);
        let ids: Vec<_> = cart.lines().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["r1-special", "r1-drink"]);
        assert_eq!(cart.line("r1-special").unwrap().quantity, 4);
        assert_consistent(&cart);
    }

    #[test]
    fn test_add_zero_is_noop() {
        let mut cart = CartState::default();
        cart.add_item(special(), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = CartState::default();
        cart.add_item(special(), 1);
        cart.set_quantity("r1-special", 3);
        assert_eq!(cart.subtotal(), 75_000);
        assert_eq!(cart.line_count(), 3);

        cart.set_quantity("r1-special", 0);
        assert_eq!(cart, CartState::default());
    }

    #[test]
    fn test_set_quantity_negative_removes() {
        let mut cart = CartState::default();
        cart.add_item(special(), 2);
        cart.add_item(drink(), 1);
        cart.set_quantity("r1-special", -4);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.subtotal(), 8_000);
    }

    #[test]
    fn test_set_quantity_missing_id_is_noop() {
        let mut cart = CartState::default();
        cart.add_item(drink(), 1);
        let before = cart.clone();
        cart.set_quantity("missing", 5);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_twice_is_safe() {
        let mut cart = CartState::default();
        cart.add_item(special(), 1);
        cart.remove_item("r1-special");
        cart.remove_item("r1-special");
        assert_eq!(cart, CartState::default());
    }

    #[test]
    fn test_clear() {
        let mut cart = CartState::default();
        cart.add_item(special(), 4);
        cart.add_item(drink(), 2);
        cart.clear();
        assert!(cart.lines().is_empty());
        assert_eq!(cart.subtotal(), 0);
        assert_eq!(cart.line_count(), 0);
    }

    #[test]
    fn test_notes_do_not_touch_aggregates() {
        let mut cart = CartState::default();
        cart.add_item(special(), 2);
        let subtotal = cart.subtotal();
        cart.set_notes("r1-special", "no onions");
        cart.set_notes("missing", "ignored");
        assert_eq!(cart.lines()[0].notes.as_deref(), Some("no onions"));
        assert_eq!(cart.subtotal(), subtotal);
        cart.set_notes("r1-special", "  ");
        assert_eq!(cart.lines()[0].notes, None);
    }

    #[test]
    fn test_menu_item_without_price_contributes_zero() {
        let item = MenuItemRecord {
            id: "r1-free".to_string(),
            name: "Free Water".to_string(),
            price: None,
            description: None,
            image_url: None,
            category_id: None,
            restaurant_id: "r1".to_string(),
            rating: None,
            is_available: None,
        };
        let negative = MenuItemRecord {
            id: "r1-bad".to_string(),
            price: Some(-500),
            ..item.clone()
        };
        let mut cart = CartState::default();
        cart.add_item(NewCartLine::from(&item), 3);
        cart.add_item(NewCartLine::from(&negative), 1);
        assert_eq!(cart.subtotal(), 0);
        assert_eq!(cart.line_count(), 4);
    }

    #[test]
    fn test_summary() {
        let fees = CheckoutFees {
            delivery_fee: 5_000,
            service_fee: 2_000,
        };
        let mut cart = CartState::default();
        assert_eq!(cart.summary(fees), CheckoutSummary::default());

        cart.add_item(special(), 2);
        assert_eq!(
            cart.summary(fees),
            CheckoutSummary {
                subtotal: 50_000,
                delivery_fee: 5_000,
                service_fee: 2_000,
                total: 57_000,
            }
        );
    }

    #[test]
    fn test_quantity_saturates() {
        let mut cart = CartState::default();
        cart.add_item(special(), u32::MAX);
        cart.add_item(special(), 10);
        assert_eq!(cart.lines()[0].quantity, u32::MAX);
        cart.set_quantity("r1-special", i64::MAX);
        assert_eq!(cart.lines()[0].quantity, u32::MAX);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(usize, u32),
        Set(usize, i64),
        Remove(usize),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..4usize, 0..5u32).prop_map(|(i, q)| Op::Add(i, q)),
            (0..5usize, -2..6i64).prop_map(|(i, q)| Op::Set(i, q)),
            (0..5usize).prop_map(Op::Remove),
        ]
    }

    proptest! {
        #[test]
        fn prop_aggregates_match_lines(ops in prop::collection::vec(op(), 0..40)) {
            let catalog = [
                NewCartLine::new("a", "A", 1_000, "r1"),
                NewCartLine::new("b", "B", 25_000, "r1"),
                NewCartLine::new("c", "C", 0, "r2"),
                NewCartLine::new("d", "D", 7_500, "r3"),
            ];
            let id = |i: usize| catalog.get(i).map(|l| l.id.clone()).unwrap_or_else(|| "zz".to_string());

            let mut cart = CartState::default();
            for op in ops {
                match op {
                    Op::Add(i, q) => cart.add_item(catalog[i].clone(), q),
                    Op::Set(i, q) => cart.set_quantity(&id(i), q),
                    Op::Remove(i) => cart.remove_item(&id(i)),
                }
                assert_consistent(&cart);
            }
            let ids: std::collections::HashSet<_> = cart.lines().iter().map(|l| l.id.as_str()).collect();
            prop_assert_eq!(ids.len(), cart.lines().len());
        }
    }
}
