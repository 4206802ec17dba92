//! Cart actions

use crate::state::NewCartLine;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Add `quantity` of a line; an existing id has its quantity increased
    AddItem { line: NewCartLine, quantity: u32 },
    /// Set the absolute quantity of a line; zero or below removes it
    SetQuantity { id: String, quantity: i64 },
    /// Remove a line
    RemoveItem(String),
    /// Empty the cart
    Clear,
    /// Replace the notes of a line
    SetNotes { id: String, notes: String },
}

impl CartAction {
    /// Add a single unit of `line`
    pub fn add(line: NewCartLine) -> Self {
        CartAction::AddItem { line, quantity: 1 }
    }
}
