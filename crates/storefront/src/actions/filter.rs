//! Catalog filter actions

use crate::state::{FilterUpdate, PriceRange, SortDirection, SortKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    SetCategory(String),
    SetSortKey(SortKey),
    SetSortDirection(SortDirection),
    SetSearchQuery(String),
    SetPriceRange(PriceRange),
    /// Restore every field to its default
    Reset,
    /// Merge only the provided fields
    Update(FilterUpdate),
}
