//! Catalog categories

/// Category sentinel meaning "no category restriction"
pub const ALL_CATEGORIES: &str = "all";

/// A browsable catalog category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

/// Categories shown in the category grid, "all" first
pub const CATEGORIES: &[Category] = &[
    Category {
        id: ALL_CATEGORIES,
        name: "All Restaurant",
        icon: "🍽️",
    },
    Category {
        id: "nearby",
        name: "Nearby",
        icon: "📍",
    },
    Category {
        id: "discount",
        name: "Discount",
        icon: "🏷️",
    },
    Category {
        id: "bestseller",
        name: "Best Seller",
        icon: "🏆",
    },
    Category {
        id: "delivery",
        name: "Delivery",
        icon: "🚚",
    },
    Category {
        id: "lunch",
        name: "Lunch",
        icon: "🍽️",
    },
];

/// Look up a category by id
pub fn find_category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}
