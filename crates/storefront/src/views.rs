//! Console views
//!
//! Render state snapshots as text. Views only read state; they never
//! dispatch. Each view collects its lines and joins them at the end.

use crate::domain_models::format::{format_currency, format_distance, format_rating};
use crate::domain_models::{display_list, find_category, Restaurant};
use crate::state::{AppState, CatalogSource, LoadingState, SortDirection};
use storefront_client::Order;

/// Render everything currently visible
pub fn render(state: &AppState) -> String {
    let mut sections = vec![render_catalog(state)];
    if state.ui.menu_open {
        sections.push(render_menu(state));
    }
    if state.ui.cart_open {
        sections.push(render_cart(state));
    }
    if state.order.history_status != LoadingState::Idle {
        sections.push(render_orders(state));
    }
    sections.push(render_status(state));
    sections.retain(|s| !s.is_empty());
    sections.join("\n\n")
}

fn filter_summary(state: &AppState) -> String {
    let filters = &state.filters;
    let category = find_category(&filters.category)
        .map(|c| c.name.to_string())
        .unwrap_or_else(|| filters.category.clone());
    let direction = match filters.sort_direction {
        SortDirection::Descending => "",
        SortDirection::Ascending => " (reversed)",
    };

    let mut parts = vec![
        category,
        format!("{}{}", filters.sort_key.label(), direction),
    ];
    if !filters.search_query.is_empty() {
        parts.push(format!("\"{}\"", filters.search_query));
    }
    if !filters.price_range.is_full() {
        let currency = &state.app_config.currency;
        parts.push(format!(
            "{} - {}",
            format_currency(filters.price_range.min, currency),
            format_currency(filters.price_range.max, currency)
        ));
    }
    parts.join(" · ")
}

/// Restaurant list for the current filter
pub fn render_catalog(state: &AppState) -> String {
    let mut lines = vec![format!("Restaurants: {}", filter_summary(state))];

    if state.catalog.is_loading() {
        lines.push("  loading...".to_string());
    }
    match state.catalog.source {
        CatalogSource::LastKnownGood => lines.push("  (showing previous results)".to_string()),
        CatalogSource::Demo => lines.push("  (offline, showing sample restaurants)".to_string()),
        CatalogSource::Empty | CatalogSource::Live => {}
    }

    let page = display_list(
        &state.catalog.restaurants,
        &state.filters,
        state.app_config.page_limit,
        state.catalog.show_all,
    );
    if page.restaurants.is_empty() && !state.catalog.is_loading() {
        lines.push("  No restaurants found".to_string());
    }
    for restaurant in &page.restaurants {
        let price = restaurant
            .average_price
            .map(|p| format_currency(p, &state.app_config.currency))
            .unwrap_or_default();
        let closed = if restaurant.is_open { "" } else { " [closed]" };
        lines.push(format!(
            "  {:<4} {:<26} ★{:<4} {:>7}  {:<18} {}{}",
            restaurant.id,
            restaurant.name,
            format_rating(restaurant.rating),
            format_distance(restaurant.distance_km),
            restaurant.location,
            price,
            closed
        ));
    }
    if page.has_more {
        lines.push(format!(
            "  {} of {} shown, 'more' to see all",
            page.restaurants.len(),
            page.total_matches
        ));
    }
    lines.join("\n").trim_end().to_string()
}

fn restaurant_details(restaurant: &Restaurant) -> String {
    let mut details = vec![
        format!("★{}", format_rating(restaurant.rating)),
        format_distance(restaurant.distance_km),
    ];
    if let Some(delivery_time) = &restaurant.delivery_time {
        details.push(delivery_time.clone());
    }
    details.push(if restaurant.is_open { "open" } else { "closed" }.to_string());
    format!("  {}", details.join(" · "))
}

/// Menu of the open restaurant
pub fn render_menu(state: &AppState) -> String {
    let Some(menu) = &state.catalog.menu else {
        return String::new();
    };
    let restaurant = menu.restaurant.as_ref().or_else(|| {
        state
            .catalog
            .restaurants
            .iter()
            .find(|r| r.id == menu.restaurant_id)
    });
    let name = restaurant
        .map(|r| r.name.as_str())
        .unwrap_or(menu.restaurant_id.as_str());

    let mut lines = vec![format!("Menu: {}", name)];
    if let Some(restaurant) = restaurant {
        lines.push(restaurant_details(restaurant));
    }
    match &menu.status {
        LoadingState::Loading => lines.push("  loading...".to_string()),
        LoadingState::Error(error) => lines.push(format!("  unavailable: {}", error)),
        LoadingState::Idle | LoadingState::Loaded => {}
    }
    for item in &menu.items {
        let price = u64::try_from(item.price.unwrap_or(0)).unwrap_or(0);
        let sold_out = if item.is_available == Some(false) {
            " [sold out]"
        } else {
            ""
        };
        lines.push(format!(
            "  {:<14} {:<24} {}{}",
            item.id,
            item.name,
            format_currency(price, &state.app_config.currency),
            sold_out
        ));
    }
    lines.join("\n")
}

/// Cart lines and checkout totals
pub fn render_cart(state: &AppState) -> String {
    let cart = &state.cart;
    let currency = &state.app_config.currency;
    let mut lines = vec![format!("Cart ({} items)", cart.line_count())];

    if cart.is_empty() {
        lines.push("  Your cart is empty".to_string());
        return lines.join("\n");
    }
    for line in cart.lines() {
        lines.push(format!(
            "  {:>3} x {:<24} {}",
            line.quantity,
            line.name,
            format_currency(line.line_total(), currency)
        ));
        if let Some(notes) = &line.notes {
            lines.push(format!("        note: {}", notes));
        }
    }

    let summary = cart.summary(state.checkout_fees());
    for (label, amount) in [
        ("Subtotal", summary.subtotal),
        ("Delivery fee", summary.delivery_fee),
        ("Service fee", summary.service_fee),
        ("Total", summary.total),
    ] {
        lines.push(format!("  {:<13} {}", label, format_currency(amount, currency)));
    }
    lines.join("\n")
}

fn order_line(order: &Order, currency: &str) -> String {
    format!(
        "  {:<8} {:<10} {:>12}  {}",
        order.id,
        format!("{:?}", order.status),
        format_currency(order.total, currency),
        order.created_at.format("%Y-%m-%d %H:%M")
    )
}

/// Order history, newest first
pub fn render_orders(state: &AppState) -> String {
    let order = &state.order;
    let mut lines = vec![format!("Orders ({})", order.history.len())];
    match &order.history_status {
        LoadingState::Loading => lines.push("  loading...".to_string()),
        LoadingState::Error(error) => lines.push(format!("  unavailable: {}", error)),
        LoadingState::Loaded if order.history.is_empty() => {
            lines.push("  No orders yet".to_string())
        }
        LoadingState::Idle | LoadingState::Loaded => {}
    }
    lines.extend(
        order
            .history
            .iter()
            .map(|o| order_line(o, &state.app_config.currency)),
    );
    lines.join("\n")
}

/// Session, last order and last error
pub fn render_status(state: &AppState) -> String {
    let mut lines = Vec::new();
    if let Some(user) = state.session.user() {
        lines.push(format!("Signed in as {}", user.email));
    }
    if state.order.submitting {
        lines.push("Placing order...".to_string());
    } else if let Some(order) = &state.order.last_order {
        lines.push(format!(
            "Order {} {:?}, total {}",
            order.id,
            order.status,
            format_currency(order.total, &state.app_config.currency)
        ));
    }
    if let Some(error) = &state.ui.error {
        lines.push(format!("Error: {}", error));
    }
    lines.join("\n")
}
