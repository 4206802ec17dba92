//! Storefront client trait and catalog query descriptor
//!
//! This module defines the core `StorefrontClient` trait that every backend
//! implementation must satisfy, as well as the `CatalogQuery` sent to the
//! restaurant listing endpoint.

use crate::error::ClientError;
use crate::types::{
    AuthSession, LoginCredentials, MenuItemRecord, Order, OrderDraft, OrderStatus,
    RegisterData, RestaurantRecord,
};
use async_trait::async_trait;

/// Query parameters for the restaurant listing endpoint
///
/// Absent fields are not sent. The category sentinel "all" is never sent;
/// callers pass `None` instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort_by: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl CatalogQuery {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Render as URL query pairs, in the order the listing endpoint documents
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(search) = self.search.as_ref().filter(|s| !s.is_empty()) {
            params.push(("search", search.clone()));
        }
        if let Some(category) = &self.category {
            params.push(("category", category.clone()));
        }
        if let Some(sort_by) = &self.sort_by {
            params.push(("sortBy", sort_by.clone()));
        }
        if let Some(limit) = self.limit.filter(|l| *l > 0) {
            params.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset.filter(|o| *o > 0) {
            params.push(("offset", offset.to_string()));
        }
        params
    }
}

/// Storefront API client trait
///
/// Implementations must be `Send + Sync` so a single client can be shared
/// across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use storefront_client::{CatalogQuery, StorefrontClient};
///
/// async fn first_page(client: &dyn StorefrontClient) -> usize {
///     client
///         .fetch_restaurants(&CatalogQuery::default())
///         .await
///         .map(|r| r.len())
///         .unwrap_or(0)
/// }
/// ```
#[async_trait]
pub trait StorefrontClient: Send + Sync {
    /// Fetch restaurants matching the query
    async fn fetch_restaurants(
        &self,
        query: &CatalogQuery,
    ) -> Result<Vec<RestaurantRecord>, ClientError>;

    /// Fetch a single restaurant by id
    async fn fetch_restaurant(&self, id: &str) -> Result<RestaurantRecord, ClientError>;

    /// Fetch the menu of a restaurant
    async fn fetch_menu(&self, restaurant_id: &str) -> Result<Vec<MenuItemRecord>, ClientError>;

    /// Exchange credentials for an authenticated session
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthSession, ClientError>;

    /// Create an account and sign in to it
    async fn register(&self, data: &RegisterData) -> Result<AuthSession, ClientError>;

    /// Submit an order
    async fn place_order(&self, draft: &OrderDraft) -> Result<Order, ClientError>;

    /// List orders, only those of `user_id` when given
    async fn fetch_orders(&self, user_id: Option<&str>) -> Result<Vec<Order>, ClientError>;

    /// Fetch a single order by id
    async fn fetch_order(&self, id: &str) -> Result<Order, ClientError>;

    /// Move an order to a new status
    async fn update_order_status(
        &self,
        id: &str,
        status: OrderStatus,
    ) -> Result<Order, ClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_has_no_params() {
        assert!(CatalogQuery::default().to_params().is_empty());
    }

    #[test]
    fn test_params_skip_empty_search_and_zero_offset() {
        let query = CatalogQuery {
            search: Some(String::new()),
            category: Some("burger".to_string()),
            sort_by: Some("rating".to_string()),
            limit: Some(12),
            offset: Some(0),
        };
        assert_eq!(
            query.to_params(),
            vec![
                ("category", "burger".to_string()),
                ("sortBy", "rating".to_string()),
                ("limit", "12".to_string()),
            ]
        );
    }
}
