//! In-memory demo backend
//!
//! Serves a fixed Jakarta restaurant catalog. Used by the console front end
//! when no live service is configured, and as the fallback dataset when a
//! catalog fetch fails before anything was loaded.

use crate::client::{CatalogQuery, StorefrontClient};
use crate::error::ClientError;
use crate::types::{
    AuthSession, LoginCredentials, MenuItemRecord, Order, OrderDraft, OrderStatus, RegisterData,
    RestaurantRecord, User,
};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

const MIN_PASSWORD_LEN: usize = 6;

fn restaurant(
    id: &str,
    name: &str,
    rating: f64,
    location: &str,
    distance: &str,
    category_id: &str,
    average_price: i64,
) -> RestaurantRecord {
    RestaurantRecord {
        id: id.to_string(),
        name: name.to_string(),
        rating: Some(rating),
        location: location.to_string(),
        distance: distance.to_string(),
        image_url: None,
        category_id: Some(category_id.to_string()),
        is_open: Some(true),
        delivery_time: Some("25-30 min".to_string()),
        average_price: Some(average_price),
    }
}

/// The built-in demo catalog
pub fn demo_restaurants() -> Vec<RestaurantRecord> {
    vec![
        restaurant("r1", "Burger King", 4.9, "Jakarta Selatan", "2.4 km", "bestseller", 55_000),
        restaurant("r2", "Sushi Go", 4.7, "Jakarta Pusat", "5.1 km", "delivery", 120_000),
        restaurant("r3", "Warung Padang Sederhana", 4.6, "Jakarta Barat", "1.2 km", "lunch", 35_000),
        restaurant("r4", "Bakmi GM", 4.5, "Jakarta Utara", "3.8 km", "nearby", 45_000),
        restaurant("r5", "Sate Khas Senayan", 4.8, "Jakarta Selatan", "0.8 km", "discount", 60_000),
        restaurant("r6", "Pizza Hut", 4.2, "Tangerang", "9.6 km", "delivery", 90_000),
        restaurant("r7", "Kopi Kenangan", 4.4, "Jakarta Timur", "650 m", "nearby", 25_000),
        restaurant("r8", "Solaria", 4.1, "Depok", "12 km", "lunch", 50_000),
    ]
}

fn menu_item(id: &str, name: &str, price: i64, restaurant_id: &str) -> MenuItemRecord {
    MenuItemRecord {
        id: id.to_string(),
        name: name.to_string(),
        price: Some(price),
        description: None,
        image_url: None,
        category_id: None,
        restaurant_id: restaurant_id.to_string(),
        rating: None,
        is_available: Some(true),
    }
}

/// The built-in demo menu for a restaurant
pub fn demo_menu(restaurant_id: &str) -> Vec<MenuItemRecord> {
    let prefix = restaurant_id;
    vec![
        menu_item(&format!("{prefix}-special"), "House Special", 25_000, restaurant_id),
        menu_item(&format!("{prefix}-combo"), "Family Combo", 89_000, restaurant_id),
        menu_item(&format!("{prefix}-drink"), "Iced Tea", 8_000, restaurant_id),
    ]
}

fn matches_query(record: &RestaurantRecord, query: &CatalogQuery) -> bool {
    let search_ok = match query.search.as_deref() {
        None | Some("") => true,
        Some(search) => {
            let needle = search.to_lowercase();
            record.name.to_lowercase().contains(&needle)
                || record.location.to_lowercase().contains(&needle)
        }
    };
    let category_ok = match query.category.as_deref() {
        None => true,
        Some(category) => record.category_id.as_deref() == Some(category),
    };
    search_ok && category_ok
}

fn session_for(
    email: &str,
    name: Option<&str>,
    phone: Option<String>,
    address: Option<String>,
) -> AuthSession {
    let handle = email.split('@').next().unwrap_or(email);
    AuthSession {
        token: format!("demo-{}", Utc::now().timestamp_millis()),
        user: User {
            id: format!("user-{handle}"),
            name: name.unwrap_or(handle).to_string(),
            email: email.to_string(),
            phone,
            address,
        },
    }
}

fn order_not_found(id: &str) -> ClientError {
    ClientError::NotFound {
        kind: "order",
        id: id.to_string(),
    }
}

/// In-memory implementation of [`StorefrontClient`]
///
/// Clones share the same order book.
#[derive(Debug, Clone, Default)]
pub struct DemoClient {
    next_order: Arc<AtomicU64>,
    orders: Arc<Mutex<Vec<Order>>>,
}

impl DemoClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn orders(&self) -> Result<MutexGuard<'_, Vec<Order>>, ClientError> {
        self.orders
            .lock()
            .map_err(|_| ClientError::Unavailable("order book poisoned".to_string()))
    }
}

#[async_trait]
impl StorefrontClient for DemoClient {
    async fn fetch_restaurants(
        &self,
        query: &CatalogQuery,
    ) -> Result<Vec<RestaurantRecord>, ClientError> {
        log::debug!("DemoClient: fetch_restaurants {:?}", query.to_params());
        let offset = query.offset.unwrap_or(0);
        let matching = demo_restaurants()
            .into_iter()
            .filter(|r| matches_query(r, query))
            .skip(offset);
        Ok(match query.limit {
            Some(limit) if limit > 0 => matching.take(limit).collect(),
            _ => matching.collect(),
        })
    }

    async fn fetch_restaurant(&self, id: &str) -> Result<RestaurantRecord, ClientError> {
        demo_restaurants()
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| ClientError::NotFound {
                kind: "restaurant",
                id: id.to_string(),
            })
    }

    async fn fetch_menu(&self, restaurant_id: &str) -> Result<Vec<MenuItemRecord>, ClientError> {
        if demo_restaurants().iter().any(|r| r.id == restaurant_id) {
            Ok(demo_menu(restaurant_id))
        } else {
            Err(ClientError::NotFound {
                kind: "restaurant",
                id: restaurant_id.to_string(),
            })
        }
    }

    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthSession, ClientError> {
        let email = credentials.email.trim();
        if !email.contains('@') || credentials.password.len() < MIN_PASSWORD_LEN {
            return Err(ClientError::Unauthorized);
        }
        Ok(session_for(email, None, None, None))
    }

    async fn register(&self, data: &RegisterData) -> Result<AuthSession, ClientError> {
        let email = data.email.trim();
        if data.name.trim().is_empty() || !email.contains('@') {
            return Err(ClientError::InvalidRequest(
                "name and a valid email are required".to_string(),
            ));
        }
        if data.password.len() < MIN_PASSWORD_LEN {
            return Err(ClientError::InvalidRequest(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        Ok(session_for(
            email,
            Some(data.name.trim()),
            data.phone.clone(),
            data.address.clone(),
        ))
    }

    async fn place_order(&self, draft: &OrderDraft) -> Result<Order, ClientError> {
        if draft.items.is_empty() {
            return Err(ClientError::InvalidRequest(
                "order has no items".to_string(),
            ));
        }
        let number = self.next_order.fetch_add(1, Ordering::Relaxed) + 1;
        let order = Order {
            id: format!("ord-{number}"),
            user_id: draft.user_id.clone(),
            items: draft.items.clone(),
            total: draft.total,
            customer_name: draft.customer_name.clone(),
            phone: draft.phone.clone(),
            address: draft.address.clone(),
            status: Default::default(),
            created_at: Utc::now(),
            delivery_time: Some("25-30 min".to_string()),
        };
        self.orders()?.push(order.clone());
        Ok(order)
    }

    async fn fetch_orders(&self, user_id: Option<&str>) -> Result<Vec<Order>, ClientError> {
        let orders = self.orders()?;
        Ok(orders
            .iter()
            .rev()
            .filter(|o| user_id.is_none() || o.user_id.as_deref() == user_id)
            .cloned()
            .collect())
    }

    async fn fetch_order(&self, id: &str) -> Result<Order, ClientError> {
        self.orders()?
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or_else(|| order_not_found(id))
    }

    async fn update_order_status(
        &self,
        id: &str,
        status: OrderStatus,
    ) -> Result<Order, ClientError> {
        let mut orders = self.orders()?;
        let order = orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| order_not_found(id))?;
        if !order.status.can_become(status) {
            return Err(ClientError::InvalidRequest(format!(
                "order {} cannot go from {:?} to {:?}",
                id, order.status, status
            )));
        }
        order.status = status;
        Ok(order.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OrderLine;

    fn draft(user_id: Option<&str>) -> OrderDraft {
        OrderDraft {
            user_id: user_id.map(str::to_string),
            items: vec![OrderLine {
                id: "r1-special".to_string(),
                name: "House Special".to_string(),
                price: 25_000,
                quantity: 2,
                restaurant_id: "r1".to_string(),
                notes: None,
            }],
            total: 57_000,
            customer_name: "Budi".to_string(),
            phone: "0812".to_string(),
            address: "Jl. Sudirman 1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_fetch_restaurants_search_matches_name_or_location() {
        let client = DemoClient::new();
        let by_name = client
            .fetch_restaurants(&CatalogQuery::default().with_search("BURGER"))
            .await
            .unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Burger King");

        let by_location = client
            .fetch_restaurants(&CatalogQuery::default().with_search("depok"))
            .await
            .unwrap();
        assert_eq!(by_location.len(), 1);
        assert_eq!(by_location[0].name, "Solaria");
    }

    #[tokio::test]
    async fn test_fetch_restaurants_category_and_limit() {
        let client = DemoClient::new();
        let lunch = client
            .fetch_restaurants(&CatalogQuery::default().with_category("lunch"))
            .await
            .unwrap();
        assert!(lunch
            .iter()
            .all(|r| r.category_id.as_deref() == Some("lunch")));

        let query = CatalogQuery {
            limit: Some(3),
            ..Default::default()
        };
        assert_eq!(client.fetch_restaurants(&query).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_fetch_menu_unknown_restaurant() {
        let client = DemoClient::new();
        let err = client.fetch_menu("nope").await.unwrap_err();
        assert!(matches!(err, ClientError::NotFound { .. }));
        assert_eq!(client.fetch_menu("r1").await.unwrap()[0].id, "r1-special");
    }

    #[tokio::test]
    async fn test_login() {
        let client = DemoClient::new();
        let ok = client
            .login(&LoginCredentials {
                email: "budi@example.com".to_string(),
                password: "secret123".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(ok.user.name, "budi");
        assert!(ok.token.starts_with("demo-"));

        let err = client
            .login(&LoginCredentials {
                email: "budi@example.com".to_string(),
                password: "123".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err, ClientError::Unauthorized);
    }

    #[tokio::test]
    async fn test_place_order_assigns_sequential_ids() {
        let client = DemoClient::new();
        let draft = draft(None);
        let first = client.place_order(&draft).await.unwrap();
        let second = client.place_order(&draft).await.unwrap();
        assert_eq!(first.id, "ord-1");
        assert_eq!(second.id, "ord-2");
        assert_eq!(first.status, OrderStatus::Pending);
        assert_eq!(first.total, 57_000);

        let empty = OrderDraft {
            items: vec![],
            ..draft
        };
        assert!(matches!(
            client.place_order(&empty).await,
            Err(ClientError::InvalidRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_register() {
        let client = DemoClient::new();
        let session = client
            .register(&RegisterData {
                name: "Sari Dewi".to_string(),
                email: "sari@example.com".to_string(),
                password: "secret123".to_string(),
                phone: Some("0812".to_string()),
                address: None,
            })
            .await
            .unwrap();
        assert_eq!(session.user.name, "Sari Dewi");
        assert_eq!(session.user.id, "user-sari");
        assert_eq!(session.user.phone.as_deref(), Some("0812"));

        let err = client
            .register(&RegisterData {
                name: "Sari".to_string(),
                email: "sari@example.com".to_string(),
                password: "123".to_string(),
                phone: None,
                address: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_order_history_newest_first_per_user() {
        let client = DemoClient::new();
        client.place_order(&draft(Some("user-budi"))).await.unwrap();
        client.place_order(&draft(Some("user-sari"))).await.unwrap();
        client.place_order(&draft(Some("user-budi"))).await.unwrap();

        let budi: Vec<_> = client
            .fetch_orders(Some("user-budi"))
            .await
            .unwrap()
            .into_iter()
            .map(|o| o.id)
            .collect();
        assert_eq!(budi, vec!["ord-3", "ord-1"]);
        assert_eq!(client.fetch_orders(None).await.unwrap().len(), 3);

        let second = client.fetch_order("ord-2").await.unwrap();
        assert_eq!(second.user_id.as_deref(), Some("user-sari"));
        assert!(matches!(
            client.fetch_order("ord-9").await,
            Err(ClientError::NotFound { kind: "order", .. })
        ));
    }

    #[tokio::test]
    async fn test_update_order_status() {
        let client = DemoClient::new();
        let order = client.place_order(&draft(None)).await.unwrap();

        let confirmed = client
            .update_order_status(&order.id, OrderStatus::Confirmed)
            .await
            .unwrap();
        assert_eq!(confirmed.status, OrderStatus::Confirmed);
        assert_eq!(
            client.fetch_order(&order.id).await.unwrap().status,
            OrderStatus::Confirmed
        );

        let err = client
            .update_order_status(&order.id, OrderStatus::Delivered)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }
}
