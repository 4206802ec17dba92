//! Storefront API client seam
//!
//! This crate defines the boundary between the storefront core and the
//! externally owned REST services (authentication, restaurants/menus, orders).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │            StorefrontClient trait                │
//! │  - fetch_restaurants() / fetch_restaurant()      │
//! │  - fetch_menu()                                  │
//! │  - login() / register()                          │
//! │  - place_order() / update_order_status()         │
//! │  - fetch_orders() / fetch_order()                │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────┐
//!              │   DemoClient    │
//!              │  (in-memory)    │
//!              └─────────────────┘
//! ```
//!
//! Wire records in [`types`] are deserialized tolerantly: optional fields
//! default to `None` so that a sparse API response never fails to decode.
//!
//! # Example
//!
//! ```rust
//! use storefront_client::{CatalogQuery, DemoClient, StorefrontClient};
//!
//! # async fn example() -> Result<(), storefront_client::ClientError> {
//! let client = DemoClient::new();
//! let restaurants = client
//!     .fetch_restaurants(&CatalogQuery::default().with_search("burger"))
//!     .await?;
//! assert!(!restaurants.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod demo_client;
pub mod error;
pub mod types;

pub use client::{CatalogQuery, StorefrontClient};
pub use demo_client::{demo_menu, demo_restaurants, DemoClient};
pub use error::ClientError;
pub use types::{
    AuthSession, LoginCredentials, MenuItemRecord, Order, OrderDraft, OrderLine, OrderStatus,
    RegisterData, RestaurantRecord, User,
};
