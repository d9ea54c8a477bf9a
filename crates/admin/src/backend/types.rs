//! Wire types for the storefront backend API.
//!
//! Field names mirror the backend's JSON exactly (camelCase, Mongo-style
//! `_id`); everything is renamed to Rust conventions at the serde boundary.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use cartwheel_core::{OrderId, OrderStatus, ProductId, UserId};

/// A customer order as returned by `POST /api/order/list`.
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    /// Backend-assigned identifier.
    #[serde(rename = "_id")]
    pub id: OrderId,
    /// Shipping address captured at checkout.
    pub address: ShippingAddress,
    /// Ordered line items.
    pub items: Vec<LineItem>,
    /// Order total.
    pub amount: Decimal,
    /// Whether payment has been collected.
    pub payment: bool,
    /// Payment method label (e.g. "COD", "Stripe").
    #[serde(rename = "paymentMethod")]
    pub payment_method: String,
    /// Fulfillment status.
    pub status: OrderStatus,
    /// Creation timestamp (epoch milliseconds on the wire).
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date: DateTime<Utc>,
}

impl Order {
    /// Customer display name, first and last joined with a space.
    #[must_use]
    pub fn customer_name(&self) -> String {
        format!("{} {}", self.address.first_name, self.address.last_name)
    }
}

/// Shipping address attached to an order.
#[derive(Debug, Clone, Deserialize)]
pub struct ShippingAddress {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zipcode: String,
}

/// A single ordered line item.
#[derive(Debug, Clone, Deserialize)]
pub struct LineItem {
    /// Product name at order time.
    pub name: String,
    /// Quantity ordered.
    pub quantity: u32,
    /// Unit price at order time.
    pub price: Decimal,
    /// Product image URLs (first one is the thumbnail).
    #[serde(default)]
    pub image: Vec<String>,
}

/// A registered user as returned by `GET /api/user/list`.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub name: String,
    pub email: String,
    /// Registration timestamp.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// A product as returned by `GET /api/product/list`.
///
/// The dashboard only consumes the count; the name is kept for logging.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub name: String,
}

// =============================================================================
// Response Envelopes
// =============================================================================

/// Envelope for `GET /api/product/list`.
#[derive(Debug, Deserialize)]
pub struct ProductListResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Envelope for `POST /api/order/list`.
#[derive(Debug, Deserialize)]
pub struct OrderListResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

/// Envelope for `GET /api/user/list`.
#[derive(Debug, Deserialize)]
pub struct UserListResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub users: Vec<User>,
}

/// Envelope for `GET /api/user/count`.
#[derive(Debug, Deserialize)]
pub struct UserCountResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub count: u64,
}

/// Envelope for mutations that return no payload (`/api/order/status`,
/// `/api/order/delete`).
#[derive(Debug, Deserialize)]
pub struct Acknowledgement {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
