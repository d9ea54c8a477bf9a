//! Order detail and delete-confirmation page handlers.
//!
//! The backend exposes no single-order endpoint, so both pages fetch the
//! full list and pick the order out of it, the same data the list page
//! already renders from.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use chrono::{DateTime, Utc};
use tracing::instrument;

use cartwheel_core::{OrderId, format_amount};

use crate::{
    backend::types::Order,
    error::AppError,
    filters,
    state::AppState,
};

/// A line item on the detail page.
#[derive(Debug, Clone)]
pub struct LineItemView {
    pub name: String,
    pub quantity: u32,
    pub unit_price: String,
    /// Thumbnail URL, when the product has images.
    pub image: Option<String>,
}

/// Fully expanded order for the detail page.
#[derive(Debug, Clone)]
pub struct OrderDetailView {
    pub id: String,
    pub customer_name: String,
    pub phone: String,
    /// "street, city, state, country - zipcode"
    pub address_line: String,
    pub items: Vec<LineItemView>,
    pub total: String,
    pub paid: bool,
    pub payment_method: String,
    pub status_label: &'static str,
    pub date: DateTime<Utc>,
}

impl OrderDetailView {
    fn from_order(order: &Order, currency_symbol: &str) -> Self {
        let address = &order.address;
        Self {
            id: order.id.to_string(),
            customer_name: order.customer_name(),
            phone: address.phone.clone(),
            address_line: format!(
                "{}, {}, {}, {} - {}",
                address.street, address.city, address.state, address.country, address.zipcode
            ),
            items: order
                .items
                .iter()
                .map(|i| LineItemView {
                    name: i.name.clone(),
                    quantity: i.quantity,
                    unit_price: format_amount(currency_symbol, i.price),
                    image: i.image.first().cloned(),
                })
                .collect(),
            total: format_amount(currency_symbol, order.amount),
            paid: order.payment,
            payment_method: order.payment_method.clone(),
            status_label: order.status.label(),
            date: order.date,
        }
    }
}

/// Order detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/show.html")]
pub struct OrderShowTemplate {
    pub current_path: &'static str,
    pub flash_notice: Option<String>,
    pub flash_error: Option<String>,
    pub order: OrderDetailView,
}

/// Delete confirmation page template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/delete.html")]
pub struct DeleteConfirmTemplate {
    pub current_path: &'static str,
    pub flash_notice: Option<String>,
    pub flash_error: Option<String>,
    pub order: OrderDetailView,
}

/// Fetch the order list and find one order in it.
async fn find_order(state: &AppState, id: &str) -> Result<Order, AppError> {
    let wanted = OrderId::new(id);
    let orders = state.backend().list_orders().await?;
    orders
        .into_iter()
        .find(|o| o.id == wanted)
        .ok_or_else(|| AppError::NotFound(format!("order {id}")))
}

/// Order detail page handler.
///
/// # Errors
///
/// Returns 404 if the order is not in the fetched list, or 502 if the list
/// cannot be fetched.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<OrderShowTemplate, AppError> {
    let order = find_order(&state, &id).await?;

    Ok(OrderShowTemplate {
        current_path: "/orders",
        flash_notice: None,
        flash_error: None,
        order: OrderDetailView::from_order(&order, state.currency_symbol()),
    })
}

/// Delete confirmation page handler.
///
/// # Errors
///
/// Returns 404 if the order is not in the fetched list, or 502 if the list
/// cannot be fetched.
#[instrument(skip(state))]
pub async fn delete_confirm(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<DeleteConfirmTemplate, AppError> {
    let order = find_order(&state, &id).await?;

    Ok(DeleteConfirmTemplate {
        current_path: "/orders",
        flash_notice: None,
        flash_error: None,
        order: OrderDetailView::from_order(&order, state.currency_symbol()),
    })
}
