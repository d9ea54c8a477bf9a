//! Orders list page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::instrument;

use cartwheel_core::{OrderStatus, format_amount};

use crate::{
    backend::types::Order,
    components::{
        pagination::{ORDERS_PER_PAGE, Page},
        search::{filter, order_matches},
    },
    filters,
    state::AppState,
};

/// Query parameters for the orders list.
///
/// Search and pagination are client-side over the fetched list. The search
/// form submits only `q`, so changing the query naturally resets the page
/// to 1.
#[derive(Debug, Default, Deserialize)]
pub struct OrdersQuery {
    /// Free-text search query.
    pub q: Option<String>,
    /// 1-indexed page number.
    pub page: Option<usize>,
    /// One-shot success banner (set by redirects).
    pub notice: Option<String>,
    /// One-shot error banner (set by redirects).
    pub error: Option<String>,
}

/// A status option for the per-row `<select>`.
#[derive(Debug, Clone)]
pub struct StatusOptionView {
    pub label: &'static str,
    pub selected: bool,
}

/// One row of the orders table, pre-formatted for display.
#[derive(Debug, Clone)]
pub struct OrderRowView {
    pub id: String,
    /// "Linen Shirt × 2"-style summary lines, one per line item.
    pub item_lines: Vec<String>,
    pub item_count: usize,
    pub customer_name: String,
    pub phone: String,
    pub payment_method: String,
    pub paid: bool,
    pub total: String,
    pub status_options: Vec<StatusOptionView>,
}

impl OrderRowView {
    fn from_order(order: &Order, currency_symbol: &str) -> Self {
        let status_options = OrderStatus::ALL
            .into_iter()
            .map(|s| StatusOptionView {
                label: s.label(),
                selected: s == order.status,
            })
            .collect();

        Self {
            id: order.id.to_string(),
            item_lines: order
                .items
                .iter()
                .map(|i| format!("{} × {}", i.name, i.quantity))
                .collect(),
            item_count: order.items.len(),
            customer_name: order.customer_name(),
            phone: order.address.phone.clone(),
            payment_method: order.payment_method.clone(),
            paid: order.payment,
            total: format_amount(currency_symbol, order.amount),
            status_options,
        }
    }
}

/// Orders list page template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/index.html")]
pub struct OrdersIndexTemplate {
    pub current_path: &'static str,
    pub flash_notice: Option<String>,
    pub flash_error: Option<String>,
    /// Current search query, echoed into the search input.
    pub q: String,
    /// Query-string suffix (`&q=...`) preserved by pagination links.
    pub query_suffix: String,
    /// The requested page of matching orders.
    pub page: Page<OrderRowView>,
}

/// Orders list page handler.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<OrdersQuery>,
) -> OrdersIndexTemplate {
    let (orders, fetch_error) = match state.backend().list_orders().await {
        Ok(orders) => (orders, None),
        Err(e) => {
            tracing::error!("Failed to fetch orders: {e}");
            (vec![], Some("Failed to load orders".to_string()))
        }
    };

    let q = query.q.unwrap_or_default();
    let matching = filter(orders, &q, order_matches);

    let symbol = state.currency_symbol();
    let rows: Vec<OrderRowView> = matching
        .iter()
        .map(|o| OrderRowView::from_order(o, symbol))
        .collect();

    let page = Page::slice(rows, ORDERS_PER_PAGE, query.page.unwrap_or(1));

    let query_suffix = if q.trim().is_empty() {
        String::new()
    } else {
        format!("&q={}", urlencoding::encode(q.trim()))
    };

    OrdersIndexTemplate {
        current_path: "/orders",
        flash_notice: query.notice,
        flash_error: query.error.or(fetch_error),
        q,
        query_suffix,
        page,
    }
}
