//! Dashboard route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use chrono::{DateTime, Utc};
use tracing::instrument;

use cartwheel_core::format_amount;

use crate::{
    backend::types::Order,
    components::stats::DashboardStats,
    filters,
    routes::Flash,
    state::AppState,
};

/// How many recent orders the dashboard shows.
const RECENT_ORDERS: usize = 5;

/// Stat card values, pre-formatted for display.
#[derive(Debug, Clone)]
pub struct StatsView {
    pub products: String,
    pub orders: String,
    pub revenue: String,
    pub pending: String,
    pub users: String,
    /// Highlights the pending card when anything awaits payment.
    pub has_pending: bool,
}

impl StatsView {
    fn from_stats(stats: &DashboardStats, currency_symbol: &str) -> Self {
        Self {
            products: stats.products.to_string(),
            orders: stats.orders.to_string(),
            revenue: format_amount(currency_symbol, stats.revenue),
            pending: stats.pending.to_string(),
            users: stats.users.to_string(),
            has_pending: stats.pending > 0,
        }
    }
}

/// Recent order row for the dashboard table.
#[derive(Debug, Clone)]
pub struct RecentOrderView {
    pub id: String,
    pub customer_name: String,
    pub date: DateTime<Utc>,
    pub item_count: usize,
    pub total: String,
    pub paid: bool,
}

impl RecentOrderView {
    fn from_order(order: &Order, currency_symbol: &str) -> Self {
        Self {
            id: order.id.to_string(),
            customer_name: order.customer_name(),
            date: order.date,
            item_count: order.items.len(),
            total: format_amount(currency_symbol, order.amount),
            paid: order.payment,
        }
    }
}

/// Dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub current_path: &'static str,
    pub flash_notice: Option<String>,
    pub flash_error: Option<String>,
    pub stats: StatsView,
    pub recent_orders: Vec<RecentOrderView>,
    pub refreshed_at: DateTime<Utc>,
}

/// Dashboard page handler.
///
/// Fetches products, orders, and the user count concurrently, then derives
/// the stat cards from the resolved lists. A failed fetch degrades to zeroed
/// stats behind a single error banner. Nothing is retried here; the
/// Refresh link re-runs the whole fetch.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(flash): Query<Flash>,
) -> DashboardTemplate {
    let (products_result, orders_result, users_result) = tokio::join!(
        state.backend().list_products(),
        state.backend().list_orders(),
        state.backend().count_users(),
    );

    let symbol = state.currency_symbol();

    let (stats, recent_orders, fetch_error) = match (products_result, orders_result, users_result)
    {
        (Ok(products), Ok(orders), Ok(user_count)) => {
            let stats = DashboardStats::compute(&orders, products.len(), user_count);
            let recent: Vec<RecentOrderView> = orders
                .iter()
                .take(RECENT_ORDERS)
                .map(|o| RecentOrderView::from_order(o, symbol))
                .collect();
            (StatsView::from_stats(&stats, symbol), recent, None)
        }
        (products_result, orders_result, users_result) => {
            if let Err(e) = &products_result {
                tracing::error!("Failed to fetch products: {e}");
            }
            if let Err(e) = &orders_result {
                tracing::error!("Failed to fetch orders: {e}");
            }
            if let Err(e) = &users_result {
                tracing::error!("Failed to fetch user count: {e}");
            }
            (
                StatsView::from_stats(&DashboardStats::default(), symbol),
                vec![],
                Some("Failed to load dashboard data".to_string()),
            )
        }
    };

    DashboardTemplate {
        current_path: "/",
        flash_notice: flash.notice,
        flash_error: flash.error.or(fetch_error),
        stats,
        recent_orders,
        refreshed_at: Utc::now(),
    }
}
