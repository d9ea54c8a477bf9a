//! HTTP route handlers for the admin panel.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (probes the backend)
//!
//! # Dashboard
//! GET  /                       - Store overview: stats + recent orders
//!
//! # Orders
//! GET  /orders                 - Searchable, paginated order table
//! GET  /orders/{id}            - Order detail
//! POST /orders/{id}/status     - Move an order to a new status
//! GET  /orders/{id}/delete     - Delete confirmation page
//! POST /orders/{id}/delete     - Permanently delete an order
//!
//! # Users
//! GET  /users                  - Searchable, paginated user table
//! ```
//!
//! Search (`?q=`) and pagination (`?page=`) are computed here over freshly
//! fetched lists; the backend is never asked to filter or page. Mutations
//! redirect back to the list, which re-fetches; no optimistic local state.

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub mod dashboard;
pub mod orders;
pub mod users;

mod flash;

pub use flash::Flash;

/// Build the admin panel router.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Dashboard
        .route("/", get(dashboard::index))
        // Orders
        .route("/orders", get(orders::index))
        .route("/orders/{id}", get(orders::show))
        .route("/orders/{id}/status", post(orders::update_status))
        .route(
            "/orders/{id}/delete",
            get(orders::delete_confirm).post(orders::delete),
        )
        // Users
        .route("/users", get(users::index))
}
