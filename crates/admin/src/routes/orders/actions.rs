//! Order mutation handlers.
//!
//! Both mutations call the backend and redirect back to the list with a
//! single flash message. A failure mutates nothing anywhere: the backend
//! rejected it, and the re-fetch on the next render shows the unchanged
//! server state.

use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use serde::Deserialize;
use tracing::instrument;

use cartwheel_core::{OrderId, OrderStatus};

use crate::{routes::Flash, state::AppState};

/// Form body for the status update action.
#[derive(Debug, Deserialize)]
pub struct StatusForm {
    /// New status, as its wire label (e.g. "Out for delivery").
    pub status: String,
}

/// Move an order to a new fulfillment status.
#[instrument(skip(state))]
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<StatusForm>,
) -> Redirect {
    let order_id = OrderId::new(id);

    let Ok(status) = form.status.parse::<OrderStatus>() else {
        tracing::warn!(status = %form.status, order_id = %order_id, "Rejected unknown order status");
        return Redirect::to(&Flash::error("Invalid order status").redirect_to("/orders"));
    };

    match state.backend().update_order_status(&order_id, status).await {
        Ok(()) => Redirect::to(&Flash::notice("Order status updated").redirect_to("/orders")),
        Err(e) => {
            tracing::error!(order_id = %order_id, "Failed to update order status: {e}");
            Redirect::to(&Flash::error("Failed to update order status").redirect_to("/orders"))
        }
    }
}

/// Permanently delete an order.
#[instrument(skip(state))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    let order_id = OrderId::new(id);

    match state.backend().delete_order(&order_id).await {
        Ok(()) => Redirect::to(&Flash::notice("Order deleted").redirect_to("/orders")),
        Err(e) => {
            tracing::error!(order_id = %order_id, "Failed to delete order: {e}");
            Redirect::to(&Flash::error("Failed to delete order").redirect_to("/orders"))
        }
    }
}
