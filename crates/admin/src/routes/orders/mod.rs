//! Orders management route handlers.
//!
//! This module contains handlers for the order table, the order detail
//! view, and the two mutations (status update, delete). Both mutations
//! redirect back to the list so the next render re-fetches from the
//! backend; nothing is patched locally.

mod actions;
mod detail;
mod list;

pub use actions::{StatusForm, delete, update_status};
pub use detail::{DeleteConfirmTemplate, OrderShowTemplate, delete_confirm, show};
pub use list::{OrderRowView, OrdersIndexTemplate, OrdersQuery, index};
