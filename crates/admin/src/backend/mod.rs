//! Storefront backend API client.
//!
//! The admin panel owns no data. Everything it shows comes from the
//! storefront backend's REST API, which wraps every payload in a JSON
//! envelope carrying an application-level `success` flag:
//!
//! ```json
//! { "success": true, "orders": [ ... ] }
//! { "success": false, "message": "Not Authorized" }
//! ```
//!
//! Authenticated endpoints expect the session token in a custom header
//! named `token`.
//!
//! # Example
//!
//! ```rust,ignore
//! use cartwheel_admin::backend::BackendClient;
//!
//! let client = BackendClient::new(config.backend());
//!
//! // Freshest order first
//! let orders = client.list_orders().await?;
//!
//! // Move an order along, then re-fetch to observe the change
//! client.update_order_status(&order_id, OrderStatus::Shipped).await?;
//! let orders = client.list_orders().await?;
//! ```

mod client;
pub mod types;

pub use client::BackendClient;

use thiserror::Error;

/// Errors that can occur when talking to the storefront backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Transport-level failure (connection, timeout, non-2xx status).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with `success: false`.
    #[error("Backend rejected request: {message}")]
    Rejected {
        /// Message supplied by the backend, or a generic fallback.
        message: String,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_error_display() {
        let err = BackendError::Rejected {
            message: "Not Authorized".to_string(),
        };
        assert_eq!(err.to_string(), "Backend rejected request: Not Authorized");
    }

    #[test]
    fn test_parse_error_display() {
        let parse_err =
            serde_json::from_str::<serde_json::Value>("{").expect_err("invalid json must fail");
        let err = BackendError::from(parse_err);
        assert!(err.to_string().starts_with("JSON parse error"));
    }
}
