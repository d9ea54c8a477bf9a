//! HTTP client for the storefront backend REST API.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use secrecy::ExposeSecret;
use serde::{Serialize, de::DeserializeOwned};
use tracing::instrument;

use cartwheel_core::{OrderId, OrderStatus};

use crate::config::BackendConfig;

use super::{
    BackendError,
    types::{
        Acknowledgement, Order, OrderListResponse, Product, ProductListResponse, User,
        UserCountResponse, UserListResponse,
    },
};

/// Header the backend expects the session token in.
const TOKEN_HEADER: HeaderName = HeaderName::from_static("token");

/// Storefront backend API client.
///
/// Cheap to clone; connection pooling and the session token live behind an
/// `Arc`. Calls are request/response only: nothing is cached, nothing is
/// retried, and a failed mutation leaves all previously fetched data
/// untouched; callers re-fetch to observe changes.
#[derive(Clone)]
pub struct BackendClient {
    inner: Arc<BackendClientInner>,
}

struct BackendClientInner {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

/// Body for `POST /api/order/status`.
#[derive(Debug, Serialize)]
struct StatusUpdateBody<'a> {
    #[serde(rename = "orderId")]
    order_id: &'a str,
    status: OrderStatus,
}

/// Body for `POST /api/order/delete`.
#[derive(Debug, Serialize)]
struct DeleteOrderBody<'a> {
    #[serde(rename = "orderId")]
    order_id: &'a str,
}

impl BackendClient {
    /// Create a new backend client.
    #[must_use]
    pub fn new(config: &BackendConfig) -> Self {
        let client = reqwest::Client::new();

        Self {
            inner: Arc::new(BackendClientInner {
                client,
                base_url: config.url.as_str().trim_end_matches('/').to_string(),
                token: config.token.expose_secret().to_string(),
            }),
        }
    }

    /// Absolute URL for an API path.
    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    /// Headers for authenticated endpoints.
    fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(&self.inner.token) {
            headers.insert(TOKEN_HEADER, value);
        }
        headers
    }

    /// Issue a GET request and unwrap the response envelope.
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        with_token: bool,
    ) -> Result<T, BackendError> {
        let mut request = self.inner.client.get(self.endpoint(path));
        if with_token {
            request = request.headers(self.auth_headers());
        }
        let response = request.send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    /// Issue an authenticated POST request and unwrap the response envelope.
    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, BackendError> {
        let response = self
            .inner
            .client
            .post(self.endpoint(path))
            .headers(self.auth_headers())
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// List all products. Public endpoint, no token required.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Http` on transport failure, or
    /// `BackendError::Rejected` when the backend answers `success: false`.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, BackendError> {
        let resp: ProductListResponse = self.get("/api/product/list", false).await?;
        ensure_success(resp.success, resp.message)?;
        Ok(resp.products)
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// List all orders, freshest first.
    ///
    /// The backend returns orders in creation order; the list is reversed
    /// here so every caller sees the most recent order at index 0.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Http` on transport failure, or
    /// `BackendError::Rejected` when the backend answers `success: false`.
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, BackendError> {
        let resp: OrderListResponse = self
            .post("/api/order/list", &serde_json::json!({}))
            .await?;
        ensure_success(resp.success, resp.message)?;

        let mut orders = resp.orders;
        orders.reverse();
        Ok(orders)
    }

    /// Move an order to a new fulfillment status.
    ///
    /// The backend applies the change server-side; callers re-fetch the
    /// order list to observe it rather than patching local state.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Http` on transport failure, or
    /// `BackendError::Rejected` when the backend answers `success: false`.
    #[instrument(skip(self))]
    pub async fn update_order_status(
        &self,
        order_id: &OrderId,
        status: OrderStatus,
    ) -> Result<(), BackendError> {
        let body = StatusUpdateBody {
            order_id: order_id.as_str(),
            status,
        };
        let resp: Acknowledgement = self.post("/api/order/status", &body).await?;
        ensure_success(resp.success, resp.message)
    }

    /// Permanently delete an order.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Http` on transport failure, or
    /// `BackendError::Rejected` when the backend answers `success: false`.
    #[instrument(skip(self))]
    pub async fn delete_order(&self, order_id: &OrderId) -> Result<(), BackendError> {
        let body = DeleteOrderBody {
            order_id: order_id.as_str(),
        };
        let resp: Acknowledgement = self.post("/api/order/delete", &body).await?;
        ensure_success(resp.success, resp.message)
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// Count registered users.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Http` on transport failure, or
    /// `BackendError::Rejected` when the backend answers `success: false`.
    #[instrument(skip(self))]
    pub async fn count_users(&self) -> Result<u64, BackendError> {
        let resp: UserCountResponse = self.get("/api/user/count", true).await?;
        ensure_success(resp.success, resp.message)?;
        Ok(resp.count)
    }

    /// List all registered users.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Http` on transport failure, or
    /// `BackendError::Rejected` when the backend answers `success: false`.
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, BackendError> {
        let resp: UserListResponse = self.get("/api/user/list", true).await?;
        ensure_success(resp.success, resp.message)?;
        Ok(resp.users)
    }
}

/// Map an application-level `success: false` to `BackendError::Rejected`.
fn ensure_success(success: bool, message: Option<String>) -> Result<(), BackendError> {
    if success {
        Ok(())
    } else {
        Err(BackendError::Rejected {
            message: message.unwrap_or_else(|| "request rejected".to_string()),
        })
    }
}
