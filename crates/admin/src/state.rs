//! Application state shared across handlers.

use std::sync::Arc;

use crate::{backend::BackendClient, config::AdminConfig};

/// Application state shared across all handlers.
///
/// Cloning is cheap; the inner state lives behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    backend: BackendClient,
}

impl AppState {
    /// Build the application state from loaded configuration.
    #[must_use]
    pub fn new(config: AdminConfig) -> Self {
        let backend = BackendClient::new(config.backend());
        Self {
            inner: Arc::new(AppStateInner { config, backend }),
        }
    }

    /// The loaded configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// The storefront backend API client.
    #[must_use]
    pub fn backend(&self) -> &BackendClient {
        &self.inner.backend
    }

    /// The configured currency symbol for rendering amounts.
    #[must_use]
    pub fn currency_symbol(&self) -> &str {
        &self.inner.config.currency_symbol
    }
}
