//! Integration tests for the Cartwheel admin panel.
//!
//! # Running Tests
//!
//! ```bash
//! # Point the panel at a storefront backend and start it
//! cargo run -p cartwheel-admin
//!
//! # Run integration tests against the running panel
//! cargo test -p cartwheel-integration-tests -- --ignored
//! ```
//!
//! The tests drive the rendered HTML through `reqwest`, the same way a
//! browser would: they submit search forms as query parameters, follow
//! mutation redirects, and assert on table contents. They are `#[ignore]`d
//! by default because they need both the panel and a backend with data.

/// Base URL for the admin panel (configurable via environment).
#[must_use]
pub fn admin_base_url() -> String {
    std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}
