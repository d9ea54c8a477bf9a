//! Users list page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    backend::types::User,
    components::{
        pagination::{Page, USERS_PER_PAGE},
        search::{filter, user_matches},
    },
    filters,
    state::AppState,
};

/// Query parameters for the users list.
#[derive(Debug, Default, Deserialize)]
pub struct UsersQuery {
    /// Free-text search query (name or email).
    pub q: Option<String>,
    /// 1-indexed page number.
    pub page: Option<usize>,
    /// One-shot error banner (set by redirects).
    pub error: Option<String>,
}

/// One row of the users table.
#[derive(Debug, Clone)]
pub struct UserRowView {
    pub name: String,
    pub email: String,
    pub joined: DateTime<Utc>,
}

impl From<&User> for UserRowView {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            joined: user.created_at,
        }
    }
}

/// Users list page template.
#[derive(Template, WebTemplate)]
#[template(path = "users/index.html")]
pub struct UsersIndexTemplate {
    pub current_path: &'static str,
    pub flash_notice: Option<String>,
    pub flash_error: Option<String>,
    /// Current search query, echoed into the search input.
    pub q: String,
    /// Query-string suffix (`&q=...`) preserved by pagination links.
    pub query_suffix: String,
    /// The requested page of matching users.
    pub page: Page<UserRowView>,
}

/// Users list page handler.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<UsersQuery>,
) -> UsersIndexTemplate {
    let (users, fetch_error) = match state.backend().list_users().await {
        Ok(users) => (users, None),
        Err(e) => {
            tracing::error!("Failed to fetch users: {e}");
            (vec![], Some("Failed to load users".to_string()))
        }
    };

    let q = query.q.unwrap_or_default();
    let matching = filter(users, &q, user_matches);
    let rows: Vec<UserRowView> = matching.iter().map(UserRowView::from).collect();

    let page = Page::slice(rows, USERS_PER_PAGE, query.page.unwrap_or(1));

    let query_suffix = if q.trim().is_empty() {
        String::new()
    } else {
        format!("&q={}", urlencoding::encode(q.trim()))
    };

    UsersIndexTemplate {
        current_path: "/users",
        flash_notice: None,
        flash_error: query.error.or(fetch_error),
        q,
        query_suffix,
        page,
    }
}
