//! One-shot notification messages carried across redirects.
//!
//! The panel surfaces every success or failure as a single transient banner.
//! Messages travel as `notice`/`error` query parameters on the redirect
//! target, which keeps handlers stateless: there is no session to stash
//! flash state in.

use serde::Deserialize;

/// Flash parameters extracted from the query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Flash {
    /// Success notification to display once.
    pub notice: Option<String>,
    /// Error notification to display once.
    pub error: Option<String>,
}

impl Flash {
    /// A success-only flash.
    #[must_use]
    pub fn notice(message: impl Into<String>) -> Self {
        Self {
            notice: Some(message.into()),
            error: None,
        }
    }

    /// An error-only flash.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            notice: None,
            error: Some(message.into()),
        }
    }

    /// Append this flash to a redirect location.
    #[must_use]
    pub fn redirect_to(&self, path: &str) -> String {
        match (&self.notice, &self.error) {
            (Some(n), _) => format!("{path}?notice={}", urlencoding::encode(n)),
            (None, Some(e)) => format!("{path}?error={}", urlencoding::encode(e)),
            (None, None) => path.to_string(),
        }
    }
}
