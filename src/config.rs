//! Runtime settings for talking to the marketplace backend.
//!
//! The Leptos site settings (address, site root) come from `[package.metadata.leptos]`
//! through `get_configuration`; only the API specifics live here.

use std::time::Duration;

/// Base URL used when `MARKETPLACE_API_URL` is not set at build time.
pub const DEFAULT_API_BASE: &str = "/api";

/// Identity-provider token template used for every mutating call.
pub const DEFAULT_TOKEN_TEMPLATE: &str = "default";

/// Delay between automatic testimonial advances.
pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_millis(5000);

/// Minimum length of a review after trimming whitespace.
pub const MIN_REVIEW_LENGTH: usize = 20;

/// How long a notice stays on screen.
pub const NOTICE_LIFETIME: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub token_template: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token_template: DEFAULT_TOKEN_TEMPLATE.to_string(),
        }
    }

    /// Reads the base URL baked in at compile time, since the bundle has no process env.
    pub fn from_env() -> Self {
        match option_env!("MARKETPLACE_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    /// Joins `path` onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
