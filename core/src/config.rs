//! Client configuration: API base URL and screen page sizes.

use std::env;

use tracing::info;

pub const DEFAULT_BASE_URL: &str = "https://api-receitas-5xhs.onrender.com";
pub const BASE_URL_VAR: &str = "RECEITAS_API_URL";

/// Explicit client configuration, passed into `RecipeService` at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Records per page on the list screen.
    pub page_size: u32,
    /// Records fetched by the landing screen.
    pub home_preview_limit: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            page_size: 10,
            home_preview_limit: 6,
        }
    }

    /// Read the base URL from `RECEITAS_API_URL`, falling back to the
    /// production API.
    pub fn from_env() -> Self {
        match env::var(BASE_URL_VAR) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => {
                info!("{BASE_URL_VAR} not set, using default: {DEFAULT_BASE_URL}");
                Self::default()
            }
        }
    }
}
