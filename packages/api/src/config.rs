//! # Client configuration: where the users back-end lives
//!
//! The only knob the client has is the base URL of the back-end. It defaults to
//! [`DEFAULT_BASE_URL`] and can be overridden with the `USERS_API_URL`
//! environment variable:
//!
//! - **Native** (desktop): read at start-up, after loading an optional `.env`
//!   file through `dotenvy`.
//! - **Web** (WASM): there is no process environment in the browser, so the
//!   variable is captured at compile time with `option_env!`.
//!
//! Trailing slashes are trimmed so that [`ApiConfig::url`] can always join with
//! a leading-slash path.

use serde::{Deserialize, Serialize};

/// Back-end address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8082";

/// Environment variable overriding [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "USERS_API_URL";

/// Connection settings for the users back-end.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ApiConfig {
    /// Build the config from the platform's environment, falling back to the default.
    pub fn from_env() -> Self {
        match configured_base_url() {
            Some(url) if !url.trim().is_empty() => Self::default().with_base_url(url),
            _ => Self::default(),
        }
    }

    /// Builder method to point the client at another back-end.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim().trim_end_matches('/').to_string();
        self
    }

    /// Absolute URL for a back-end path such as `/users/5`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn configured_base_url() -> Option<String> {
    dotenvy::dotenv().ok();
    std::env::var(BASE_URL_ENV).ok()
}

#[cfg(target_arch = "wasm32")]
fn configured_base_url() -> Option<String> {
    option_env!("USERS_API_URL").map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_backend() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8082");
        assert_eq!(config.url("/users"), "http://localhost:8082/users");
    }

    #[test]
    fn test_with_base_url_trims_trailing_slashes() {
        let config = ApiConfig::default().with_base_url(" https://users.example.org/// ");
        assert_eq!(config.base_url, "https://users.example.org");
        assert_eq!(config.url("/users/7"), "https://users.example.org/users/7");
    }

    #[test]
    fn test_missing_base_url_in_serialized_form_uses_default() {
        let config: ApiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ApiConfig::default());
    }
}
