//! API Configuration

/// Base URL used when none is configured at build time.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Where the todo API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for ApiConfig {
    /// Reads `TODO_API_BASE_URL` at compile time; the browser has no process env.
    fn default() -> Self {
        Self::new(option_env!("TODO_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
    }
}
