//! Provider configuration.

/// Environment variable holding the provider API key.
pub const GOOGLE_API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Model used for every suggestion call.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Default Gemini REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Settings for the generative-text provider.
#[derive(Debug, Clone)]
pub struct SuggestConfig {
    /// Model identifier.
    pub model: String,
    /// API key, if one was configured.
    pub api_key: Option<String>,
    /// Base URL of the provider API, without a trailing slash.
    pub base_url: String,
}

impl SuggestConfig {
    /// Creates a configuration with the given API key and default model.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Reads the API key from `GOOGLE_API_KEY`.
    ///
    /// A missing or blank key is not an error here; provider calls will fail
    /// later and be reported through the endpoints.
    pub fn from_env() -> Self {
        let api_key = std::env::var(GOOGLE_API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty());
        Self::new(api_key)
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Returns true if an API key is present.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SuggestConfig::default();
        assert_eq!(config.model, "gemini-1.5-flash");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_with_base_url_strips_trailing_slash() {
        let config = SuggestConfig::new(Some("k".into())).with_base_url("http://localhost:9999/");
        assert_eq!(config.base_url, "http://localhost:9999");
        assert!(config.has_api_key());
    }
}
