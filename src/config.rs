use std::time::Duration;

/// Configuration defaults
pub mod defaults {
    use std::time::Duration;

    pub fn api_url() -> String { String::from("https://api.mixpanel.com") }
    pub fn timeout() -> Duration { Duration::from_secs(10) }
}

/// Client configuration, immutable once the client is built
#[derive(Debug, Clone)]
pub struct Configuration {
    /// The project token, sent inside every payload
    pub token: String,
    /// The API secret, only used to authenticate /import calls
    pub secret: Option<String>,
    /// Base URL of the ingestion API, overridable for testing
    pub api_url: String,
    /// Deadline applied to each request
    pub timeout: Duration,
}

impl Configuration {
    /// Builds a configuration with the production URL and default deadline
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            secret: None,
            api_url: defaults::api_url(),
            timeout: defaults::timeout(),
        }
    }

    /// Sets the API secret, required for /import authentication
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Overrides the API base URL, a trailing slash is stripped
    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into();
        self.api_url = api_url.strip_suffix('/').map(String::from).unwrap_or(api_url);
        self
    }

    /// Overrides the per-request deadline
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
