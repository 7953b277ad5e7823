//! Client configuration

/// Client configuration for connecting to the POS service
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service base URL including the API prefix (e.g., "http://localhost:8000/api")
    pub base_url: String,

    /// WebSocket base URL; derived from `base_url` unless set explicitly
    pub ws_url: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Order board polling backstop interval in seconds
    pub poll_interval: u64,

    /// Delay before the single post-disconnect resync, in seconds
    pub resync_delay: u64,

    /// Surface per-table bill fetch failures instead of skipping them
    pub strict_errors: bool,
}

impl ClientConfig {
    /// Create a new client configuration with default timings
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ws_url: None,
            timeout: 30,
            poll_interval: 15,
            resync_delay: 3,
            strict_errors: false,
        }
    }

    /// Set the WebSocket base URL explicitly
    pub fn with_ws_url(mut self, ws_url: impl Into<String>) -> Self {
        self.ws_url = Some(ws_url.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the polling backstop interval
    pub fn with_poll_interval(mut self, seconds: u64) -> Self {
        self.poll_interval = seconds;
        self
    }

    /// Set the post-disconnect resync delay
    pub fn with_resync_delay(mut self, seconds: u64) -> Self {
        self.resync_delay = seconds;
        self
    }

    /// Surface per-table bill fetch failures instead of skipping them
    pub fn with_strict_errors(mut self, strict: bool) -> Self {
        self.strict_errors = strict;
        self
    }

    /// Effective WebSocket base URL.
    ///
    /// When unset, rewrites the scheme of `base_url` (http -> ws, https -> wss).
    pub fn effective_ws_url(&self) -> String {
        if let Some(ws) = &self.ws_url {
            return ws.trim_end_matches('/').to_string();
        }
        let base = self.base_url.trim_end_matches('/');
        if let Some(rest) = base.strip_prefix("https://") {
            format!("wss://{rest}")
        } else if let Some(rest) = base.strip_prefix("http://") {
            format!("ws://{rest}")
        } else {
            base.to_string()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8000/api")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ws_url_derived_from_base() {
        let config = ClientConfig::new("http://localhost:8000/api/");
        assert_eq!(config.effective_ws_url(), "ws://localhost:8000/api");

        let config = ClientConfig::new("https://pos.example.com/api");
        assert_eq!(config.effective_ws_url(), "wss://pos.example.com/api");
    }

    #[test]
    fn test_explicit_ws_url_wins() {
        let config =
            ClientConfig::new("https://pos.example.com/api").with_ws_url("ws://127.0.0.1:9000/api");
        assert_eq!(config.effective_ws_url(), "ws://127.0.0.1:9000/api");
    }
}
