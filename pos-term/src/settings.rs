//! Environment-driven settings

use std::path::PathBuf;

use pos_client::ClientConfig;

/// Terminal app settings, read from the environment (a `.env` file is
/// honored via dotenv).
#[derive(Debug, Clone)]
pub struct Settings {
    /// Service base URL including the API prefix
    pub base_url: String,
    /// Explicit WebSocket base URL override
    pub ws_url: Option<String>,
    /// Directory for the session file and logs
    pub data_dir: PathBuf,
    /// Surface per-table billing errors instead of skipping
    pub strict_errors: bool,
}

impl Settings {
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("POS_BASE_URL").unwrap_or_else(|_| "http://localhost:8000/api".into());
        let ws_url = std::env::var("POS_WS_URL").ok();
        let data_dir = std::env::var("POS_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./pos-data"));
        let strict_errors = std::env::var("POS_STRICT_ERRORS")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Self {
            base_url,
            ws_url,
            data_dir,
            strict_errors,
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        let mut config =
            ClientConfig::new(&self.base_url).with_strict_errors(self.strict_errors);
        if let Some(ws) = &self.ws_url {
            config = config.with_ws_url(ws);
        }
        config
    }
}
