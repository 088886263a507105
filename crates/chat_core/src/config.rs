use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the Shujaa backend, without the `/api` suffix.
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
    /// Per-request timeout applied by the HTTP client.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

const CONFIG_FILE_PATH: &str = "config.toml";

fn default_backend_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_request_timeout_secs() -> u64 {
    20
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        let mut config = Config {
            backend_url: default_backend_url(),
            request_timeout_secs: default_request_timeout_secs(),
        };

        //detect the config file exists
        if std::path::Path::new(CONFIG_FILE_PATH).exists() {
            // Try to read from config.toml first
            if let Ok(content) = std::fs::read_to_string(CONFIG_FILE_PATH) {
                if let Ok(file_config) = toml::from_str::<Config>(&content) {
                    config = file_config;
                }
            }
        }

        // Override with environment variables if they exist
        if let Ok(backend_url) = std::env::var("BACKEND_URL") {
            config.backend_url = backend_url;
        }
        if let Ok(timeout) = std::env::var("REQUEST_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.trim().parse() {
                config.request_timeout_secs = secs;
            }
        }
        config
    }
}
