use std::env;

#[derive(Clone)]
pub struct Config {
    pub api_base_url: String,
    pub request_timeout_ms: u64,
    pub message_poll_interval_ms: u64,
    pub typing_poll_interval_ms: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_base_url: env::var("PARISH_API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            request_timeout_ms: env::var("REQUEST_TIMEOUT_MS")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .expect("REQUEST_TIMEOUT_MS must be a number"),
            message_poll_interval_ms: env::var("MESSAGE_POLL_INTERVAL_MS")
                .unwrap_or_else(|_| "4000".to_string())
                .parse()
                .expect("MESSAGE_POLL_INTERVAL_MS must be a number"),
            typing_poll_interval_ms: env::var("TYPING_POLL_INTERVAL_MS")
                .unwrap_or_else(|_| "2500".to_string())
                .parse()
                .expect("TYPING_POLL_INTERVAL_MS must be a number"),
        }
    }
}
