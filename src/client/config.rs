use std::env;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the FinTrust backend, without a trailing slash.
    pub api_base_url: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let api_base_url = env::var("FINTRUST_API_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        }
    }
}
