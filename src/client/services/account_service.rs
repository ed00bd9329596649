use log::debug;
use serde::Serialize;

use crate::client::config::ClientConfig;
use crate::client::models::account::Account;
use crate::client::services::error::ApiError;

#[derive(Debug, Serialize)]
struct CreateAccountRequest<'a> {
    name: &'a str,
}

/// Thin HTTP collaborator for the accounts backend. Holds no view logic;
/// failures come back as [`ApiError`] and are turned into view state by the
/// caller. No request timeout is configured here, a hung backend leaves the
/// caller waiting.
#[derive(Debug)]
pub struct AccountService {
    http: reqwest::Client,
    base_url: String,
}

impl AccountService {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.clone(),
        }
    }

    fn accounts_url(&self, user_id: &str) -> String {
        format!("{}/api/users/{}/accounts", self.base_url, user_id)
    }

    /// Fetch all accounts of `user_id`. Rejections carry the HTTP status when
    /// the server answered, otherwise only a transport description.
    pub async fn fetch_accounts(&self, user_id: &str) -> Result<Vec<Account>, ApiError> {
        let url = self.accounts_url(user_id);
        debug!("[account_service] GET {}", url);
        let response = self.http.get(&url).send().await?.error_for_status()?;
        Ok(response.json::<Vec<Account>>().await?)
    }

    /// Create an account for `user_id`. Returns once the backend has durably
    /// created it.
    pub async fn create_account(&self, user_id: &str, name: &str) -> Result<Account, ApiError> {
        let url = self.accounts_url(user_id);
        debug!("[account_service] POST {}", url);
        let response = self
            .http
            .post(&url)
            .json(&CreateAccountRequest { name })
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json::<Account>().await?)
    }
}
