use serde::Deserialize;

/// Read-only projection of a bank account as served by the backend.
/// The client never recomputes `balance`; it is display pass-through.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub balance: f64,
}

/// Reference to the per-account detail screen. This client only builds the
/// reference; it does not own routing.
pub fn detail_route(account_id: &str) -> String {
    format!("/account-overview/{}", account_id)
}

impl Account {
    pub fn detail_route(&self) -> String {
        detail_route(&self.id)
    }
}
