use thiserror::Error;

/// Failure of a backend call. Either the server answered with a non-success
/// HTTP status, or the request never produced a response at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("{message}")]
    Network { message: String },
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Network { .. } => None,
        }
    }

    /// Short user-facing message. Known status codes map to fixed strings,
    /// anything else falls through to the failure's own description.
    pub fn user_message(&self) -> String {
        match self.status() {
            Some(404) => "User not found".to_string(),
            Some(500) => "Server error".to_string(),
            _ => self.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ApiError::Status {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None => ApiError::Network {
                message: err.to_string(),
            },
        }
    }
}
