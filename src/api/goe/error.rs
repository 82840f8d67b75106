use reqwest::StatusCode;

/// Every way a charger call can fail, displayed as a message fit for the user.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IP address is empty")]
    EmptyAddress,

    #[error("Invalid IP address format")]
    InvalidAddress,

    #[error("HTTP error: {}", .0.as_u16())]
    Http(StatusCode),

    #[error("Invalid JSON response")]
    NotAnObject,

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Connection timeout - charger not responding")]
    Timeout(#[source] reqwest::Error),

    #[error("Connection refused - check IP address and network")]
    ConnectionRefused(#[source] reqwest::Error),

    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Failed to set energy limit: {0}")]
    Rejected(String),
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout(error)
        } else if error.is_connect() {
            Self::ConnectionRefused(error)
        } else {
            Self::Network(error)
        }
    }
}
