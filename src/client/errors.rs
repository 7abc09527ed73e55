use std::fmt;

use reqwest::StatusCode;

/// Every way a load can fail. The board collapses them all into the error
/// view; the variant only matters for the log.
#[derive(Debug)]
pub enum FetchError {
    Network(reqwest::Error),
    Status(StatusCode),
    Decode(serde_json::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(e) if e.is_timeout() => write!(f, "Request timed out: {}", e),
            FetchError::Network(e) => write!(f, "Network error: {}", e),
            FetchError::Status(status) => write!(f, "HTTP {}", status.as_u16()),
            FetchError::Decode(e) => write!(f, "Malformed orders payload: {}", e),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Network(e) => Some(e),
            FetchError::Status(_) => None,
            FetchError::Decode(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e)
    }
}
