use std::fmt;

/// Everything that can go wrong fetching one JSON resource.
#[derive(Debug)]
pub enum NetworkError {
    /// Not an absolute http(s) URL.
    InvalidUrl,
    /// Transport failure (DNS, TLS, timeout, connection reset).
    RequestFailed(reqwest::Error),
    /// Body was present but didn't match the expected shape.
    DecodingFailed(serde_json::Error),
    /// Body was empty.
    NoData,
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::InvalidUrl => write!(f, "The URL provided is invalid."),
            NetworkError::RequestFailed(e) => write!(f, "Network request failed: {e}"),
            NetworkError::DecodingFailed(e) => write!(f, "Failed to decode response: {e}"),
            NetworkError::NoData => write!(f, "No data received from server."),
        }
    }
}

impl std::error::Error for NetworkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NetworkError::RequestFailed(e) => Some(e),
            NetworkError::DecodingFailed(e) => Some(e),
            NetworkError::InvalidUrl | NetworkError::NoData => None,
        }
    }
}
