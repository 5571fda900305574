//! HTTP GET + JSON decode for the catalog API.
//!
//! One attempt per call. No retries, no caching, transport default timeouts.

use log::{debug, info, warn};
use reqwest::Url;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use serde::de::DeserializeOwned;

use super::error::NetworkError;

/// Fetches and decodes JSON resources. Cloning shares the connection pool.
#[derive(Debug, Clone, Default)]
pub struct NetworkService {
    client: reqwest::Client,
}

impl NetworkService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// GETs `url` and decodes the body as `T`.
    pub async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, NetworkError> {
        let url = parse_url(url)?;
        info!("GET {}", url);

        // Always ask for a fresh copy; no conditional requests
        let response = self
            .client
            .get(url.clone())
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(NetworkError::RequestFailed)?;

        let status = response.status();
        debug!("{} responded with {}", url, status);
        if !status.is_success() {
            warn!("{} returned HTTP {}", url, status.as_u16());
        }

        let body = response.bytes().await.map_err(NetworkError::RequestFailed)?;
        debug!("{} body: {} bytes", url, body.len());

        if body.is_empty() {
            return Err(NetworkError::NoData);
        }

        serde_json::from_slice(&body).map_err(|e| {
            warn!("Failed to decode {}: {}", url, e);
            NetworkError::DecodingFailed(e)
        })
    }
}

/// Accepts only absolute http(s) URLs.
fn parse_url(raw: &str) -> Result<Url, NetworkError> {
    let url = Url::parse(raw).map_err(|e| {
        warn!("Rejected URL '{}': {}", raw, e);
        NetworkError::InvalidUrl
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => {
            warn!("Rejected URL '{}': unsupported scheme {}", raw, other);
            Err(NetworkError::InvalidUrl)
        }
    }
}
