//! Low-level HTTP client — `CoinCapHttp`.
//!
//! One GET per call: no retries, no caching, no custom headers and no timeout
//! beyond the transport default. Returns wire types; the high-level client
//! wraps this.

use crate::domain::asset::wire::{AssetPage, AssetQuery};
use crate::error::{FetchError, SdkError};

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

/// Low-level HTTP client for the CoinCap REST API.
#[derive(Clone)]
pub struct CoinCapHttp {
    base_url: String,
    client: Client,
}

impl CoinCapHttp {
    pub fn new(base_url: &str) -> Result<Self, SdkError> {
        let client = Client::builder()
            .build()
            .map_err(|e| SdkError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Assets ───────────────────────────────────────────────────────────

    pub async fn get_assets(&self, query: &AssetQuery) -> Result<AssetPage, FetchError> {
        self.fetch(&query.url(&self.base_url)).await
    }

    // ── Generic fetch ────────────────────────────────────────────────────

    /// GET `url` and decode the JSON body into `T`.
    pub async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let url = Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;
        tracing::debug!(%url, "GET");

        let resp = self.client.get(url).send().await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await?;

        decode_response(status, &body)
    }
}

/// Turns a raw response into `T`: non-2xx statuses fail with
/// [`FetchError::RequestFailed`], malformed bodies with [`FetchError::Decode`].
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T, FetchError> {
    if !(200..=299).contains(&status) {
        let text = String::from_utf8_lossy(body);
        return Err(FetchError::RequestFailed {
            status: Some(status),
            reason: if text.is_empty() {
                format!("HTTP {}", status)
            } else {
                text.into_owned()
            },
        });
    }

    Ok(serde_json::from_slice(body)?)
}
