//! High-level client — `CoinCapClient` with nested sub-client accessors.

use crate::domain::asset::client::Assets;
use crate::domain::asset::AssetListStore;
use crate::error::SdkError;
use crate::http::CoinCapHttp;

// Re-export sub-client types for convenience.
pub use crate::domain::asset::client::Assets as AssetsClient;

/// The primary entry point for the CoinCap SDK.
#[derive(Clone)]
pub struct CoinCapClient {
    pub(crate) http: CoinCapHttp,
}

impl CoinCapClient {
    pub fn builder() -> CoinCapClientBuilder {
        CoinCapClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn assets(&self) -> Assets<'_> {
        Assets { client: self }
    }

    /// A list store backed by this client, with the default search debounce.
    ///
    /// The store is intentionally not embedded in `CoinCapClient`: its lifetime
    /// belongs to the screen that shows the list.
    pub fn asset_list(&self) -> AssetListStore<CoinCapClient> {
        AssetListStore::new(self.clone())
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CoinCapClientBuilder {
    base_url: String,
}

impl Default for CoinCapClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
        }
    }
}

impl CoinCapClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn build(self) -> Result<CoinCapClient, SdkError> {
        Ok(CoinCapClient {
            http: CoinCapHttp::new(&self.base_url)?,
        })
    }
}
