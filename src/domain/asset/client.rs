//! Assets sub-client — listing and search.

use crate::client::CoinCapClient;
use crate::domain::asset::state::AssetSource;
use crate::domain::asset::wire::AssetQuery;
use crate::domain::asset::Asset;
use crate::error::{FetchError, SdkError};

use async_trait::async_trait;

/// Sub-client for asset listing operations.
pub struct Assets<'a> {
    pub(crate) client: &'a CoinCapClient,
}

impl<'a> Assets<'a> {
    /// Unfiltered listing at `page`.
    pub async fn list(&self, page: u32) -> Result<Vec<Asset>, SdkError> {
        self.query(&AssetQuery::page(page)).await
    }

    /// Assets whose symbol or name matches `text`, at `page`.
    pub async fn search(&self, text: &str, page: u32) -> Result<Vec<Asset>, SdkError> {
        self.query(&AssetQuery::search(text, page)).await
    }

    pub async fn query(&self, query: &AssetQuery) -> Result<Vec<Asset>, SdkError> {
        let resp = self.client.http.get_assets(query).await?;
        Ok(resp.data)
    }
}

#[async_trait]
impl AssetSource for CoinCapClient {
    async fn fetch_assets(&self, query: &AssetQuery) -> Result<Vec<Asset>, FetchError> {
        Ok(self.http.get_assets(query).await?.data)
    }
}
