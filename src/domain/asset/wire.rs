//! Wire types for the asset listing endpoint (REST).

use super::Asset;
use crate::network::{ASSETS_PATH, OFFSET_SUFFIX, PAGE_LIMIT};
use serde::{Deserialize, Serialize};

/// REST response envelope for `GET /v2/assets`.
///
/// The API sends no total count or cursor; callers infer "more pages" by
/// asking for the next offset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetPage {
    pub data: Vec<Asset>,
}

/// Query parameters for one listing request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssetQuery {
    /// Free-text filter on symbol or name; empty means unfiltered.
    pub search: String,
    /// Zero-based page index.
    pub page: u32,
}

impl AssetQuery {
    /// Unfiltered listing at `page`.
    pub fn page(page: u32) -> Self {
        Self {
            search: String::new(),
            page,
        }
    }

    /// Filtered listing at `page`.
    pub fn search(text: impl Into<String>, page: u32) -> Self {
        Self {
            search: text.into(),
            page,
        }
    }

    /// The `offset` parameter: the page index with [`OFFSET_SUFFIX`] appended.
    ///
    /// With the fixed page size of ten this is the same as `page * 10`.
    pub fn offset(&self) -> String {
        format!("{}{}", self.page, OFFSET_SUFFIX)
    }

    /// Full request URL against `base_url`.
    pub fn url(&self, base_url: &str) -> String {
        format!(
            "{}{}?search={}&limit={}&offset={}",
            base_url.trim_end_matches('/'),
            ASSETS_PATH,
            urlencoding::encode(&self.search),
            PAGE_LIMIT,
            self.offset()
        )
    }
}
