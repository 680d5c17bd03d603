//! Asset domain — market snapshots, listing queries, display models, list store.

#[cfg(feature = "http")]
pub mod client;
pub mod state;
pub mod view;
pub mod wire;

use crate::network::{ICON_CDN_URL, ICON_EXTENSION};
use serde::{Deserialize, Serialize};

pub use state::{AssetListStore, AssetListStoreBuilder, AssetSource, StoreEvent};
pub use view::{AssetDetails, AssetRow};
pub use wire::{AssetPage, AssetQuery};

/// One cryptocurrency's market snapshot.
///
/// Numeric fields arrive as decimal strings and are kept verbatim; they are
/// parsed only when formatted for display. Snake-case keys are the canonical
/// wire names, camelCase keys are accepted as well.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Asset {
    pub symbol: String,
    pub name: String,
    pub supply: String,
    #[serde(default, alias = "marketCapUsd")]
    pub market_cap_usd: Option<String>,
    #[serde(
        default,
        rename = "volume_usd24_hr",
        alias = "volume_usd_24_hr",
        alias = "volumeUsd24Hr"
    )]
    pub volume_usd_24hr: Option<String>,
    #[serde(alias = "priceUsd")]
    pub price_usd: String,
    #[serde(
        default,
        rename = "change_percent24_hr",
        alias = "change_percent_24_hr",
        alias = "changePercent24Hr"
    )]
    pub change_percent_24hr: Option<String>,
}

impl Asset {
    /// CDN icon for this asset, keyed by lowercase symbol.
    pub fn icon_url(&self) -> String {
        format!(
            "{}{}{}",
            ICON_CDN_URL,
            self.symbol.to_lowercase(),
            ICON_EXTENSION
        )
    }
}
