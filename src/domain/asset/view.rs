//! Display models derived from an [`Asset`] for list rows and the detail screen.

use super::Asset;
use crate::shared::fmt::{
    change_trend, format_change_percent, format_currency, format_price_and_percent_change,
    rounded_with_abbreviations, Trend, NO_DATA,
};

/// One row of the asset list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRow {
    pub name: String,
    pub symbol: String,
    pub price: String,
    pub change: String,
    pub trend: Trend,
    pub icon_url: String,
}

impl From<&Asset> for AssetRow {
    fn from(asset: &Asset) -> Self {
        let change = asset.change_percent_24hr.as_deref();
        Self {
            name: asset.name.clone(),
            symbol: asset.symbol.clone(),
            price: format_currency(&asset.price_usd),
            change: change
                .map(format_change_percent)
                .unwrap_or_else(|| NO_DATA.to_string()),
            trend: change.map(change_trend).unwrap_or(Trend::Unknown),
            icon_url: asset.icon_url(),
        }
    }
}

/// Labels shown on the asset detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDetails {
    pub title: String,
    pub price: String,
    pub change: String,
    pub market_cap: String,
    pub supply: String,
    pub volume_24hr: String,
    pub is_positive_percent: bool,
}

impl From<&Asset> for AssetDetails {
    fn from(asset: &Asset) -> Self {
        let change = asset.change_percent_24hr.as_deref().unwrap_or(NO_DATA);
        let abbreviated = |field: &Option<String>, have_sign: bool| {
            field
                .as_deref()
                .map(|v| rounded_with_abbreviations(v, have_sign))
                .unwrap_or_else(|| NO_DATA.to_string())
        };

        Self {
            title: asset.name.clone(),
            price: format_currency(&asset.price_usd),
            change: format_price_and_percent_change(&asset.price_usd, change),
            market_cap: abbreviated(&asset.market_cap_usd, true),
            supply: rounded_with_abbreviations(&asset.supply, false),
            volume_24hr: abbreviated(&asset.volume_usd_24hr, true),
            is_positive_percent: change_trend(change) == Trend::Positive,
        }
    }
}
