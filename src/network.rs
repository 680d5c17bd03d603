//! Network URL constants for the CoinCap SDK.

use std::time::Duration;

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.coincap.io";

/// Path of the asset listing endpoint.
pub const ASSETS_PATH: &str = "/v2/assets";

/// Page size sent as the `limit` query parameter.
pub const PAGE_LIMIT: &str = "10";

/// Appended to the page index to build the `offset` query parameter.
pub const OFFSET_SUFFIX: &str = "0";

/// Quiet period before a non-empty search is sent.
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(800);

/// Base URL of the coin icon CDN (icons are keyed by lowercase symbol).
pub const ICON_CDN_URL: &str = "https://cdn.jsdelivr.net/gh/atomiclabs/cryptocurrency-icons@1a63530be6e374711a8554f31b17e4cb92c25fa5/128/color/";

/// File extension of CDN icons.
pub const ICON_EXTENSION: &str = ".png";
