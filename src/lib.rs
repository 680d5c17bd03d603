//! # CoinCap SDK
//!
//! A Rust client for the CoinCap asset listing: paginated and searchable
//! asset lists plus display formatting for the decimal-string market data.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Formatting, domain models, list store (always available)
//! 2. **HTTP** — `CoinCapHttp`, a single GET + JSON decode fetcher
//! 3. **High-Level Client** — `CoinCapClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coincap_sdk::prelude::*;
//!
//! let client = CoinCapClient::builder().build()?;
//! let first_page = client.assets().list(0).await?;
//!
//! let store = client.asset_list();
//! let mut updates = store.subscribe();
//! store.start().await;
//! store.search("bit").await;
//! updates.recv().await?;
//! for asset in store.assets().await {
//!     println!("{:?}", AssetRow::from(&asset));
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared formatting utilities.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, state, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// Single-shot HTTP fetcher.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `CoinCapClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Formatting
    pub use crate::shared::fmt::{
        change_trend, format_change_percent, format_currency, format_price_and_percent_change,
        rounded_with_abbreviations, Trend, NO_DATA,
    };

    // Domain types — asset
    pub use crate::domain::asset::{
        Asset, AssetDetails, AssetListStore, AssetListStoreBuilder, AssetPage, AssetQuery,
        AssetRow, AssetSource, StoreEvent,
    };

    // Errors
    pub use crate::error::{FetchError, SdkError};

    // Network
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_SEARCH_DEBOUNCE};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{AssetsClient, CoinCapClient, CoinCapClientBuilder};
    #[cfg(feature = "http")]
    pub use crate::http::CoinCapHttp;
}
