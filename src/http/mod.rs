//! HTTP layer — `CoinCapHttp`, a single-shot GET + JSON decode fetcher.

pub mod client;

pub use client::{decode_response, CoinCapHttp};
