//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types
//! - `wire.rs` — Raw serde structs matching backend responses, request queries
//! - `view.rs` — Display models built from domain types
//! - `state.rs` — State containers with update methods
//! - `client.rs` — Sub-client with HTTP methods

pub mod asset;
