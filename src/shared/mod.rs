//! Shared utilities used across domain modules.

pub mod fmt;

pub use fmt::{parse_decimal, Trend, NO_DATA};
