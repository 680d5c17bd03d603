//! Human-readable formatting for asset market data.

pub mod decimal;
pub mod num;

pub use decimal::{
    change_trend, format_change_percent, format_currency, format_price_and_percent_change,
    parse_decimal, rounded_with_abbreviations, Trend, NO_DATA,
};
