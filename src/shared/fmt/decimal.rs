//! Display formatting for the decimal-as-string fields CoinCap returns.
//!
//! Every function is total: input that does not parse as a base-10 number
//! renders as [`NO_DATA`] instead of failing. Values inside the `Decimal`
//! range are formatted exactly; larger or finer ones fall back to `f64`.

use super::num::{fixed, fixed_float, group_thousands, is_rendered_zero};
use rust_decimal::prelude::*;

/// Placeholder shown when a numeric field is missing or unparseable.
pub const NO_DATA: &str = "No data";

const HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);
const THOUSAND: u32 = 1_000;
const THOUSANDS_CEILING: u32 = 999_999;
const MILLION: u32 = 1_000_000;
const MILLIONS_CEILING: u32 = 999_999_999;
const BILLION: u32 = 1_000_000_000;

/// Direction of a 24h change, used to colour change labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Positive,
    Negative,
    Unknown,
}

/// Parses a decimal string, accepting plain (`"12.5"`) and scientific (`"1.2e3"`) notation.
///
/// Digit separators are not numbers: `"1_000"` and `"1,000"` are rejected.
pub fn parse_decimal(s: &str) -> Option<Decimal> {
    if s.contains('_') {
        return None;
    }
    Decimal::from_str(s)
        .ok()
        .or_else(|| Decimal::from_scientific(s).ok())
}

fn parse_float(s: &str) -> Option<f64> {
    if s.contains('_') {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// A parsed field: exact when it fits a `Decimal`, otherwise the nearest finite `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Number {
    Exact(Decimal),
    Float(f64),
}

impl Number {
    fn parse(s: &str) -> Option<Self> {
        parse_decimal(s)
            .map(Number::Exact)
            .or_else(|| parse_float(s).map(Number::Float))
    }

    fn is_negative(&self) -> bool {
        match self {
            Number::Exact(d) => *d < Decimal::ZERO,
            Number::Float(v) => *v < 0.0,
        }
    }

    fn abs(self) -> Self {
        match self {
            Number::Exact(d) => Number::Exact(d.abs()),
            Number::Float(v) => Number::Float(v.abs()),
        }
    }

    fn below(&self, bound: u32) -> bool {
        match self {
            Number::Exact(d) => *d < Decimal::from(bound),
            Number::Float(v) => *v < f64::from(bound),
        }
    }

    fn divided_by(self, divisor: u32) -> Self {
        match self {
            Number::Exact(d) => Number::Exact(d / Decimal::from(divisor)),
            Number::Float(v) => Number::Float(v / f64::from(divisor)),
        }
    }

    fn fixed(&self, decimals: usize) -> String {
        match self {
            Number::Exact(d) => fixed(d, decimals),
            Number::Float(v) => fixed_float(*v, decimals),
        }
    }
}

/// `"1234.5"` → `"$ 1,234.50"`.
pub fn format_currency(s: &str) -> String {
    let Some(value) = Number::parse(s) else {
        return NO_DATA.to_string();
    };

    let digits = value.abs().fixed(2);
    let body = group_thousands(&digits);
    if value.is_negative() && !is_rendered_zero(&digits) {
        format!("-$ {}", body)
    } else {
        format!("$ {}", body)
    }
}

/// `"-3.456"` → `"- 3.46%"`, `"2"` → `"+ 2.00%"`.
pub fn format_change_percent(s: &str) -> String {
    let Some(value) = Number::parse(s) else {
        return NO_DATA.to_string();
    };

    format!("{} {}%", sign_of(&value), value.abs().fixed(2))
}

/// Abbreviates a magnitude with `k`/`m`/`b` suffixes, optionally prefixed by `$`.
///
/// Buckets are half-open and chosen by absolute value:
/// `[0, 1000)` no suffix and no decimals, `[1000, 999_999)` → `k`,
/// `[1_000_000, 999_999_999)` → `m`, anything else → `b`. Values in
/// `[999_999, 1_000_000)` therefore render in billions. Negative inputs keep
/// their sign in front of the `$`.
pub fn rounded_with_abbreviations(s: &str, have_sign: bool) -> String {
    let Some(value) = Number::parse(s) else {
        return NO_DATA.to_string();
    };

    let magnitude = value.abs();
    let (scaled, decimals, suffix) = if magnitude.below(THOUSAND) {
        (magnitude, 0, "")
    } else if magnitude.below(THOUSANDS_CEILING) {
        (magnitude.divided_by(THOUSAND), 2, "k")
    } else if !magnitude.below(MILLION) && magnitude.below(MILLIONS_CEILING) {
        (magnitude.divided_by(MILLION), 2, "m")
    } else {
        (magnitude.divided_by(BILLION), 2, "b")
    };

    let digits = scaled.fixed(decimals);
    let sign = if value.is_negative() && !is_rendered_zero(&digits) {
        "-"
    } else {
        ""
    };
    let currency = if have_sign { "$" } else { "" };

    format!("{}{}{}{}", sign, currency, digits, suffix)
}

/// Absolute 24h price move alongside the percentage: `("100", "-10")` → `"- 10.00 (10.00%)"`.
///
/// A product too large for `Decimal` is computed in `f64`; only a non-finite
/// result renders as [`NO_DATA`].
pub fn format_price_and_percent_change(price: &str, percent: &str) -> String {
    let (Some(price_value), Some(percent_value)) = (Number::parse(price), Number::parse(percent))
    else {
        return NO_DATA.to_string();
    };

    let exact = match (price_value, percent_value) {
        (Number::Exact(p), Number::Exact(c)) => p
            .checked_mul(c.abs())
            .and_then(|v| v.checked_div(HUNDRED))
            .map(Number::Exact),
        _ => None,
    };
    let Some(change) = exact.or_else(|| {
        let v = parse_float(price)? * parse_float(percent)?.abs() / 100.0;
        v.is_finite().then_some(Number::Float(v))
    }) else {
        return NO_DATA.to_string();
    };

    format!(
        "{} {} ({}%)",
        sign_of(&percent_value),
        change.fixed(2),
        percent_value.abs().fixed(2)
    )
}

/// Classifies a change-percent string for colouring.
pub fn change_trend(s: &str) -> Trend {
    match Number::parse(s) {
        Some(v) if !v.is_negative() => Trend::Positive,
        Some(_) => Trend::Negative,
        None => Trend::Unknown,
    }
}

fn sign_of(value: &Number) -> &'static str {
    if value.is_negative() {
        "-"
    } else {
        "+"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_plain_and_scientific() {
        assert_eq!(parse_decimal("12.5"), Some(Decimal::new(125, 1)));
        assert_eq!(parse_decimal("1.5e3"), Some(Decimal::from(1500)));
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal(""), None);
    }

    #[test]
    fn test_digit_separators_are_unparseable() {
        assert_eq!(parse_decimal("1_000"), None);
        assert_eq!(format_currency("1_000"), NO_DATA);
        assert_eq!(format_change_percent("1_000"), NO_DATA);
        assert_eq!(rounded_with_abbreviations("1_000", true), NO_DATA);
        assert_eq!(format_price_and_percent_change("1_000", "5"), NO_DATA);
        assert_eq!(change_trend("-1_000"), Trend::Unknown);
    }

    #[test]
    fn test_non_finite_words_are_unparseable() {
        assert_eq!(format_currency("inf"), NO_DATA);
        assert_eq!(format_change_percent("NaN"), NO_DATA);
        assert_eq!(rounded_with_abbreviations("-infinity", false), NO_DATA);
    }

    #[test]
    fn test_format_currency_beyond_decimal_range() {
        assert_eq!(
            format_currency("1e30"),
            "$ 1,000,000,000,000,000,019,884,624,838,656.00"
        );
        assert_eq!(
            format_currency("1234567890123456789012345678901"),
            "$ 1,234,567,890,123,456,849,145,940,148,224.00"
        );
        assert_eq!(
            format_currency("-1e30"),
            "-$ 1,000,000,000,000,000,019,884,624,838,656.00"
        );
        assert_eq!(format_currency("-1e-30"), "$ 0.00");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency("1234.5"), "$ 1,234.50");
        assert_eq!(format_currency("0"), "$ 0.00");
        assert_eq!(format_currency("0.004"), "$ 0.00");
        assert_eq!(format_currency("43210.987654"), "$ 43,210.99");
        assert_eq!(format_currency("1000000"), "$ 1,000,000.00");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency("-1234.5"), "-$ 1,234.50");
        assert_eq!(format_currency("-0.001"), "$ 0.00");
    }

    #[test]
    fn test_format_currency_unparseable() {
        assert_eq!(format_currency("abc"), NO_DATA);
        assert_eq!(format_currency(""), NO_DATA);
    }

    #[test]
    fn test_format_change_percent() {
        assert_eq!(format_change_percent("-3.456"), "- 3.46%");
        assert_eq!(format_change_percent("2"), "+ 2.00%");
        assert_eq!(format_change_percent("0"), "+ 0.00%");
        assert_eq!(format_change_percent("0.8523468031452197"), "+ 0.85%");
        assert_eq!(format_change_percent("n/a"), NO_DATA);
    }

    #[test]
    fn test_abbreviations_below_thousand() {
        assert_eq!(rounded_with_abbreviations("999", true), "$999");
        assert_eq!(rounded_with_abbreviations("0", false), "0");
        assert_eq!(rounded_with_abbreviations("12.6", false), "13");
    }

    #[test]
    fn test_abbreviations_thousands() {
        assert_eq!(rounded_with_abbreviations("1000", false), "1.00k");
        assert_eq!(rounded_with_abbreviations("1500", true), "$1.50k");
        assert_eq!(rounded_with_abbreviations("999998", false), "1000.00k");
    }

    #[test]
    fn test_abbreviations_millions_and_billions() {
        assert_eq!(rounded_with_abbreviations("2500000", true), "$2.50m");
        assert_eq!(rounded_with_abbreviations("2500000000", false), "2.50b");
        assert_eq!(
            rounded_with_abbreviations("19615806.0000000000000000", false),
            "19.62m"
        );
        assert_eq!(
            rounded_with_abbreviations("1276587432198.5", true),
            "$1276.59b"
        );
    }

    #[test]
    fn test_abbreviations_bucket_gaps_fall_to_billions() {
        assert_eq!(rounded_with_abbreviations("999999", false), "0.00b");
        assert_eq!(rounded_with_abbreviations("999999.5", true), "$0.00b");
        assert_eq!(rounded_with_abbreviations("999999999", false), "1.00b");
    }

    #[test]
    fn test_abbreviations_negative_use_magnitude_bucket() {
        assert_eq!(rounded_with_abbreviations("-1500", false), "-1.50k");
        assert_eq!(rounded_with_abbreviations("-1500", true), "-$1.50k");
        assert_eq!(rounded_with_abbreviations("-42", true), "-$42");
        assert_eq!(rounded_with_abbreviations("-2500000", false), "-2.50m");
        assert_eq!(rounded_with_abbreviations("-0.2", false), "0");
    }

    #[test]
    fn test_abbreviations_beyond_decimal_range() {
        assert_eq!(
            rounded_with_abbreviations("1e30", true),
            "$1000000000000000000000.00b"
        );
        assert_eq!(
            rounded_with_abbreviations("-1234567890123456789012345678901", false),
            "-1234567890123456774144.00b"
        );
        assert_eq!(format_change_percent("1e30"), "+ 1000000000000000019884624838656.00%");
    }

    #[test]
    fn test_abbreviations_unparseable() {
        assert_eq!(rounded_with_abbreviations("", true), NO_DATA);
        assert_eq!(rounded_with_abbreviations("1,000", false), NO_DATA);
    }

    #[test]
    fn test_format_price_and_percent_change() {
        assert_eq!(
            format_price_and_percent_change("100", "-10"),
            "- 10.00 (10.00%)"
        );
        assert_eq!(
            format_price_and_percent_change("43000", "2.5"),
            "+ 1075.00 (2.50%)"
        );
        assert_eq!(format_price_and_percent_change("1", "0"), "+ 0.00 (0.00%)");
    }

    #[test]
    fn test_format_price_and_percent_change_overflow_uses_float() {
        assert_eq!(
            format_price_and_percent_change("10000000000000000000000000000", "-50"),
            "- 4999999999999999791559868416.00 (50.00%)"
        );
        assert_eq!(format_price_and_percent_change("1e300", "1e300"), NO_DATA);
    }

    #[test]
    fn test_format_price_and_percent_change_requires_both() {
        assert_eq!(format_price_and_percent_change("abc", "1"), NO_DATA);
        assert_eq!(format_price_and_percent_change("100", NO_DATA), NO_DATA);
    }

    #[test]
    fn test_change_trend() {
        assert_eq!(change_trend("0.5"), Trend::Positive);
        assert_eq!(change_trend("0"), Trend::Positive);
        assert_eq!(change_trend("-0.01"), Trend::Negative);
        assert_eq!(change_trend("-1e30"), Trend::Negative);
        assert_eq!(change_trend(NO_DATA), Trend::Unknown);
    }
}
