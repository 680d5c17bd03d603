//! Digit-string helpers shared by the display formatters.

use rust_decimal::Decimal;

/// Inserts thousands separators into the integer part of a plain decimal string.
///
/// The fractional part is left untouched, so `"1234.50"` becomes `"1,234.50"`.
pub fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };

    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let grouped = integer
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",");

    match fraction {
        Some(fraction) => format!("{}{}.{}", sign, grouped, fraction),
        None => format!("{}{}", sign, grouped),
    }
}

/// Renders `value` with exactly `decimals` fractional digits (banker's rounding).
pub fn fixed(value: &Decimal, decimals: usize) -> String {
    let rounded = value.round_dp(decimals as u32);
    format!("{:.1$}", rounded, decimals)
}

/// `f64` counterpart of [`fixed`] for magnitudes outside the `Decimal` range.
pub fn fixed_float(value: f64, decimals: usize) -> String {
    format!("{:.1$}", value, decimals)
}

/// True when a rendered number shows only zeros, e.g. `"0.00"`.
pub fn is_rendered_zero(digits: &str) -> bool {
    digits.bytes().all(|b| matches!(b, b'0' | b'.'))
}
