//! Currency string normalization.

use crate::constants::CURRENCY_PREFIX;

/// Converts a sheet currency string such as `"Rs. 12,345.00"` into a number.
///
/// The cleanup is textual, in this order:
/// 1. drop the first `"Rs."`,
/// 2. drop every `,`,
/// 3. drop the first literal `".00"`,
/// 4. trim whitespace,
/// 5. read the longest leading float literal.
///
/// Step 3 is not rounding. `"Rs. 123.001"` becomes `1231`, and dashboard totals
/// are defined by that behavior, so it must not be replaced with decimal
/// parsing.
///
/// Input without a numeric prefix (including the empty string) yields NaN,
/// which then poisons any sum it is added to.
pub fn parse_currency(value: &str) -> f64 {
    let cleaned = value
        .replacen(CURRENCY_PREFIX, "", 1)
        .replace(',', "")
        .replacen(".00", "", 1);
    parse_leading_float(cleaned.trim())
}

fn parse_leading_float(text: &str) -> f64 {
    let bytes = text.as_bytes();
    let len = bytes.len();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if text[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let mantissa_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - mantissa_start;

    if end < len && bytes[end] == b'.' {
        let mut fraction_end = end + 1;
        while fraction_end < len && bytes[fraction_end].is_ascii_digit() {
            fraction_end += 1;
        }
        let fraction_digits = fraction_end - end - 1;
        if digits + fraction_digits > 0 {
            digits += fraction_digits;
            end = fraction_end;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exponent_end = end + 1;
        if exponent_end < len && matches!(bytes[exponent_end], b'+' | b'-') {
            exponent_end += 1;
        }
        let exponent_digits_start = exponent_end;
        while exponent_end < len && bytes[exponent_end].is_ascii_digit() {
            exponent_end += 1;
        }
        if exponent_end > exponent_digits_start {
            end = exponent_end;
        }
    }

    text[..end].parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_formatted_amount() {
        assert_eq!(parse_currency("Rs. 12,345.00"), 12345.0);
        assert_eq!(parse_currency("Rs. 0.00"), 0.0);
        assert_eq!(parse_currency("Rs. 500.00"), 500.0);
    }

    #[test]
    fn test_strips_every_thousands_separator() {
        assert_eq!(parse_currency("Rs. 1,234,567.00"), 1_234_567.0);
        assert_eq!(parse_currency("Rs. 1,00,000.00"), 100_000.0);
    }

    #[test]
    fn test_keeps_real_cents() {
        assert_eq!(parse_currency("Rs. 1,000.50"), 1000.5);
        assert_eq!(parse_currency("Rs. 99.05"), 99.05);
    }

    #[test]
    fn test_dot_zero_zero_strip_is_textual() {
        assert_eq!(parse_currency("Rs. 123.001"), 1231.0);
        assert_eq!(parse_currency("1.005"), 15.0);
    }

    #[test]
    fn test_works_without_prefix() {
        assert_eq!(parse_currency("2500"), 2500.0);
        assert_eq!(parse_currency("  42.00  "), 42.0);
        assert_eq!(parse_currency("-75.00"), -75.0);
    }

    #[test]
    fn test_reads_numeric_prefix_only() {
        assert_eq!(parse_currency("Rs. 300.00 (approx)"), 300.0);
        assert_eq!(parse_currency("1e3"), 1000.0);
        assert_eq!(parse_currency("7."), 7.0);
        assert_eq!(parse_currency(".5"), 0.5);
        assert_eq!(parse_currency("Infinity"), f64::INFINITY);
    }

    #[test]
    fn test_non_numeric_is_nan() {
        assert!(parse_currency("").is_nan());
        assert!(parse_currency("Rs.").is_nan());
        assert!(parse_currency("n/a").is_nan());
        assert!(parse_currency("-").is_nan());
        assert!(parse_currency(".").is_nan());
        assert!(parse_currency("INR 400.00").is_nan());
    }
}
