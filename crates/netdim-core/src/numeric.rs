//! Numeric helpers shared by the formulas: input parsing, rounding and
//! site-count clamping.

/// Parse a user-entered number, falling back to zero.
///
/// Surrounding whitespace is ignored and the longest numeric prefix is used,
/// so `"12abc"` reads as 12 and `"1e3 km"` as 1000. Empty, non-numeric and
/// non-finite input all read as 0.
///
/// # Example
///
/// ```
/// use netdim_core::parse_or_zero;
///
/// assert_eq!(parse_or_zero("2.5"), 2.5);
/// assert_eq!(parse_or_zero("40 km"), 40.0);
/// assert_eq!(parse_or_zero("abc"), 0.0);
/// ```
pub fn parse_or_zero(input: &str) -> f64 {
    let prefix = numeric_prefix(input.trim());
    match prefix.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Longest prefix of `s` that forms a decimal number with optional sign,
/// fraction and exponent.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut i = 0;

    if i < len && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }

    let int_start = i;
    while i < len && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < len && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
        }
        mantissa_digits += i - frac_start;
    }

    if mantissa_digits == 0 {
        return "";
    }

    let mut end = i;
    if i < len && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < len && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        // An exponent marker without digits is not part of the number.
        if j > exp_start {
            end = j;
        }
    }

    &s[..end]
}

/// Round half up (towards positive infinity), the rule used for every
/// rounded output.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round half up to a fixed number of decimals.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    round_half_up(value * scale) / scale
}

/// Number of sites needed to cover `quantity` units, rounded up.
///
/// Non-finite and non-positive quantities need no sites; large counts
/// saturate at `u32::MAX`.
pub fn site_count(quantity: f64) -> u32 {
    if !quantity.is_finite() || quantity <= 0.0 {
        return 0;
    }
    let sites = quantity.ceil();
    if sites >= u32::MAX as f64 {
        u32::MAX
    } else {
        sites as u32
    }
}

/// Replace a non-finite value with zero.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Round a percentage half up and clamp it to `[0, 100]`.
pub fn percentage(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    round_half_up(value).clamp(0.0, 100.0) as u32
}

/// Format a number the way result labels show it: no trailing `.0` on whole
/// values and no negative zero.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_or_zero("100"), 100.0);
        assert_eq!(parse_or_zero("0.2"), 0.2);
        assert_eq!(parse_or_zero("-10"), -10.0);
        assert_eq!(parse_or_zero("+3"), 3.0);
        assert_eq!(parse_or_zero(".5"), 0.5);
        assert_eq!(parse_or_zero("5."), 5.0);
        assert_eq!(parse_or_zero("  42  "), 42.0);
    }

    #[test]
    fn test_parse_numeric_prefix() {
        assert_eq!(parse_or_zero("12abc"), 12.0);
        assert_eq!(parse_or_zero("1e3x"), 1000.0);
        assert_eq!(parse_or_zero("2e"), 2.0);
        assert_eq!(parse_or_zero("2e+"), 2.0);
        assert_eq!(parse_or_zero("1.5.3"), 1.5);
        assert_eq!(parse_or_zero("7 km"), 7.0);
    }

    #[test]
    fn test_parse_defaults_to_zero() {
        assert_eq!(parse_or_zero(""), 0.0);
        assert_eq!(parse_or_zero("   "), 0.0);
        assert_eq!(parse_or_zero("abc"), 0.0);
        assert_eq!(parse_or_zero("-"), 0.0);
        assert_eq!(parse_or_zero("."), 0.0);
        assert_eq!(parse_or_zero("NaN"), 0.0);
        assert_eq!(parse_or_zero("inf"), 0.0);
        assert_eq!(parse_or_zero("1e999"), 0.0);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.49), 2.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(99.9), 100.0);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(52.444_6, 1), 52.4);
        assert_eq!(round_to(300.0, 2), 300.0);
        assert_eq!(round_to(1.234_5, 2), 1.23);
        assert_eq!(round_to(-6.04, 1), -6.0);
    }

    #[test]
    fn test_site_count() {
        assert_eq!(site_count(7.96), 8);
        assert_eq!(site_count(37.5), 38);
        assert_eq!(site_count(38.0), 38);
        assert_eq!(site_count(0.0), 0);
        assert_eq!(site_count(-4.0), 0);
        assert_eq!(site_count(f64::NAN), 0);
        assert_eq!(site_count(f64::INFINITY), 0);
        assert_eq!(site_count(1e12), u32::MAX);
    }

    #[test]
    fn test_finite_or_zero() {
        assert_eq!(finite_or_zero(3.5), 3.5);
        assert_eq!(finite_or_zero(f64::INFINITY), 0.0);
        assert_eq!(finite_or_zero(f64::NAN), 0.0);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(99.9), 100);
        assert_eq!(percentage(49.5), 50);
        assert_eq!(percentage(477.5), 100);
        assert_eq!(percentage(-3.0), 0);
        assert_eq!(percentage(f64::NAN), 0);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(2432.0), "2432");
        assert_eq!(format_number(11.0), "11");
        assert_eq!(format_number(10.5), "10.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-6.1), "-6.1");
    }
}
