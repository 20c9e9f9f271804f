//! Text formatting shared by reports and the shell.

/// Thousands separator used by fr-FR number formatting (narrow no-break space).
pub const FR_GROUP_SEPARATOR: char = '\u{202F}';

/// Group the digits of an amount in thousands, fr-FR style.
///
/// ```
/// use netdim_report::format_currency;
///
/// assert_eq!(format_currency(3_420_000_000), "3\u{202F}420\u{202F}000\u{202F}000");
/// assert_eq!(format_currency(950), "950");
/// ```
pub fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(FR_GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out
}

/// An amount followed by its currency, e.g. `30 000 000 FCFA`.
pub fn format_amount(amount: u64, currency: &str) -> String {
    format!("{} {}", format_currency(amount), currency)
}

/// Upper-case the first character of a parameter name (`busyHour` → `BusyHour`).
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Escape text for interpolation into HTML.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_grouping() {
        assert_eq!(format_currency(0), "0");
        assert_eq!(format_currency(999), "999");
        assert_eq!(format_currency(1_000), "1\u{202F}000");
        assert_eq!(format_currency(15_000_000), "15\u{202F}000\u{202F}000");
        assert_eq!(format_currency(120_000_000), "120\u{202F}000\u{202F}000");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(30_000_000, "FCFA"), "30\u{202F}000\u{202F}000 FCFA");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("busyHour"), "BusyHour");
        assert_eq!(capitalize("area"), "Area");
        assert_eq!(capitalize("élan"), "Élan");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape_html("\"x\" 'y'"), "&quot;x&quot; &#39;y&#39;");
        assert_eq!(escape_html("Télécoms"), "Télécoms");
    }
}
