/// Parse a comma-decimal number as published by the portal.
///
/// Surrounding whitespace is stripped, the comma becomes a period and any
/// remaining whitespace is removed, so `"1 234,0"` reads as `1234.0`.
/// Empty, unparseable and non-finite values yield `None`.
///
/// # Examples
/// ```
/// use retc_processor::utils::parse_locale_float;
///
/// assert_eq!(parse_locale_float("33,5"), Some(33.5));
/// assert_eq!(parse_locale_float("abc"), None);
/// ```
pub fn parse_locale_float(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let normalized: String = trimmed
        .replace(',', ".")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Render a float the way it is written back to CSV: integral values keep a
/// trailing `.0` so they reload as floats.
pub fn format_float(value: f64) -> String {
    format!("{:?}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_decimal() {
        assert_eq!(parse_locale_float("33,5"), Some(33.5));
        assert_eq!(parse_locale_float("-33,4489"), Some(-33.4489));
        assert_eq!(parse_locale_float("  0,001 "), Some(0.001));
    }

    #[test]
    fn test_missing_and_invalid() {
        assert_eq!(parse_locale_float(""), None);
        assert_eq!(parse_locale_float("   "), None);
        assert_eq!(parse_locale_float("abc"), None);
        assert_eq!(parse_locale_float("NaN"), None);
        assert_eq!(parse_locale_float("inf"), None);
    }

    #[test]
    fn test_space_grouping() {
        assert_eq!(parse_locale_float("1 234,0"), Some(1234.0));
        assert_eq!(parse_locale_float("1\u{a0}234,5"), Some(1234.5));
        assert_eq!(parse_locale_float("12 345 678"), Some(12345678.0));
    }

    #[test]
    fn test_period_grouping_is_not_recognised() {
        // "1.234,5" becomes "1.234.5" and does not parse
        assert_eq!(parse_locale_float("1.234,5"), None);
    }

    #[test]
    fn test_already_standard() {
        assert_eq!(parse_locale_float("33.5"), Some(33.5));
        assert_eq!(parse_locale_float("1e3"), Some(1000.0));
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(1234.0), "1234.0");
        assert_eq!(format_float(33.5), "33.5");
        assert_eq!(parse_locale_float(&format_float(-70.6483)), Some(-70.6483));
    }
}
