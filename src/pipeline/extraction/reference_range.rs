use std::sync::LazyLock;

use regex::Regex;

/// "A-B" or "A to B", optionally followed by a unit.
static SPAN_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([0-9]+(?:\.[0-9]+)?)\s*(?:-|\x{2013}|to)\s*([0-9]+(?:\.[0-9]+)?)").unwrap()
});

/// "<N" / ">N" (also "<=", ">=").
static BOUND_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([<>])=?\s*([0-9]+(?:\.[0-9]+)?)").unwrap()
});

/// Parse an inline reference range into numeric bounds.
///
/// `"<200"` → (0, 200), `">40"` → (40, +inf), `"12.0-16.0"` / `"70 to 100"` → (A, B).
/// Returns `None` for anything else, meaning "use the catalog default".
pub fn parse_range(text: &str) -> Option<(f64, f64)> {
    let trimmed = text
        .trim()
        .trim_start_matches(['(', '['])
        .trim_end_matches([')', ']'])
        .trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(caps) = BOUND_RANGE.captures(trimmed) {
        let bound: f64 = caps[2].parse().ok()?;
        return match &caps[1] {
            "<" => Some((0.0, bound)),
            _ => Some((bound, f64::INFINITY)),
        };
    }

    let caps = SPAN_RANGE.captures(trimmed)?;
    let min: f64 = caps[1].parse().ok()?;
    let max: f64 = caps[2].parse().ok()?;
    (min <= max).then_some((min, max))
}

/// Cheap shape check used before attempting `parse_range` on a table cell.
pub fn looks_like_range(token: &str) -> bool {
    let lower = token.to_lowercase();
    lower.contains('-')
        || lower.contains('<')
        || lower.contains('>')
        || lower.split_whitespace().any(|w| w == "to")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_with_dash() {
        assert_eq!(parse_range("12.0-16.0"), Some((12.0, 16.0)));
        assert_eq!(parse_range("0.6 - 1.2"), Some((0.6, 1.2)));
    }

    #[test]
    fn span_with_to_any_case() {
        assert_eq!(parse_range("70 to 100"), Some((70.0, 100.0)));
        assert_eq!(parse_range("70 TO 100"), Some((70.0, 100.0)));
    }

    #[test]
    fn span_with_trailing_unit() {
        assert_eq!(parse_range("3.5-5.0 mmol/L"), Some((3.5, 5.0)));
    }

    #[test]
    fn parenthesized_span() {
        assert_eq!(parse_range("(0.6-1.2)"), Some((0.6, 1.2)));
    }

    #[test]
    fn upper_bound_only() {
        assert_eq!(parse_range("<200"), Some((0.0, 200.0)));
        assert_eq!(parse_range("< 150"), Some((0.0, 150.0)));
        assert_eq!(parse_range("<=5.6"), Some((0.0, 5.6)));
    }

    #[test]
    fn lower_bound_only() {
        assert_eq!(parse_range(">40"), Some((40.0, f64::INFINITY)));
    }

    #[test]
    fn inverted_span_rejected() {
        assert_eq!(parse_range("16-12"), None);
    }

    #[test]
    fn non_ranges_rejected() {
        assert_eq!(parse_range(""), None);
        assert_eq!(parse_range("   "), None);
        assert_eq!(parse_range("mg/dL"), None);
        assert_eq!(parse_range("Negative"), None);
        assert_eq!(parse_range("-"), None);
    }

    #[test]
    fn range_shape_detection() {
        assert!(looks_like_range("12.0-16.0"));
        assert!(looks_like_range("<200"));
        assert!(looks_like_range(">40"));
        assert!(looks_like_range("70 to 100"));
        assert!(!looks_like_range("Total"));
        assert!(!looks_like_range("mg/dL"));
    }
}
