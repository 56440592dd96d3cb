/// Lines whose trimmed length is below this are OCR noise.
const MIN_LINE_CHARS: usize = 3;

/// Maximum share of unexpected symbols before a line counts as gibberish.
const MAX_SYMBOL_RATIO: f64 = 0.5;

/// Clean OCR/PDF text before extraction.
/// Strips control characters (keeps newline and tab), then drops gibberish and noise lines.
/// Never fails; may return an empty string.
pub fn clean_extracted_text(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_control() || matches!(c, '\n' | '\t'))
        .collect::<String>()
        .lines()
        .map(|l| l.trim())
        .filter(|l| l.chars().count() >= MIN_LINE_CHARS)
        .filter(|l| !is_gibberish(l))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A line is gibberish when more than half its characters are neither
/// alphanumeric nor common report punctuation.
fn is_gibberish(line: &str) -> bool {
    let total = line.chars().count();
    if total == 0 {
        return false;
    }
    let symbols = line
        .chars()
        .filter(|c| !c.is_alphanumeric() && !matches!(c, ' ' | '.' | '-' | ':' | '/' | '(' | ')'))
        .count();
    symbols as f64 / total as f64 > MAX_SYMBOL_RATIO
}
