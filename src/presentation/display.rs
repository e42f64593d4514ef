//! Total formatting for the visible price and the hidden form field.

/// Format a total as whole dollars with thousands separators: `$12,480`.
pub fn format_display_total(total: u64) -> String {
    let digits = total.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    grouped.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Machine-readable total read by the lead-capture step.
pub fn total_field(total: u64) -> String {
    total.to_string()
}

/// Parse a display total back into dollars, ignoring the currency sign and
/// separators.
pub fn parse_display_total(display: &str) -> Option<u64> {
    let digits: String = display
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
