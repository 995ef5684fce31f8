//! Text formatting helpers.

use chrono::NaiveDateTime;
use unicode_width::UnicodeWidthStr;

/// Formats an INR amount with Indian digit grouping (1,23,45,678) and no
/// fractional part, e.g. `₹50,000`.
pub fn format_inr(amount: f64) -> String {
    let negative = amount < 0.0;
    let rounded = amount.abs().round() as u64;
    let digits = rounded.to_string();

    // Indian grouping: last three digits, then pairs.
    let mut grouped = String::new();
    let head_len = digits.len().saturating_sub(3);
    let (head, tail) = digits.split_at(head_len);
    if !head.is_empty() {
        let head_chars: Vec<char> = head.chars().collect();
        let mut first = head_chars.len() % 2;
        if first == 0 {
            first = 2;
        }
        grouped.push_str(&head_chars[..first].iter().collect::<String>());
        for pair in head_chars[first..].chunks(2) {
            grouped.push(',');
            grouped.push_str(&pair.iter().collect::<String>());
        }
        grouped.push(',');
    }
    grouped.push_str(tail);

    if negative {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

/// Formats a server timestamp as its date part.
pub fn format_date(ts: NaiveDateTime) -> String {
    ts.format("%Y-%m-%d").to_string()
}

/// Formats an optional timestamp, with a dash for absent values.
pub fn format_opt_date(ts: Option<NaiveDateTime>) -> String {
    ts.map_or_else(|| "—".to_string(), format_date)
}

/// Truncates to a display width, appending an ellipsis when cut.
pub fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut out = String::new();
    for c in s.chars() {
        if format!("{out}{c}").width() + 1 > max_width {
            break;
        }
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Indian grouping: last three digits, then pairs.
    #[test]
    fn test_format_inr_grouping() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(500.0), "₹500");
        assert_eq!(format_inr(50_000.0), "₹50,000");
        assert_eq!(format_inr(123_456.0), "₹1,23,456");
        assert_eq!(format_inr(12_345_678.0), "₹1,23,45,678");
        assert_eq!(format_inr(-74_500.4), "-₹74,500");
    }

    /// Truncation respects display width and marks the cut.
    #[test]
    fn test_truncate() {
        assert_eq!(truncate_with_ellipsis("short", 10), "short");
        assert_eq!(truncate_with_ellipsis("a longer string", 8), "a longe…");
    }
}
