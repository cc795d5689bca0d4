//! Value label formatting.

/// Fraction digits kept before trailing zeros are trimmed.
const MAX_FRACTION_DIGITS: usize = 3;

/// Format a number for display: thousands grouped with `,`, at most three
/// fraction digits, trailing zeros dropped.
///
/// ```
/// use tuichart::format_value;
///
/// assert_eq!(format_value(1234567.0), "1,234,567");
/// assert_eq!(format_value(0.125), "0.125");
/// assert_eq!(format_value(-2.5), "-2.5");
/// ```
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    // Values that round to zero never get a sign
    let negative = value < 0.0 && (int_part.bytes().any(|b| b != b'0') || !frac_part.is_empty());

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
