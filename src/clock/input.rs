/// Parse loose field text into a non-negative unit value.
///
/// Leading whitespace is skipped and an optional sign plus leading digits
/// are read; whatever follows the digits is ignored. Text with no leading
/// digits becomes 0, negative numbers clamp to 0, and values too large for
/// `u64` saturate. Anything smaller is passed on intact so the cascade sees
/// the real magnitude.
pub fn coerce_raw(text: &str) -> u64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: u64 = 0;
    let mut seen_digit = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(10) else {
            break;
        };
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add(u64::from(d));
    }

    if !seen_digit || negative { 0 } else { value }
}
