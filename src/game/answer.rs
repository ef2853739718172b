/// The answer field's value after every reset
pub const RESET_ANSWER: &str = "0";

/// Parse a typed answer the way a browser's base-10 `parseInt` does.
///
/// Leading whitespace and an optional sign are accepted, then the longest run
/// of ASCII digits is read and anything after it is ignored. `None` stands for
/// "not a number" and never equals a correct result.
pub fn parse_answer(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
