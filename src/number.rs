//! Numeric field parsing.
//!
//! Both parsers are strict: the whole string must be digits, and a value that
//! overflows is a failure rather than a wraparound.

/// Accumulates `digits` in `radix`. Empty input, a non-digit, or overflow
/// gives `None`.
fn accumulate(digits: &str, radix: u32) -> Option<u64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0u64, |acc, c| {
        let d = c.to_digit(radix)?;
        acc.checked_mul(u64::from(radix))?.checked_add(u64::from(d))
    })
}

/// Parses a coordinate: unsigned decimal, no sign, no whitespace.
pub fn parse_coord(s: &str) -> Option<u32> {
    let v = accumulate(s, 10)?;
    if v > u64::from(u32::MAX) {
        None
    } else {
        Some(v as u32)
    }
}

/// Parses a color using C integer literal rules: `0x`/`0X` introduces hex, a
/// leading `0` means octal, anything else is decimal. A single leading `+` is
/// permitted.
pub fn parse_color(s: &str) -> Option<u64> {
    let s = s.strip_prefix('+').unwrap_or(s);
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        accumulate(hex, 16)
    } else if s.starts_with('0') {
        accumulate(s, 8)
    } else {
        accumulate(s, 10)
    }
}
