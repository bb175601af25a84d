//! Permissive integer parsing.
//!
//! Both the instruction budget on the command line and the `STRING_TOINT`
//! opcode accept text the way C's `atoi` does: leading whitespace is skipped,
//! an optional sign is honoured, and the longest run of decimal digits is
//! used. Anything else yields zero instead of an error.

/// Parses the leading integer of `text`, returning 0 when there is none.
///
/// Values too large for an `i64` saturate instead of wrapping.
///
/// # Examples
///
/// ```
/// use svm_core::common::num::parse_int_prefix;
///
/// assert_eq!(parse_int_prefix("  42abc"), 42);
/// assert_eq!(parse_int_prefix("-7"), -7);
/// assert_eq!(parse_int_prefix("steps"), 0);
/// ```
pub fn parse_int_prefix(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });

    if negative { -magnitude } else { magnitude }
}

/// Same as [`parse_int_prefix`], clamped to the `i32` register width.
pub fn parse_i32_prefix(text: &str) -> i32 {
    parse_int_prefix(text).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
