//! Lenient base-10 integer parsing for form input.
//!
//! Browsers submit every field as text, and the sett form has always
//! accepted input such as `" 3 "` or `"4 holes"`. The rule:
//!
//! 1. Skip leading whitespace
//! 2. Accept one optional `+` or `-`
//! 3. Take the longest run of ASCII digits that follows
//!
//! No digits means the value is unparseable. Anything after the digit run is
//! ignored. Magnitudes beyond `i64` saturate.

/// Parse the leading base-10 integer of `input`.
///
/// # Examples
///
/// ```
/// use sett_core::parse::parse_leading_int;
///
/// assert_eq!(parse_leading_int("  42"), Some(42));
/// assert_eq!(parse_leading_int("3 setts"), Some(3));
/// assert_eq!(parse_leading_int("-7"), Some(-7));
/// assert_eq!(parse_leading_int("1e3"), Some(1));
/// assert_eq!(parse_leading_int("abc"), None);
/// assert_eq!(parse_leading_int(""), None);
/// ```
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let rest = input.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit);
    let mut value: i64 = 0;
    let mut seen = false;
    for d in digits {
        seen = true;
        let d = i64::from(d - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(d)
        } else {
            value.saturating_mul(10).saturating_add(d)
        };
    }

    seen.then_some(value)
}

/// Parse an optional field, treating absence as unparseable.
pub fn parse_optional_int(input: Option<&str>) -> Option<i64> {
    input.and_then(parse_leading_int)
}
