//! Best-effort integer parsing for free-text codes
//!
//! Leading whitespace is skipped, an optional sign is honoured, `0x`/`0X`
//! switches to hex, and parsing stops at the first character that is not a
//! digit. Input with no digits yields `None`, the "not a number" sentinel.

use once_cell::sync::Lazy;
use regex::Regex;

/// Sign, then either a hex prefix with its digits or a decimal digit run.
/// The hex branch wins when the prefix is present, even with no digits after it.
static LEADING_INT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([+-])?(?:(0[xX])([0-9a-fA-F]*)|([0-9]*))")
        .expect("invalid leading integer regex")
});

/// Parse the leading integer of `s`.
///
/// Returns `None` when there is nothing numeric to read, or when the value
/// does not fit in an `i64`.
///
/// # Example
/// ```
/// use elections_server::models::parse_leading_int;
///
/// assert_eq!(parse_leading_int("10"), Some(10));
/// assert_eq!(parse_leading_int("12abc"), Some(12));
/// assert_eq!(parse_leading_int("0x1F"), Some(31));
/// assert_eq!(parse_leading_int("abc"), None);
/// ```
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let caps = LEADING_INT_RE.captures(s)?;
    let negative = caps.get(1).is_some_and(|m| m.as_str() == "-");

    let (digits, radix) = if caps.get(2).is_some() {
        (caps.get(3).map_or("", |m| m.as_str()), 16)
    } else {
        (caps.get(4).map_or("", |m| m.as_str()), 10)
    };

    if digits.is_empty() {
        return None;
    }

    // Widen first so i64::MIN survives the sign
    let magnitude = i128::from_str_radix(digits, radix).ok()?;
    i64::try_from(if negative { -magnitude } else { magnitude }).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn plain_decimal() {
        assert_eq!(parse_leading_int("10"), Some(10));
        assert_eq!(parse_leading_int("007"), Some(7));
        assert_eq!(parse_leading_int("0"), Some(0));
    }

    #[test]
    fn sign_and_whitespace() {
        assert_eq!(parse_leading_int("  -7"), Some(-7));
        assert_eq!(parse_leading_int("\t+4"), Some(4));
        assert_eq!(parse_leading_int("- 4"), None);
    }

    #[test]
    fn stops_at_first_non_digit() {
        assert_eq!(parse_leading_int("12abc"), Some(12));
        assert_eq!(parse_leading_int("3.9"), Some(3));
        assert_eq!(parse_leading_int("1 000"), Some(1));
    }

    #[test]
    fn hex_prefix() {
        assert_eq!(parse_leading_int("0x1F"), Some(31));
        assert_eq!(parse_leading_int("-0Xff"), Some(-255));
        assert_eq!(parse_leading_int("0x"), None);
        assert_eq!(parse_leading_int("0xg"), None);
    }

    #[test]
    fn not_a_number() {
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("W-12"), None);
    }

    #[test]
    fn overflow_is_sentinel() {
        assert_eq!(parse_leading_int("99999999999999999999"), None);
        assert_eq!(parse_leading_int("9223372036854775808"), None);
        assert_eq!(parse_leading_int("0x8000000000000000"), None);
    }

    #[test]
    fn i64_bounds_parse() {
        assert_eq!(parse_leading_int("-9223372036854775808"), Some(i64::MIN));
        assert_eq!(parse_leading_int("9223372036854775807"), Some(i64::MAX));
        assert_eq!(parse_leading_int("-0x8000000000000000"), Some(i64::MIN));
    }

    proptest! {
        #[test]
        fn decimal_round_trips(n in -1_000_000_000i64..1_000_000_000) {
            prop_assert_eq!(parse_leading_int(&n.to_string()), Some(n));
        }

        #[test]
        fn trailing_text_is_ignored(n in 0i64..100_000, tail in "[a-wyzA-WYZ ._-]{0,8}") {
            let input = format!("{}{}", n, tail);
            prop_assert_eq!(parse_leading_int(&input), Some(n));
        }

        #[test]
        fn never_panics(s in "\\PC*") {
            let _ = parse_leading_int(&s);
        }
    }
}
