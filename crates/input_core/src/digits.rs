//! Digit-script normalization and numeric sanitization.
//!
//! Two total functions over `&str` make up the front half of the keystroke
//! pipeline:
//! - [`normalize_digits`] maps native-script digit glyphs to ASCII digits and
//!   leaves every other character alone.
//! - [`sanitize_digits`] keeps only ASCII digits, producing the canonical value.
//!
//! Both return `Cow::Borrowed` when the input needs no change.

use std::borrow::Cow;

/// The native digit script accepted by numeric fields, ordered 0–9.
///
/// These are the Extended Arabic-Indic (Persian) digits U+06F0..=U+06F9.
pub const NATIVE_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Returns the numeric value of a native-script digit glyph, if `c` is one.
///
/// # Examples
///
/// ```
/// use input_core::native_digit_value;
///
/// assert_eq!(native_digit_value('۰'), Some(0));
/// assert_eq!(native_digit_value('۹'), Some(9));
/// assert_eq!(native_digit_value('9'), None);
/// ```
#[inline]
pub fn native_digit_value(c: char) -> Option<u32> {
    let first = NATIVE_DIGITS[0] as u32;
    let v = (c as u32).checked_sub(first)?;
    (v < 10).then_some(v)
}

/// Replace every native-script digit with its ASCII equivalent.
///
/// All other characters, ASCII digits included, are returned unchanged, so the
/// output always has the same character count as the input.
///
/// # Examples
///
/// ```
/// use input_core::normalize_digits;
///
/// assert_eq!(normalize_digits("۱۲۳۴۵۶۷"), "1234567");
/// assert_eq!(normalize_digits("a۱,2"), "a1,2");
/// assert_eq!(normalize_digits(""), "");
/// ```
pub fn normalize_digits(s: &str) -> Cow<'_, str> {
    if !s.chars().any(|c| native_digit_value(c).is_some()) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(
        s.chars()
            .map(|c| match native_digit_value(c) {
                Some(v) => char::from(b'0' + v as u8),
                None => c,
            })
            .collect(),
    )
}

/// Keep only the ASCII digits `0`–`9`, in their original order.
///
/// Run this after [`normalize_digits`]; on its own it drops native-script
/// digits like any other non-ASCII character.
///
/// # Examples
///
/// ```
/// use input_core::sanitize_digits;
///
/// assert_eq!(sanitize_digits("1,234"), "1234");
/// assert_eq!(sanitize_digits("abc"), "");
/// assert_eq!(sanitize_digits("0042"), "0042");
/// ```
pub fn sanitize_digits(s: &str) -> Cow<'_, str> {
    if is_canonical(s) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(char::is_ascii_digit).collect())
}

/// Normalize then sanitize: raw field text to canonical value.
///
/// # Examples
///
/// ```
/// use input_core::canonicalize;
///
/// assert_eq!(canonicalize("۱۲,۳abc۴۵"), "12345");
/// ```
pub fn canonicalize(raw: &str) -> String {
    let normalized = normalize_digits(raw);
    sanitize_digits(&normalized).into_owned()
}

/// Returns `true` if `s` is a canonical value (ASCII digits only, possibly empty).
#[inline]
pub fn is_canonical(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_glyphs_map_bijectively_onto_ascii() {
        for (i, glyph) in NATIVE_DIGITS.iter().enumerate() {
            let expected = char::from(b'0' + i as u8).to_string();
            assert_eq!(normalize_digits(&glyph.to_string()), expected);
        }
    }

    #[test]
    fn normalize_keeps_char_count() {
        let s = "x۱y۲,z";
        assert_eq!(normalize_digits(s).chars().count(), s.chars().count());
    }

    #[test]
    fn normalize_borrows_ascii_input() {
        assert!(matches!(normalize_digits("1,234"), Cow::Borrowed(_)));
        assert!(matches!(normalize_digits("۱"), Cow::Owned(_)));
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize_digits("۹a۸b7").into_owned();
        assert_eq!(normalize_digits(&once), once);
    }

    #[test]
    fn neighbours_of_the_native_block_are_not_digits() {
        // U+06EF and U+06FA sit on either side of the block.
        assert_eq!(native_digit_value('\u{06EF}'), None);
        assert_eq!(native_digit_value('\u{06FA}'), None);
        // Arabic-Indic digits (U+0660..) are a different script.
        assert_eq!(native_digit_value('\u{0661}'), None);
    }

    #[test]
    fn sanitize_drops_everything_but_ascii_digits() {
        assert_eq!(sanitize_digits(",,,"), "");
        assert_eq!(sanitize_digits("1 2\t3"), "123");
        assert_eq!(sanitize_digits("-12.5"), "125");
        assert_eq!(sanitize_digits("۱2"), "2");
    }

    #[test]
    fn sanitize_keeps_leading_zeros() {
        assert_eq!(sanitize_digits("007"), "007");
    }

    #[test]
    fn canonicalize_mixed_script() {
        assert_eq!(canonicalize("۱۲,۳abc۴۵"), "12345");
        assert_eq!(canonicalize(""), "");
        assert!(is_canonical(&canonicalize("a۰b,,9")));
    }
}
