//! Thousands grouping for display strings.

use crate::digits::sanitize_digits;
use std::borrow::Cow;

/// Separator inserted between digit groups in the display value.
pub const GROUP_SEPARATOR: char = ',';

/// Number of digits per group, counted from the right.
pub const GROUP_SIZE: usize = 3;

/// Format a canonical digit string with thousands separators.
///
/// Characters other than ASCII digits are discarded first, so the result is
/// always a valid display value. Inputs of one to three digits come back
/// unchanged.
///
/// # Examples
///
/// ```
/// use input_core::format_grouped;
///
/// assert_eq!(format_grouped("123"), "123");
/// assert_eq!(format_grouped("1234"), "1,234");
/// assert_eq!(format_grouped("1000000"), "1,000,000");
/// assert_eq!(format_grouped(""), "");
/// ```
pub fn format_grouped(canonical: &str) -> String {
    let digits = sanitize_digits(canonical);
    let n = digits.len();
    if n <= GROUP_SIZE {
        return digits.into_owned();
    }

    let mut out = String::with_capacity(n + (n - 1) / GROUP_SIZE);
    // Canonical values are ASCII, so byte offsets are digit offsets.
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (n - i) % GROUP_SIZE == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// Remove every [`GROUP_SEPARATOR`] from a display string.
///
/// # Examples
///
/// ```
/// use input_core::strip_separators;
///
/// assert_eq!(strip_separators("1,234,567"), "1234567");
/// assert_eq!(strip_separators("12"), "12");
/// ```
pub fn strip_separators(display: &str) -> Cow<'_, str> {
    if !display.contains(GROUP_SEPARATOR) {
        return Cow::Borrowed(display);
    }
    Cow::Owned(display.chars().filter(|c| *c != GROUP_SEPARATOR).collect())
}
