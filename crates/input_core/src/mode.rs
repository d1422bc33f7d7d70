//! Operating modes of a field.

/// How a field treats the text typed into it.
///
/// Password visibility is orthogonal to the mode and lives on the store entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FieldMode {
    /// Text, email, password: the raw text passes through untouched.
    #[default]
    Plain,
    /// Digits only, no grouping. The field's own value is the canonical value.
    Numeric,
    /// Currency mode: digits only, shown with thousands separators.
    Grouped,
}

impl FieldMode {
    /// Whether keystrokes go through digit normalization and sanitization.
    #[inline]
    pub const fn normalizes(self) -> bool {
        matches!(self, FieldMode::Numeric | FieldMode::Grouped)
    }

    /// Whether the field keeps a display string separate from the canonical value.
    #[inline]
    pub const fn keeps_display_state(self) -> bool {
        matches!(self, FieldMode::Grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_grouped_keeps_display_state() {
        assert!(!FieldMode::Plain.keeps_display_state());
        assert!(!FieldMode::Numeric.keeps_display_state());
        assert!(FieldMode::Grouped.keeps_display_state());
    }

    #[test]
    fn plain_does_not_normalize() {
        assert!(!FieldMode::Plain.normalizes());
        assert!(FieldMode::Numeric.normalizes());
        assert!(FieldMode::Grouped.normalizes());
    }
}
