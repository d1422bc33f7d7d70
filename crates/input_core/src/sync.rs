//! Inputs watched by the value synchronizer.
//!
//! A field re-derives its display string from the outside world only when one
//! of the watched inputs (mode, controlled value, default value) actually
//! changes. Unrelated re-renders pass the same snapshot and are ignored, so an
//! edit in progress is never clobbered.

use crate::digits::{normalize_digits, sanitize_digits};
use crate::grouping::format_grouped;
use crate::mode::FieldMode;

/// Value supplied to a field by its owner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExternalValue {
    /// Controlled value. Takes precedence over `default` when both are set.
    #[cfg_attr(feature = "serde", serde(rename = "value"))]
    pub controlled: Option<String>,
    /// Initial value for an uncontrolled field.
    #[cfg_attr(feature = "serde", serde(rename = "default_value"))]
    pub default: Option<String>,
}

impl ExternalValue {
    pub fn controlled(value: impl Into<String>) -> Self {
        Self {
            controlled: Some(value.into()),
            default: None,
        }
    }

    pub fn uncontrolled(default: impl Into<String>) -> Self {
        Self {
            controlled: None,
            default: Some(default.into()),
        }
    }

    /// The value the field should reflect: controlled first, then default.
    #[inline]
    pub fn effective(&self) -> Option<&str> {
        self.controlled.as_deref().or(self.default.as_deref())
    }

    #[inline]
    pub fn is_controlled(&self) -> bool {
        self.controlled.is_some()
    }
}

/// Snapshot of everything the synchronizer depends on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct WatchedInputs {
    pub mode: FieldMode,
    pub value: ExternalValue,
}

/// Derive a display string from an external value.
///
/// Absent values map to the empty string.
///
/// # Examples
///
/// ```
/// use input_core::{ExternalValue, display_for};
///
/// let ext = ExternalValue {
///     controlled: Some("۱۲۳۴".to_string()),
///     default: Some("9".to_string()),
/// };
/// assert_eq!(display_for(&ext), "1,234");
/// assert_eq!(display_for(&ExternalValue::default()), "");
/// ```
pub fn display_for(value: &ExternalValue) -> String {
    let Some(raw) = value.effective() else {
        return String::new();
    };
    let normalized = normalize_digits(raw);
    format_grouped(&sanitize_digits(&normalized))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controlled_wins_over_default() {
        let ext = ExternalValue {
            controlled: Some("5000".to_string()),
            default: Some("1000".to_string()),
        };
        assert_eq!(ext.effective(), Some("5000"));
        assert_eq!(display_for(&ext), "5,000");
    }

    #[test]
    fn default_used_when_uncontrolled() {
        let ext = ExternalValue::uncontrolled("1000");
        assert!(!ext.is_controlled());
        assert_eq!(display_for(&ext), "1,000");
    }

    #[test]
    fn preformatted_external_value_is_regrouped() {
        let ext = ExternalValue::controlled("12,34,567");
        assert_eq!(display_for(&ext), "1,234,567");
    }

    #[test]
    fn empty_controlled_value_still_takes_precedence() {
        let ext = ExternalValue {
            controlled: Some(String::new()),
            default: Some("42".to_string()),
        };
        assert_eq!(display_for(&ext), "");
    }
}
