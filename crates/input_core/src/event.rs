//! Change notifications delivered to the owner of a field.

use crate::id::InputId;

/// Result of one accepted keystroke, handed to the external change handler.
///
/// For numeric and grouped fields `value` is the canonical value: ASCII digits
/// only, never a separator or a native-script glyph. Plain fields forward the
/// raw text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangeEvent {
    pub id: InputId,
    pub value: String,
}

impl ChangeEvent {
    #[inline]
    pub fn new(id: InputId, value: String) -> Self {
        Self { id, value }
    }

    /// Borrow the delivered value.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}
