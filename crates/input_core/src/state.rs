//! Internal input state representation.
//!
//! This module contains the per-field state that is stored in the InputValueStore.

use crate::mode::FieldMode;
use crate::sync::WatchedInputs;

/// Internal state for a single field.
///
/// This is not exposed publicly; it is managed by [`InputValueStore`](crate::InputValueStore).
#[derive(Clone, Debug)]
pub(crate) struct InputState {
    /// Text the field currently shows.
    ///
    /// In grouped mode this is the display value. In numeric mode it is the
    /// canonical value itself. Plain fields hold whatever was typed.
    pub value: String,

    /// Monotonic revision counter, incremented on any text change.
    pub value_rev: u64,

    /// Last external inputs the synchronizer acted on.
    pub watched: WatchedInputs,

    /// Password fields only: whether the text is shown in the clear.
    pub password_visible: bool,
}

impl InputState {
    #[inline]
    pub fn mode(&self) -> FieldMode {
        self.watched.mode
    }
}
