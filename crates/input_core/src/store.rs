//! Central store for field values, display strings, and password visibility.
//!
//! This store is UI-agnostic: it does not render anything. Integration layers
//! feed it keystrokes and external value changes, and read back what the field
//! should show.
//!
//! Each entry belongs to exactly one field. The two writers of an entry's text
//! are the value synchronizer ([`InputValueStore::sync_external`]) and the
//! change relay ([`InputValueStore::apply_input`]); both run to completion on
//! the caller's thread, so calls are applied strictly in the order they are made.

use crate::digits::{canonicalize, normalize_digits, sanitize_digits};
use crate::event::ChangeEvent;
use crate::grouping::{format_grouped, strip_separators};
use crate::id::InputId;
use crate::mode::FieldMode;
use crate::state::InputState;
use crate::sync::{ExternalValue, WatchedInputs, display_for};
use std::borrow::Cow;
use std::collections::HashMap;

/// Central store for field state.
///
/// # Example
///
/// ```
/// use input_core::{ExternalValue, FieldMode, InputId, InputValueStore};
///
/// let mut store = InputValueStore::new();
/// let id = InputId::from_raw(1);
///
/// store.activate(id, FieldMode::Grouped, &ExternalValue::uncontrolled("1000"));
/// assert_eq!(store.get(id), Some("1,000"));
///
/// let event = store.apply_input(id, "۱۲,۳abc۴۵");
/// assert_eq!(event.map(|e| e.value).as_deref(), Some("12345"));
/// assert_eq!(store.get(id), Some("12,345"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct InputValueStore {
    values: HashMap<InputId, InputState>,
}

impl InputValueStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Returns `true` if an entry exists for this field.
    pub fn has(&self, id: InputId) -> bool {
        self.values.contains_key(&id)
    }

    /// Returns the text the field currently shows, if any.
    pub fn get(&self, id: InputId) -> Option<&str> {
        self.values.get(&id).map(|s| s.value.as_str())
    }

    /// Returns the display value of a grouped field.
    ///
    /// `None` for missing entries and for fields without display state.
    pub fn display_value(&self, id: InputId) -> Option<&str> {
        self.values
            .get(&id)
            .filter(|s| s.mode().keeps_display_state())
            .map(|s| s.value.as_str())
    }

    /// Returns the canonical value behind what the field shows.
    ///
    /// Plain fields have no canonical form; their text is returned as is.
    /// Numeric fields may show a mirrored external value, so their text is
    /// canonicalized on the way out.
    pub fn canonical_value(&self, id: InputId) -> Option<Cow<'_, str>> {
        let st = self.values.get(&id)?;
        Some(match st.mode() {
            FieldMode::Plain => Cow::Borrowed(st.value.as_str()),
            FieldMode::Numeric => match normalize_digits(&st.value) {
                Cow::Borrowed(s) => sanitize_digits(s),
                Cow::Owned(s) => Cow::Owned(sanitize_digits(&s).into_owned()),
            },
            FieldMode::Grouped => strip_separators(&st.value),
        })
    }

    /// Returns the mode this field was last activated or synchronized with.
    pub fn mode(&self, id: InputId) -> Option<FieldMode> {
        self.values.get(&id).map(InputState::mode)
    }

    /// Monotonic revision counter for the field's text.
    pub fn value_revision(&self, id: InputId) -> u64 {
        self.values.get(&id).map(|s| s.value_rev).unwrap_or(0)
    }

    /// First activation of a field.
    ///
    /// Grouped fields derive their display string from the external value.
    /// Other fields mirror the effective external value directly. If an entry
    /// already exists this is a no-op; only this method and
    /// [`sync_external`](Self::sync_external) create entries.
    pub fn activate(&mut self, id: InputId, mode: FieldMode, external: &ExternalValue) {
        if self.values.contains_key(&id) {
            return;
        }
        let value = initial_text(mode, external);
        log::trace!(
            target: "input_core.sync",
            "activate {id:?} mode={mode:?} value={value:?}"
        );
        self.values.insert(
            id,
            InputState {
                value,
                value_rev: 0,
                watched: WatchedInputs {
                    mode,
                    value: external.clone(),
                },
                password_visible: false,
            },
        );
    }

    /// Reconcile a field with its external inputs.
    ///
    /// Runs only when `mode` or `external` differ from the snapshot taken at
    /// the last activation or synchronization, so repeated calls with the same
    /// inputs leave in-progress edits alone. Activates the field if it has no
    /// entry yet.
    ///
    /// Returns `true` if synchronization ran.
    pub fn sync_external(&mut self, id: InputId, mode: FieldMode, external: &ExternalValue) -> bool {
        let Some(st) = self.values.get_mut(&id) else {
            self.activate(id, mode, external);
            return true;
        };

        let next = WatchedInputs {
            mode,
            value: external.clone(),
        };
        if st.watched == next {
            return false;
        }

        let mode_changed = st.watched.mode != mode;
        st.watched = next;

        let value = if mode.keeps_display_state() {
            Some(display_for(external))
        } else if let Some(controlled) = external.controlled.as_deref() {
            // Non-grouped fields mirror a controlled value verbatim.
            Some(controlled.to_string())
        } else if mode_changed && mode.normalizes() {
            Some(canonicalize(&st.value))
        } else {
            None
        };

        if let Some(value) = value {
            log::trace!(
                target: "input_core.sync",
                "sync {id:?} mode={mode:?} {:?} -> {value:?}",
                st.value
            );
            replace_text(st, value);
        }
        true
    }

    /// Process one keystroke: the full text of the field after the edit.
    ///
    /// Normalizes and sanitizes the text for numeric and grouped fields,
    /// updates what the field shows, and returns the event to forward to the
    /// owner. The event never carries separators or native-script digits
    /// unless the field is plain.
    ///
    /// Returns `None`, and stores nothing, if the field was never activated.
    pub fn apply_input(&mut self, id: InputId, raw: &str) -> Option<ChangeEvent> {
        let Some(st) = self.values.get_mut(&id) else {
            log::trace!(target: "input_core.relay", "input on inactive {id:?} dropped");
            return None;
        };
        let mode = st.mode();

        let (shown, delivered) = match mode {
            FieldMode::Plain => (raw.to_string(), raw.to_string()),
            FieldMode::Numeric => {
                let canonical = canonicalize(raw);
                (canonical.clone(), canonical)
            }
            FieldMode::Grouped => {
                let normalized = normalize_digits(raw);
                let canonical = sanitize_digits(&normalized).into_owned();
                (format_grouped(&canonical), canonical)
            }
        };

        log::trace!(
            target: "input_core.relay",
            "input {id:?} mode={mode:?} raw={raw:?} shown={shown:?} value={delivered:?}"
        );
        replace_text(st, shown);
        Some(ChangeEvent::new(id, delivered))
    }

    /// Returns `true` if the password field shows its text in the clear.
    pub fn is_password_visible(&self, id: InputId) -> bool {
        self.values.get(&id).is_some_and(|s| s.password_visible)
    }

    /// Set password visibility.
    ///
    /// Returns `true` if the state actually changed. Inactive fields are
    /// left alone and report no change.
    pub fn set_password_visible(&mut self, id: InputId, visible: bool) -> bool {
        let Some(st) = self.values.get_mut(&id) else {
            return false;
        };
        let changed = st.password_visible != visible;
        st.password_visible = visible;
        changed
    }

    /// Flip password visibility and return the new state.
    ///
    /// Inactive fields stay hidden: returns `false` without creating an entry.
    pub fn toggle_password_visibility(&mut self, id: InputId) -> bool {
        let Some(st) = self.values.get_mut(&id) else {
            return false;
        };
        st.password_visible = !st.password_visible;
        st.password_visible
    }

    /// Drop the entry for a field that is going away.
    pub fn remove(&mut self, id: InputId) -> bool {
        self.values.remove(&id).is_some()
    }

    /// Clear all stored field state.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

// --- Internal helper functions ---

fn initial_text(mode: FieldMode, external: &ExternalValue) -> String {
    if mode.keeps_display_state() {
        display_for(external)
    } else {
        external.effective().unwrap_or_default().to_string()
    }
}

fn replace_text(st: &mut InputState, value: String) {
    if st.value != value {
        st.value = value;
        st.value_rev = st.value_rev.wrapping_add(1);
    }
}
