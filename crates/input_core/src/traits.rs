//! Input store trait defining the interface for field state management.
//!
//! This trait provides a UI-agnostic abstraction over field state, allowing
//! component layers to be written against any backing store and tested with
//! alternative implementations.
//!
//! # Design Principles
//!
//! - Uses `InputId` as the identifier type, keeping the trait UI-agnostic
//! - Integration layers are responsible for converting their own widget
//!   handles to `InputId` at call boundaries

use crate::event::ChangeEvent;
use crate::id::InputId;
use crate::mode::FieldMode;
use crate::sync::ExternalValue;
use std::borrow::Cow;

/// Trait defining the input store interface.
///
/// This trait captures the minimal set of operations needed for:
/// - Field lifecycle (activation, removal)
/// - Synchronization with externally owned values
/// - Keystroke handling
/// - Read-only state access for rendering
/// - Password visibility
pub trait InputStore {
    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// First activation of a field. No-op if the entry already exists.
    fn activate(&mut self, id: InputId, mode: FieldMode, external: &ExternalValue);

    /// Drop the entry for a field. Returns `true` if one existed.
    fn remove(&mut self, id: InputId) -> bool;

    // =========================================================================
    // Synchronization & Editing
    // =========================================================================

    /// Reconcile a field with its external inputs, if they changed.
    ///
    /// Returns `true` if synchronization ran.
    fn sync_external(&mut self, id: InputId, mode: FieldMode, external: &ExternalValue) -> bool;

    /// Process the field's full text after a keystroke.
    ///
    /// Returns `None` for fields that were never activated.
    fn apply_input(&mut self, id: InputId, raw: &str) -> Option<ChangeEvent>;

    // =========================================================================
    // Read-Only Getters
    // =========================================================================

    /// Returns the text the field currently shows, if any.
    fn get(&self, id: InputId) -> Option<&str>;

    /// Returns the canonical value behind the shown text, if any.
    fn canonical_value(&self, id: InputId) -> Option<Cow<'_, str>>;

    /// Monotonic revision counter for the field's text.
    fn value_revision(&self, id: InputId) -> u64;

    // =========================================================================
    // Password Visibility
    // =========================================================================

    /// Returns `true` if the password text is shown in the clear.
    fn is_password_visible(&self, id: InputId) -> bool;

    /// Flip password visibility and return the new state.
    fn toggle_password_visibility(&mut self, id: InputId) -> bool;
}

// =============================================================================
// Implementation for InputValueStore
// =============================================================================

impl InputStore for crate::store::InputValueStore {
    #[inline]
    fn activate(&mut self, id: InputId, mode: FieldMode, external: &ExternalValue) {
        crate::store::InputValueStore::activate(self, id, mode, external)
    }

    #[inline]
    fn remove(&mut self, id: InputId) -> bool {
        crate::store::InputValueStore::remove(self, id)
    }

    #[inline]
    fn sync_external(&mut self, id: InputId, mode: FieldMode, external: &ExternalValue) -> bool {
        crate::store::InputValueStore::sync_external(self, id, mode, external)
    }

    #[inline]
    fn apply_input(&mut self, id: InputId, raw: &str) -> Option<ChangeEvent> {
        crate::store::InputValueStore::apply_input(self, id, raw)
    }

    #[inline]
    fn get(&self, id: InputId) -> Option<&str> {
        crate::store::InputValueStore::get(self, id)
    }

    #[inline]
    fn canonical_value(&self, id: InputId) -> Option<Cow<'_, str>> {
        crate::store::InputValueStore::canonical_value(self, id)
    }

    #[inline]
    fn value_revision(&self, id: InputId) -> u64 {
        crate::store::InputValueStore::value_revision(self, id)
    }

    #[inline]
    fn is_password_visible(&self, id: InputId) -> bool {
        crate::store::InputValueStore::is_password_visible(self, id)
    }

    #[inline]
    fn toggle_password_visibility(&mut self, id: InputId) -> bool {
        crate::store::InputValueStore::toggle_password_visibility(self, id)
    }
}
