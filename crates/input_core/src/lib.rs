//! # input_core
//!
//! UI-agnostic numeric normalization and value state for input fields.
//!
//! A numeric field keeps two forms of the same quantity:
//! - the canonical value: ASCII digits only, owned by whoever owns the form
//! - the display value: the canonical digits with thousands separators,
//!   owned by the field itself
//!
//! This crate provides the pieces that keep them consistent:
//! - [`normalize_digits`] / [`sanitize_digits`]: native-script digits to ASCII,
//!   then everything but digits dropped
//! - [`format_grouped`] / [`strip_separators`]: canonical to display and back
//! - [`InputValueStore`]: per-field state, synchronized with external values
//!   ([`InputValueStore::sync_external`]) and updated on every keystroke
//!   ([`InputValueStore::apply_input`])
//!
//! Every transformation is total: no string input produces an error. Malformed
//! text is sanitized, not rejected.
//!
//! ## Design Principles
//!
//! This crate does not depend on any rendering layer. Labels, error messages,
//! and visual styling belong to the component layer built on top of it.

mod digits;
mod event;
mod grouping;
mod id;
mod mode;
mod state;
mod store;
mod sync;
mod traits;

pub use digits::{
    NATIVE_DIGITS, canonicalize, is_canonical, native_digit_value, normalize_digits,
    sanitize_digits,
};
pub use event::ChangeEvent;
pub use grouping::{GROUP_SEPARATOR, GROUP_SIZE, format_grouped, strip_separators};
pub use id::InputId;
pub use mode::FieldMode;
pub use store::InputValueStore;
pub use sync::{ExternalValue, display_for};
pub use traits::InputStore;
