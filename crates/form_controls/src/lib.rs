//! Input field component.
//!
//! Wraps the [`input_core`] store with what a form input needs around it:
//! resolving the element `type` into a field mode, forwarding label and error
//! text, toggling password visibility, and invoking the owner's change handler
//! with the canonical value.

mod field;
mod input_type;
mod props;
mod view;

pub use field::InputField;
pub use input_type::{ElementType, element_type, field_mode};
pub use props::{ChangeHandler, FieldDecor, FieldError, InputProps};
pub use view::{FieldView, PasswordToggle};
