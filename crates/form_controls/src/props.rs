use crate::input_type::{ElementType, element_type};
use input_core::{ChangeEvent, ExternalValue};
use std::fmt;

/// Owner callback invoked after every accepted keystroke.
pub type ChangeHandler = Box<dyn FnMut(&ChangeEvent)>;

/// Attributes supplied by the owner of a field.
#[derive(Default)]
pub struct InputProps {
    pub name: Option<String>,
    pub element_type: ElementType,
    /// Controlled value; takes precedence over `default_value`.
    pub value: Option<String>,
    pub default_value: Option<String>,
    pub placeholder: Option<String>,
    pub disabled: bool,
    /// Currency mode: digits only, grouped for display.
    pub currency: bool,
    pub on_change: Option<ChangeHandler>,
}

impl InputProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the element type from a `type` attribute string.
    pub fn input_type(mut self, ty: &str) -> Self {
        self.element_type = element_type(Some(ty));
        self
    }

    pub fn element_type(mut self, ty: ElementType) -> Self {
        self.element_type = ty;
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn currency(mut self, currency: bool) -> Self {
        self.currency = currency;
        self
    }

    pub fn on_change(mut self, handler: impl FnMut(&ChangeEvent) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    pub(crate) fn external(&self) -> ExternalValue {
        ExternalValue {
            controlled: self.value.clone(),
            default: self.default_value.clone(),
        }
    }
}

impl fmt::Debug for InputProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputProps")
            .field("name", &self.name)
            .field("element_type", &self.element_type)
            .field("value", &self.value)
            .field("default_value", &self.default_value)
            .field("placeholder", &self.placeholder)
            .field("disabled", &self.disabled)
            .field("currency", &self.currency)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

/// Validation message produced by the form layer. Shown, never inspected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub message: String,
}

impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Text rendered around the field: label, required marker, error message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldDecor {
    pub label: Option<String>,
    pub required: bool,
    pub error: Option<FieldError>,
}

impl FieldDecor {
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(FieldError::new(error));
        self
    }
}
