/// State of the password visibility toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PasswordToggle {
    pub visible: bool,
}

/// Everything a renderer needs to draw one field.
///
/// Borrowed from the field and its store; rebuild it after every change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldView<'a> {
    /// The `type` the rendered element carries.
    pub rendered_type: &'static str,
    /// Text shown inside the field.
    pub value: &'a str,
    pub name: Option<&'a str>,
    pub placeholder: Option<&'a str>,
    pub disabled: bool,
    pub label: Option<&'a str>,
    pub required: bool,
    pub error: Option<&'a str>,
    /// Present for password fields only.
    pub password_toggle: Option<PasswordToggle>,
}

impl FieldView<'_> {
    /// The element the label points at (`for` attribute).
    #[inline]
    pub fn label_for(&self) -> Option<&str> {
        self.label.and(self.name)
    }

    #[inline]
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}
