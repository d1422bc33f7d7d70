use crate::input_type::{ElementType, field_mode};
use crate::props::{FieldDecor, InputProps};
use crate::view::{FieldView, PasswordToggle};
use input_core::{ChangeEvent, FieldMode, InputId, InputStore};

/// One input field bound to an entry in an [`InputStore`].
///
/// The field owns its props and decoration; the store owns the text. All
/// methods take the store explicitly so a single store can back many fields.
#[derive(Debug)]
pub struct InputField {
    id: InputId,
    props: InputProps,
    decor: FieldDecor,
}

impl InputField {
    pub fn new(id: InputId, props: InputProps, decor: FieldDecor) -> Self {
        Self { id, props, decor }
    }

    #[inline]
    pub fn id(&self) -> InputId {
        self.id
    }

    #[inline]
    pub fn props(&self) -> &InputProps {
        &self.props
    }

    #[inline]
    pub fn decor(&self) -> &FieldDecor {
        &self.decor
    }

    pub fn mode(&self) -> FieldMode {
        field_mode(self.props.element_type, self.props.currency)
    }

    #[inline]
    pub fn is_password(&self) -> bool {
        self.props.element_type == ElementType::Password
    }

    /// Activate the field's store entry from its current props.
    pub fn mount<S: InputStore + ?Sized>(&self, store: &mut S) {
        log::debug!(target: "form_controls", "mount {:?} mode={:?}", self.id, self.mode());
        store.activate(self.id, self.mode(), &self.props.external());
    }

    /// Replace the props, re-synchronizing when the mode or the external value changed.
    ///
    /// Returns `true` if the store re-derived the field's text.
    pub fn set_props<S: InputStore + ?Sized>(&mut self, store: &mut S, props: InputProps) -> bool {
        self.props = props;
        store.sync_external(self.id, self.mode(), &self.props.external())
    }

    /// Replace label, required marker, and error message. Never touches values.
    pub fn set_decor(&mut self, decor: FieldDecor) {
        self.decor = decor;
    }

    /// Handle a keystroke given the field's full text after the edit.
    ///
    /// Disabled fields ignore input and return `None`. Otherwise the owner's
    /// change handler, if any, is called with the resulting event before it is
    /// returned. A field that was never mounted is activated with its own mode
    /// first, so the handler never sees unsanitized text.
    pub fn handle_input<S: InputStore + ?Sized>(
        &mut self,
        store: &mut S,
        raw: &str,
    ) -> Option<ChangeEvent> {
        if self.props.disabled {
            log::debug!(target: "form_controls", "ignored input on disabled {:?}", self.id);
            return None;
        }

        self.ensure_active(store);
        let event = store.apply_input(self.id, raw)?;
        if let Some(handler) = self.props.on_change.as_mut() {
            handler(&event);
        }
        Some(event)
    }

    /// Flip password visibility. Returns the new state, or `None` for
    /// fields that are not password fields.
    pub fn toggle_password<S: InputStore + ?Sized>(&self, store: &mut S) -> Option<bool> {
        if !self.is_password() {
            return None;
        }
        self.ensure_active(store);
        Some(store.toggle_password_visibility(self.id))
    }

    pub fn view<'a, S: InputStore + ?Sized>(&'a self, store: &'a S) -> FieldView<'a> {
        let password_toggle = self.is_password().then(|| PasswordToggle {
            visible: store.is_password_visible(self.id),
        });

        let rendered_type = match (self.mode(), password_toggle) {
            // Numeric and currency fields render as text so the platform
            // accepts native digits and separators.
            (FieldMode::Numeric | FieldMode::Grouped, _) => "text",
            (FieldMode::Plain, Some(PasswordToggle { visible: true })) => "text",
            (FieldMode::Plain, _) => self.props.element_type.as_str(),
        };

        FieldView {
            rendered_type,
            value: store.get(self.id).unwrap_or_default(),
            name: self.props.name.as_deref(),
            placeholder: self.props.placeholder.as_deref(),
            disabled: self.props.disabled,
            label: self.decor.label.as_deref(),
            required: self.decor.required,
            error: self.decor.error.as_ref().map(|e| e.message.as_str()),
            password_toggle,
        }
    }

    fn ensure_active<S: InputStore + ?Sized>(&self, store: &mut S) {
        // No-op for mounted fields.
        store.activate(self.id, self.mode(), &self.props.external());
    }

    /// Drop the field's store entry, discarding its display state.
    pub fn unmount<S: InputStore + ?Sized>(self, store: &mut S) {
        log::debug!(target: "form_controls", "unmount {:?}", self.id);
        store.remove(self.id);
    }
}
