//! Scripted sessions: a field description plus an ordered list of steps.

use form_controls::{ElementType, FieldDecor, FieldView, InputField, InputProps, element_type};
use input_core::{ChangeEvent, InputId, InputValueStore};
use serde::Deserialize;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum SessionError {
    Io { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: toml::de::Error },
    UnknownElementType(String),
    Input(io::Error),
    Output(io::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            SessionError::Parse { path, source } => {
                write!(f, "invalid session {}: {source}", path.display())
            }
            SessionError::UnknownElementType(ty) => write!(f, "unknown element type: {ty:?}"),
            SessionError::Input(e) => write!(f, "failed to read input: {e}"),
            SessionError::Output(e) => write!(f, "failed to write output: {e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Io { source, .. } => Some(source),
            SessionError::Parse { source, .. } => Some(source),
            SessionError::Input(e) | SessionError::Output(e) => Some(e),
            SessionError::UnknownElementType(_) => None,
        }
    }
}

/// Write failures. Reads map their errors explicitly.
impl From<io::Error> for SessionError {
    fn from(e: io::Error) -> Self {
        SessionError::Output(e)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldSpec {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub ty: Option<String>,
    pub currency: bool,
    pub label: Option<String>,
    pub required: bool,
    pub error: Option<String>,
    pub placeholder: Option<String>,
    pub disabled: bool,
    pub value: Option<String>,
    pub default_value: Option<String>,
}

impl FieldSpec {
    fn element_type(&self) -> Result<ElementType, SessionError> {
        match element_type(self.ty.as_deref()) {
            ElementType::Other => Err(SessionError::UnknownElementType(
                self.ty.clone().unwrap_or_default(),
            )),
            ty => Ok(ty),
        }
    }

    pub fn props(&self) -> Result<InputProps, SessionError> {
        Ok(InputProps {
            name: self.name.clone(),
            element_type: self.element_type()?,
            value: self.value.clone(),
            default_value: self.default_value.clone(),
            placeholder: self.placeholder.clone(),
            disabled: self.disabled,
            currency: self.currency,
            on_change: None,
        })
    }

    pub fn decor(&self) -> FieldDecor {
        FieldDecor {
            label: self.label.clone(),
            required: self.required,
            error: self.error.clone().map(form_controls::FieldError::new),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    /// Full field text after a keystroke.
    Type { text: String },
    /// Owner changes the controlled value; omit `value` to release control.
    SetValue { value: Option<String> },
    /// Owner changes the default value.
    SetDefault { value: Option<String> },
    TogglePassword,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Session {
    #[serde(default)]
    pub field: FieldSpec,
    #[serde(default)]
    pub step: Vec<Step>,
}

impl Session {
    pub fn load(path: &Path) -> Result<Self, SessionError> {
        let text = std::fs::read_to_string(path).map_err(|source| SessionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| SessionError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Replay every step against a fresh store, writing one line per step.
    pub fn run(&self, out: &mut impl Write) -> Result<(), SessionError> {
        let mut spec = self.field.clone();
        let mut store = InputValueStore::new();
        let mut field = InputField::new(InputId::from_raw(1), spec.props()?, spec.decor());
        field.mount(&mut store);

        writeln!(out, "{}", describe(&field.view(&store), None))?;

        for (i, step) in self.step.iter().enumerate() {
            log::debug!(target: "numfield", "step {i}: {step:?}");
            let event = match step {
                Step::Type { text } => field.handle_input(&mut store, text),
                Step::SetValue { value } => {
                    spec.value = value.clone();
                    field.set_props(&mut store, spec.props()?);
                    None
                }
                Step::SetDefault { value } => {
                    spec.default_value = value.clone();
                    field.set_props(&mut store, spec.props()?);
                    None
                }
                Step::TogglePassword => {
                    field.toggle_password(&mut store);
                    None
                }
            };
            writeln!(out, "{}", describe(&field.view(&store), event.as_ref()))?;
        }

        log::info!(
            target: "numfield",
            "session done after {} steps, final canonical value {:?}",
            self.step.len(),
            store.canonical_value(field.id()).unwrap_or_default()
        );
        Ok(())
    }
}

/// Treat every line of `input` as the field's full text after one keystroke,
/// writing one line of output per keystroke.
pub fn run_keystrokes(
    spec: &FieldSpec,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<(), SessionError> {
    let mut store = InputValueStore::new();
    let mut field = InputField::new(InputId::from_raw(1), spec.props()?, spec.decor());
    field.mount(&mut store);

    for line in input.lines() {
        let line = line.map_err(SessionError::Input)?;
        let event = field.handle_input(&mut store, &line);
        writeln!(out, "{}", describe(&field.view(&store), event.as_ref()))?;
    }
    Ok(())
}

/// One line of output: what the field shows and what the owner received.
pub fn describe(view: &FieldView<'_>, event: Option<&ChangeEvent>) -> String {
    let mut line = format!("type={} shown={:?}", view.rendered_type, view.value);
    if let Some(ev) = event {
        line.push_str(&format!(" delivered={:?}", ev.value));
    }
    if let Some(label) = view.label {
        line.push_str(&format!(" label={label:?}"));
        if view.required {
            line.push('*');
        }
    }
    if let Some(error) = view.error {
        line.push_str(&format!(" error={error:?}"));
    }
    if view.disabled {
        line.push_str(" disabled");
    }
    line
}
