//! Golden keystroke sequences.
//!
//! Each case in `fixtures/keystrokes.toml` activates a field, then replays a
//! list of steps. A step either types (the full field text after the
//! keystroke) or changes the external value, and states what the field must
//! show and what the handler must receive.

use input_core::{ExternalValue, FieldMode, InputId, InputValueStore};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
struct Fixtures {
    case: Vec<Case>,
}

#[derive(Debug, Deserialize)]
struct Case {
    name: String,
    mode: FieldMode,
    #[serde(default)]
    external: ExternalValue,
    #[serde(default)]
    initial: Option<String>,
    #[serde(default)]
    step: Vec<Step>,
}

#[derive(Debug, Deserialize)]
struct Step {
    #[serde(default)]
    input: Option<String>,
    #[serde(default)]
    external: Option<ExternalValue>,
    shown: String,
    #[serde(default)]
    delivered: Option<String>,
    #[serde(default)]
    synced: Option<bool>,
}

fn load_fixtures() -> Fixtures {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/keystrokes.toml");
    let text = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    toml::from_str(&text).unwrap_or_else(|e| panic!("failed to parse {}: {e}", path.display()))
}

#[test]
fn keystroke_golden_cases() {
    let fixtures = load_fixtures();
    assert!(!fixtures.case.is_empty(), "no fixtures loaded");

    for (n, case) in fixtures.case.iter().enumerate() {
        let mut store = InputValueStore::new();
        let id = InputId::from_raw(n as u64);
        store.activate(id, case.mode, &case.external);

        if let Some(initial) = &case.initial {
            assert_eq!(store.get(id), Some(initial.as_str()), "[{}] initial", case.name);
        }

        for (i, step) in case.step.iter().enumerate() {
            let label = format!("[{}] step {i}", case.name);
            if let Some(ext) = &step.external {
                let ran = store.sync_external(id, case.mode, ext);
                if let Some(expected) = step.synced {
                    assert_eq!(ran, expected, "{label}: synced");
                }
            }
            if let Some(raw) = &step.input {
                let ev = store
                    .apply_input(id, raw)
                    .unwrap_or_else(|| panic!("{label}: field not active"));
                if let Some(expected) = &step.delivered {
                    assert_eq!(&ev.value, expected, "{label}: delivered");
                }
            }
            assert_eq!(store.get(id), Some(step.shown.as_str()), "{label}: shown");
        }
    }
}
