#![no_main]

use input_core::{
    ExternalValue, FieldMode, InputId, InputValueStore, canonicalize, format_grouped,
    is_canonical, strip_separators,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let canonical = canonicalize(text);
    assert!(is_canonical(&canonical));
    assert_eq!(strip_separators(&format_grouped(&canonical)), canonical);

    // Replay each line as one keystroke into a grouped field.
    let mut store = InputValueStore::new();
    let id = InputId::from_raw(1);
    store.activate(id, FieldMode::Grouped, &ExternalValue::default());
    for raw in text.split('\n') {
        let Some(ev) = store.apply_input(id, raw) else {
            panic!("activated field dropped input");
        };
        assert!(is_canonical(&ev.value));
        let shown = store.get(id).unwrap_or_default();
        assert_eq!(strip_separators(shown), ev.value);
    }

    // And once as an external value.
    let ext = ExternalValue::controlled(text);
    assert!(store.sync_external(id, FieldMode::Grouped, &ext));
    assert_eq!(store.canonical_value(id).unwrap_or_default(), canonical);
});
