use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use input_core::{
    ExternalValue, FieldMode, InputId, InputValueStore, canonicalize, format_grouped,
    normalize_digits,
};

const LONG_DIGITS: usize = 4_096;

fn make_native_digits(len: usize) -> String {
    (0..len).map(|i| input_core::NATIVE_DIGITS[i % 10]).collect()
}

fn make_noisy_input(len: usize) -> String {
    let mut s = String::with_capacity(len * 3);
    for i in 0..len {
        match i % 4 {
            0 => s.push(input_core::NATIVE_DIGITS[i % 10]),
            1 => s.push(','),
            2 => s.push('x'),
            _ => s.push(char::from(b'0' + (i % 10) as u8)),
        }
    }
    s
}

fn bench_normalize_ascii_fast_path(c: &mut Criterion) {
    let input = "1234567890".repeat(LONG_DIGITS / 10);
    c.bench_function("bench_normalize_ascii_fast_path", |b| {
        b.iter(|| black_box(normalize_digits(black_box(&input)).len()));
    });
}

fn bench_normalize_native(c: &mut Criterion) {
    let input = make_native_digits(LONG_DIGITS);
    c.bench_function("bench_normalize_native", |b| {
        b.iter(|| black_box(normalize_digits(black_box(&input)).len()));
    });
}

fn bench_canonicalize_noisy(c: &mut Criterion) {
    let input = make_noisy_input(LONG_DIGITS);
    c.bench_function("bench_canonicalize_noisy", |b| {
        b.iter(|| black_box(canonicalize(black_box(&input)).len()));
    });
}

fn bench_format_grouped(c: &mut Criterion) {
    let input = "9".repeat(LONG_DIGITS);
    c.bench_function("bench_format_grouped", |b| {
        b.iter(|| black_box(format_grouped(black_box(&input)).len()));
    });
}

fn bench_grouped_typing_session(c: &mut Criterion) {
    // Simulates typing a 12-digit amount one native digit at a time.
    let keystrokes: Vec<String> = (1..=12).map(make_native_digits).collect();
    c.bench_function("bench_grouped_typing_session", |b| {
        b.iter_batched(
            || {
                let mut store = InputValueStore::new();
                store.activate(InputId::from_raw(1), FieldMode::Grouped, &ExternalValue::default());
                store
            },
            |mut store| {
                for raw in &keystrokes {
                    black_box(store.apply_input(InputId::from_raw(1), raw));
                }
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_normalize_ascii_fast_path,
    bench_normalize_native,
    bench_canonicalize_noisy,
    bench_format_grouped,
    bench_grouped_typing_session
);
criterion_main!(benches);
