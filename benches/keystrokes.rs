//! Benchmarks for hint_mini keystroke performance.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use std::time::Duration;
use hint_mini::{
    InputAutomaton, KeyCode, KeyEvent, LabelAssigner, Modifiers, SelectionController, Target,
    fuzzy,
};

/// A screenful of toolbar-ish targets laid out on a grid
fn generate_targets(count: usize) -> Vec<Target> {
    let words = [
        "Save", "Open", "Close", "Back", "Forward", "Reload", "Settings", "Help", "Search",
        "Cancel", "Apply", "Share",
    ];
    (0..count)
        .map(|i| {
            let x = (i % 20) as f64 * 60.0;
            let y = (i / 20) as f64 * 24.0;
            Target::new(
                i as u64,
                format!("{} {}", words[i % words.len()], i),
                Rect::new(x, y, x + 56.0, y + 20.0),
            )
        })
        .collect()
}

fn key(c: char) -> KeyEvent {
    KeyEvent::char(c)
}

fn benchmark_label_generation(c: &mut Criterion) {
    let assigner = LabelAssigner::default();

    c.bench_function("generate 16 labels", |b| {
        b.iter(|| black_box(assigner.generate(black_box(16))));
    });

    c.bench_function("generate 200 labels", |b| {
        b.iter(|| black_box(assigner.generate(black_box(200))));
    });

    c.bench_function("register 200 labels", |b| {
        let labels = assigner.generate(200);
        b.iter(|| black_box(InputAutomaton::with_labels(&labels)));
    });
}

fn benchmark_fuzzy_filter(c: &mut Criterion) {
    let targets = generate_targets(500);

    c.bench_function("filter 500 targets", |b| {
        b.iter(|| black_box(fuzzy::filter_and_sort(&targets, black_box("sa"))));
    });
}

fn benchmark_hint_selection(c: &mut Criterion) {
    let targets = generate_targets(200);
    let mut controller = SelectionController::default();

    c.bench_function("two-key hint commit", |b| {
        b.iter(|| {
            controller.begin_session(targets.clone());
            let _ = controller.handle_key(black_box(key('o')));
            black_box(controller.handle_key(black_box(key('s'))));
        });
    });
}

fn benchmark_search_sequence(c: &mut Criterion) {
    let targets = generate_targets(200);
    let mut controller = SelectionController::default();

    c.bench_function("search, erase and commit", |b| {
        b.iter(|| {
            controller.begin_session(targets.clone());

            // Type a search query outside the hint alphabet
            for ch in "cnc".chars() {
                black_box(controller.handle_key(black_box(key(ch))));
            }

            // Erase back and retype
            let _ = controller.handle_key(black_box(KeyEvent::new(
                KeyCode::Backspace,
                Modifiers::empty(),
            )));
            let _ = controller.handle_key(black_box(key('c')));

            black_box(controller.commit_current_selection(Modifiers::SHIFT));
        });
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(10))
        .sample_size(100);
    targets = benchmark_label_generation,
              benchmark_fuzzy_filter,
              benchmark_hint_selection,
              benchmark_search_sequence
}
criterion_main!(benches);
