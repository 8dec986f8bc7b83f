use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use modal_core::{Buffer, EditorSession, Key, KeyEvent, Limits, Position};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn large_lines(line_count: usize) -> Vec<String> {
    (0..line_count)
        .map(|i| format!("{i:06} the quick brown fox jumps over the lazy dog"))
        .collect()
}

fn bench_typing_burst(c: &mut Criterion) {
    c.bench_function("typing_burst/200_chars", |b| {
        b.iter_batched(
            EditorSession::new,
            |mut session| {
                for _ in 0..200 {
                    session.handle_key(KeyEvent::char('x'));
                }
                black_box(session.active_buffer().line(0).map(str::len));
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_search_wraparound(c: &mut Criterion) {
    let mut lines = large_lines(10_000);
    lines[0] = "needle at the top".to_string();
    let mut buffer = Buffer::from_lines(lines);
    // Start near the bottom so every search walks the tail and wraps.
    buffer.set_cursor(Position::new(9_900, 0));

    c.bench_function("search_wraparound/10k_lines", |b| {
        b.iter(|| {
            black_box(modal_core::search_forward(black_box(&buffer), "needle"));
        })
    });
}

fn bench_undo_redo_cycle(c: &mut Criterion) {
    c.bench_function("undo_redo/50_edits", |b| {
        b.iter_batched(
            || {
                let mut session = EditorSession::new();
                for _ in 0..50 {
                    session.handle_key(KeyEvent::char('y'));
                }
                session
            },
            |mut session| {
                for _ in 0..50 {
                    session.handle_key(KeyEvent::ctrl(Key::Char('z')));
                }
                for _ in 0..50 {
                    session.handle_key(KeyEvent::ctrl(Key::Char('y')));
                }
                black_box(session.active_buffer().line(0).map(str::len));
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_random_line_edits(c: &mut Criterion) {
    let lines = large_lines(10_000);
    c.bench_function("random_edits/100_inserts_10k_lines", |b| {
        b.iter_batched(
            || (Buffer::from_lines(lines.clone()), StdRng::seed_from_u64(7)),
            |(mut buffer, mut rng)| {
                let limits = Limits::default();
                for _ in 0..100 {
                    let line = rng.gen_range(0..buffer.line_count());
                    buffer.set_cursor(Position::new(line, 0));
                    buffer.insert_text("x", &limits).unwrap();
                }
                black_box(buffer.line_count());
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(
    benches,
    bench_typing_burst,
    bench_search_wraparound,
    bench_undo_redo_cycle,
    bench_random_line_edits
);
criterion_main!(benches);
