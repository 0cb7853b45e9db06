use std::{hint::black_box, time::Duration};

use criterion::{criterion_group, criterion_main, Criterion};
use nelua_scanner::{Scanner, ScannerState, StrCursor, TokenKind, ValidKinds};

const SCANNER_INPUT: &str = include_str!("./input_1.nelua");

fn large_input() -> String {
    SCANNER_INPUT.repeat(200)
}

fn find_tokens_benchmark(c: &mut Criterion) {
    let input = large_input();
    let scanner = Scanner::new();
    c.bench_function("find_tokens_benchmark", |b| {
        b.iter(|| {
            // Drive the scanner over the whole input
            for t in scanner.find_iter(&input) {
                black_box(t);
            }
        });
    });
}

fn long_bracket_benchmark(c: &mut Criterion) {
    // A deep long bracket full of closers of the wrong level.
    let input = format!("[====[{}]====]", "]===] ]] ]=====]\n".repeat(2_000));
    let body = ValidKinds::from([TokenKind::StringContent, TokenKind::StringEnd]);
    c.bench_function("long_bracket_benchmark", |b| {
        b.iter(|| {
            let mut scanner = Scanner::new();
            let mut cursor = StrCursor::new(&input);
            cursor.begin_token();
            scanner.scan(&mut cursor, &ValidKinds::from(TokenKind::STARTS));
            cursor.finish_token();
            cursor.begin_token();
            black_box(scanner.scan(&mut cursor, &body));
        });
    });
}

fn serialize_benchmark(c: &mut Criterion) {
    let mut state = ScannerState::new();
    state.open_long_bracket(4);
    c.bench_function("serialize_benchmark", |b| {
        b.iter(|| {
            let bytes = black_box(state).serialize();
            let mut restored = ScannerState::new();
            restored.deserialize(&bytes).unwrap();
            black_box(restored);
        });
    });
}

criterion_group! {
    name = benchesscanner;
    config = Criterion::default().measurement_time(Duration::from_secs(10));
    targets = find_tokens_benchmark, long_bracket_benchmark
}

criterion_group! {
    name = benchesstate;
    config = Criterion::default();
    targets = serialize_benchmark
}

criterion_main!(benchesscanner, benchesstate);
