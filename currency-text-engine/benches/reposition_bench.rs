//! Benchmarks for numeral analysis and cursor repositioning
//!
//! Run with: cargo bench

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use currency_text_engine::{CursorRepositioner, Direction, NumeralAnalyzer, registry};

// ============================================================================
// Analyzer
// ============================================================================

fn bench_analyzer(c: &mut Criterion) {
    let en = registry().locale("en-US").unwrap();
    let ar = registry().locale("ar-EG").unwrap();

    let mut group = c.benchmark_group("analyzer");

    group.bench_function("numeral_format_ascii", |b| {
        let analyzer = NumeralAnalyzer::new(&en);
        b.iter(|| analyzer.numeral_format(black_box("$1,234,567.89")))
    });

    group.bench_function("numeral_format_arabic", |b| {
        let analyzer = NumeralAnalyzer::new(&ar);
        b.iter(|| analyzer.numeral_format(black_box("\u{200f}١٬٢٣٤٬٥٦٧٫٨٩ ج.م.\u{200f}")))
    });

    group.bench_function("last_relevant_offset", |b| {
        let analyzer = NumeralAnalyzer::new(&en);
        b.iter(|| analyzer.last_relevant_offset_from_end(black_box("1,234,567.89 USD")))
    });

    group.finish();
}

// ============================================================================
// Repositioner
// ============================================================================

fn bench_reposition(c: &mut Criterion) {
    let en = registry().locale("en-US").unwrap();
    let ar = registry().locale("ar-EG").unwrap();

    let mut group = c.benchmark_group("reposition");

    group.bench_function("ltr_suffix_symbol", |b| {
        let repositioner = CursorRepositioner::new(&en);
        b.iter(|| {
            repositioner.reposition(
                black_box("1,234,567.89 €"),
                black_box(0),
                "€",
                Direction::LeftToRight,
            )
        })
    });

    group.bench_function("rtl_detected", |b| {
        let repositioner = CursorRepositioner::new(&ar);
        b.iter(|| {
            repositioner.reposition_detecting(
                black_box("\u{200f}١٬٢٣٤٫٥٦ ج.م.\u{200f}"),
                black_box(0),
                "ج.م.",
                true,
            )
        })
    });

    group.finish();
}

criterion_group!(benches, bench_analyzer, bench_reposition);
criterion_main!(benches);
