//! Lookup cost across the page set of a typical widget
//!
//! Hits on the first page, fall-through hits on the last page, and misses that scan
//! every page are measured separately.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use widget_explorer_lib::DocScraper;

const COMBO_BOX_PAGE: &str = include_str!("../tests/fixtures/QComboBox.html");
const WIDGET_PAGE: &str = include_str!("../tests/fixtures/QWidget.html");

fn lookup_benchmark(c: &mut Criterion) {
    let scraper = DocScraper::new([COMBO_BOX_PAGE, WIDGET_PAGE]);

    let mut group = c.benchmark_group("get_doc");
    group.bench_function("hit_first_page", |b| {
        b.iter(|| scraper.get_doc(black_box("duplicatesEnabled")));
    });
    group.bench_function("hit_fallback_page", |b| {
        b.iter(|| scraper.get_doc(black_box("acceptDrops")));
    });
    group.bench_function("miss_all_pages", |b| {
        b.iter(|| scraper.get_doc(black_box("doesNotExist")));
    });
    group.finish();

    c.bench_function("parse_pages", |b| {
        b.iter(|| DocScraper::new(black_box([COMBO_BOX_PAGE, WIDGET_PAGE])));
    });
}

criterion_group!(benches, lookup_benchmark);
criterion_main!(benches);
