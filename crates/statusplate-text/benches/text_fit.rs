//! Benchmarks for the shrink-to-fit loop and full renders

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use statusplate_test_utils::test_font_path;
use statusplate_text::{Color, LoadedFont, RenderSpec, TextAlign, TextLayout, render_with_font};

fn setup() -> LoadedFont {
    LoadedFont::load(test_font_path()).expect("bundled test font loads")
}

fn bench_layout_sizes(c: &mut Criterion) {
    let mut font = setup();
    let mut group = c.benchmark_group("layout_sizes");

    let content = "Call in progress";
    for size in [20u32, 50, 95, 140, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| black_box(TextLayout::new(&mut font, content, size, TextAlign::Center).bounds()));
        });
    }

    group.finish();
}

fn bench_render_fit(c: &mut Criterion) {
    let mut font = setup();
    let mut group = c.benchmark_group("render_fit");
    group.sample_size(20);

    let long_text = "Queue: 12 callers ".repeat(4);
    let texts: Vec<(&str, &str)> = vec![
        ("single_char", "A"),
        ("short_status", "Busy"),
        ("two_lines", "Away\\nBack at 14:00"),
        ("long_text", &long_text),
    ];

    for (name, content) in texts {
        let spec = RenderSpec::new(content);
        group.bench_function(name, |b| {
            b.iter(|| {
                black_box(render_with_font(&mut font, &spec, Color::BLACK, Color::WHITE).ok())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_layout_sizes, bench_render_fit);
criterion_main!(benches);
