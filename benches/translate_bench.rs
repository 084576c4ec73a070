use chartkit::config::{
    AnimationOptions, ChartConfig, ChartKind, ChartOptions, Color, Dataset, Easing,
};
use chartkit::locale::IdentityTranslator;
use chartkit::translate;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn medium_config() -> ChartConfig {
    let datasets: Vec<Dataset> = (0..8)
        .map(|series| {
            let values: Vec<f64> = (0..512).map(|i| ((series * i) % 97) as f64).collect();
            Dataset::new(values)
                .with_label(format!("series-{series}"))
                .with_background_color(Color::rgba(40 + series as u8 * 20, 99, 132, 0.4))
                .with_border_width(vec![1.0 + series as f64])
                .with_point_radius(vec![2.0; 512])
        })
        .collect();

    ChartConfig::new(ChartKind::Line)
        .with_datasets(datasets)
        .with_labels((0..512).map(|i| format!("t{i}")))
        .with_options(ChartOptions {
            responsive: Some(true),
            animation: Some(AnimationOptions {
                duration_ms: Some(300),
                easing: Some(Easing::EaseOutQuart),
            }),
            ..ChartOptions::default()
        })
}

fn bench_translate_medium_config(c: &mut Criterion) {
    let config = medium_config();

    c.bench_function("translate_line_8x512", |b| {
        b.iter(|| black_box(translate(black_box(&config), &IdentityTranslator)))
    });
}

fn bench_translate_to_value(c: &mut Criterion) {
    let config = medium_config();

    c.bench_function("translate_to_value_line_8x512", |b| {
        b.iter(|| {
            let native = translate(black_box(&config), &IdentityTranslator);
            black_box(native.to_value().expect("to value"))
        })
    });
}

criterion_group!(
    benches,
    bench_translate_medium_config,
    bench_translate_to_value
);
criterion_main!(benches);
