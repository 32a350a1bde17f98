use arclogo::config::{LayoutConfig, RenderConfig};
use arclogo::export::export_png;
use arclogo::ir::Logo;
use arclogo::layout::compute_layout;
use arclogo::render::render_svg;
use arclogo::theme::Theme;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn configs() -> Vec<(String, LayoutConfig)> {
    let mut out = Vec::new();
    for icon_size in [128.0, 512.0, 1024.0] {
        for include_label in [false, true] {
            let name = format!(
                "{}_{}",
                icon_size,
                if include_label { "label" } else { "icon" }
            );
            out.push((
                name,
                LayoutConfig {
                    icon_size,
                    include_label,
                    ..LayoutConfig::default()
                },
            ));
        }
    }
    out
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let logo = Logo::liumos();
    let theme = Theme::liumos();
    for (name, config) in configs() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, config| {
            b.iter(|| {
                let layout =
                    compute_layout(black_box(&logo), &theme, config).expect("layout failed");
                black_box(layout.shapes.len());
            });
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_svg");
    let logo = Logo::liumos();
    let theme = Theme::liumos();
    for (name, config) in configs() {
        let layout = compute_layout(&logo, &theme, &config).expect("layout failed");
        group.bench_with_input(BenchmarkId::from_parameter(name), &layout, |b, data| {
            b.iter(|| {
                let svg = render_svg(black_box(data), &theme);
                black_box(svg.len());
            });
        });
    }
    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("export_png");
    group.sample_size(20);
    let logo = Logo::liumos();
    let theme = Theme::liumos();
    let render_config = RenderConfig::default();
    for (name, config) in configs() {
        let layout = compute_layout(&logo, &theme, &config).expect("layout failed");
        let svg = render_svg(&layout, &theme);
        group.bench_with_input(BenchmarkId::from_parameter(name), &svg, |b, data| {
            b.iter(|| {
                let image = export_png(black_box(data), &render_config).expect("export failed");
                black_box(image.png.len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout, bench_render, bench_export);
criterion_main!(benches);
