// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use understory_box_model::{DiagramStyle, LabelMetrics, layout, layout_with};
use understory_spacing::SpacingValues;
use understory_spacing_svg::{render_diagram, resting_fills};

const SIZES: [(f64, f64); 3] = [(120.0, 60.0), (400.0, 200.0), (1920.0, 1080.0)];

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("box_model/layout");
    let style = DiagramStyle::default();
    let metrics = LabelMetrics::default();

    for (w, h) in SIZES {
        let size = Size::new(w, h);
        group.bench_with_input(
            BenchmarkId::new("layout_with", format!("{w}x{h}")),
            &size,
            |b, size| {
                b.iter(|| black_box(layout_with(black_box(*size), &style, &metrics)));
            },
        );
    }

    group.finish();
}

fn bench_region_at(c: &mut Criterion) {
    let mut group = c.benchmark_group("box_model/region_at");

    for (w, h) in SIZES {
        let diagram = layout(w, h).unwrap();
        // Sample a 64x64 grid, slightly overshooting so some points miss.
        let points: Vec<Point> = (0..64)
            .flat_map(|i| {
                (0..64).map(move |j| {
                    Point::new(f64::from(i) * w / 60.0, f64::from(j) * h / 60.0)
                })
            })
            .collect();
        group.throughput(Throughput::Elements(points.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("grid", format!("{w}x{h}")),
            &points,
            |b, points| {
                b.iter(|| {
                    let hits = points
                        .iter()
                        .filter(|p| diagram.region_at(**p).is_some())
                        .count();
                    black_box(hits)
                });
            },
        );
    }

    group.finish();
}

fn bench_svg(c: &mut Criterion) {
    let diagram = layout(400.0, 200.0).unwrap();
    let values = SpacingValues::uniform(10.0);
    c.bench_function("box_model/render_svg", |b| {
        b.iter(|| black_box(render_diagram(&diagram, &values, resting_fills(&diagram))));
    });
}

criterion_group!(benches, bench_layout, bench_region_at, bench_svg);
criterion_main!(benches);
