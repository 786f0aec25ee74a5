// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Vec2};
use overstory_spacing::{PluginConfig, SpacingChange, SpacingPlugin};
use understory_box_model::Region;
use understory_spacing::{SpacingField, SpacingValues};
use understory_spacing_interaction::{DragController, DragStrategy};

const MOVES: usize = 1_000;

fn bench_controller(c: &mut Criterion) {
    let mut group = c.benchmark_group("spacing_drag/controller");
    let region = Region::Band(SpacingField::TopPadding);

    for (name, strategy) in [
        ("incremental", DragStrategy::default()),
        ("absolute", DragStrategy::AbsoluteShorthand),
    ] {
        group.bench_function(name, |b| {
            b.iter_batched(
                || (DragController::new(strategy), SpacingValues::uniform(10.0)),
                |(mut drag, mut values)| {
                    drag.on_drag_start(region, &values);
                    for i in 0..MOVES {
                        // Oscillate so the value never pins at zero.
                        let dy = if i % 2 == 0 { 1.0 } else { -1.0 };
                        black_box(drag.on_drag_move(region, Vec2::new(0.0, dy), &mut values));
                    }
                    drag.on_drag_end(region);
                    black_box(values)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_plugin_pointer_drag(c: &mut Criterion) {
    c.bench_function("spacing_drag/plugin_pointer", |b| {
        b.iter_batched(
            || {
                SpacingPlugin::with_host(
                    PluginConfig::default(),
                    SpacingValues::uniform(10.0),
                    Vec::<SpacingChange>::with_capacity(MOVES),
                )
                .unwrap()
            },
            |mut plugin| {
                plugin.press_at(Point::new(100.0, 100.0));
                for i in 0..MOVES {
                    let x = 100.0 + (i % 7) as f64;
                    black_box(plugin.pointer_move(Point::new(x, 100.0)));
                }
                plugin.release_at(Point::new(100.0, 100.0));
                plugin.reset();
                black_box(plugin.into_host().len())
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_controller, bench_plugin_pointer_drag);
criterion_main!(benches);
