// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_slider::{Axis, SliderLayout, SliderState};

fn layout_for(axis: Axis) -> SliderLayout {
    let track = match axis {
        Axis::Horizontal => Rect::new(0.0, 0.0, 400.0, 20.0),
        Axis::Vertical => Rect::new(0.0, 0.0, 20.0, 400.0),
    };
    SliderLayout::new(track, Rect::new(0.0, 0.0, 32.0, 32.0))
}

fn bench_mappings(c: &mut Criterion) {
    let mut group = c.benchmark_group("slider/mapping");

    for axis in [Axis::Horizontal, Axis::Vertical] {
        let layout = layout_for(axis);
        let values: Vec<f64> = (0..=1_000).map(|i| f64::from(i) / 1_000.0).collect();
        let points: Vec<Point> = values
            .iter()
            .map(|&v| layout.handle_position(axis, v))
            .collect();
        group.throughput(Throughput::Elements(values.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("handle_position", format!("{axis:?}")),
            &values,
            |b, values| {
                b.iter(|| {
                    for &v in values {
                        black_box(layout.handle_position(axis, black_box(v)));
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("value_at", format!("{axis:?}")),
            &points,
            |b, points| {
                b.iter(|| {
                    for &p in points {
                        black_box(layout.value_at(black_box(p), axis));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_drag_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("slider/gesture");

    // One press, a long run of moves sweeping past both ends, one release.
    for moves in [64usize, 1_024] {
        let layout = layout_for(Axis::Horizontal);
        let step = 600.0 / moves as f64;
        let points: Vec<Point> = (0..moves)
            .map(|i| Point::new(-100.0 + step * i as f64, 10.0))
            .collect();
        group.throughput(Throughput::Elements(moves as u64));

        group.bench_with_input(BenchmarkId::new("drag", moves), &points, |b, points| {
            b.iter(|| {
                let mut slider = SliderState::new(Axis::Horizontal, 0.0);
                slider.apply_layout(&layout);
                slider.on_drag_start();
                for &p in points {
                    black_box(slider.on_drag_move(p, layout.track));
                }
                slider.on_drag_end();
                black_box(slider.value())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mappings, bench_drag_gesture);
criterion_main!(benches);
