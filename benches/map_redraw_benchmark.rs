//! Performance benchmarks for the map view
//!
//! Every store change clears the scene and draws all regions again, so
//! redraw and rasterization cost grow with the region count.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ratatui::layout::Rect;
use region_selector::map::{MapView, Point};
use region_selector::models::{Coordinates, MapPosition, Region, Tier};
use region_selector::store::SelectionState;
use region_selector::ui::map_canvas::rasterize;

/// Regions laid out on a grid inside the 800x600 view box.
fn generate_regions(count: usize) -> Vec<Region> {
    let columns = (count as f64).sqrt().ceil().max(1.0) as usize;
    let rows = count.div_ceil(columns).max(1);
    let width = 800.0 / columns as f64;
    let height = 600.0 / rows as f64;

    (0..count)
        .map(|i| {
            let x = (i % columns) as f64 * width;
            let y = (i / columns) as f64 * height;
            Region {
                id: format!("region-{}", i),
                display_name: format!("지역 {}", i),
                emoji: "📍".to_string(),
                coordinates: Coordinates {
                    latitude: 37.5,
                    longitude: 127.0,
                },
                map_position: MapPosition {
                    x: x + width / 2.0,
                    y: y + height / 2.0,
                },
                svg_path: format!(
                    "M{:.1},{:.1} L{:.1},{:.1} L{:.1},{:.1} L{:.1},{:.1} Z",
                    x + 2.0,
                    y + 2.0,
                    x + width - 2.0,
                    y + 4.0,
                    x + width - 4.0,
                    y + height - 2.0,
                    x + 4.0,
                    y + height - 4.0
                ),
                popularity_score: 80.0,
                available_places_count: 40,
                keywords: vec!["데이트".to_string()],
                tier: if i % 3 == 0 { Tier::Essential } else { Tier::Important },
                is_active: true,
            }
        })
        .collect()
}

fn state_with(count: usize) -> SelectionState {
    let regions = generate_regions(count);
    SelectionState {
        selected_region: regions.first().cloned(),
        regions,
        ..SelectionState::default()
    }
}

/// Benchmark a full scene redraw (outline cache warm after the first pass)
fn bench_map_redraw(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_redraw");

    for count in [10, 25, 50, 100].iter() {
        let state = state_with(*count);
        group.throughput(Throughput::Elements(*count as u64));

        group.bench_with_input(BenchmarkId::from_parameter(count), &state, |b, state| {
            let mut view = MapView::new();
            b.iter(|| {
                view.redraw(black_box(state));
                black_box(view.scene().shapes().len())
            });
        });
    }

    group.finish();
}

/// Benchmark rasterizing the scene into braille samples
fn bench_rasterize(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_rasterize");
    let area = Rect::new(0, 0, 118, 30);

    for count in [10, 50, 100].iter() {
        let mut view = MapView::new();
        view.redraw(&state_with(*count));

        group.bench_with_input(BenchmarkId::from_parameter(count), view.scene(), |b, scene| {
            b.iter(|| black_box(rasterize(black_box(scene), area)));
        });
    }

    group.finish();
}

/// Benchmark pointer hit testing against the scene
fn bench_hit_test(c: &mut Criterion) {
    let mut view = MapView::new();
    view.redraw(&state_with(100));
    let probes: Vec<Point> = (0..64)
        .map(|i| Point::from(((i * 12) as f64 + 3.0, (i * 9) as f64 + 3.0)))
        .collect();

    c.bench_function("map_hit_test_100", |b| {
        b.iter(|| {
            for probe in &probes {
                black_box(view.scene().hit_test(*probe));
            }
        });
    });
}

criterion_group!(benches, bench_map_redraw, bench_rasterize, bench_hit_test);
criterion_main!(benches);
