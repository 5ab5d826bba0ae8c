use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use spline_editor::{parse_spline_document, write_spline_document, SplineObject, SplineOptions};
use std::hint::black_box;

fn build_synthetic_spline(point_count: usize) -> SplineObject {
    let options = SplineOptions {
        max_points: point_count.max(2),
        ..SplineOptions::default()
    };
    let mut object = SplineObject::new(options);
    for index in 0..point_count {
        let x = index as f32 * 10.0;
        let y = (index as f32 * 0.7).sin() * 4.0;
        let z = (index as f32 * 0.3).cos() * 6.0;
        object.insert_point(None, Vec3::new(x, y, z));
    }
    object
}

fn bench_arc_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("arc_length");

    for &point_count in &[16usize, 256usize] {
        let object = build_synthetic_spline(point_count);
        let total = object.spline().spline_length();

        group.bench_with_input(
            BenchmarkId::new("spline_length", point_count),
            &object,
            |b, object| b.iter(|| black_box(object.spline().spline_length())),
        );

        group.bench_with_input(
            BenchmarkId::new("pos_by_distance", point_count),
            &object,
            |b, object| {
                b.iter(|| {
                    let param = object.spline().pos_by_distance(black_box(total * 0.73));
                    black_box(object.spline().bezier_pos(param.segment, param.t))
                })
            },
        );
    }

    group.finish();
}

fn bench_picking(c: &mut Criterion) {
    let mut group = c.benchmark_group("picking");

    for &point_count in &[16usize, 256usize] {
        let object = build_synthetic_spline(point_count);
        let origin = Vec3::new(point_count as f32 * 5.0 + 2.5, 50.0, 0.3);

        group.bench_with_input(
            BenchmarkId::new("nearest_edge", point_count),
            &object,
            |b, object| {
                b.iter(|| black_box(object.spline().nearest_edge(black_box(origin), Vec3::NEG_Y)))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("hit_test", point_count),
            &object,
            |b, object| b.iter(|| black_box(object.hit_test(black_box(origin), Vec3::NEG_Y))),
        );
    }

    group.finish();
}

fn bench_editing(c: &mut Criterion) {
    let object = build_synthetic_spline(256);

    c.bench_function("update_point_local_correction", |b| {
        let mut object = object.clone();
        let mut step = 0.0f32;
        b.iter(|| {
            step += 0.01;
            object.set_point(128, Vec3::new(1280.0, step.sin(), 0.0));
            black_box(object.revision())
        })
    });

    c.bench_function("rederive_all_tangents", |b| {
        let mut object = object.clone();
        b.iter(|| {
            object.rederive_tangents();
            black_box(object.spline().point_count())
        })
    });
}

fn bench_document(c: &mut Criterion) {
    let object = build_synthetic_spline(256);
    let json = write_spline_document(&object).expect("Export fehlgeschlagen");

    c.bench_function("json_parse_256_points", |b| {
        b.iter(|| {
            let object = parse_spline_document(black_box(&json), &SplineOptions::default())
                .expect("JSON parse failed");
            black_box(object.spline().point_count())
        })
    });
}

criterion_group!(
    benches,
    bench_arc_length,
    bench_picking,
    bench_editing,
    bench_document
);
criterion_main!(benches);
