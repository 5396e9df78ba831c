use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rectclip::{clip_segment, LineSegment, Rectangle};

fn window() -> Rectangle {
    Rectangle::unit()
}

fn benchmark_single_segment(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_segment");
    let window = window();

    for (name, segment) in [
        ("inside", LineSegment::from_coords(0.2, 0.2, 0.8, 0.7)),
        ("trivial_reject", LineSegment::from_coords(0.5, 1.5, 2.0, 3.0)),
        ("one_end_out", LineSegment::from_coords(0.5, 1.5, 1.0, 0.0)),
        ("both_corners_out", LineSegment::from_coords(-0.5, 0.2, 1.2, 1.5)),
    ] {
        group.bench_with_input(BenchmarkId::new("clip", name), &segment, |b, s| {
            b.iter(|| clip_segment(black_box(*s), &window));
        });
    }

    group.finish();
}

fn benchmark_many_segments(c: &mut Criterion) {
    let window = window();

    // A fan of segments through the window's neighbourhood
    let segments: Vec<LineSegment> = (0..40)
        .flat_map(|i| {
            (0..40).map(move |j| {
                let a = i as f64 / 10.0 - 1.5;
                let b = j as f64 / 10.0 - 1.5;
                LineSegment::from_coords(a, b, 1.0 - b, a + 0.5)
            })
        })
        .collect();

    c.bench_function("clip_1600_segments", |b| {
        b.iter(|| {
            segments
                .iter()
                .filter(|s| clip_segment(black_box(**s), &window).is_accepted())
                .count()
        });
    });
}

criterion_group!(benches, benchmark_single_segment, benchmark_many_segments);
criterion_main!(benches);
