use criterion::{Criterion, black_box, criterion_group, criterion_main};
use scad_builder::{
    Node, Properties, compile, cube, cylinder, difference, minkowski, sphere, to_scad, translate,
    union,
};

/// A rounded box with a grid of holes, similar in shape to a typical part.
fn sample_part(holes: i32) -> Node {
    let body = minkowski([
        cube([96, 96, 8], true),
        sphere(2).update(Properties::new().with("$fn", 20)),
    ]);
    let drills = (0..holes).flat_map(|x| {
        (0..holes).map(move |y| {
            translate(
                [x * 10 - 45, y * 10 - 45, -6],
                [cylinder(12, 2.5, None).update(Properties::new().with("$fn", 32))],
            )
        })
    });
    difference([body, union(drills)])
}

fn bench_compile(c: &mut Criterion) {
    let small = sample_part(4);
    c.bench_function("compile_small", |b| {
        b.iter(|| to_scad(black_box(&small)));
    });

    let large = sample_part(64);
    let mut out = Vec::with_capacity(512 * 1024);
    c.bench_function("compile_4096_holes_streamed", |b| {
        b.iter(|| {
            out.clear();
            compile(black_box(&large), &mut out).unwrap();
            out.len()
        });
    });

    c.bench_function("build_4096_holes", |b| {
        b.iter(|| sample_part(black_box(64)));
    });
}

criterion_group!(benches, bench_compile);
criterion_main!(benches);
