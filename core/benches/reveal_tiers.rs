use std::hint::black_box;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use sweepgrid_core::*;

fn bench_flood_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill");

    for size in [16, 64, 255] {
        // single mine in a corner, so one reveal floods nearly the whole board
        let layout = MineLayout::from_mine_coords(size, &[(0, 0)]).unwrap();
        let center = (size / 2, size / 2);

        group.bench_with_input(BenchmarkId::from_parameter(size), &layout, |b, layout| {
            b.iter_batched(
                || Visibility::for_layout(layout),
                |mut visibility| reveal(layout, &mut visibility, black_box(center)),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_flood_fill);
criterion_main!(benches);
