use criterion::{Criterion, black_box, criterion_group, criterion_main};
use life_core::{Grid, RowEdges};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_step(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    // Roughly a 1280x720 viewport at 10px cells
    let grid = Grid::random(128, 72, 0.5, &mut rng).expect("grid");
    let mut scratch = grid.clone();

    c.bench_function("step_into 128x72 clipped", |b| {
        b.iter(|| black_box(&grid).step_into(&mut scratch))
    });

    let wrapped = grid.clone().with_row_edges(RowEdges::Wrap);
    c.bench_function("step_into 128x72 wrapped", |b| {
        b.iter(|| black_box(&wrapped).step_into(&mut scratch))
    });

    c.bench_function("snapshot 128x72", |b| b.iter(|| black_box(&grid).snapshot()));
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
