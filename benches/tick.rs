use conway_canvas::Universe;
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_tick<const N: u32>(c: &mut Criterion) {
    let mut life = Universe::random(N, N, Some(42), 0.3).unwrap();
    c.bench_function(&format!("tick_{}x{}", N, N), |b| b.iter(|| life.tick()));
}

fn bench_toggle(c: &mut Criterion) {
    const N: u32 = 256;
    let mut life = Universe::random(N, N, Some(42), 0.3).unwrap();
    let mut i = 0u32;
    c.bench_function("toggle_cell", |b| {
        b.iter(|| {
            i = i.wrapping_add(7919);
            life.toggle_cell(i / N, i % N);
        })
    });
}

criterion_group!(benches, bench_tick<64>, bench_tick<256>, bench_tick<1024>, bench_toggle);
criterion_main!(benches);
