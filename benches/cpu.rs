use criterion::{criterion_group, criterion_main, Criterion};
use dotmatrix::gb::GameBoy;

fn benchmark_cpu_clock(c: &mut Criterion) {
    let mut gb = GameBoy::new();
    gb.cpu().mmu.load_rom(&[0u8; 32768]).unwrap();

    c.bench_function("cpu_clock", |b| {
        b.iter(|| {
            for _ in 0..1_000_000 {
                gb.clock();
            }
        })
    });
}

criterion_group!(benches, benchmark_cpu_clock);
criterion_main!(benches);
