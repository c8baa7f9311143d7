use criterion::{BatchSize, Criterion};
use light_curve_transit::select_median;
use rand::prelude::*;

pub fn bench_select_median(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    for n in [11, 101, 1001, 100001] {
        let x: Vec<f64> = (0..n).map(|_| rng.random()).collect();
        c.bench_function(format!("select_median: {n} values").as_str(), |b| {
            b.iter_batched_ref(
                || x.clone(),
                |scratch| select_median(scratch.as_mut_slice()),
                BatchSize::SmallInput,
            )
        });
    }
}
