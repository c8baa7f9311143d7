use criterion::Criterion;
use light_curve_transit::{Aggregation, LightCurve, fold_and_bin};
use rand::prelude::*;
use std::hint::black_box;

pub fn bench_fold_and_bin(c: &mut Criterion) {
    const PERIOD: f64 = 3.7;
    const BIN_WIDTH: f64 = 0.02;

    let mut rng = StdRng::seed_from_u64(0);
    for n in [100, 10_000, 100_000] {
        let t: Vec<f64> = (0..n).map(|_| rng.random_range(0.0..1000.0)).collect();
        let flux: Vec<f64> = (0..n).map(|_| rng.random_range(0.99..1.01)).collect();
        let ivar: Vec<f64> = (0..n).map(|_| rng.random_range(1.0..10.0)).collect();
        let lc = LightCurve::new(t, flux, ivar).unwrap();
        for method in [Aggregation::WeightedMean, Aggregation::WeightedMedian] {
            c.bench_function(
                format!("fold_and_bin: {n} length, {method}").as_str(),
                |b| b.iter(|| fold_and_bin(black_box(&lc), PERIOD, BIN_WIDTH, method)),
            );
        }
    }
}
