use criterion::Criterion;
use light_curve_transit::{LightCurve, test_epoch};
use rand::prelude::*;
use std::hint::black_box;

pub fn bench_test_epoch(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    for (n_bins, window) in [(100, 5), (1000, 20), (10_000, 50)] {
        let t: Vec<f64> = (0..n_bins).map(|i| i as f64).collect();
        let flux: Vec<f64> = (0..n_bins).map(|_| rng.random_range(0.99..1.01)).collect();
        let lc = LightCurve::new_without_weight(t, flux).unwrap();
        c.bench_function(
            format!("test_epoch: {n_bins} bins, {window} bins window").as_str(),
            |b| b.iter(|| test_epoch(black_box(&lc), window)),
        );
    }
}
