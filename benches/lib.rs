use criterion::{criterion_group, criterion_main};

mod epoch;
use epoch::bench_test_epoch;

mod fold;
use fold::bench_fold_and_bin;

mod select;
use select::bench_select_median;

criterion_group!(
    benches,
    bench_select_median,
    bench_fold_and_bin,
    bench_test_epoch
);
criterion_main!(benches);
