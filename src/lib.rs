#![doc = include_str!("../README.md")]

mod data;
pub use data::{Extent, LightCurve};

pub mod epoch;
pub use epoch::{Epoch, EpochScan, scan_epochs, test_epoch};

mod error;
pub use error::{AggregationParseError, EpochError, FoldError, LightCurveError};

mod float_trait;
pub use float_trait::Float;

pub mod fold;
pub use fold::{
    Aggregation, BinClamp, ClampDirection, FoldParameters, Folded, fold_and_bin, n_bins,
};

pub mod prelude;

mod select;
pub use select::{select_median, select_nth};

pub use ndarray;
