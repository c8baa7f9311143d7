/// Error returned from [crate::LightCurve] constructors and extent computation
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LightCurveError {
    #[error("light curve is empty, at least one observation is required")]
    Empty,

    #[error("time, flux and ivar must have the same length, got {t}, {flux} and {ivar}")]
    LengthMismatch { t: usize, flux: usize, ivar: usize },
}

/// Error returned from [crate::fold_and_bin]
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FoldError {
    #[error("period must be finite and positive")]
    InvalidPeriod,

    #[error("bin width must be finite and positive")]
    InvalidBinWidth,

    #[error("period to bin width ratio is too large to be represented as a bin count")]
    TooManyBins,

    #[error("observation {index} has a non-finite time")]
    NonFiniteTime { index: usize },
}

/// Error returned from [crate::test_epoch] and [crate::scan_epochs]
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EpochError {
    #[error("transit window must span at least one bin")]
    ZeroWindow,
}

/// Error returned when parsing an [crate::Aggregation]
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AggregationParseError {
    #[error("unknown aggregation method {0:?}, expected \"mean\" or \"median\"")]
    UnknownName(String),

    #[error("unknown aggregation code {0}, expected 0 (mean) or 1 (median)")]
    UnknownCode(i32),
}
