use crate::data::LightCurve;
use crate::error::FoldError;
use crate::float_trait::Float;
use crate::fold::{Aggregation, Folded, fold_and_bin, n_bins};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Folding configuration: trial period, bin width and aggregation method
///
/// Values are validated by [`FoldParameters::new`] and again on every [`FoldParameters::fold`]
/// call, so deserialized parameters are safe to use.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(bound = "T: Float")]
pub struct FoldParameters<T> {
    pub period: T,
    pub bin_width: T,
    #[serde(default)]
    pub aggregation: Aggregation,
}

impl<T> FoldParameters<T>
where
    T: Float,
{
    pub fn new(period: T, bin_width: T, aggregation: Aggregation) -> Result<Self, FoldError> {
        n_bins(period, bin_width)?;
        Ok(Self {
            period,
            bin_width,
            aggregation,
        })
    }

    pub fn n_bins(&self) -> Result<usize, FoldError> {
        n_bins(self.period, self.bin_width)
    }

    pub fn fold(&self, lc: &LightCurve<T>) -> Result<Folded<T>, FoldError> {
        fold_and_bin(lc, self.period, self.bin_width, self.aggregation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_validates() {
        assert!(FoldParameters::new(1.0_f64, 0.1, Aggregation::WeightedMean).is_ok());
        assert_eq!(
            FoldParameters::new(1.0_f64, -0.1, Aggregation::WeightedMean),
            Err(FoldError::InvalidBinWidth)
        );
        assert_eq!(
            FoldParameters::new(f32::INFINITY, 0.1, Aggregation::WeightedMedian),
            Err(FoldError::InvalidPeriod)
        );
    }

    #[test]
    fn from_json_with_default_aggregation() {
        let params: FoldParameters<f64> =
            serde_json::from_str(r#"{"period": 2.5, "bin_width": 0.5}"#).unwrap();
        assert_eq!(params.aggregation, Aggregation::WeightedMean);
        assert_eq!(params.n_bins(), Ok(6));
    }

    #[test]
    fn json_round_trip() {
        let params = FoldParameters::new(3.0_f64, 0.25, Aggregation::WeightedMedian).unwrap();
        let json = serde_json::to_string(&params).unwrap();
        assert!(json.contains("\"weighted_median\""));
        let de: FoldParameters<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(de, params);
    }

    #[test]
    fn invalid_json_parameters_fail_on_fold() {
        let json = r#"{"period": 0.0, "bin_width": 0.5, "aggregation": "weighted_median"}"#;
        let params: FoldParameters<f64> = serde_json::from_str(json).unwrap();
        let lc = LightCurve::new_without_weight(vec![0.0, 1.0], vec![1.0, 1.0]).unwrap();
        assert_eq!(params.fold(&lc), Err(FoldError::InvalidPeriod));
    }

    #[test]
    fn fold_matches_free_function() {
        let lc = LightCurve::new(
            vec![0.1_f64, 0.7, 1.2, 1.9, 2.4],
            vec![1.0, 0.9, 1.1, 0.8, 1.0],
            vec![1.0, 2.0, 1.0, 0.5, 1.0],
        )
        .unwrap();
        // Every bin is populated, so there is no NaN to break the comparison
        let params = FoldParameters::new(1.0, 0.4, Aggregation::WeightedMean).unwrap();
        assert_eq!(
            params.fold(&lc).unwrap(),
            fold_and_bin(&lc, 1.0, 0.4, Aggregation::WeightedMean).unwrap()
        );
    }
}
