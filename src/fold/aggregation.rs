use crate::error::AggregationParseError;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How observations falling into the same phase bin are combined
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    /// Inverse-variance weighted mean of flux, bin weight is the sum of ivar
    #[default]
    WeightedMean,
    /// Median of flux values, bin weight is the sum of ivar
    ///
    /// Weights enter only the reported bin ivar, the median itself is taken over the plain
    /// flux values.
    WeightedMedian,
}

impl Aggregation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::WeightedMean => "weighted_mean",
            Self::WeightedMedian => "weighted_median",
        }
    }
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Aggregation {
    type Err = AggregationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mean" | "weighted_mean" => Ok(Self::WeightedMean),
            "median" | "weighted_median" => Ok(Self::WeightedMedian),
            _ => Err(AggregationParseError::UnknownName(s.to_owned())),
        }
    }
}

/// Numeric method flag: `0` is the weighted mean, `1` is the median
impl TryFrom<i32> for Aggregation {
    type Error = AggregationParseError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::WeightedMean),
            1 => Ok(Self::WeightedMedian),
            _ => Err(AggregationParseError::UnknownCode(code)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("mean".parse(), Ok(Aggregation::WeightedMean));
        assert_eq!("Median".parse(), Ok(Aggregation::WeightedMedian));
        assert_eq!("weighted_median".parse(), Ok(Aggregation::WeightedMedian));
        assert_eq!(
            "mode".parse::<Aggregation>(),
            Err(AggregationParseError::UnknownName("mode".to_owned()))
        );
    }

    #[test]
    fn display_is_parsable() {
        for a in [Aggregation::WeightedMean, Aggregation::WeightedMedian] {
            assert_eq!(a.to_string().parse(), Ok(a));
        }
    }

    #[test]
    fn numeric_codes() {
        assert_eq!(Aggregation::try_from(0), Ok(Aggregation::WeightedMean));
        assert_eq!(Aggregation::try_from(1), Ok(Aggregation::WeightedMedian));
        assert_eq!(
            Aggregation::try_from(2),
            Err(AggregationParseError::UnknownCode(2))
        );
    }

    #[test]
    fn serde_names() {
        assert_eq!(
            serde_json::to_string(&Aggregation::WeightedMedian).unwrap(),
            "\"weighted_median\""
        );
        let a: Aggregation = serde_json::from_str("\"weighted_mean\"").unwrap();
        assert_eq!(a, Aggregation::WeightedMean);
    }
}
