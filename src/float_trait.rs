use ndarray::NdFloat;
use num_traits::ToPrimitive;
use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Floating point number trait, implemented for [f32] and [f64]
pub trait Float:
    NdFloat + ToPrimitive + Default + Serialize + DeserializeOwned + JsonSchema
{
    fn half() -> Self;

    /// Lossy conversion of an array index, exact for any realistic bin count
    fn from_index(i: usize) -> Self;
}

macro_rules! float_impl {
    ($t: ty) => {
        impl Float for $t {
            #[inline]
            fn half() -> Self {
                0.5
            }

            #[inline]
            fn from_index(i: usize) -> Self {
                i as Self
            }
        }
    };
}

float_impl!(f32);
float_impl!(f64);
