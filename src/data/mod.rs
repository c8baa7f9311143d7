mod light_curve;
pub use light_curve::{Extent, LightCurve};
