pub use crate::data::{Extent, LightCurve};
pub use crate::epoch::{scan_epochs, test_epoch};
pub use crate::float_trait::Float;
pub use crate::fold::{Aggregation, FoldParameters, fold_and_bin};
