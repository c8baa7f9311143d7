//! Box transit search over a folded light curve

use crate::data::LightCurve;
use crate::error::EpochError;
use crate::float_trait::Float;

use macro_const::macro_const;
use ndarray::{Array1, ArrayView1};

macro_const! {
    const DOC: &str = r"
Deepest box-shaped dip of a folded light curve

Every bin $i$ of a folded light curve of $N$ bins is tried as a transit start, the window covers
$W$ consecutive bins wrapping around the end of the phase range:
$$
d_i = 1 - \frac{\sum_{k=0}^{W-1} m_{(i+k) \bmod N} w_{(i+k) \bmod N}}{\sum_{k=0}^{W-1} w_{(i+k) \bmod N}}.
$$
$W$ may exceed $N$, in this case bins are visited more than once.

The result is $\max(0, \max_i d_i)$, the first offset wins on ties. A window with zero total
weight or covering a NaN bin has NaN depth and never wins, so a profile without a single valid
window gives zero.
";
}

/// Transit window start and its depth
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Epoch<T> {
    /// Index of the first bin of the window
    pub offset: usize,
    /// Phase of the first bin centre
    pub phase: T,
    pub depth: T,
}

/// Depths of all circular windows of a folded light curve
#[derive(Clone, Debug)]
pub struct EpochScan<T> {
    phases: Array1<T>,
    depths: Array1<T>,
}

impl<T> EpochScan<T>
where
    T: Float,
{
    /// Depth for every window start, NaN for windows without weight
    pub fn depths(&self) -> ArrayView1<'_, T> {
        self.depths.view()
    }

    pub fn len(&self) -> usize {
        self.depths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depths.is_empty()
    }

    /// The first deepest window with positive depth
    pub fn best(&self) -> Option<Epoch<T>> {
        deepest(self.depths.iter().copied()).map(|(offset, depth)| Epoch {
            offset,
            phase: self.phases[offset],
            depth,
        })
    }

    /// Depth of the best window, or zero if there is none
    pub fn max_depth(&self) -> T {
        self.best().map_or_else(T::zero, |epoch| epoch.depth)
    }
}

fn window_depth<T>(flux: &ArrayView1<T>, ivar: &ArrayView1<T>, start: usize, window: usize) -> T
where
    T: Float,
{
    let n = flux.len();
    let (weighted_sum, weight_sum) = (start..start + window)
        .map(|k| k % n)
        .fold((T::zero(), T::zero()), |(s, w), j| {
            (s + flux[j] * ivar[j], w + ivar[j])
        });
    T::one() - weighted_sum / weight_sum
}

fn window_depths<'a, T>(lc: &'a LightCurve<T>, window: usize) -> impl Iterator<Item = T> + 'a
where
    T: Float,
{
    let flux = lc.flux();
    let ivar = lc.ivar();
    (0..lc.len()).map(move |start| window_depth(&flux, &ivar, start, window))
}

/// Running maximum above zero, strict comparison keeps the first of equal values
fn deepest<T>(depths: impl Iterator<Item = T>) -> Option<(usize, T)>
where
    T: Float,
{
    depths
        .enumerate()
        .fold(None, |best: Option<(usize, T)>, (i, depth)| {
            let current = best.map_or_else(T::zero, |(_, d)| d);
            if depth > current {
                Some((i, depth))
            } else {
                best
            }
        })
}

#[doc = DOC!()]
pub fn test_epoch<T>(lc: &LightCurve<T>, window_bins: usize) -> Result<T, EpochError>
where
    T: Float,
{
    if window_bins == 0 {
        return Err(EpochError::ZeroWindow);
    }
    Ok(deepest(window_depths(lc, window_bins)).map_or_else(T::zero, |(_, depth)| depth))
}

/// Depths of every window start, see [`test_epoch`] for the definition
pub fn scan_epochs<T>(lc: &LightCurve<T>, window_bins: usize) -> Result<EpochScan<T>, EpochError>
where
    T: Float,
{
    if window_bins == 0 {
        return Err(EpochError::ZeroWindow);
    }
    Ok(EpochScan {
        phases: lc.time().to_owned(),
        depths: window_depths(lc, window_bins).collect(),
    })
}

/// Documentation of [`test_epoch`]
pub const fn doc() -> &'static str {
    DOC
}

impl<T> LightCurve<T>
where
    T: Float,
{
    /// Method form of [`test_epoch`]
    pub fn test_epoch(&self, window_bins: usize) -> Result<T, EpochError> {
        test_epoch(self, window_bins)
    }
}
