use crate::error::LightCurveError;
use crate::float_trait::Float;

use ndarray::{Array1, ArrayView1, ArrayViewMut1, s};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Time span covered by a [`LightCurve`]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(bound = "T: Float")]
pub struct Extent<T> {
    pub min: T,
    pub max: T,
}

impl<T> Extent<T>
where
    T: Float,
{
    pub fn duration(&self) -> T {
        self.max - self.min
    }
}

/// Light curve: time, flux and inverse variance of every observation
///
/// The three arrays always have the same length, time is not required to be sorted. Zero `ivar`
/// excludes the observation from every weighted aggregate.
///
/// The time extent is cached by [`LightCurve::compute_extent`]. Borrowing time mutably drops the
/// cached value, so [`LightCurve::extent`] never returns a stale extent.
#[derive(Clone, Debug, PartialEq)]
pub struct LightCurve<T>
where
    T: Float,
{
    t: Array1<T>,
    flux: Array1<T>,
    ivar: Array1<T>,
    extent: Option<Extent<T>>,
}

impl<T> LightCurve<T>
where
    T: Float,
{
    /// Construct `LightCurve` from owned arrays
    ///
    /// `t` is time, `flux` is flux and `ivar` is inverse variance of flux. Inputs could be
    /// [`Vec`] or [`ndarray::Array1`].
    pub fn new(
        t: impl Into<Array1<T>>,
        flux: impl Into<Array1<T>>,
        ivar: impl Into<Array1<T>>,
    ) -> Result<Self, LightCurveError> {
        let t = t.into();
        let flux = flux.into();
        let ivar = ivar.into();

        if t.len() != flux.len() || flux.len() != ivar.len() {
            return Err(LightCurveError::LengthMismatch {
                t: t.len(),
                flux: flux.len(),
                ivar: ivar.len(),
            });
        }

        Ok(Self {
            t,
            flux,
            ivar,
            extent: None,
        })
    }

    /// Construct `LightCurve` with unity weights
    pub fn new_without_weight(
        t: impl Into<Array1<T>>,
        flux: impl Into<Array1<T>>,
    ) -> Result<Self, LightCurveError> {
        let t = t.into();
        let ivar = Array1::from_elem(t.len(), T::one());
        Self::new(t, flux, ivar)
    }

    /// Allocate a light curve of `length` observations
    ///
    /// All arrays are zero-filled, so every observation is excluded from weighted aggregates
    /// until its `ivar` is set. Zero length is allowed.
    pub fn zeros(length: usize) -> Self {
        Self {
            t: Array1::zeros(length),
            flux: Array1::zeros(length),
            ivar: Array1::zeros(length),
            extent: None,
        }
    }

    /// Number of observations
    #[inline]
    pub fn len(&self) -> usize {
        self.t.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    pub fn time(&self) -> ArrayView1<'_, T> {
        self.t.view()
    }

    pub fn flux(&self) -> ArrayView1<'_, T> {
        self.flux.view()
    }

    pub fn ivar(&self) -> ArrayView1<'_, T> {
        self.ivar.view()
    }

    pub fn time_mut(&mut self) -> ArrayViewMut1<'_, T> {
        self.extent = None;
        self.t.view_mut()
    }

    pub fn flux_mut(&mut self) -> ArrayViewMut1<'_, T> {
        self.flux.view_mut()
    }

    pub fn ivar_mut(&mut self) -> ArrayViewMut1<'_, T> {
        self.ivar.view_mut()
    }

    /// Mutable views of time, flux and ivar at once
    pub fn arrays_mut(
        &mut self,
    ) -> (
        ArrayViewMut1<'_, T>,
        ArrayViewMut1<'_, T>,
        ArrayViewMut1<'_, T>,
    ) {
        self.extent = None;
        (self.t.view_mut(), self.flux.view_mut(), self.ivar.view_mut())
    }

    /// Scan time once and cache its minimum and maximum
    pub fn compute_extent(&mut self) -> Result<Extent<T>, LightCurveError> {
        if self.t.is_empty() {
            return Err(LightCurveError::Empty);
        }
        let first = self.t[0];
        let (min, max) = self
            .t
            .slice(s![1..])
            .fold((first, first), |(min, max), &x| {
                if x > max {
                    (min, x)
                } else if x < min {
                    (x, max)
                } else {
                    (min, max)
                }
            });
        let extent = Extent { min, max };
        self.extent = Some(extent);
        Ok(extent)
    }

    /// Cached extent, `None` if it wasn't computed since the last change of time
    pub fn extent(&self) -> Option<Extent<T>> {
        self.extent
    }

    pub fn min_time(&self) -> Option<T> {
        self.extent.map(|e| e.min)
    }

    pub fn max_time(&self) -> Option<T> {
        self.extent.map(|e| e.max)
    }

    /// Total inverse variance of all observations
    pub fn total_ivar(&self) -> T {
        self.ivar.sum()
    }
}
