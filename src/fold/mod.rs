//! Phase folding and binning

use crate::data::LightCurve;
use crate::error::FoldError;
use crate::float_trait::Float;
use crate::select::select_median;

use itertools::izip;
use macro_const::macro_const;
use ndarray::{ArrayViewMut1, Zip};

mod aggregation;
pub use aggregation::Aggregation;

mod parameters;
pub use parameters::FoldParameters;

macro_const! {
    const DOC: &str = r"
Fold a light curve on a trial period and bin it in phase

The number of bins is $N = \lfloor P / \Delta t \rfloor + 1$, where $P$ is the period and
$\Delta t$ is the bin width. Observation $i$ goes to the bin
$$
j_i = \left\lfloor \frac{t_i \bmod P}{\Delta t} \right\rfloor,
$$
where the remainder has the sign of $t_i$. The folded light curve has time equal to the bin
centre phase $t_j^* = j \Delta t + \Delta t / 2$ for every bin, even an empty one.

With [`Aggregation::WeightedMean`] binned flux and weight are
$$
m_j^* = \frac{\sum_{i: j_i = j} m_i w_i}{\sum_{i: j_i = j} w_i}, \qquad w_j^* = \sum_{i: j_i = j} w_i,
$$
with [`Aggregation::WeightedMedian`] $m_j^*$ is the upper median of $\{m_i: j_i = j\}$ and
$w_j^*$ is the same sum of weights. A bin without observations, or with zero total weight for
the weighted mean, has NaN flux.

A bin index outside of $[0; N)$ can only come from floating point rounding or from times below
$-\Delta t$. Such observations are clamped into the nearest valid bin, reported with a warning
and listed in [`Folded::clamped`].
";
}

/// Side of the phase range an observation was clamped from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClampDirection {
    /// Computed bin index was `N` or larger, observation went to the last bin
    AbovePeriod,
    /// Computed bin index was negative, observation went to the first bin
    BelowZero,
}

/// Observation which phase bin index had to be clamped
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BinClamp<T> {
    /// Index of the observation in the input light curve
    pub index: usize,
    pub time: T,
    pub direction: ClampDirection,
}

/// Folded and binned light curve together with the clamping report
#[derive(Clone, Debug, PartialEq)]
pub struct Folded<T>
where
    T: Float,
{
    pub light_curve: LightCurve<T>,
    pub clamped: Vec<BinClamp<T>>,
}

impl<T> Folded<T>
where
    T: Float,
{
    /// Number of observations which bin index was clamped
    pub fn n_clamped(&self) -> usize {
        self.clamped.len()
    }

    pub fn into_light_curve(self) -> LightCurve<T> {
        self.light_curve
    }
}

/// Number of phase bins for the given period and bin width
pub fn n_bins<T>(period: T, dt: T) -> Result<usize, FoldError>
where
    T: Float,
{
    if !(period.is_finite() && period > T::zero()) {
        return Err(FoldError::InvalidPeriod);
    }
    if !(dt.is_finite() && dt > T::zero()) {
        return Err(FoldError::InvalidBinWidth);
    }
    let n = (period / dt)
        .floor()
        .to_usize()
        .and_then(|n| n.checked_add(1))
        .ok_or(FoldError::TooManyBins)?;
    Ok(usize::max(n, 1))
}

/// Phase bin of a single finite time, or the clamp direction if it is out of range
fn phase_bin<T>(t: T, period: T, dt: T, n_bins: usize) -> Result<usize, (usize, ClampDirection)>
where
    T: Float,
{
    // Float to int conversion truncates toward zero, so (-1, 0) goes to zero as well
    match ((t % period) / dt).to_usize() {
        Some(bin) if bin < n_bins => Ok(bin),
        Some(_) => Err((n_bins - 1, ClampDirection::AbovePeriod)),
        None => Err((0, ClampDirection::BelowZero)),
    }
}

fn assign_bins<T>(
    lc: &LightCurve<T>,
    period: T,
    dt: T,
    n_bins: usize,
) -> Result<(Vec<usize>, Vec<BinClamp<T>>), FoldError>
where
    T: Float,
{
    let mut clamped = vec![];
    let bins = lc
        .time()
        .iter()
        .enumerate()
        .map(|(index, &time)| {
            if !time.is_finite() {
                return Err(FoldError::NonFiniteTime { index });
            }
            Ok(match phase_bin(time, period, dt, n_bins) {
                Ok(bin) => bin,
                Err((bin, direction)) => {
                    log::warn!(
                        "phase bin index is out of range for t = {time} (observation {index}), \
                        clamped to bin {bin}"
                    );
                    clamped.push(BinClamp {
                        index,
                        time,
                        direction,
                    });
                    bin
                }
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok((bins, clamped))
}

fn aggregate_weighted_mean<T>(
    lc: &LightCurve<T>,
    bins: &[usize],
    mut flux: ArrayViewMut1<T>,
    mut ivar: ArrayViewMut1<T>,
) where
    T: Float,
{
    for (&bin, &m, &w) in izip!(bins, lc.flux(), lc.ivar()) {
        flux[bin] += m * w;
        ivar[bin] += w;
    }
    // Zero total weight gives NaN, which marks the bin as empty
    Zip::from(&mut flux).and(&ivar).for_each(|m, &w| *m /= w);
}

fn aggregate_median<T>(
    lc: &LightCurve<T>,
    bins: &[usize],
    mut flux: ArrayViewMut1<T>,
    mut ivar: ArrayViewMut1<T>,
) where
    T: Float,
{
    let mut groups: Vec<Vec<T>> = vec![vec![]; flux.len()];
    for (&bin, &m, &w) in izip!(bins, lc.flux(), lc.ivar()) {
        groups[bin].push(m);
        ivar[bin] += w;
    }
    for (m, mut group) in flux.iter_mut().zip(groups) {
        *m = if group.is_empty() {
            T::nan()
        } else {
            select_median(&mut group)
        };
    }
}

#[doc = DOC!()]
///
/// Returns a newly allocated light curve, the input is not modified.
pub fn fold_and_bin<T>(
    lc: &LightCurve<T>,
    period: T,
    dt: T,
    method: Aggregation,
) -> Result<Folded<T>, FoldError>
where
    T: Float,
{
    let n_bins = n_bins(period, dt)?;
    let (bins, clamped) = assign_bins(lc, period, dt, n_bins)?;

    let mut folded = LightCurve::zeros(n_bins);
    {
        let (mut t, flux, ivar) = folded.arrays_mut();
        for (i, t) in t.iter_mut().enumerate() {
            *t = T::from_index(i) * dt + T::half() * dt;
        }
        match method {
            Aggregation::WeightedMean => aggregate_weighted_mean(lc, &bins, flux, ivar),
            Aggregation::WeightedMedian => aggregate_median(lc, &bins, flux, ivar),
        }
    }

    log::debug!(
        "folded {} observations on period {period} into {n_bins} bins of width {dt} \
        with {method}, {} clamped",
        lc.len(),
        clamped.len(),
    );

    Ok(Folded {
        light_curve: folded,
        clamped,
    })
}

/// Documentation of [`fold_and_bin`]
pub const fn doc() -> &'static str {
    DOC
}

impl<T> LightCurve<T>
where
    T: Float,
{
    /// Method form of [`fold_and_bin`]
    pub fn fold_and_bin(
        &self,
        period: T,
        dt: T,
        method: Aggregation,
    ) -> Result<Folded<T>, FoldError> {
        fold_and_bin(self, period, dt, method)
    }
}
