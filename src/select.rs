//! In-place order statistics

use crate::float_trait::Float;

/// Median of an unsorted sample: the element at index `n / 2` of the sorted sample
///
/// For an even number of elements this is the upper of the two middle elements, not their
/// average. The slice is partially reordered. Values must not be NaN.
///
/// # Panics
///
/// Panics if `values` is empty.
pub fn select_median<T>(values: &mut [T]) -> T
where
    T: Float,
{
    assert!(
        !values.is_empty(),
        "median of an empty sample is undefined"
    );
    let k = values.len() / 2;
    select_nth(values, k)
}

/// The `k`-th smallest element (zero-based) of an unsorted sample
///
/// Partition-based selection with median-of-three pivot choice. The slice is partially
/// reordered, no allocation happens. Values must not be NaN.
///
/// # Panics
///
/// Panics if `k` is not a valid index of `values`.
pub fn select_nth<T>(values: &mut [T], k: usize) -> T
where
    T: Float,
{
    assert!(
        k < values.len(),
        "order statistic index {} is out of range for a sample of {} values",
        k,
        values.len()
    );

    let mut low = 0;
    let mut high = values.len() - 1;
    loop {
        if high <= low {
            return values[k];
        }

        if high == low + 1 {
            if values[low] > values[high] {
                values.swap(low, high);
            }
            return values[k];
        }

        // Order low, middle and high so that the median of three lands at low
        let middle = (low + high) / 2;
        if values[middle] > values[high] {
            values.swap(middle, high);
        }
        if values[low] > values[high] {
            values.swap(low, high);
        }
        if values[middle] > values[low] {
            values.swap(middle, low);
        }
        // The smallest of three becomes the sentinel for the downward scan
        values.swap(middle, low + 1);

        let mut ll = low + 1;
        let mut hh = high;
        loop {
            ll += 1;
            while values[low] > values[ll] {
                ll += 1;
            }
            hh -= 1;
            while values[hh] > values[low] {
                hh -= 1;
            }
            if hh < ll {
                break;
            }
            values.swap(ll, hh);
        }

        // Pivot goes to its final position
        values.swap(low, hh);

        if hh <= k {
            low = ll;
        }
        if hh >= k {
            high = hh - 1;
        }
    }
}
