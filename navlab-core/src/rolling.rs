//! Rolling computations over a scoped series.
//!
//! Trailing simple mean over a fixed observation window, plus day-over-day
//! change ratios. The mean is O(n) per series via a running sum with
//! eviction of the element leaving the window — never an O(n·w)
//! recomputation, which matters at thousands of schemes with multi-year
//! histories.

use crate::domain::{SchemeSeries, WindowedObservation};

/// Trailing arithmetic mean over `window` values, inclusive of the current
/// position.
///
/// Defined only from position `window - 1` onward; earlier positions are
/// `None` — never zero, never an extrapolation.
pub fn trailing_mean(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let n = values.len();
    let mut result = vec![None; n];
    if window == 0 || n < window {
        return result;
    }

    let mut sum: f64 = values.iter().take(window).sum();
    result[window - 1] = Some(sum / window as f64);

    for i in window..n {
        sum += values[i] - values[i - window];
        result[i] = Some(sum / window as f64);
    }

    result
}

/// Day-over-day relative change: `(v[i] - v[i-1]) / v[i-1]`.
///
/// Absent at position 0. A zero prior value yields a non-finite ratio,
/// which the jump detector treats as exceeding any threshold.
pub fn change_ratios(values: &[f64]) -> Vec<Option<f64>> {
    let mut result = vec![None; values.len()];
    for i in 1..values.len() {
        result[i] = Some((values[i] - values[i - 1]) / values[i - 1]);
    }
    result
}

/// Annotate every observation of a scoped series with its moving average
/// and change ratio.
pub fn window_series(series: &SchemeSeries, window: usize) -> Vec<WindowedObservation> {
    let navs = series.navs();
    let means = trailing_mean(&navs, window);
    let ratios = change_ratios(&navs);

    series
        .observations()
        .iter()
        .zip(means)
        .zip(ratios)
        .map(|((observation, moving_average), change_ratio)| WindowedObservation {
            observation: observation.clone(),
            moving_average,
            change_ratio,
        })
        .collect()
}
