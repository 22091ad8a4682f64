//! Jump detection — synthetic/erroneous NAV print exclusion.
//!
//! Only the change-ratio window ending at the latest retained observation
//! is consulted. A bad print that has rolled out of the averaging window no
//! longer disqualifies the scheme: the trend it distorted has already left
//! the average.

use crate::domain::WindowedObservation;

/// Returns true if the scheme must be excluded for an anomalous NAV change.
///
/// Flags when, among the (up to) `window` ratio positions ending at the
/// latest observation, any ratio is non-finite or exceeds `threshold` in
/// absolute value. A non-positive NAV anywhere in the series also flags:
/// its mean and deviation are meaningless, and the ratio following it is
/// undefined.
pub fn is_jump_flagged(windowed: &[WindowedObservation], window: usize, threshold: f64) -> bool {
    if windowed.iter().any(|w| w.observation.nav <= 0.0) {
        return true;
    }

    let start = windowed.len().saturating_sub(window);
    windowed[start..]
        .iter()
        .filter_map(|w| w.change_ratio)
        .any(|r| !r.is_finite() || r.abs() > threshold)
}
