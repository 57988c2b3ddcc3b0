//! Trait-to-percentile mapping.
//!
//! Two paths:
//!
//! - **Calibrated**: binary-search the empirical quantile table for the
//!   bracketing pair and interpolate the fractional position. The table is
//!   sampled at uniform percentile spacing, so index → percentile is a single
//!   multiply.
//! - **Parametric**: with no table (fallback calibration) the trait prior is
//!   standard normal, so the percentile is `100 · Φ(θ)`.
//!
//! Both paths are pure and clamp the result into [0, 100].

use crate::domain::CalibrationSet;
use crate::math::std_normal_cdf;

/// Neutral percentile returned when the trait estimate is not a finite number.
const NEUTRAL_PERCENTILE: f64 = 50.0;

/// Map a trait value to a population percentile in [0, 100].
///
/// Uses the calibration's quantile table when present, otherwise the
/// normal-CDF fallback. A non-finite `theta` maps to the neutral 50.0.
pub fn percentile_from_theta(theta: f64, calibration: &CalibrationSet) -> f64 {
    if !theta.is_finite() {
        return NEUTRAL_PERCENTILE;
    }

    match &calibration.quantiles {
        Some(q) if q.thetas.len() >= 2 && q.step > 0.0 => {
            percentile_from_quantiles(theta, &q.thetas, q.step)
        }
        _ => 100.0 * std_normal_cdf(theta),
    }
}

/// Calibrated path: locate `theta` within a non-decreasing quantile table
/// sampled at uniform percentile spacing `step`.
///
/// Below the first entry → 0; at or above the last entry → 100. Otherwise the
/// bracketing pair `[thetas[i], thetas[i+1]]` with `thetas[i] <= theta` is
/// found by binary search and the fractional position is interpolated:
/// `p = (i + frac) · step`.
pub fn percentile_from_quantiles(theta: f64, thetas: &[f64], step: f64) -> f64 {
    let last = thetas.len() - 1;
    if theta < thetas[0] {
        return 0.0;
    }
    if theta >= thetas[last] {
        return 100.0;
    }

    // Rightmost index with thetas[i] <= theta.
    let mut lo = 0usize;
    let mut hi = last;
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if thetas[mid] <= theta {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    // The search maintains thetas[lo] <= theta < thetas[hi]; a collapsed
    // bracket can only appear if the table is unsorted, so pin it to its
    // left edge instead of dividing by zero.
    let q0 = thetas[lo];
    let q1 = thetas[hi];
    let frac = if q1 > q0 { (theta - q0) / (q1 - q0) } else { 0.0 };

    ((lo as f64 + frac) * step).clamp(0.0, 100.0)
}
