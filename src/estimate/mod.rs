//! Latent trait estimation from a binary answer vector.
//!
//! Model: each item's probability of a "yes" given trait θ is
//! `σ(a_i · (θ - b_i))` (two-parameter logistic), with a standard-normal prior
//! on θ. We maximize the log-posterior by Newton–Raphson:
//!
//! - gradient  `g = -θ + Σ a_i · (y_i - p_i)`
//! - curvature `h = -1 - Σ a_i² · p_i · (1 - p_i)`
//! - update    `θ ← θ - g / h`
//!
//! `h ≤ -1` everywhere, so the posterior is strictly concave and the update is
//! always well-defined; the iteration converges in a handful of steps for any
//! answer pattern.

use crate::domain::CalibrationSet;
use crate::math::sigmoid;

/// Iteration cap for the Newton solve.
const MAX_ITERATIONS: usize = 40;

/// Early-exit threshold on the Newton step size.
const STEP_TOL: f64 = 1e-8;

/// Estimate the latent trait for one answer vector.
///
/// Deterministic and side-effect-free. An empty answer vector yields the
/// population-average trait `0.0`. If the slices disagree in length, only the
/// first `n` aligned `(answer, difficulty, discrimination)` triples are used;
/// callers should not normally produce mismatched lengths.
pub fn estimate_theta(answers: &[bool], difficulty: &[f64], discrimination: &[f64]) -> f64 {
    let n = answers
        .len()
        .min(difficulty.len())
        .min(discrimination.len());
    if n == 0 {
        return 0.0;
    }

    let mut theta = 0.0;
    for _ in 0..MAX_ITERATIONS {
        let mut grad = -theta;
        let mut hess = -1.0;

        for i in 0..n {
            let a = discrimination[i];
            let b = difficulty[i];
            let p = sigmoid(a * (theta - b));
            let y = if answers[i] { 1.0 } else { 0.0 };
            grad += a * (y - p);
            hess -= a * a * p * (1.0 - p);
        }

        let step = grad / hess;
        theta -= step;
        if step.abs() < STEP_TOL {
            break;
        }
    }

    theta
}

/// Convenience wrapper taking parameters from a loaded calibration.
pub fn estimate_theta_for(calibration: &CalibrationSet, answers: &[bool]) -> f64 {
    estimate_theta(answers, &calibration.difficulty, &calibration.discrimination)
}
