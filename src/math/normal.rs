//! Standard normal CDF via a rational erf approximation.
//!
//! The percentile mapper needs `Φ(θ)` only on the fallback path, where no
//! empirical quantile table is available. We use the Abramowitz–Stegun 7.1.26
//! polynomial, whose absolute error is below 1.5e-7 — far finer than the 0.1%
//! granularity of any percentile we report.

/// A&S 7.1.26 coefficients.
const A1: f64 = 0.254829592;
const A2: f64 = -0.284496736;
const A3: f64 = 1.421413741;
const A4: f64 = -1.453152027;
const A5: f64 = 1.061405429;
const P: f64 = 0.3275911;

/// Error function approximation (Abramowitz–Stegun 7.1.26).
///
/// Absolute error < 1.5e-7 over the whole real line.
pub fn erf(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + P * x);
    let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;
    let y = 1.0 - poly * (-x * x).exp();

    sign * y
}

/// Standard normal CDF: `Φ(x) = (1 + erf(x / √2)) / 2`.
pub fn std_normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / std::f64::consts::SQRT_2))
}
