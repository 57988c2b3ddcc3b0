//! Logistic-family primitives for the 2PL response model.
//!
//! The item response function is `P(yes | θ) = σ(a · (θ - b))`, so everything
//! downstream (estimation, fallback parameter derivation) reduces to stable
//! evaluations of the sigmoid and its inverse.
//!
//! Numerical notes:
//! - `1 / (1 + e^{-x})` overflows `e^{-x}` for very negative `x`. We branch on
//!   the sign and evaluate the algebraically equivalent form whose exponent is
//!   always non-positive.
//! - `logit(p)` is unbounded as `p → 0` or `p → 1`; inputs are clamped away
//!   from the endpoints so fallback parameters stay finite.

/// Clamp bound keeping `logit` inputs strictly inside (0, 1).
const P_EPS: f64 = 1e-9;

/// Standard logistic function, stable for large `|x|`.
pub fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        let e = (-x).exp();
        1.0 / (1.0 + e)
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Log-odds `ln(p / (1 - p))`, with `p` clamped into `(0, 1)`.
pub fn logit(p: f64) -> f64 {
    let p = p.clamp(P_EPS, 1.0 - P_EPS);
    (p / (1.0 - p)).ln()
}

/// Clamp a value into `[lo, hi]`.
pub fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    value.clamp(lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_matches_reference_points() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-15);
        assert!((sigmoid(2.0) - 0.880_797_077_977_882_3).abs() < 1e-12);
        assert!((sigmoid(-2.0) - 0.119_202_922_022_117_73).abs() < 1e-12);
    }

    #[test]
    fn sigmoid_stable_at_extremes() {
        assert!((sigmoid(750.0) - 1.0).abs() < 1e-15);
        assert!(sigmoid(-750.0) >= 0.0);
        assert!(sigmoid(-750.0) < 1e-300);
        assert!(sigmoid(f64::MAX).is_finite());
        assert!(sigmoid(f64::MIN).is_finite());
    }

    #[test]
    fn logit_inverts_sigmoid() {
        for &x in &[-4.0, -1.0, 0.0, 0.5, 3.0] {
            let p = sigmoid(x);
            assert!(
                (logit(p) - x).abs() < 1e-9,
                "logit(sigmoid({x})) should round-trip, got {}",
                logit(p)
            );
        }
    }

    #[test]
    fn logit_finite_at_clamped_endpoints() {
        assert!(logit(0.0).is_finite());
        assert!(logit(1.0).is_finite());
        assert!(logit(0.0) < 0.0);
        assert!(logit(1.0) > 0.0);
    }
}
