//! Score transform and tier classification.
//!
//! The percentile measures how much of the population sits *below* a trait
//! value, so the user-facing "top X%" figure is its complement. A small
//! quadratic softening then nudges the worst (highest) raw scores toward more
//! encouraging values — a deliberate presentation choice, applied uniformly.

use crate::domain::{ScorePair, Tier};

/// Quadratic softening constant for the display score.
///
/// `display = raw - K · (raw/100)²`, so the adjustment tops out at `K` points
/// for `raw = 100`. The derivative is `1 - 2·K·raw/100² >= 1 - K/50`, which
/// stays positive for any `K <= 5`: the transform is strictly increasing over
/// [0, 100] and never reorders two respondents.
const DISPLAY_SOFTEN_K: f64 = 4.0;

/// Ascending display-score breakpoints and the tier below each.
///
/// Half-open bands: a score belongs to the first breakpoint it is strictly
/// below; anything at or above the last breakpoint is `Typical`.
const TIER_BREAKPOINTS: [(f64, Tier); 4] = [
    (1.0, Tier::Exceptional),
    (5.0, Tier::Rare),
    (20.0, Tier::Notable),
    (50.0, Tier::Uncommon),
];

/// Convert a population percentile into raw and display "top X%" scores.
pub fn score_from_percentile(percentile: f64) -> ScorePair {
    let raw_score = (100.0 - percentile).clamp(0.0, 100.0);
    let softened = raw_score - DISPLAY_SOFTEN_K * (raw_score / 100.0).powi(2);
    ScorePair {
        raw_score,
        display_score: softened.clamp(0.0, 100.0),
    }
}

/// Classify a score into its qualitative tier.
///
/// Total over all finite inputs: scores below every breakpoint fall in the
/// first band, scores at or above the last fall in `Typical`.
pub fn tier_from_score(score: f64) -> Tier {
    for (bound, tier) in TIER_BREAKPOINTS {
        if score < bound {
            return tier;
        }
    }
    Tier::Typical
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_score_inverts_percentile() {
        assert_eq!(score_from_percentile(0.0).raw_score, 100.0);
        assert_eq!(score_from_percentile(100.0).raw_score, 0.0);
        assert_eq!(score_from_percentile(99.0).raw_score, 1.0);
        // Out-of-range percentiles clamp instead of extrapolating.
        assert_eq!(score_from_percentile(-5.0).raw_score, 100.0);
        assert_eq!(score_from_percentile(140.0).raw_score, 0.0);
    }

    #[test]
    fn display_softening_compresses_high_scores_only_slightly() {
        let best = score_from_percentile(100.0);
        assert_eq!(best.display_score, 0.0);

        let worst = score_from_percentile(0.0);
        assert!((worst.display_score - (100.0 - DISPLAY_SOFTEN_K)).abs() < 1e-12);

        let mid = score_from_percentile(50.0);
        assert!((mid.display_score - (50.0 - DISPLAY_SOFTEN_K * 0.25)).abs() < 1e-12);
    }

    #[test]
    fn display_transform_is_strictly_monotone() {
        // Dense grid over the whole domain; every step must strictly increase.
        let mut prev = score_from_percentile(100.0).display_score;
        for i in (0..=10_000).rev() {
            let percentile = i as f64 / 100.0;
            let pair = score_from_percentile(percentile);
            if i < 10_000 {
                assert!(
                    pair.display_score > prev,
                    "display score failed to increase at percentile {percentile}"
                );
            }
            assert!((0.0..=100.0).contains(&pair.display_score));
            prev = pair.display_score;
        }
    }

    #[test]
    fn softening_constant_keeps_derivative_positive() {
        // 1 - K/50 is the derivative's minimum over [0, 100]; it must stay
        // positive or the transform could invert a ranking.
        assert!(DISPLAY_SOFTEN_K <= 5.0);
        assert!(1.0 - DISPLAY_SOFTEN_K / 50.0 > 0.0);
    }

    #[test]
    fn tier_bands_are_half_open() {
        assert_eq!(tier_from_score(0.0), Tier::Exceptional);
        assert_eq!(tier_from_score(0.999), Tier::Exceptional);
        assert_eq!(tier_from_score(1.0), Tier::Rare);
        assert_eq!(tier_from_score(4.999), Tier::Rare);
        assert_eq!(tier_from_score(5.0), Tier::Notable);
        assert_eq!(tier_from_score(19.999), Tier::Notable);
        assert_eq!(tier_from_score(20.0), Tier::Uncommon);
        assert_eq!(tier_from_score(49.999), Tier::Uncommon);
        assert_eq!(tier_from_score(50.0), Tier::Typical);
        assert_eq!(tier_from_score(100.0), Tier::Typical);
    }

    #[test]
    fn every_score_gets_exactly_one_tier() {
        for i in 0..=1000 {
            let score = i as f64 / 10.0;
            // tier_from_score is total; this just pins the full domain.
            let _ = tier_from_score(score);
        }
    }
}
