//! Reporting utilities: cohort score distributions and formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the scoring code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::{ScoreResult, Tier};

pub mod format;

pub use format::*;

/// Summary of display scores across a scored cohort.
#[derive(Debug, Clone)]
pub struct ScoreDistribution {
    pub count: usize,
    pub mean_display: f64,
    /// 10th / 50th / 90th percentiles of the display score.
    pub p10: f64,
    pub median: f64,
    pub p90: f64,
    /// Respondent count per tier, most exceptional first.
    pub tier_counts: Vec<(Tier, usize)>,
    /// True if any result in the cohort was scored on fallback calibration.
    pub used_fallback: bool,
}

/// Summarize a scored cohort. Returns `None` for an empty input.
pub fn summarize_scores(results: &[ScoreResult]) -> Option<ScoreDistribution> {
    if results.is_empty() {
        return None;
    }

    let mut display: Vec<f64> = results.iter().map(|r| r.display_score).collect();
    display.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mean_display = display.iter().sum::<f64>() / display.len() as f64;

    let tier_counts = Tier::ALL
        .iter()
        .map(|&tier| (tier, results.iter().filter(|r| r.tier == tier).count()))
        .collect();

    Some(ScoreDistribution {
        count: results.len(),
        mean_display,
        p10: sorted_percentile(&display, 10.0),
        median: sorted_percentile(&display, 50.0),
        p90: sorted_percentile(&display, 90.0),
        tier_counts,
        used_fallback: results.iter().any(|r| r.used_fallback),
    })
}

/// Interpolated percentile of an already-sorted slice.
fn sorted_percentile(sorted: &[f64], percentile: f64) -> f64 {
    let idx = (percentile / 100.0) * (sorted.len() - 1) as f64;
    let lo = idx.floor() as usize;
    let hi = idx.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let frac = idx - lo as f64;
        sorted[lo] * (1.0 - frac) + sorted[hi] * frac
    }
}
