//! Formatted terminal output for scores, income ranks, and cohort summaries.

use crate::domain::{CalibrationSet, QuestionItem, ScoreResult};
use crate::income::IncomeRank;
use crate::report::ScoreDistribution;

/// Format the result of scoring one answer vector.
pub fn format_score_summary(
    result: &ScoreResult,
    n_questions: usize,
    calibration: &CalibrationSet,
) -> String {
    let mut out = String::new();

    out.push_str("=== worldrank - Global Rank ===\n");
    out.push_str(&format!("Questions answered: {n_questions}\n"));
    out.push_str(&format!("Calibration: {}", calibration.version));
    if let Some(date) = calibration.generated_at {
        out.push_str(&format!(" (generated {date})"));
    }
    out.push('\n');
    if result.used_fallback {
        out.push_str("Note: empirical calibration unavailable; scored on base-rate parameters.\n");
    }

    out.push_str("\nResult:\n");
    out.push_str(&format!("- trait estimate: {:+.4}\n", result.theta));
    out.push_str(&format!("- population percentile: {:.1}\n", result.percentile));
    out.push_str(&format!(
        "- top {:.1}% of the world ({})\n",
        result.display_score,
        result.tier.display_name()
    ));

    out
}

/// Format one income rank query.
pub fn format_income_summary(rank: &IncomeRank) -> String {
    let mut out = String::new();

    out.push_str("=== worldrank - Income Rank ===\n");
    out.push_str(&format!(
        "Income: ${:.0}/year ({})\n",
        rank.income_usd,
        rank.basis.display_name()
    ));
    out.push_str(&format!("- population percentile: {:.1}\n", rank.percentile));
    out.push_str(&format!("- top {:.1}% of earners worldwide\n", rank.top_percent));

    out
}

/// Format the distribution summary of a simulated cohort.
pub fn format_simulation_summary(dist: &ScoreDistribution, seed: u64) -> String {
    let mut out = String::new();

    out.push_str("=== worldrank - Simulated Cohort ===\n");
    out.push_str(&format!("Respondents: n={} | seed={seed}\n", dist.count));
    if dist.used_fallback {
        out.push_str("Note: scored on base-rate fallback parameters.\n");
    }

    out.push_str(&format!(
        "Display score: mean={:.2} | p10={:.2} | median={:.2} | p90={:.2}\n",
        dist.mean_display, dist.p10, dist.median, dist.p90
    ));

    out.push_str("\nTier breakdown:\n");
    for (tier, count) in &dist.tier_counts {
        let share = 100.0 * *count as f64 / dist.count as f64;
        out.push_str(&format!(
            "  {:<12} {count:>7} ({share:.1}%)\n",
            tier.display_name()
        ));
    }

    out
}

/// Format the active question set, one prompt per line.
pub fn format_question_list(questions: &[QuestionItem]) -> String {
    let mut out = String::new();

    out.push_str("=== worldrank - Question Set ===\n");
    for (i, q) in questions.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. [{}] {} (base rate {:.0}%)\n",
            i + 1,
            q.category,
            q.id,
            q.base_rate * 100.0
        ));
    }

    out
}
