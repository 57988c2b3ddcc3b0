//! Shared scoring pipeline used by every front-end.
//!
//! `ScoreEngine` is the explicitly constructed, immutable value object holding
//! everything scoring needs: the question set, the active calibration, and the
//! income tables. It is built once at startup and shared by reference; under
//! concurrent serving nothing mutates it, so no locking is required.

use rayon::prelude::*;

use crate::calibration::{load_calibration, CalibrationArtifact};
use crate::domain::{Basis, CalibrationSet, IncomeTables, QuestionItem, ScoreResult};
use crate::error::AppError;
use crate::estimate::estimate_theta_for;
use crate::income::{rank_income, validate_table, IncomeRank};
use crate::percentile::percentile_from_theta;
use crate::score::{score_from_percentile, tier_from_score};

/// Immutable scoring state for the process lifetime.
#[derive(Debug, Clone)]
pub struct ScoreEngine {
    questions: Vec<QuestionItem>,
    calibration: CalibrationSet,
    income: IncomeTables,
}

impl ScoreEngine {
    /// Build an engine from a question set, an optional calibration artifact,
    /// and income tables.
    ///
    /// A missing or mismatched artifact is not an error — scoring falls back
    /// to base-rate parameters. Malformed question sets and income tables are
    /// errors: they come from configuration, not from respondents.
    pub fn new(
        questions: Vec<QuestionItem>,
        artifact: Option<&CalibrationArtifact>,
        income: IncomeTables,
    ) -> Result<Self, AppError> {
        if questions.is_empty() {
            return Err(AppError::new(3, "Question set is empty."));
        }
        for q in &questions {
            if !(q.base_rate.is_finite() && q.base_rate > 0.0 && q.base_rate < 1.0) {
                return Err(AppError::new(
                    3,
                    format!("Question '{}' has base rate {} outside (0, 1).", q.id, q.base_rate),
                ));
            }
        }
        validate_table(&income.ppp)?;
        validate_table(&income.market)?;

        let calibration = load_calibration(&questions, artifact);

        Ok(Self {
            questions,
            calibration,
            income,
        })
    }

    pub fn questions(&self) -> &[QuestionItem] {
        &self.questions
    }

    pub fn calibration(&self) -> &CalibrationSet {
        &self.calibration
    }

    /// Score one answer vector: trait estimate → percentile → display score
    /// and tier. Total function — any boolean vector produces a result.
    pub fn score(&self, answers: &[bool]) -> ScoreResult {
        let theta = estimate_theta_for(&self.calibration, answers);
        let percentile = percentile_from_theta(theta, &self.calibration);
        let pair = score_from_percentile(percentile);

        ScoreResult {
            theta,
            percentile,
            raw_score: pair.raw_score,
            display_score: pair.display_score,
            tier: tier_from_score(pair.display_score),
            used_fallback: self.calibration.is_fallback(),
        }
    }

    /// Score a whole cohort in parallel.
    ///
    /// Each answer vector is independent, so this is a plain data-parallel
    /// map; results keep the input order.
    pub fn score_batch(&self, cohort: &[Vec<bool>]) -> Vec<ScoreResult> {
        cohort.par_iter().map(|answers| self.score(answers)).collect()
    }

    /// Rank an annual income against the selected basis table.
    pub fn income_rank(&self, income_usd: f64, basis: Basis) -> IncomeRank {
        rank_income(income_usd, self.income.table(basis))
    }
}
