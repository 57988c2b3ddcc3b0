//! Item calibration store.
//!
//! Responsibilities:
//!
//! - define the schema of the calibration artifact produced by the offline
//!   fitting pipeline
//! - validate an artifact against the deployed question set
//! - derive analytic fallback parameters from base rates when the artifact is
//!   absent, mismatched, or malformed
//!
//! Validation failure is silent-recoverable by design: scoring must always
//! produce a plausible result, so a bad artifact yields fallback parameters
//! instead of an error. The `CalibrationSet::source` flag records which path
//! was taken.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{CalibrationSet, CalibrationSource, QuantileTable, QuestionItem};
use crate::math::{clamp, logit};

/// Version label attached to analytically derived parameter sets.
const FALLBACK_VERSION: &str = "base-rate-analytic";

/// Discrimination bounds for the analytic fallback.
const FALLBACK_DISCRIMINATION_MIN: f64 = 0.75;
const FALLBACK_DISCRIMINATION_MAX: f64 = 2.25;

/// The calibration artifact as serialized by the offline fitting pipeline.
///
/// Field names follow the artifact's native camelCase schema. `seed` and
/// `populationSize` are provenance metadata from the fitting simulation; the
/// engine carries them through for reporting but never interprets them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalibrationArtifact {
    pub version: String,
    #[serde(default)]
    pub generated_at: Option<NaiveDate>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub population_size: Option<u64>,
    pub quantile_step: f64,
    pub question_ids: Vec<String>,
    pub difficulties: Vec<f64>,
    pub discriminations: Vec<f64>,
    pub theta_quantiles: Vec<f64>,
}

/// Build the active calibration for a question set.
///
/// Pure function of its inputs; the caller constructs the result once at
/// startup and shares it read-only. A missing or invalid artifact yields the
/// base-rate fallback, never an error.
pub fn load_calibration(
    questions: &[QuestionItem],
    artifact: Option<&CalibrationArtifact>,
) -> CalibrationSet {
    let Some(artifact) = artifact else {
        return derive_fallback_calibration(questions);
    };

    if validate_artifact(questions, artifact).is_err() {
        return derive_fallback_calibration(questions);
    }

    CalibrationSet {
        version: artifact.version.clone(),
        generated_at: artifact.generated_at,
        question_ids: artifact.question_ids.clone(),
        difficulty: artifact.difficulties.clone(),
        discrimination: artifact.discriminations.clone(),
        quantiles: Some(QuantileTable {
            step: artifact.quantile_step,
            thetas: artifact.theta_quantiles.clone(),
        }),
        source: CalibrationSource::Empirical,
    }
}

/// Check an artifact against the deployed question set.
///
/// Returns the first violation found, for diagnostics and tests. Callers that
/// only care about accept/reject use `load_calibration`.
pub fn validate_artifact(
    questions: &[QuestionItem],
    artifact: &CalibrationArtifact,
) -> Result<(), String> {
    let n = questions.len();
    if artifact.question_ids.len() != n {
        return Err(format!(
            "question id count {} != deployed set size {n}",
            artifact.question_ids.len()
        ));
    }
    if artifact.difficulties.len() != n || artifact.discriminations.len() != n {
        return Err(format!(
            "parameter arrays ({}, {}) not aligned with deployed set size {n}",
            artifact.difficulties.len(),
            artifact.discriminations.len()
        ));
    }
    for (i, (q, id)) in questions.iter().zip(&artifact.question_ids).enumerate() {
        if q.id != *id {
            return Err(format!("question id mismatch at index {i}: '{}' != '{id}'", q.id));
        }
    }

    for (i, &b) in artifact.difficulties.iter().enumerate() {
        if !b.is_finite() {
            return Err(format!("non-finite difficulty at index {i}"));
        }
    }
    for (i, &a) in artifact.discriminations.iter().enumerate() {
        if !(a.is_finite() && a > 0.0) {
            return Err(format!("non-positive discrimination at index {i}"));
        }
    }

    if artifact.theta_quantiles.len() < 2 {
        return Err(format!(
            "quantile table too short: {} entries",
            artifact.theta_quantiles.len()
        ));
    }
    if !(artifact.quantile_step.is_finite() && artifact.quantile_step > 0.0) {
        return Err(format!("invalid quantile step {}", artifact.quantile_step));
    }
    for (i, w) in artifact.theta_quantiles.windows(2).enumerate() {
        if !(w[0].is_finite() && w[1].is_finite()) {
            return Err(format!("non-finite quantile near index {i}"));
        }
        if w[1] < w[0] {
            return Err(format!("quantiles decrease at index {i}"));
        }
    }

    Ok(())
}

/// Derive per-item 2PL parameters from base rates alone.
///
/// Discrimination grows with how far the base rate sits from 50/50 (clamped to
/// [0.75, 2.25]); difficulty is then solved so the response probability at the
/// population-average trait (θ = 0) reproduces the base rate:
/// `σ(a · (0 - b)) = p  ⇒  b = -logit(p) / a`.
///
/// The result carries no quantile table, so percentile mapping takes the
/// parametric normal-CDF path.
pub fn derive_fallback_calibration(questions: &[QuestionItem]) -> CalibrationSet {
    let mut question_ids = Vec::with_capacity(questions.len());
    let mut difficulty = Vec::with_capacity(questions.len());
    let mut discrimination = Vec::with_capacity(questions.len());

    for q in questions {
        let lo = logit(q.base_rate);
        let a = clamp(
            0.75 + 0.5 * lo.abs(),
            FALLBACK_DISCRIMINATION_MIN,
            FALLBACK_DISCRIMINATION_MAX,
        );
        let b = -lo / a;

        question_ids.push(q.id.clone());
        discrimination.push(a);
        difficulty.push(b);
    }

    CalibrationSet {
        version: FALLBACK_VERSION.to_string(),
        generated_at: None,
        question_ids,
        difficulty,
        discrimination,
        quantiles: None,
        source: CalibrationSource::BaseRateFallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::sigmoid;

    fn questions(base_rates: &[f64]) -> Vec<QuestionItem> {
        base_rates
            .iter()
            .enumerate()
            .map(|(i, &p)| QuestionItem {
                id: format!("Q{i}"),
                base_rate: p,
                category: "test".to_string(),
            })
            .collect()
    }

    fn matching_artifact(questions: &[QuestionItem]) -> CalibrationArtifact {
        let fallback = derive_fallback_calibration(questions);
        CalibrationArtifact {
            version: "v4-2pl-empirical-cdf".to_string(),
            generated_at: None,
            seed: Some(4242),
            population_size: Some(200_000),
            quantile_step: 1.0,
            question_ids: fallback.question_ids,
            difficulties: fallback.difficulty,
            discriminations: fallback.discrimination,
            theta_quantiles: (0..=100).map(|i| -3.0 + i as f64 * 0.06).collect(),
        }
    }

    #[test]
    fn valid_artifact_is_accepted() {
        let qs = questions(&[0.9, 0.5, 0.1]);
        let artifact = matching_artifact(&qs);
        let cal = load_calibration(&qs, Some(&artifact));

        assert_eq!(cal.source, CalibrationSource::Empirical);
        assert!(!cal.is_fallback());
        assert_eq!(cal.version, "v4-2pl-empirical-cdf");
        assert_eq!(cal.len(), 3);
        let q = cal.quantiles.as_ref().unwrap();
        assert_eq!(q.thetas.len(), 101);
        assert!((q.step - 1.0).abs() < 1e-12);
    }

    #[test]
    fn missing_artifact_engages_fallback() {
        let qs = questions(&[0.3, 0.7]);
        let cal = load_calibration(&qs, None);
        assert!(cal.is_fallback());
        assert!(cal.quantiles.is_none());
        assert_eq!(cal.len(), 2);
    }

    #[test]
    fn mismatched_ids_engage_fallback() {
        let qs = questions(&[0.9, 0.5, 0.1]);
        let mut artifact = matching_artifact(&qs);
        artifact.question_ids[1] = "Q-renamed".to_string();

        assert!(validate_artifact(&qs, &artifact).is_err());
        let cal = load_calibration(&qs, Some(&artifact));
        assert!(cal.is_fallback());
        assert!(cal.quantiles.is_none());
    }

    #[test]
    fn length_mismatch_engages_fallback() {
        let qs = questions(&[0.9, 0.5, 0.1]);
        let mut artifact = matching_artifact(&qs);
        artifact.difficulties.pop();

        let cal = load_calibration(&qs, Some(&artifact));
        assert!(cal.is_fallback());
    }

    #[test]
    fn short_quantile_table_engages_fallback() {
        let qs = questions(&[0.5]);
        let mut artifact = matching_artifact(&qs);
        artifact.theta_quantiles = vec![0.0];

        let cal = load_calibration(&qs, Some(&artifact));
        assert!(cal.is_fallback());
    }

    #[test]
    fn decreasing_quantiles_engage_fallback() {
        let qs = questions(&[0.5]);
        let mut artifact = matching_artifact(&qs);
        artifact.theta_quantiles[40] = artifact.theta_quantiles[39] - 0.5;

        let cal = load_calibration(&qs, Some(&artifact));
        assert!(cal.is_fallback());
    }

    #[test]
    fn non_positive_discrimination_engages_fallback() {
        let qs = questions(&[0.9, 0.5]);
        let mut artifact = matching_artifact(&qs);
        artifact.discriminations[0] = 0.0;

        let cal = load_calibration(&qs, Some(&artifact));
        assert!(cal.is_fallback());
    }

    #[test]
    fn fallback_discrimination_stays_in_bounds() {
        let qs = questions(&[0.001, 0.05, 0.5, 0.95, 0.999]);
        let cal = derive_fallback_calibration(&qs);
        for &a in &cal.discrimination {
            assert!((0.75..=2.25).contains(&a), "discrimination {a} out of bounds");
        }
        // Neutral base rate gets the minimum; extreme rates saturate the cap.
        assert!((cal.discrimination[2] - 0.75).abs() < 1e-12);
        assert!((cal.discrimination[0] - 2.25).abs() < 1e-9);
    }

    #[test]
    fn fallback_reproduces_base_rate_at_average_trait() {
        let qs = questions(&[0.1, 0.35, 0.5, 0.72, 0.9]);
        let cal = derive_fallback_calibration(&qs);
        for (i, q) in qs.iter().enumerate() {
            let p0 = sigmoid(cal.discrimination[i] * (0.0 - cal.difficulty[i]));
            assert!(
                (p0 - q.base_rate).abs() < 1e-9,
                "P(yes | θ=0) should equal base rate {}, got {p0}",
                q.base_rate
            );
        }
    }

    #[test]
    fn artifact_json_round_trip() {
        let qs = questions(&[0.9, 0.5, 0.1]);
        let artifact = matching_artifact(&qs);
        let json = serde_json::to_string(&artifact).unwrap();
        let back: CalibrationArtifact = serde_json::from_str(&json).unwrap();
        assert!(validate_artifact(&qs, &back).is_ok());
        assert_eq!(back.question_ids, artifact.question_ids);
    }

    #[test]
    fn artifact_schema_is_camel_case() {
        let qs = questions(&[0.5]);
        let artifact = matching_artifact(&qs);
        let json = serde_json::to_string(&artifact).unwrap();
        assert!(json.contains("\"quantileStep\""));
        assert!(json.contains("\"thetaQuantiles\""));
        assert!(json.contains("\"questionIds\""));
    }
}
