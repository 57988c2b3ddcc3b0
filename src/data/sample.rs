//! Synthetic respondent generation from calibrated item parameters.
//!
//! Used by the `simulate` command and by tests: draw a latent trait from the
//! standard-normal population prior, then answer each item with the 2PL
//! response probability. This runs the response model *forward* — it consumes
//! item parameters and never fits them.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::CalibrationSet;
use crate::error::AppError;
use crate::math::sigmoid;

/// One simulated respondent: the trait that generated the answers, plus the
/// answers themselves.
#[derive(Debug, Clone)]
pub struct SimulatedRespondent {
    pub theta_true: f64,
    pub answers: Vec<bool>,
}

/// Generate a deterministic cohort of simulated respondents.
///
/// The same `(calibration, count, seed)` triple always yields the same
/// cohort; no hidden randomness.
pub fn simulate_respondents(
    calibration: &CalibrationSet,
    count: usize,
    seed: u64,
) -> Result<Vec<SimulatedRespondent>, AppError> {
    if count == 0 {
        return Err(AppError::new(2, "Respondent count must be > 0."));
    }
    if calibration.is_empty() {
        return Err(AppError::new(3, "Cannot simulate against an empty calibration."));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| AppError::new(4, format!("Trait distribution error: {e}")))?;

    let n_items = calibration.len();
    let mut cohort = Vec::with_capacity(count);

    for _ in 0..count {
        let theta_true = normal.sample(&mut rng);
        let mut answers = Vec::with_capacity(n_items);
        for i in 0..n_items {
            let p = sigmoid(calibration.discrimination[i] * (theta_true - calibration.difficulty[i]));
            let roll: f64 = rng.r#gen();
            answers.push(roll < p);
        }
        cohort.push(SimulatedRespondent { theta_true, answers });
    }

    Ok(cohort)
}
