//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the deployed question set (`QuestionItem`)
//! - calibration value objects (`CalibrationSet`, `QuantileTable`)
//! - scoring outputs (`ScoreResult`, `ScorePair`, `Tier`)
//! - income threshold tables (`IncomeThresholdTable`, `Basis`)

pub mod types;

pub use types::*;
