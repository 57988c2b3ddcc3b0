//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - resolves data sources (flags, environment, compiled-in defaults)
//! - builds the immutable `ScoreEngine`
//! - runs the requested pipeline and prints reports

use std::path::PathBuf;

use clap::Parser;

use crate::calibration::CalibrationArtifact;
use crate::cli::{Command, IncomeArgs, ScoreArgs, SimulateArgs};
use crate::data::{
    default_income_tables, default_question_set, read_calibration_json, read_income_tables_json,
    simulate_respondents,
};
use crate::domain::IncomeTables;
use crate::error::AppError;
use crate::income::rank_income;

pub mod pipeline;

use pipeline::ScoreEngine;

/// Entry point for the `worldrank` binary.
pub fn run() -> Result<(), AppError> {
    // Optional .env configuration (calibration/table paths).
    dotenvy::dotenv().ok();

    let cli = crate::cli::Cli::parse();
    match cli.command {
        Command::Score(args) => handle_score(args),
        Command::Income(args) => handle_income(args),
        Command::Simulate(args) => handle_simulate(args),
        Command::Questions => handle_questions(),
    }
}

fn handle_score(args: ScoreArgs) -> Result<(), AppError> {
    let questions = default_question_set();
    let artifact = load_artifact(args.calibration)?;
    let engine = ScoreEngine::new(questions, artifact.as_ref(), default_income_tables())?;

    let answers = parse_answers(&args.answers)?;
    if answers.len() != engine.questions().len() {
        return Err(AppError::new(
            2,
            format!(
                "Expected {} answers, got {}.",
                engine.questions().len(),
                answers.len()
            ),
        ));
    }

    let result = engine.score(&answers);
    println!(
        "{}",
        crate::report::format_score_summary(&result, answers.len(), engine.calibration())
    );
    Ok(())
}

fn handle_income(args: IncomeArgs) -> Result<(), AppError> {
    let tables = load_income_tables(args.income_tables)?;
    if !args.amount.is_finite() || args.amount < 0.0 {
        return Err(AppError::new(2, "Income must be a non-negative number."));
    }

    let rank = rank_income(args.amount, tables.table(args.basis));
    println!("{}", crate::report::format_income_summary(&rank));
    Ok(())
}

fn handle_simulate(args: SimulateArgs) -> Result<(), AppError> {
    let questions = default_question_set();
    let artifact = load_artifact(args.calibration)?;
    let engine = ScoreEngine::new(questions, artifact.as_ref(), default_income_tables())?;

    let cohort = simulate_respondents(engine.calibration(), args.count, args.seed)?;
    let answer_sets: Vec<Vec<bool>> = cohort.into_iter().map(|r| r.answers).collect();
    let results = engine.score_batch(&answer_sets);

    let dist = crate::report::summarize_scores(&results)
        .ok_or_else(|| AppError::new(4, "Empty simulation output."))?;
    println!("{}", crate::report::format_simulation_summary(&dist, args.seed));
    Ok(())
}

fn handle_questions() -> Result<(), AppError> {
    let questions = default_question_set();
    println!("{}", crate::report::format_question_list(&questions));
    Ok(())
}

/// Parse a comma-separated answer list (`y/n`, `yes/no`, `1/0`, `true/false`).
fn parse_answers(raw: &str) -> Result<Vec<bool>, AppError> {
    let mut answers = Vec::new();
    for (i, token) in raw.split(',').enumerate() {
        let token = token.trim().to_ascii_lowercase();
        let value = match token.as_str() {
            "y" | "yes" | "1" | "true" => true,
            "n" | "no" | "0" | "false" => false,
            _ => {
                return Err(AppError::new(
                    2,
                    format!("Unrecognized answer '{token}' at position {}.", i + 1),
                ));
            }
        };
        answers.push(value);
    }
    Ok(answers)
}

fn env_path(var: &str) -> Option<PathBuf> {
    std::env::var_os(var).map(PathBuf::from)
}

fn load_artifact(explicit: Option<PathBuf>) -> Result<Option<CalibrationArtifact>, AppError> {
    let path = explicit.or_else(|| env_path("WORLD_RANK_CALIBRATION"));
    path.map(|p| read_calibration_json(&p)).transpose()
}

fn load_income_tables(explicit: Option<PathBuf>) -> Result<IncomeTables, AppError> {
    match explicit.or_else(|| env_path("WORLD_RANK_INCOME_TABLES")) {
        Some(path) => read_income_tables_json(&path),
        None => Ok(default_income_tables()),
    }
}
