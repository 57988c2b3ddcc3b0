//! Command-line parsing for the global-rank scoring engine.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the scoring/math code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::Basis;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "worldrank", version, about = "Global percentile ranking engine")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score a yes/no answer vector against the active question set.
    Score(ScoreArgs),
    /// Rank an annual income against the world income distribution.
    Income(IncomeArgs),
    /// Simulate a respondent cohort and summarize its score distribution.
    Simulate(SimulateArgs),
    /// Print the active question set.
    Questions,
}

/// Options for scoring one respondent.
#[derive(Debug, Parser, Clone)]
pub struct ScoreArgs {
    /// Comma-separated answers aligned with the question set (y/n, 1/0, true/false).
    #[arg(short = 'a', long)]
    pub answers: String,

    /// Calibration artifact JSON. Falls back to $WORLD_RANK_CALIBRATION, then
    /// to analytic base-rate parameters.
    #[arg(long)]
    pub calibration: Option<PathBuf>,
}

/// Options for ranking an income figure.
#[derive(Debug, Parser, Clone)]
pub struct IncomeArgs {
    /// Annual income in USD.
    #[arg(short = 'm', long)]
    pub amount: f64,

    /// Valuation basis for cross-country comparison.
    #[arg(short = 'b', long, value_enum, default_value_t = Basis::Ppp)]
    pub basis: Basis,

    /// Income tables JSON. Falls back to $WORLD_RANK_INCOME_TABLES, then to
    /// the compiled-in world distribution.
    #[arg(long)]
    pub income_tables: Option<PathBuf>,
}

/// Options for cohort simulation.
#[derive(Debug, Parser, Clone)]
pub struct SimulateArgs {
    /// Number of simulated respondents.
    #[arg(short = 'n', long, default_value_t = 10_000)]
    pub count: usize,

    /// Random seed for cohort generation.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Calibration artifact JSON (same resolution as `score`).
    #[arg(long)]
    pub calibration: Option<PathBuf>,
}
