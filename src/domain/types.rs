//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during scoring
//! - exported to JSON
//! - reloaded later for reporting or comparisons

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Income valuation basis for cross-country comparison.
///
/// The engine treats the two bases as two independent threshold tables and has
/// no notion of which one is "current"; callers pick per query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Basis {
    /// Purchasing-power-parity adjusted (cost-of-living comparable).
    Ppp,
    /// Nominal market exchange rates.
    Market,
}

impl Basis {
    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            Basis::Ppp => "PPP-adjusted",
            Basis::Market => "market-rate",
        }
    }
}

/// A single deployed question.
///
/// `id` doubles as the natural-language prompt and as the stable key used to
/// verify that a calibration artifact matches the deployed question set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionItem {
    pub id: String,
    /// Population probability of a "yes" answer, strictly inside (0, 1).
    pub base_rate: f64,
    /// Free-text grouping label; not interpreted by the engine.
    pub category: String,
}

/// Where the active item parameters came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalibrationSource {
    /// Parameters and quantile table from the offline fitting pipeline.
    Empirical,
    /// Parameters derived analytically from base rates alone.
    ///
    /// Engaged when the supplied calibration is absent, mismatched, or fails
    /// validation. Percentile mapping then uses the parametric normal-CDF path.
    BaseRateFallback,
}

/// Precomputed population quantiles of the estimated trait.
///
/// `thetas[i]` is the trait value at percentile `i * step`, so a table with
/// `step = 1.0` has 101 entries covering 0..100 and a table with `step = 0.1`
/// has 1001. Values are non-decreasing; the mapper interpolates between them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuantileTable {
    pub step: f64,
    pub thetas: Vec<f64>,
}

/// Item parameters plus the population quantile table, aligned index-for-index
/// with the active question list.
///
/// Constructed once at startup and shared read-only for the process lifetime.
/// Nothing mutates it at request time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalibrationSet {
    pub version: String,
    pub generated_at: Option<NaiveDate>,
    pub question_ids: Vec<String>,
    /// 2PL difficulty `b` per item.
    pub difficulty: Vec<f64>,
    /// 2PL discrimination `a` per item (> 0).
    pub discrimination: Vec<f64>,
    /// Empirical quantile table; `None` on the fallback path.
    pub quantiles: Option<QuantileTable>,
    pub source: CalibrationSource,
}

impl CalibrationSet {
    /// Number of calibrated items.
    pub fn len(&self) -> usize {
        self.question_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.question_ids.is_empty()
    }

    /// Diagnostic flag: true when scoring runs on analytically derived
    /// parameters instead of the empirical artifact.
    pub fn is_fallback(&self) -> bool {
        self.source == CalibrationSource::BaseRateFallback
    }
}

/// Qualitative band attached to a display score, purely for presentation.
///
/// Ordered from most exceptional to typical. Classification is by ascending
/// display-score breakpoints with half-open bounds (`score < breakpoint`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Exceptional,
    Rare,
    Notable,
    Uncommon,
    Typical,
}

impl Tier {
    /// All tiers, most exceptional first.
    pub const ALL: [Tier; 5] = [
        Tier::Exceptional,
        Tier::Rare,
        Tier::Notable,
        Tier::Uncommon,
        Tier::Typical,
    ];

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            Tier::Exceptional => "Exceptional",
            Tier::Rare => "Rare",
            Tier::Notable => "Notable",
            Tier::Uncommon => "Uncommon",
            Tier::Typical => "Typical",
        }
    }
}

/// Raw and display scores for one percentile (see `score::score_from_percentile`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScorePair {
    /// `100 - percentile`, i.e. "top X% of the population".
    pub raw_score: f64,
    /// Raw score after the monotone display softening.
    pub display_score: f64,
}

/// Full scoring output for one answer vector.
///
/// Derived and stateless: recomputed on demand, no identity beyond the call
/// that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Estimated latent trait (MAP under the standard-normal prior).
    pub theta: f64,
    /// Population percentile of the trait, in [0, 100].
    pub percentile: f64,
    /// "Top X%" before display adjustment, in [0, 100].
    pub raw_score: f64,
    /// "Top X%" as shown to the respondent, in [0, 100].
    pub display_score: f64,
    pub tier: Tier,
    /// True when fallback calibration was used (diagnostics only).
    pub used_fallback: bool,
}

/// One row of an income threshold table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IncomeBracket {
    /// Population percentile, strictly increasing down the table.
    pub percentile: f64,
    /// Annual income in USD at that percentile, non-decreasing.
    pub income_usd: f64,
}

/// Sorted percentile/income knots for one valuation basis.
///
/// Invariants (enforced by `income::validate_table` at load time):
/// percentiles strictly increasing within [0, 100], incomes non-decreasing,
/// at least two brackets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeThresholdTable {
    pub basis: Basis,
    pub brackets: Vec<IncomeBracket>,
}

/// The two income tables, loaded once and queried by basis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeTables {
    pub ppp: IncomeThresholdTable,
    pub market: IncomeThresholdTable,
}

impl IncomeTables {
    pub fn table(&self, basis: Basis) -> &IncomeThresholdTable {
        match basis {
            Basis::Ppp => &self.ppp,
            Basis::Market => &self.market,
        }
    }
}
