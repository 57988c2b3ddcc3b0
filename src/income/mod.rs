//! Income-to-percentile mapping over a sorted threshold table.
//!
//! Structurally this is the inverse of the trait quantile lookup: we search by
//! *value* (income) over *non-uniformly spaced* percentile knots, so it gets
//! its own routine rather than sharing the uniform-step interpolation.
//!
//! Incomes outside the table clamp to the boundary percentile the table
//! defines — the mapper never extrapolates beyond the knots and never errors.

use crate::domain::{Basis, IncomeThresholdTable};
use crate::error::AppError;

/// Percentile/top-percent pair for one income query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncomeRank {
    pub basis: Basis,
    pub income_usd: f64,
    pub percentile: f64,
    pub top_percent: f64,
}

/// Check the table invariants: at least two brackets, percentiles strictly
/// increasing within [0, 100], incomes non-decreasing and finite.
///
/// Threshold data comes from an external ingestion pipeline; a table that
/// fails these checks would make interpolation undefined, so loaders reject it
/// up front instead of scoring against it.
pub fn validate_table(table: &IncomeThresholdTable) -> Result<(), AppError> {
    let name = table.basis.display_name();
    if table.brackets.len() < 2 {
        return Err(AppError::new(
            3,
            format!("{name} income table needs at least 2 brackets, has {}", table.brackets.len()),
        ));
    }

    for (i, b) in table.brackets.iter().enumerate() {
        if !(b.percentile.is_finite() && (0.0..=100.0).contains(&b.percentile)) {
            return Err(AppError::new(
                3,
                format!("{name} income table: percentile out of range at row {i}"),
            ));
        }
        if !(b.income_usd.is_finite() && b.income_usd >= 0.0) {
            return Err(AppError::new(
                3,
                format!("{name} income table: invalid income at row {i}"),
            ));
        }
    }

    for (i, w) in table.brackets.windows(2).enumerate() {
        if w[1].percentile <= w[0].percentile {
            return Err(AppError::new(
                3,
                format!("{name} income table: percentiles not strictly increasing at row {}", i + 1),
            ));
        }
        if w[1].income_usd < w[0].income_usd {
            return Err(AppError::new(
                3,
                format!("{name} income table: incomes decrease at row {}", i + 1),
            ));
        }
    }

    Ok(())
}

/// Map an annual income to a population percentile.
///
/// Binary-searches for the bracketing rows with
/// `row[i].income <= income <= row[i+1].income` and interpolates the
/// percentile linearly by income position. Below the table floor → the floor
/// percentile; at or above the ceiling income → the ceiling percentile.
pub fn percentile_from_income(income: f64, table: &IncomeThresholdTable) -> f64 {
    let brackets = &table.brackets;
    let Some(first) = brackets.first() else {
        return 50.0;
    };
    let last = brackets[brackets.len() - 1];

    if income.is_nan() {
        return first.percentile;
    }
    if income <= first.income_usd {
        return first.percentile;
    }
    if income >= last.income_usd {
        return last.percentile;
    }

    // Rightmost row with income at or below the query.
    let mut lo = 0usize;
    let mut hi = brackets.len() - 1;
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if brackets[mid].income_usd <= income {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    // The search maintains lower.income <= income < upper.income; a collapsed
    // bracket can only appear in an unvalidated table, so pin it to its lower
    // percentile instead of dividing by zero.
    let lower = brackets[lo];
    let upper = brackets[hi];
    let span = upper.income_usd - lower.income_usd;
    let frac = if span > 0.0 {
        (income - lower.income_usd) / span
    } else {
        0.0
    };

    (lower.percentile + frac * (upper.percentile - lower.percentile)).clamp(0.0, 100.0)
}

/// "Top X% of earners" view of `percentile_from_income`.
pub fn top_percent_from_income(income: f64, table: &IncomeThresholdTable) -> f64 {
    100.0 - percentile_from_income(income, table)
}

/// Compute both views for one query.
pub fn rank_income(income: f64, table: &IncomeThresholdTable) -> IncomeRank {
    let percentile = percentile_from_income(income, table);
    IncomeRank {
        basis: table.basis,
        income_usd: income,
        percentile,
        top_percent: 100.0 - percentile,
    }
}
