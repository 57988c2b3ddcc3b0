//! Income threshold tables: compiled-in world distribution defaults plus a
//! JSON override loaded from disk.
//!
//! The default knots approximate the global distribution of annual personal
//! income in USD, one table per valuation basis. Production deployments
//! replace them with the output of the external data-ingestion pipeline via
//! `read_income_tables_json`.

use std::fs::File;
use std::path::Path;

use crate::domain::{Basis, IncomeBracket, IncomeTables, IncomeThresholdTable};
use crate::error::AppError;
use crate::income::validate_table;

/// `(percentile, annual income USD)` knots, PPP-adjusted.
const PPP_KNOTS: &[(f64, f64)] = &[
    (1.0, 150.0),
    (5.0, 400.0),
    (10.0, 700.0),
    (20.0, 1_200.0),
    (30.0, 1_900.0),
    (40.0, 2_800.0),
    (50.0, 4_000.0),
    (60.0, 5_800.0),
    (70.0, 8_500.0),
    (80.0, 13_000.0),
    (90.0, 22_000.0),
    (95.0, 35_000.0),
    (99.0, 80_000.0),
    (99.9, 250_000.0),
];

/// `(percentile, annual income USD)` knots at market exchange rates.
const MARKET_KNOTS: &[(f64, f64)] = &[
    (1.0, 80.0),
    (5.0, 200.0),
    (10.0, 350.0),
    (20.0, 700.0),
    (30.0, 1_200.0),
    (40.0, 1_900.0),
    (50.0, 2_900.0),
    (60.0, 4_500.0),
    (70.0, 7_000.0),
    (80.0, 11_500.0),
    (90.0, 21_000.0),
    (95.0, 36_000.0),
    (99.0, 95_000.0),
    (99.9, 320_000.0),
];

fn table_from_knots(basis: Basis, knots: &[(f64, f64)]) -> IncomeThresholdTable {
    IncomeThresholdTable {
        basis,
        brackets: knots
            .iter()
            .map(|&(percentile, income_usd)| IncomeBracket { percentile, income_usd })
            .collect(),
    }
}

/// The compiled-in default tables for both bases.
pub fn default_income_tables() -> IncomeTables {
    IncomeTables {
        ppp: table_from_knots(Basis::Ppp, PPP_KNOTS),
        market: table_from_knots(Basis::Market, MARKET_KNOTS),
    }
}

/// Read and validate both tables from a JSON file.
pub fn read_income_tables_json(path: &Path) -> Result<IncomeTables, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(2, format!("Failed to open income tables '{}': {e}", path.display()))
    })?;
    let tables: IncomeTables = serde_json::from_reader(file)
        .map_err(|e| AppError::new(2, format!("Invalid income tables JSON: {e}")))?;

    validate_table(&tables.ppp)?;
    validate_table(&tables.market)?;
    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tables_pass_validation() {
        let tables = default_income_tables();
        assert!(validate_table(&tables.ppp).is_ok());
        assert!(validate_table(&tables.market).is_ok());
    }

    #[test]
    fn basis_selector_returns_the_matching_table() {
        let tables = default_income_tables();
        assert_eq!(tables.table(Basis::Ppp).basis, Basis::Ppp);
        assert_eq!(tables.table(Basis::Market).basis, Basis::Market);
    }

    #[test]
    fn tables_json_round_trip() {
        let tables = default_income_tables();
        let json = serde_json::to_string(&tables).unwrap();
        let back: IncomeTables = serde_json::from_str(&json).unwrap();
        assert!(validate_table(&back.ppp).is_ok());
        assert_eq!(back.ppp.brackets.len(), tables.ppp.brackets.len());
    }
}
