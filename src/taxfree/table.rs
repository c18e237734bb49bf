//! Declared tax-free plan tables and age windowing
//!
//! Tax-free plan values are not computed: they are transcribed from a
//! carrier's illustration into a per-age table and treated as trusted input.
//! The projector only windows that table to the requested age range and
//! re-bases the cumulative flow columns so a window starting mid-table
//! reports "since now" totals.

use serde::{Deserialize, Serialize};

/// One declared year of the tax-free (insurance-based) plan.
///
/// Rows are sorted by age and gap-free within the window they cover; missing
/// ages are never fabricated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxFreePlanRow {
    pub age: u8,

    /// Premium/contribution paid this year
    pub annual_contribution: f64,

    /// Tax-free distribution taken this year
    pub distribution: f64,

    /// Policy fee charged this year
    pub fee: f64,

    /// Declared policy account value at end of year
    pub cumulative_balance: f64,

    /// Running total of distributions
    pub cumulative_distribution: f64,

    /// Running total of fees
    pub cumulative_fees: f64,

    /// Declared death benefit at end of year
    pub death_benefit: f64,
}

impl TaxFreePlanRow {
    /// An all-zero row at the given age, used when padding a shorter series
    pub fn zeroed(age: u8) -> Self {
        Self {
            age,
            annual_contribution: 0.0,
            distribution: 0.0,
            fee: 0.0,
            cumulative_balance: 0.0,
            cumulative_distribution: 0.0,
            cumulative_fees: 0.0,
            death_benefit: 0.0,
        }
    }
}

/// Source of declared rows for an age window.
///
/// Kept as a one-method seam so a computed tax-free model could replace the
/// transcribed table without touching alignment or summary code.
pub trait DeclaredTableSource {
    fn rows_for_age_window(&self, current_age: u8, horizon_age: u8) -> Vec<TaxFreePlanRow>;
}

/// An in-memory declared table, usually loaded from a transcribed CSV
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeclaredTable {
    rows: Vec<TaxFreePlanRow>,
}

impl DeclaredTable {
    pub fn new(rows: Vec<TaxFreePlanRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[TaxFreePlanRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl DeclaredTableSource for DeclaredTable {
    fn rows_for_age_window(&self, current_age: u8, horizon_age: u8) -> Vec<TaxFreePlanRow> {
        window(&self.rows, current_age, horizon_age)
    }
}

/// Window declared rows to ages in `[current_age, horizon_age]`.
///
/// Input order is preserved (rows are age-sorted by contract). The cumulative
/// distribution and fee columns are recomputed from the windowed subset;
/// `cumulative_balance` and `death_benefit` are declared account values with
/// no per-year delta in the row, so they pass through unchanged. Mirrors the
/// current-plan precondition: `current_age >= horizon_age` yields empty.
pub fn window(rows: &[TaxFreePlanRow], current_age: u8, horizon_age: u8) -> Vec<TaxFreePlanRow> {
    if current_age >= horizon_age {
        return Vec::new();
    }

    let mut cumulative_distribution = 0.0;
    let mut cumulative_fees = 0.0;

    rows.iter()
        .filter(|row| row.age >= current_age && row.age <= horizon_age)
        .map(|row| {
            cumulative_distribution += row.distribution;
            cumulative_fees += row.fee;
            TaxFreePlanRow {
                cumulative_distribution,
                cumulative_fees,
                ..row.clone()
            }
        })
        .collect()
}
