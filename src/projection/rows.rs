//! Output row structures for current-plan projections

use serde::{Deserialize, Serialize};

/// One simulated year of the current (tax-deferred) plan.
///
/// Rows are ordered by age ascending and contiguous. Cumulative fields are
/// running totals from the first simulated year and never reset. The full
/// vector is produced fresh on every run and is immutable once returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearRow {
    pub age: u8,

    /// Balance at the start of the year, before growth
    pub starting_balance_of_year: f64,

    /// Contribution made this year (zero outside the accumulation phase)
    pub annual_contribution: f64,

    /// Employer match received this year
    pub annual_employer_match: f64,

    /// Fee charged on the post-growth balance this year
    pub annual_fees_paid: f64,

    /// Pre-tax withdrawal this year (zero before retirement)
    pub gross_retirement_income: f64,

    /// Tax on this year's withdrawal at the retirement rate
    pub income_tax: f64,

    /// Withdrawal net of income tax
    pub net_retirement_income: f64,

    /// Running total of tax deferred on contributions at the working rate
    pub cumulative_taxes_deferred: f64,

    /// Running total of income tax paid on withdrawals
    pub cumulative_taxes_paid: f64,

    /// Running total of fees charged
    pub cumulative_fees_paid: f64,

    /// Running total of net retirement income
    pub cumulative_net_income: f64,

    /// End-of-year account balance
    pub cumulative_account_balance: f64,

    /// Death benefit for this plan type equals the end-of-year balance
    /// (no insurance multiplier)
    pub death_benefit: f64,
}

impl YearRow {
    /// An all-zero row at the given age, used when padding a shorter series
    pub fn zeroed(age: u8) -> Self {
        Self {
            age,
            starting_balance_of_year: 0.0,
            annual_contribution: 0.0,
            annual_employer_match: 0.0,
            annual_fees_paid: 0.0,
            gross_retirement_income: 0.0,
            income_tax: 0.0,
            net_retirement_income: 0.0,
            cumulative_taxes_deferred: 0.0,
            cumulative_taxes_paid: 0.0,
            cumulative_fees_paid: 0.0,
            cumulative_net_income: 0.0,
            cumulative_account_balance: 0.0,
            death_benefit: 0.0,
        }
    }
}

/// The gross-income view of the same projection: only the fields the
/// combined summary needs, derived from the identical phase/withdrawal loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrossIncomeRow {
    pub age: u8,

    /// Pre-tax withdrawal this year
    pub gross_retirement_income: f64,

    /// Running total of pre-tax withdrawals
    pub cumulative_gross_income: f64,
}
