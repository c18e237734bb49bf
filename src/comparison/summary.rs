//! Combined rows and lifetime summary totals

use serde::{Deserialize, Serialize};

use crate::projection::YearRow;
use crate::taxfree::TaxFreePlanRow;

/// One combined year: both plans' values side by side under a shared year
/// index and age.
///
/// Where one series was shorter than the other, its side is an all-zero row
/// so downstream sums stay defined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedRow {
    /// Position in the combined series, 0-based
    pub year_index: u32,

    /// Age for this row, taken from whichever source series had data
    pub age: u8,

    /// Current (tax-deferred) plan values
    pub current: YearRow,

    /// Tax-free plan values
    pub tax_free: TaxFreePlanRow,
}

/// Column-wise sums over a combined series: one field per numeric column of
/// both sides. This is the single aggregate feeding the "Total Advantage"
/// display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryTotals {
    // Current plan columns
    pub current_starting_balance: f64,
    pub current_contributions: f64,
    pub current_employer_match: f64,
    pub current_fees_paid: f64,
    pub current_gross_income: f64,
    pub current_income_tax: f64,
    pub current_net_income: f64,
    pub current_taxes_deferred: f64,
    pub current_taxes_paid: f64,
    pub current_cumulative_fees: f64,
    pub current_cumulative_net_income: f64,
    pub current_account_balance: f64,
    pub current_death_benefit: f64,

    // Tax-free plan columns
    pub tax_free_contributions: f64,
    pub tax_free_distributions: f64,
    pub tax_free_fees: f64,
    pub tax_free_balance: f64,
    pub tax_free_cumulative_distributions: f64,
    pub tax_free_cumulative_fees: f64,
    pub tax_free_death_benefit: f64,
}

impl SummaryTotals {
    /// Lifetime fees avoided by the tax-free plan
    pub fn fees_saved(&self) -> f64 {
        self.current_fees_paid - self.tax_free_fees
    }

    /// Lifetime spendable income advantage of the tax-free plan
    /// (distributions are untaxed; the current plan's income is net of tax)
    pub fn extra_net_income(&self) -> f64 {
        self.tax_free_distributions - self.current_net_income
    }

    /// Lifetime income tax avoided (tax-free distributions carry none)
    pub fn tax_advantage(&self) -> f64 {
        self.current_income_tax
    }
}

/// Column-wise fold of every numeric field over the combined rows.
///
/// Full materialization; the series is tens to low hundreds of rows.
pub fn summarize(rows: &[CombinedRow]) -> SummaryTotals {
    let mut totals = SummaryTotals::default();

    for row in rows {
        let c = &row.current;
        totals.current_starting_balance += c.starting_balance_of_year;
        totals.current_contributions += c.annual_contribution;
        totals.current_employer_match += c.annual_employer_match;
        totals.current_fees_paid += c.annual_fees_paid;
        totals.current_gross_income += c.gross_retirement_income;
        totals.current_income_tax += c.income_tax;
        totals.current_net_income += c.net_retirement_income;
        totals.current_taxes_deferred += c.cumulative_taxes_deferred;
        totals.current_taxes_paid += c.cumulative_taxes_paid;
        totals.current_cumulative_fees += c.cumulative_fees_paid;
        totals.current_cumulative_net_income += c.cumulative_net_income;
        totals.current_account_balance += c.cumulative_account_balance;
        totals.current_death_benefit += c.death_benefit;

        let t = &row.tax_free;
        totals.tax_free_contributions += t.annual_contribution;
        totals.tax_free_distributions += t.distribution;
        totals.tax_free_fees += t.fee;
        totals.tax_free_balance += t.cumulative_balance;
        totals.tax_free_cumulative_distributions += t.cumulative_distribution;
        totals.tax_free_cumulative_fees += t.cumulative_fees;
        totals.tax_free_death_benefit += t.death_benefit;
    }

    totals
}

/// Death benefit advantage at the end of the illustration: the final row's
/// tax-free death benefit less the current plan's remaining balance.
///
/// Death benefit is a point-in-time value rather than a flow, so the delta
/// comes from the last combined row instead of the column sums.
pub fn death_benefit_advantage(rows: &[CombinedRow]) -> f64 {
    rows.last()
        .map(|row| row.tax_free.death_benefit - row.current.death_benefit)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combined_row(i: u32, age: u8, net_income: f64, distribution: f64) -> CombinedRow {
        let mut current = YearRow::zeroed(age);
        current.net_retirement_income = net_income;
        current.annual_fees_paid = 100.0;
        current.income_tax = net_income * 0.25;

        let mut tax_free = TaxFreePlanRow::zeroed(age);
        tax_free.distribution = distribution;
        tax_free.fee = 40.0;
        tax_free.death_benefit = 250_000.0;

        CombinedRow {
            year_index: i,
            age,
            current,
            tax_free,
        }
    }

    #[test]
    fn test_summarize_matches_independent_column_sums() {
        let rows: Vec<_> = (0..30)
            .map(|i| combined_row(i, 65 + i as u8 / 2, 1_000.0 + i as f64, 1_500.0))
            .collect();

        let totals = summarize(&rows);

        let net: f64 = rows.iter().map(|r| r.current.net_retirement_income).sum();
        let dist: f64 = rows.iter().map(|r| r.tax_free.distribution).sum();
        let fees: f64 = rows.iter().map(|r| r.current.annual_fees_paid).sum();
        let tax: f64 = rows.iter().map(|r| r.current.income_tax).sum();

        assert_eq!(totals.current_net_income, net);
        assert_eq!(totals.tax_free_distributions, dist);
        assert_eq!(totals.current_fees_paid, fees);
        assert_eq!(totals.current_income_tax, tax);
    }

    #[test]
    fn test_advantage_figures() {
        let rows: Vec<_> = (0..10).map(|i| combined_row(i, 66, 1_000.0, 1_500.0)).collect();
        let totals = summarize(&rows);

        assert_eq!(totals.fees_saved(), 10.0 * (100.0 - 40.0));
        assert_eq!(totals.extra_net_income(), 10.0 * 500.0);
        assert_eq!(totals.tax_advantage(), 10.0 * 250.0);
        assert_eq!(death_benefit_advantage(&rows), 250_000.0);
    }

    #[test]
    fn test_empty_series() {
        let totals = summarize(&[]);
        assert_eq!(totals, SummaryTotals::default());
        assert_eq!(death_benefit_advantage(&[]), 0.0);
    }
}
