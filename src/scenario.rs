//! Comparison runner: the full pipeline from raw inputs to summary totals
//!
//! Runs parse -> project -> window -> combine -> summarize in one call, and
//! batches of scenarios in parallel. Every run is independent; the runner
//! holds no mutable state.

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::comparison::{
    combine, combine_by_age, death_benefit_advantage, summarize, CombinedRow, SummaryTotals,
};
use crate::inputs::{PlanInputs, RawPlanInputs};
use crate::projection::{project_current_plan, YearRow};
use crate::taxfree::{DeclaredTable, DeclaredTableSource, TaxFreePlanRow};

/// How the two plan series are paired into combined rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Pair row i with row i, zero-filling the shorter series
    #[default]
    Positional,
    /// Outer-join on age value, zero-filling whichever side lacks an age
    ByAge,
}

/// One scenario in a batch run: a raw form payload plus its declared table
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComparisonScenario {
    #[serde(flatten)]
    pub inputs: RawPlanInputs,

    #[serde(default)]
    pub declared_table: DeclaredTable,
}

/// Complete output of one comparison run, serializable as-is for the
/// surrounding storage layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanComparison {
    /// Date the illustration was prepared
    pub prepared_on: NaiveDate,

    /// Validated inputs the run actually used (after fallbacks)
    pub inputs: PlanInputs,

    pub current_plan: Vec<YearRow>,
    pub tax_free_plan: Vec<TaxFreePlanRow>,
    pub combined: Vec<CombinedRow>,
    pub totals: SummaryTotals,

    /// Final-row death benefit delta (tax-free minus current)
    pub death_benefit_advantage: f64,
}

/// Stateless pipeline runner
#[derive(Debug, Clone, Copy, Default)]
pub struct ComparisonRunner {
    alignment: Alignment,
}

impl ComparisonRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alignment(alignment: Alignment) -> Self {
        Self { alignment }
    }

    /// Run one comparison from validated inputs and a declared-table source
    pub fn run(&self, inputs: &PlanInputs, table: &dyn DeclaredTableSource) -> PlanComparison {
        let current_plan = project_current_plan(inputs);
        let tax_free_plan = table.rows_for_age_window(inputs.current_age, inputs.horizon_age);

        let combined = match self.alignment {
            Alignment::Positional => combine(&current_plan, &tax_free_plan),
            Alignment::ByAge => combine_by_age(&current_plan, &tax_free_plan),
        };
        let totals = summarize(&combined);
        let death_benefit_advantage = death_benefit_advantage(&combined);

        PlanComparison {
            prepared_on: chrono::Local::now().date_naive(),
            inputs: inputs.clone(),
            current_plan,
            tax_free_plan,
            combined,
            totals,
            death_benefit_advantage,
        }
    }

    /// Run one comparison from a raw form payload
    pub fn run_raw(&self, raw: &RawPlanInputs, table: &dyn DeclaredTableSource) -> PlanComparison {
        self.run(&raw.parse(), table)
    }

    /// Run many scenarios in parallel (one per comparison tab/case)
    pub fn run_batch(&self, scenarios: &[ComparisonScenario]) -> Vec<PlanComparison> {
        scenarios
            .par_iter()
            .map(|scenario| self.run_raw(&scenario.inputs, &scenario.declared_table))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> PlanInputs {
        PlanInputs {
            current_age: 40,
            stop_saving_age: 65,
            retirement_age: 66,
            horizon_age: 95,
            starting_balance: 0.0,
            annual_contribution: 25_641.0,
            annual_employer_match: 0.0,
            rate_of_return: 6.3,
            annual_fee_rate: 2.0,
            working_tax_rate: 22.0,
            retirement_tax_rate: 22.0,
            inflation_rate: 3.0,
        }
    }

    fn declared_table() -> DeclaredTable {
        DeclaredTable::new(
            (40..=95)
                .map(|age| {
                    let mut row = TaxFreePlanRow::zeroed(age);
                    if age < 65 {
                        row.annual_contribution = 25_641.0;
                    } else {
                        row.distribution = 90_000.0;
                    }
                    row.fee = 50.0;
                    row.death_benefit = 1_000_000.0;
                    row
                })
                .collect(),
        )
    }

    #[test]
    fn test_full_pipeline_lengths_agree() {
        let runner = ComparisonRunner::new();
        let comparison = runner.run(&inputs(), &declared_table());

        assert_eq!(comparison.current_plan.len(), 56);
        assert_eq!(comparison.tax_free_plan.len(), 56);
        assert_eq!(comparison.combined.len(), 56);
    }

    #[test]
    fn test_empty_inputs_yield_empty_comparison() {
        let runner = ComparisonRunner::new();
        let bad = PlanInputs {
            current_age: 50,
            retirement_age: 40,
            ..Default::default()
        };
        let comparison = runner.run(&bad, &declared_table());

        assert!(comparison.current_plan.is_empty());
        // The declared table is still windowed over [current, horizon]
        assert_eq!(comparison.combined.len(), comparison.tax_free_plan.len());
        assert_eq!(comparison.death_benefit_advantage, 1_000_000.0);
    }

    #[test]
    fn test_totals_reflect_both_sides() {
        let runner = ComparisonRunner::new();
        let comparison = runner.run(&inputs(), &declared_table());

        assert!(comparison.totals.current_net_income > 0.0);
        assert!(comparison.totals.tax_free_distributions > 0.0);
        assert!(comparison.totals.fees_saved() > 0.0);
    }

    #[test]
    fn test_batch_runs_every_scenario() {
        let runner = ComparisonRunner::new();
        let scenarios = vec![ComparisonScenario::default(); 4];
        let results = runner.run_batch(&scenarios);

        assert_eq!(results.len(), 4);
        for result in &results {
            // Default raw inputs parse to the documented defaults, which
            // satisfy the age ordering
            assert!(!result.current_plan.is_empty());
        }
    }

    #[test]
    fn test_alignment_modes_agree_on_aligned_series() {
        let positional = ComparisonRunner::new().run(&inputs(), &declared_table());
        let by_age =
            ComparisonRunner::with_alignment(Alignment::ByAge).run(&inputs(), &declared_table());

        assert_eq!(positional.combined, by_age.combined);
    }

    #[test]
    fn test_comparison_round_trips_as_json() {
        let runner = ComparisonRunner::new();
        let comparison = runner.run(&inputs(), &declared_table());

        let json = serde_json::to_string(&comparison).unwrap();
        let back: PlanComparison = serde_json::from_str(&json).unwrap();
        assert_eq!(back, comparison);
    }
}
