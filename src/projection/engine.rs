//! Current-plan projection: accumulation, pre-retirement growth, and level
//! decumulation
//!
//! The projector is a pure function of its inputs. It never errors: an age
//! ordering that cannot produce a series yields an empty vector (the UI
//! renders "no data"), and all arithmetic is clamp-safe so a depleted balance
//! is a terminal data condition rather than a failure.

use super::annuity;
use super::rows::{GrossIncomeRow, YearRow};
use super::state::{PlanPhase, ProjectionState};
use crate::inputs::PlanInputs;

/// Project the conventional tax-deferred plan, one row per integer age in
/// `current_age..=horizon_age`.
///
/// Returns an empty vector when
/// `current_age < stop_saving_age <= retirement_age < horizon_age` does not
/// hold.
pub fn project_current_plan(inputs: &PlanInputs) -> Vec<YearRow> {
    if !inputs.ages_ordered() {
        return Vec::new();
    }

    let mut state = ProjectionState::from_inputs(inputs);
    let mut rows = Vec::with_capacity(inputs.simulated_years());

    for age in inputs.current_age..=inputs.horizon_age {
        state.age = age;
        rows.push(simulate_year(inputs, &mut state));
    }

    rows
}

/// Gross-income view of the same projection: identical phase and withdrawal
/// algorithm, surfacing only the pre-tax income figures the combined summary
/// needs.
pub fn project_gross_income(inputs: &PlanInputs) -> Vec<GrossIncomeRow> {
    let mut cumulative = 0.0;
    project_current_plan(inputs)
        .into_iter()
        .map(|row| {
            cumulative += row.gross_retirement_income;
            GrossIncomeRow {
                age: row.age,
                gross_retirement_income: row.gross_retirement_income,
                cumulative_gross_income: cumulative,
            }
        })
        .collect()
}

/// Simulate one year, advancing the state and producing its output row
fn simulate_year(inputs: &PlanInputs, state: &mut ProjectionState) -> YearRow {
    let mut row = YearRow::zeroed(state.age);
    row.starting_balance_of_year = state.balance;

    match state.phase(inputs) {
        PlanPhase::Accumulation => accumulation_year(inputs, state, &mut row),
        PlanPhase::PreRetirementGrowth => growth_year(inputs, state, &mut row),
        PlanPhase::Decumulation => decumulation_year(inputs, state, &mut row),
    }

    state.cumulative_fees_paid += row.annual_fees_paid;
    state.cumulative_taxes_paid += row.income_tax;
    state.cumulative_net_income += row.net_retirement_income;

    row.cumulative_taxes_deferred = state.cumulative_taxes_deferred;
    row.cumulative_taxes_paid = state.cumulative_taxes_paid;
    row.cumulative_fees_paid = state.cumulative_fees_paid;
    row.cumulative_net_income = state.cumulative_net_income;
    row.cumulative_account_balance = state.balance;
    row.death_benefit = state.balance;

    row
}

/// Contribution years: growth, contribution and match in, fee on the
/// post-growth balance. Tax on the contribution is deferred, not paid.
fn accumulation_year(inputs: &PlanInputs, state: &mut ProjectionState, row: &mut YearRow) {
    let grown = state.balance * growth_factor(inputs)
        + inputs.annual_contribution
        + inputs.annual_employer_match;
    let fees = grown * fee_rate(inputs);

    state.balance = (grown - fees).max(0.0);
    state.cumulative_taxes_deferred +=
        inputs.annual_contribution * inputs.working_tax_rate / 100.0;

    row.annual_contribution = inputs.annual_contribution;
    row.annual_employer_match = inputs.annual_employer_match;
    row.annual_fees_paid = fees;
}

/// Years between the last contribution and retirement: growth and fee only
fn growth_year(inputs: &PlanInputs, state: &mut ProjectionState, row: &mut YearRow) {
    let grown = state.balance * growth_factor(inputs);
    let fees = grown * fee_rate(inputs);

    state.balance = (grown - fees).max(0.0);
    row.annual_fees_paid = fees;
}

/// Retirement years: a level gross withdrawal sized once at the first
/// retirement year, clamped to whatever balance remains thereafter.
fn decumulation_year(inputs: &PlanInputs, state: &mut ProjectionState, row: &mut YearRow) {
    let level = match state.level_withdrawal {
        Some(amount) => amount,
        None => {
            // Sized so the stated rate of return amortizes the balance to
            // zero at the horizon, then held constant for the remainder of
            // the illustration.
            let remaining_years = (inputs.horizon_age - state.age) as u32;
            let amount = annuity::level_payment(
                state.balance,
                inputs.rate_of_return / 100.0,
                remaining_years,
            );
            state.level_withdrawal = Some(amount);
            amount
        }
    };

    let gross = level.min(state.balance).max(0.0);
    let income_tax = gross * inputs.retirement_tax_rate / 100.0;

    let grown = (state.balance - gross).max(0.0) * growth_factor(inputs);
    let fees = grown * fee_rate(inputs);
    state.balance = (grown - fees).max(0.0);

    row.gross_retirement_income = gross;
    row.income_tax = income_tax;
    row.net_retirement_income = gross - income_tax;
    row.annual_fees_paid = fees;
}

fn growth_factor(inputs: &PlanInputs) -> f64 {
    1.0 + inputs.rate_of_return / 100.0
}

fn fee_rate(inputs: &PlanInputs) -> f64 {
    inputs.annual_fee_rate / 100.0
}
