//! Year-by-year state tracking for a current-plan projection

use crate::inputs::PlanInputs;

/// Lifecycle phase of a simulated year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanPhase {
    /// Contributing and growing (`age < stop_saving_age`)
    Accumulation,
    /// Growth only, no contributions (`stop_saving_age <= age < retirement_age`)
    PreRetirementGrowth,
    /// Taking level withdrawals (`age >= retirement_age`)
    Decumulation,
}

/// Mutable state carried across simulated years.
///
/// Owned by a single projection run; the loop is otherwise pure.
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Age of the year currently being simulated
    pub age: u8,

    /// Balance at the start of the current year
    pub balance: f64,

    /// Level gross withdrawal, sized once at the first retirement year and
    /// held constant thereafter
    pub level_withdrawal: Option<f64>,

    pub cumulative_taxes_deferred: f64,
    pub cumulative_taxes_paid: f64,
    pub cumulative_fees_paid: f64,
    pub cumulative_net_income: f64,
}

impl ProjectionState {
    /// Initialize state at the first simulated year
    pub fn from_inputs(inputs: &PlanInputs) -> Self {
        Self {
            age: inputs.current_age,
            balance: inputs.starting_balance.max(0.0),
            level_withdrawal: None,
            cumulative_taxes_deferred: 0.0,
            cumulative_taxes_paid: 0.0,
            cumulative_fees_paid: 0.0,
            cumulative_net_income: 0.0,
        }
    }

    /// Phase of the current year under the given inputs
    pub fn phase(&self, inputs: &PlanInputs) -> PlanPhase {
        if self.age < inputs.stop_saving_age {
            PlanPhase::Accumulation
        } else if self.age < inputs.retirement_age {
            PlanPhase::PreRetirementGrowth
        } else {
            PlanPhase::Decumulation
        }
    }
}
