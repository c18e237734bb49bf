//! Plan input structures for a single comparison run

use serde::{Deserialize, Serialize};

/// Fallback current age when the form field is missing or unusable
pub const DEFAULT_CURRENT_AGE: u8 = 40;

/// Fallback age at which contributions stop
pub const DEFAULT_STOP_SAVING_AGE: u8 = 65;

/// Fallback retirement age (first year of withdrawals)
pub const DEFAULT_RETIREMENT_AGE: u8 = 66;

/// Fallback horizon age (target age for funds to be depleted)
pub const DEFAULT_HORIZON_AGE: u8 = 90;

/// Fallback annual rate of return, in percent
pub const DEFAULT_RATE_OF_RETURN_PCT: f64 = 6.3;

/// Fallback annual fee rate, in percent
pub const DEFAULT_FEE_PCT: f64 = 2.0;

/// Fallback tax rate while working, in percent
pub const DEFAULT_WORKING_TAX_PCT: f64 = 22.0;

/// Fallback tax rate in retirement, in percent
pub const DEFAULT_RETIREMENT_TAX_PCT: f64 = 22.0;

/// Fallback inflation rate, in percent
pub const DEFAULT_INFLATION_PCT: f64 = 3.0;

/// Validated scalar inputs for one current-plan simulation run.
///
/// All percentage fields carry plain numbers (`22` means 22%), never
/// pre-divided. Construction goes through [`super::RawPlanInputs::parse`]
/// when values arrive from a form payload; the projection loop itself only
/// ever sees a fully-formed `PlanInputs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanInputs {
    /// Age at the start of the simulation
    pub current_age: u8,

    /// Age at which contributions and employer match stop
    pub stop_saving_age: u8,

    /// First age of retirement withdrawals
    pub retirement_age: u8,

    /// Absolute age through which the simulation runs; withdrawals are sized
    /// to deplete the balance at this age
    pub horizon_age: u8,

    /// Account balance at the start of the first simulated year
    pub starting_balance: f64,

    /// Annual contribution during the accumulation phase
    pub annual_contribution: f64,

    /// Annual employer match during the accumulation phase
    pub annual_employer_match: f64,

    /// Annual rate of return, in percent
    pub rate_of_return: f64,

    /// Annual fee rate on the post-growth balance, in percent
    pub annual_fee_rate: f64,

    /// Marginal tax rate while working, in percent
    pub working_tax_rate: f64,

    /// Tax rate applied to retirement withdrawals, in percent
    pub retirement_tax_rate: f64,

    /// Assumed inflation rate, in percent (presentation-level deflation only;
    /// the projection loop is nominal)
    pub inflation_rate: f64,
}

impl PlanInputs {
    /// Whether the age ordering admits a non-empty projection:
    /// `current_age < stop_saving_age <= retirement_age < horizon_age`.
    ///
    /// A violation is a policy decision to render "no data" rather than an
    /// error, so callers get an empty series instead of a `Result`.
    pub fn ages_ordered(&self) -> bool {
        self.current_age < self.stop_saving_age
            && self.stop_saving_age <= self.retirement_age
            && self.retirement_age < self.horizon_age
    }

    /// Number of simulated years when the ordering holds (inclusive span)
    pub fn simulated_years(&self) -> usize {
        if self.ages_ordered() {
            (self.horizon_age - self.current_age) as usize + 1
        } else {
            0
        }
    }
}

impl Default for PlanInputs {
    fn default() -> Self {
        Self {
            current_age: DEFAULT_CURRENT_AGE,
            stop_saving_age: DEFAULT_STOP_SAVING_AGE,
            retirement_age: DEFAULT_RETIREMENT_AGE,
            horizon_age: DEFAULT_HORIZON_AGE,
            starting_balance: 0.0,
            annual_contribution: 0.0,
            annual_employer_match: 0.0,
            rate_of_return: DEFAULT_RATE_OF_RETURN_PCT,
            annual_fee_rate: DEFAULT_FEE_PCT,
            working_tax_rate: DEFAULT_WORKING_TAX_PCT,
            retirement_tax_rate: DEFAULT_RETIREMENT_TAX_PCT,
            inflation_rate: DEFAULT_INFLATION_PCT,
        }
    }
}
