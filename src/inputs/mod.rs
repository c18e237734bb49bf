//! Plan inputs and the validated-input boundary

mod data;
mod parse;

pub use data::{
    PlanInputs, DEFAULT_CURRENT_AGE, DEFAULT_FEE_PCT, DEFAULT_HORIZON_AGE, DEFAULT_INFLATION_PCT,
    DEFAULT_RATE_OF_RETURN_PCT, DEFAULT_RETIREMENT_AGE, DEFAULT_RETIREMENT_TAX_PCT,
    DEFAULT_STOP_SAVING_AGE, DEFAULT_WORKING_TAX_PCT,
};
pub use parse::RawPlanInputs;
