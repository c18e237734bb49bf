//! Current-plan projection engine and its output rows

mod annuity;
mod engine;
mod rows;
mod state;

pub use annuity::level_payment;
pub use engine::{project_current_plan, project_gross_income};
pub use rows::{GrossIncomeRow, YearRow};
pub use state::{PlanPhase, ProjectionState};
