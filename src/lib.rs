//! Illustration Engine - year-by-year retirement projection for side-by-side
//! sales comparisons
//!
//! This library provides:
//! - Current-plan (tax-deferred) projections through accumulation and
//!   level-income decumulation
//! - Windowing of declared tax-free plan tables transcribed from carrier
//!   illustrations
//! - Alignment of the two series into a combined per-year table
//! - Lifetime "Total Advantage" summary totals

pub mod comparison;
pub mod inputs;
pub mod projection;
pub mod scenario;
pub mod taxfree;

// Re-export commonly used types
pub use comparison::{combine, summarize, CombinedRow, SummaryTotals};
pub use inputs::{PlanInputs, RawPlanInputs};
pub use projection::{project_current_plan, project_gross_income, GrossIncomeRow, YearRow};
pub use scenario::{ComparisonRunner, PlanComparison};
pub use taxfree::{DeclaredTable, DeclaredTableSource, TaxFreePlanRow};
