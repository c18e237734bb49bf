//! Series alignment and lifetime summary for side-by-side comparisons

mod align;
mod summary;

pub use align::{combine, combine_by_age};
pub use summary::{death_benefit_advantage, summarize, CombinedRow, SummaryTotals};
