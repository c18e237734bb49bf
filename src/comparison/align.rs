//! Aligning the two plan series into one combined table

use std::collections::BTreeMap;

use log::warn;

use super::summary::CombinedRow;
use crate::projection::YearRow;
use crate::taxfree::TaxFreePlanRow;

/// Zip the two series by row position.
///
/// Row `i` of the current plan pairs with row `i` of the tax-free plan
/// regardless of whether their ages agree; the combined length is the longer
/// of the two, with the shorter side zero-filled. The row's age comes from
/// whichever side still has data; since every index is below the longer
/// length, at least one side always has a row, and the zero fallback on the
/// age lookup cannot be reached.
pub fn combine(current: &[YearRow], tax_free: &[TaxFreePlanRow]) -> Vec<CombinedRow> {
    let len = current.len().max(tax_free.len());

    (0..len)
        .map(|i| {
            let current_row = current.get(i);
            let tax_free_row = tax_free.get(i);
            let age = current_row
                .map(|r| r.age)
                .or_else(|| tax_free_row.map(|r| r.age))
                .unwrap_or(0);

            CombinedRow {
                year_index: i as u32,
                age,
                current: current_row.cloned().unwrap_or_else(|| YearRow::zeroed(age)),
                tax_free: tax_free_row
                    .cloned()
                    .unwrap_or_else(|| TaxFreePlanRow::zeroed(age)),
            }
        })
        .collect()
}

/// Outer-join the two series on age: the combined table covers the union of
/// ages, zero-filling whichever side has no row at a given age.
///
/// Positional pairing silently mismatches series that start at different
/// ages; this variant pairs by age value instead and warns when the two age
/// ranges disagree.
pub fn combine_by_age(current: &[YearRow], tax_free: &[TaxFreePlanRow]) -> Vec<CombinedRow> {
    if let (Some(c0), Some(t0)) = (current.first(), tax_free.first()) {
        let c_last = current.last().map(|r| r.age).unwrap_or(c0.age);
        let t_last = tax_free.last().map(|r| r.age).unwrap_or(t0.age);
        if c0.age != t0.age || c_last != t_last {
            warn!(
                "plan series age ranges disagree: current {}..={}, tax-free {}..={}",
                c0.age, c_last, t0.age, t_last
            );
        }
    }

    let mut by_age: BTreeMap<u8, (Option<&YearRow>, Option<&TaxFreePlanRow>)> = BTreeMap::new();
    for row in current {
        by_age.entry(row.age).or_default().0 = Some(row);
    }
    for row in tax_free {
        by_age.entry(row.age).or_default().1 = Some(row);
    }

    by_age
        .into_iter()
        .enumerate()
        .map(|(i, (age, (current_row, tax_free_row)))| CombinedRow {
            year_index: i as u32,
            age,
            current: current_row.cloned().unwrap_or_else(|| YearRow::zeroed(age)),
            tax_free: tax_free_row
                .cloned()
                .unwrap_or_else(|| TaxFreePlanRow::zeroed(age)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current_series(start_age: u8, len: usize) -> Vec<YearRow> {
        (0..len)
            .map(|i| {
                let mut row = YearRow::zeroed(start_age + i as u8);
                row.cumulative_account_balance = 1_000.0 * (i + 1) as f64;
                row
            })
            .collect()
    }

    fn tax_free_series(start_age: u8, len: usize) -> Vec<TaxFreePlanRow> {
        (0..len)
            .map(|i| {
                let mut row = TaxFreePlanRow::zeroed(start_age + i as u8);
                row.cumulative_balance = 2_000.0 * (i + 1) as f64;
                row
            })
            .collect()
    }

    #[test]
    fn test_combined_length_is_max_of_inputs() {
        let a = current_series(40, 10);
        let b = tax_free_series(40, 6);

        assert_eq!(combine(&a, &b).len(), 10);
        assert_eq!(combine(&a, &[]).len(), 10);
        assert_eq!(combine(&[], &b).len(), 6);
        assert!(combine(&[], &[]).is_empty());
    }

    #[test]
    fn test_shorter_side_zero_filled() {
        let a = current_series(40, 10);
        let b = tax_free_series(40, 6);
        let combined = combine(&a, &b);

        // Indices past the tax-free series carry an all-zero tax-free side
        for row in &combined[6..] {
            assert_eq!(row.tax_free, TaxFreePlanRow::zeroed(row.age));
        }
        // The current side is intact throughout
        assert_eq!(combined[9].current.cumulative_account_balance, 10_000.0);
    }

    #[test]
    fn test_age_taken_from_surviving_side() {
        let a = current_series(40, 3);
        let b = tax_free_series(40, 6);
        let combined = combine(&a, &b);

        assert_eq!(combined[2].age, 42); // both sides present
        assert_eq!(combined[5].age, 45); // only tax-free remains
    }

    #[test]
    fn test_positional_pairing_ignores_age_values() {
        // Series starting at different ages still pair index-by-index
        let a = current_series(40, 3);
        let b = tax_free_series(45, 3);
        let combined = combine(&a, &b);

        assert_eq!(combined[0].current.age, 40);
        assert_eq!(combined[0].tax_free.age, 45);
    }

    #[test]
    fn test_by_age_outer_join() {
        let a = current_series(40, 3); // 40, 41, 42
        let b = tax_free_series(42, 3); // 42, 43, 44
        let combined = combine_by_age(&a, &b);

        assert_eq!(combined.len(), 5); // union of 40..=44
        assert_eq!(combined[0].age, 40);
        assert_eq!(combined[4].age, 44);

        // Only age 42 carries both sides
        assert_eq!(combined[2].current.cumulative_account_balance, 3_000.0);
        assert_eq!(combined[2].tax_free.cumulative_balance, 2_000.0);

        // Missing sides are zero-filled at the row's own age
        assert_eq!(combined[0].tax_free, TaxFreePlanRow::zeroed(40));
        assert_eq!(combined[4].current, YearRow::zeroed(44));
    }

    #[test]
    fn test_by_age_matches_positional_for_aligned_series() {
        let a = current_series(40, 5);
        let b = tax_free_series(40, 5);

        assert_eq!(combine(&a, &b), combine_by_age(&a, &b));
    }
}
