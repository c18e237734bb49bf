//! Ordinary-annuity payment sizing for level retirement income
//!
//! Used to size the constant gross withdrawal that drives a balance to
//! (approximately) zero at the horizon age under a stated rate of return.

/// Level annual payment that amortizes `present_value` to zero over `years`
/// at annual rate `rate` (a decimal, 0.063 for 6.3%).
///
/// Matches the "level income" illustration convention: the payment is
/// computed once and held constant. Returns 0 for an empty or non-positive
/// balance; with `years == 0` the whole balance is paid out at once.
pub fn level_payment(present_value: f64, rate: f64, years: u32) -> f64 {
    if present_value <= 0.0 {
        return 0.0;
    }
    if years == 0 {
        return present_value;
    }

    // Near-zero rates collapse to straight-line amortization; the closed-form
    // denominator 1 - (1+r)^-n loses precision there.
    if rate.abs() < 1e-9 {
        return present_value / years as f64;
    }

    let discount = (1.0 + rate).powi(-(years as i32));
    present_value * rate / (1.0 - discount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_rate_is_straight_line() {
        assert_relative_eq!(level_payment(30_000.0, 0.0, 30), 1_000.0);
    }

    #[test]
    fn test_payment_amortizes_to_zero() {
        let pv = 500_000.0;
        let rate = 0.063;
        let years = 29;
        let payment = level_payment(pv, rate, years);

        // Ordinary annuity: growth accrues, then the end-of-year payment
        let mut balance = pv;
        for _ in 0..years {
            balance = balance * (1.0 + rate) - payment;
        }
        assert!(balance.abs() < 1e-6, "residual balance {balance}");
    }

    #[test]
    fn test_empty_balance_pays_nothing() {
        assert_eq!(level_payment(0.0, 0.05, 20), 0.0);
        assert_eq!(level_payment(-50.0, 0.05, 20), 0.0);
    }

    #[test]
    fn test_single_year_pays_everything() {
        assert_relative_eq!(level_payment(10_000.0, 0.05, 0), 10_000.0);
    }

    #[test]
    fn test_payment_exceeds_straight_line_with_growth() {
        // With positive growth the sustainable payment is above pv/n
        let payment = level_payment(100_000.0, 0.05, 20);
        assert!(payment > 5_000.0);
    }
}
