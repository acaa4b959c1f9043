//! Month-by-month amortization simulation.

use crate::error::ensure_finite;
use crate::LoanResult;

/// Remaining balance after amortizing a loan for a fixed number of periods.
///
/// The annual percentage rate is converted to a monthly fractional rate
/// (`annual_rate_percent / 100 / 12`); starting from `principal`, each period
/// accrues one month of interest and then subtracts the repayment. The final
/// balance is returned as-is and may be negative when the repayments overshoot
/// the debt.
///
/// Unlike the closed-form functions in [`crate::formulas`], this takes the
/// rate as an annual percentage (e.g. `5.0` for 5% per year).
///
/// # Arguments
///
/// * `principal` - The initial loan amount.
/// * `annual_rate_percent` - The annual interest rate as a percentage.
/// * `periods` - The number of monthly periods to simulate.
/// * `repayment` - The amount repaid each period.
///
/// # Errors
///
/// Returns [`crate::LoanError::InvalidInput`] if any amount or rate is not
/// finite.
pub fn simulate_balance(
    principal: f64,
    annual_rate_percent: f64,
    periods: u32,
    repayment: f64,
) -> LoanResult<f64> {
    ensure_finite("principal", principal)?;
    ensure_finite("annual_rate_percent", annual_rate_percent)?;
    ensure_finite("repayment", repayment)?;

    let periodic_rate = annual_rate_percent / 100.0 / 12.0;
    let mut balance = principal;
    for _ in 0..periods {
        balance += balance * periodic_rate - repayment;
    }

    Ok(balance)
}
