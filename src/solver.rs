//! Implied-rate solver built on the balance simulation.

use log::{debug, warn};

use crate::error::{LoanError, ensure_finite};
use crate::simulation::simulate_balance;
use crate::LoanResult;

/// Scan step between candidate annual rates, in percentage points.
const RATE_STEP_PERCENT: f64 = 0.001;

/// Ceiling for the scan; beyond this the search reports no convergence.
const MAX_RATE_PERCENT: f64 = 100.0;

/// Number of scan steps between 0% and the ceiling. Kept as an integer so the
/// candidate count never depends on floating-point division.
const MAX_STEPS: u32 = 100_000;

/// Annual interest rate at which a loan amortizes to zero over its term.
///
/// Scans candidate annual rates upward from 0.000% in steps of 0.001
/// percentage points, simulating the full amortization at each candidate. The
/// first rate at which the final balance lands on zero, or crosses below zero
/// by no more than one repayment, is taken as the answer. Candidate rates are
/// derived from the step index rather than accumulated, so the formatted
/// output is exact at three decimals.
///
/// Returns the rate formatted as `"X.XXX %"`.
///
/// # Errors
///
/// * [`LoanError::InvalidInput`] if `principal` or `repayment` is zero or
///   non-finite, or `periods` is zero.
/// * [`LoanError::NoConvergence`] if no candidate up to 100% amortizes the
///   loan (for example, repayments that do not even cover the interest).
pub fn solve_rate(principal: f64, periods: u32, repayment: f64) -> LoanResult<String> {
    ensure_finite("principal", principal)?;
    ensure_finite("repayment", repayment)?;
    if principal == 0.0 {
        return Err(LoanError::invalid("principal", "must be non-zero"));
    }
    if repayment == 0.0 {
        return Err(LoanError::invalid("repayment", "must be non-zero"));
    }
    if periods == 0 {
        return Err(LoanError::invalid("periods", "must be greater than zero"));
    }

    for step in 0..=MAX_STEPS {
        let rate = f64::from(step) * RATE_STEP_PERCENT;
        let balance = simulate_balance(principal, rate, periods, repayment)?;
        if balance == 0.0 || (balance < 0.0 && balance.abs() <= repayment) {
            debug!(
                "rate search converged at {rate:.3}% after {} candidates (final balance {balance:.2})",
                step + 1
            );
            return Ok(format!("{rate:.3} %"));
        }
    }

    warn!(
        "rate search exhausted 0%..={MAX_RATE_PERCENT}% for principal {principal}, \
         {periods} periods, repayment {repayment}"
    );
    Err(LoanError::NoConvergence {
        max_rate_percent: MAX_RATE_PERCENT,
        iterations: MAX_STEPS + 1,
    })
}
