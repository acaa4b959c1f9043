//! Closed-form annuity formulas: present value, future value and the fixed
//! periodic payment (EMI).
//!
//! All functions here take the *periodic* (e.g. monthly) fractional rate, not
//! an annual percentage. For a 5% annual loan paid monthly, pass
//! `5.0 / 100.0 / 12.0`.

use crate::error::{LoanError, ensure_finite};
use crate::LoanResult;

/// Formats a money amount truncated toward zero at two decimal places.
///
/// Truncation, not rounding: an amount of `385957.2959` formats as
/// `"385957.29"`. Dropping the sub-cent remainder keeps the formatted results
/// in line with the truncated whole-unit payment.
pub(crate) fn format_money(value: f64) -> String {
    format!("{:.2}", (value * 100.0).trunc() / 100.0)
}

/// Rejects periodic rates of -100% or below, where `1 + r` stops being a
/// usable compounding base.
fn ensure_compoundable(periodic_rate: f64) -> LoanResult<()> {
    if periodic_rate <= -1.0 {
        return Err(LoanError::invalid(
            "periodic_rate",
            "must be greater than -100%",
        ));
    }
    Ok(())
}

/// Present value of an annuity, as an amount.
///
/// Computes `P * (1 - (1+r)^-n) / r` for the periodic rate `r`, number of
/// periods `n` and payment `P`. A zero rate uses the linear limit `P * n`
/// instead of evaluating the indeterminate general formula.
///
/// # Errors
///
/// Returns [`LoanError::InvalidInput`] if `periodic_rate` or `payment` is not
/// finite, or if `periodic_rate` is -100% or below.
pub fn present_value_amount(periodic_rate: f64, periods: u32, payment: f64) -> LoanResult<f64> {
    ensure_finite("periodic_rate", periodic_rate)?;
    ensure_finite("payment", payment)?;
    ensure_compoundable(periodic_rate)?;

    let n = f64::from(periods);
    if periodic_rate == 0.0 {
        return Ok(payment * n);
    }

    let discount = (1.0 + periodic_rate).powf(-n);
    let value = payment * (1.0 - discount) / periodic_rate;
    ensure_finite("present value", value)?;
    Ok(value)
}

/// Future value of an annuity, as an amount.
///
/// Computes `P * ((1+r)^n - 1) / r`, with the linear limit `P * n` at zero
/// rate.
///
/// # Errors
///
/// Returns [`LoanError::InvalidInput`] if `periodic_rate` or `payment` is not
/// finite, or if `periodic_rate` is -100% or below.
pub fn future_value_amount(periodic_rate: f64, periods: u32, payment: f64) -> LoanResult<f64> {
    ensure_finite("periodic_rate", periodic_rate)?;
    ensure_finite("payment", payment)?;
    ensure_compoundable(periodic_rate)?;

    let n = f64::from(periods);
    if periodic_rate == 0.0 {
        return Ok(payment * n);
    }

    let factor = (1.0 + periodic_rate).powf(n);
    let value = payment * (factor - 1.0) / periodic_rate;
    ensure_finite("future value", value)?;
    Ok(value)
}

/// Fixed periodic payment that amortizes `principal` over `periods` periods.
///
/// Computes `principal * r * (1+r)^n / ((1+r)^n - 1)` and truncates the
/// result toward zero to a whole currency unit. A zero rate divides the
/// principal evenly across the periods.
///
/// # Errors
///
/// Returns [`LoanError::InvalidInput`] if `periodic_rate` or `principal` is
/// not finite, if `periodic_rate` is -100% or below, or if `periods` is zero
/// (the annuity factor vanishes).
pub fn payment_amount(periodic_rate: f64, periods: u32, principal: f64) -> LoanResult<f64> {
    ensure_finite("periodic_rate", periodic_rate)?;
    ensure_finite("principal", principal)?;
    ensure_compoundable(periodic_rate)?;
    if periods == 0 {
        return Err(LoanError::invalid("periods", "must be greater than zero"));
    }

    let n = f64::from(periods);
    if periodic_rate == 0.0 {
        return Ok((principal / n).trunc());
    }

    let factor = (1.0 + periodic_rate).powf(n);
    let value = (principal * periodic_rate * factor / (factor - 1.0)).trunc();
    ensure_finite("payment", value)?;
    Ok(value)
}

/// [`present_value_amount`] truncated to exactly two decimal places.
pub fn present_value(periodic_rate: f64, periods: u32, payment: f64) -> LoanResult<String> {
    let value = present_value_amount(periodic_rate, periods, payment)?;
    Ok(format_money(value))
}

/// [`future_value_amount`] truncated to exactly two decimal places.
pub fn future_value(periodic_rate: f64, periods: u32, payment: f64) -> LoanResult<String> {
    let value = future_value_amount(periodic_rate, periods, payment)?;
    Ok(format_money(value))
}

/// [`payment_amount`] formatted as a whole currency amount.
pub fn payment(periodic_rate: f64, periods: u32, principal: f64) -> LoanResult<String> {
    let value = payment_amount(periodic_rate, periods, principal)?;
    Ok(format!("{value:.0}"))
}
