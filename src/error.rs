use thiserror::Error;

/// Errors produced by the loan calculations.
#[derive(Debug, Error)]
pub enum LoanError {
    /// A numeric argument was non-finite or outside the operation's domain.
    #[error("invalid input: {field} {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
    },

    /// A loan expression string could not be parsed into `LoanParameters`.
    #[error("failed to parse loan expression `{expression}`: {reason}")]
    Parse { expression: String, reason: String },

    /// The rate search exhausted its bounded scan without finding a rate
    /// that amortizes the loan.
    #[error(
        "rate search did not converge: no rate in 0%..={max_rate_percent}% \
         amortizes the loan ({iterations} candidates tried)"
    )]
    NoConvergence {
        max_rate_percent: f64,
        iterations: u32,
    },
}

impl LoanError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        LoanError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

/// Rejects NaN and infinities before they poison a calculation.
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<(), LoanError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(LoanError::invalid(
            field,
            format!("must be a finite number, got {value}"),
        ))
    }
}
