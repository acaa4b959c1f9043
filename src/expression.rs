//! Parsing of colon-delimited loan expressions and the composed balance
//! operation.
//!
//! An expression packs the four loan parameters into a single string in the
//! fixed order `PRINCIPAL : INTERESTRATE : MONTHLYREPAYMENT : TERMS`, with
//! optional whitespace around each field, e.g. `"100000 : 5 : 1061 : 60"`.

use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::LoanError;
use crate::formulas::format_money;
use crate::simulation::simulate_balance;
use crate::LoanResult;

/// Validated numeric parameters of a loan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    /// The principal, in currency units.
    pub loan_amount: f64,
    /// The annual interest rate as a percentage (e.g. `5.0` for 5%).
    pub interest_rate: f64,
    /// The number of monthly periods.
    pub loan_term: u32,
    /// The amount repaid each period.
    pub monthly_repayment: f64,
}

impl FromStr for LoanParameters {
    type Err = LoanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(':').map(str::trim).collect();
        let &[principal, rate, repayment, terms] = fields.as_slice() else {
            return Err(parse_error(
                s,
                format!("expected 4 colon-separated fields, found {}", fields.len()),
            ));
        };

        Ok(LoanParameters {
            loan_amount: amount_field(s, principal, "principal")?,
            interest_rate: amount_field(s, rate, "interest rate")?,
            monthly_repayment: amount_field(s, repayment, "monthly repayment")?,
            loan_term: term_field(s, terms)?,
        })
    }
}

fn parse_error(expression: &str, reason: String) -> LoanError {
    LoanError::Parse {
        expression: expression.to_string(),
        reason,
    }
}

fn amount_field(expression: &str, raw: &str, field: &str) -> LoanResult<f64> {
    let value: f64 = raw
        .parse()
        .map_err(|_| parse_error(expression, format!("{field} `{raw}` is not numeric")))?;
    // `f64::from_str` happily accepts "NaN" and "inf"; neither is a loan.
    if !value.is_finite() {
        return Err(parse_error(expression, format!("{field} `{raw}` is not finite")));
    }
    Ok(value)
}

fn term_field(expression: &str, raw: &str) -> LoanResult<u32> {
    raw.parse().map_err(|_| {
        parse_error(
            expression,
            format!("term `{raw}` is not a non-negative whole number"),
        )
    })
}

/// Remaining balance of the loan described by `expression`, after its full
/// term, truncated to two decimal places.
///
/// # Errors
///
/// Returns [`LoanError::Parse`] for a malformed expression; simulation errors
/// propagate unchanged.
pub fn balance(expression: &str) -> LoanResult<String> {
    let params: LoanParameters = expression.parse()?;
    debug!("simulating balance for {params:?}");
    let balance = simulate_balance(
        params.loan_amount,
        params.interest_rate,
        params.loan_term,
        params.monthly_repayment,
    )?;
    Ok(format_money(balance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parses_a_padded_expression() {
        let params: LoanParameters = " 100000 : 5 : 1061 : 60 ".parse().unwrap();
        assert_eq!(
            params,
            LoanParameters {
                loan_amount: 100_000.0,
                interest_rate: 5.0,
                loan_term: 60,
                monthly_repayment: 1061.0,
            }
        );
    }

    #[test]
    fn balance_matches_documented_case() {
        assert_eq!(balance("100000:5:1061:60").unwrap(), "56181.41");
    }

    #[test]
    fn balance_truncates_sub_cent_remainders() {
        // A zero-term loan hands the principal straight through, so the
        // third decimal is dropped rather than rounded up.
        assert_eq!(balance("100.999:0:50:0").unwrap(), "100.99");
    }

    #[rstest]
    #[case("100000:5:1061", "too few fields")]
    #[case("100000:5:1061:60:extra", "too many fields")]
    #[case("abc:5:1061:60", "non-numeric principal")]
    #[case("100000:5%:1061:60", "non-numeric rate")]
    #[case("100000:5:1061:60.5", "fractional term")]
    #[case("100000:5:1061:-60", "negative term")]
    #[case("100000:NaN:1061:60", "non-finite rate")]
    #[case("", "empty expression")]
    fn malformed_expressions_are_parse_errors(#[case] expression: &str, #[case] label: &str) {
        let err = balance(expression).unwrap_err();
        assert!(
            matches!(err, LoanError::Parse { .. }),
            "{label}: expected a parse error, got {err}"
        );
    }

    #[test]
    fn parse_error_carries_the_expression() {
        let err = "1:2:3".parse::<LoanParameters>().unwrap_err();
        let LoanError::Parse { expression, reason } = err else {
            panic!("expected a parse error");
        };
        assert_eq!(expression, "1:2:3");
        assert!(reason.contains("expected 4"));
    }

    #[test]
    fn parameters_round_trip_through_json() {
        let params: LoanParameters = "100000:5:1061:60".parse().unwrap();
        let json = serde_json::to_string(&params).unwrap();
        let back: LoanParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}
