//! `loan_annuity` is a Rust library for standard loan and annuity
//! calculations.
//!
//! It computes the usual time-value quantities from numeric loan parameters:
//! - **Present and future value** of an annuity at a periodic rate.
//! - **Fixed periodic payment** (EMI) that amortizes a principal.
//! - **Remaining balance** after amortizing a loan month by month.
//! - **Implied interest rate** at which a given repayment retires a loan,
//!   found by scanning candidate rates against the balance simulation.
//!
//! All arithmetic is plain IEEE-754 `f64`; every operation is a synchronous
//! pure function returning either a formatted result (money truncated to two
//! decimals, percentages to three) or a [`LoanError`].
//!
//! Two rate conventions are in play, matching common calculator usage: the
//! closed-form functions in [`formulas`] take a *monthly fractional* rate
//! (`annual % / 100 / 12`), while [`simulate_balance`], [`balance`] and
//! [`solve_rate`] take the *annual percentage* directly. Each function
//! documents which one it expects.
//!
//! ## Usage
//!
//! ```rust
//! use loan_annuity::{payment, solve_rate, balance};
//!
//! fn main() {
//!     // Monthly payment on 100 000 over 60 months at 5% per year.
//!     match payment(5.0 / 100.0 / 12.0, 60, 100_000.0) {
//!         Ok(emi) => assert_eq!(emi, "1887"),
//!         Err(e) => eprintln!("payment failed: {e}"),
//!     }
//!
//!     // Balance left after 60 monthly repayments of 1061 at 5% per year.
//!     let left = balance("100000 : 5 : 1061 : 60").unwrap();
//!     assert_eq!(left, "56181.41");
//!
//!     // Annual rate implied by retiring 100 000 with 120 payments of 1061.
//!     let rate = solve_rate(100_000.0, 120, 1061.0).unwrap();
//!     assert_eq!(rate, "4.867 %");
//! }
//! ```

pub mod error;
pub mod expression;
pub mod formulas;
pub mod simulation;
pub mod solver;

pub use error::LoanError;
pub use expression::{LoanParameters, balance};
pub use formulas::{
    future_value, future_value_amount, payment, payment_amount, present_value,
    present_value_amount,
};
pub use simulation::simulate_balance;
pub use solver::solve_rate;

/// Standard result type for all loan operations.
pub type LoanResult<T> = Result<T, LoanError>;
