//! Errors raised by decimal arithmetic.

use thiserror::Error;

/// Errors that can occur while configuring precision or evaluating functions.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DecimalError {
    /// A precision of zero digits was requested.
    #[error("working precision must be at least one decimal digit")]
    ZeroPrecision,

    /// A literal could not be parsed as a decimal number.
    #[error("cannot parse `{0}` as a decimal number")]
    Parse(String),

    /// Division by an exact zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The argument of a trigonometric function is too large to reduce.
    #[error("argument {0} is too large for trigonometric argument reduction")]
    ArgumentTooLarge(String),
}
