//! # hiquad-decimal
//!
//! Decimal arbitrary precision arithmetic for hiquad.
//!
//! This crate wraps `dashu`'s base-10 big float to provide:
//! - An explicit working precision (`Precision`) instead of a process-wide flag
//! - Memoised constants (π)
//! - Elementary functions: `sin`, `cos`, `exp`, `sinh`, `cosh`, integer powers
//!
//! Every value a `Precision` hands out is rounded to its digit count, so
//! arithmetic between such values stays at that precision.
//!
//! ## Example
//!
//! ```rust,ignore
//! use hiquad_decimal::Precision;
//!
//! let ctx = Precision::new(50)?;
//! let x = ctx.parse("0.5")?;
//! println!("sin(0.5) = {}", ctx.sin(&x)?);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod elementary;
pub mod error;
pub mod precision;

#[cfg(test)]
mod proptests;

/// Decimal big float used throughout hiquad.
///
/// Its precision is counted in significant decimal digits.
pub type Decimal = dashu::float::DBig;

pub use elementary::{abs, is_zero, to_f64};
pub use error::DecimalError;
pub use precision::Precision;

/// Extra digits carried by elementary functions before rounding back.
pub const GUARD_DIGITS: usize = 10;
