//! # hiquad
//!
//! Computes ∫₁² x·sin(1/x³) dx at 50 significant decimal digits with two
//! independent quadrature routines and compares them with a known value.
//!
//! ## Crates
//!
//! - [`decimal`]: explicit working precision and elementary functions
//! - [`integrate`]: adaptive Gauss-Legendre, tanh-sinh and `f64` baselines
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hiquad::{run, RunConfig};
//!
//! let report = run(&RunConfig::default())?;
//! report.write_to(&mut std::io::stdout().lock())?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use hiquad_decimal as decimal;
pub use hiquad_integrate as integrate;

pub mod runner;

pub use runner::{integrand, run, Report, RunConfig, RunError, DEFAULT_DIGITS, REFERENCE_VALUE};
