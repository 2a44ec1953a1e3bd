//! Arbitrary Precision Numerical Integration for hiquad
//!
//! This crate provides two independent quadrature routines over decimal big
//! floats, plus a machine-precision baseline.
//!
//! # Quick Start
//!
//! ```ignore
//! use hiquad_decimal::{Decimal, DecimalError, Precision};
//! use hiquad_integrate::{quad, quadts, QuadOptions};
//!
//! let ctx = Precision::new(50)?;
//! let f = |p: &Precision, x: &Decimal| -> Result<Decimal, DecimalError> { Ok(p.exp(x)) };
//!
//! // Adaptive composite Gauss-Legendre
//! let composite = quad(&ctx, f, &ctx.int(0), &ctx.int(1), &QuadOptions::default())?;
//!
//! // Tanh-sinh
//! let tanh_sinh = quadts(&ctx, f, &ctx.int(0), &ctx.int(1), &QuadOptions::default())?;
//! ```
//!
//! # Available Methods
//!
//! - **Gauss-Legendre rules**: nodes and weights computed at any precision
//! - **Adaptive integration**: error-driven bisection with Gauss-Legendre panels
//! - **Tanh-sinh**: double-exponential substitution with level doubling
//! - **`f64` baseline**: composite Simpson and G10K21 Gauss-Kronrod
//!
//! Integrands receive the working precision chosen by the routine, which is
//! the caller's precision plus `QuadOptions::guard_digits`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adaptive;
pub mod api;
pub mod error;
pub mod float64;
pub mod gauss_legendre;
pub mod options;
pub mod tanh_sinh;

#[cfg(test)]
mod proptests;

pub use adaptive::{adaptive_integrate, AdaptiveResult, PanelEstimate, PanelRule};
pub use api::{quad, quadts};
pub use error::QuadratureError;
pub use gauss_legendre::GaussLegendreRule;
pub use options::{QuadOptions, QuadResult};
pub use tanh_sinh::{TanhSinhResult, TanhSinhRule};
