//! Public quadrature entry points.
//!
//! Both routines integrate at `digits + guard_digits`, hand that working
//! precision to the integrand, and round the value back to the caller's
//! precision. The tolerance is `10^(−digits)`.
//!
//! # Example
//!
//! ```ignore
//! use hiquad_decimal::{Decimal, Precision};
//! use hiquad_integrate::{quad, quadts, QuadOptions};
//!
//! let ctx = Precision::new(50)?;
//! let f = |p: &Precision, x: &Decimal| p.sin(x);
//! let a = ctx.int(0);
//! let b = ctx.pi();
//! let composite = quad(&ctx, f, &a, &b, &QuadOptions::default())?;
//! let tanh_sinh = quadts(&ctx, f, &a, &b, &QuadOptions::default())?;
//! ```

use hiquad_decimal::{Decimal, DecimalError, Precision};
use tracing::debug;

use crate::adaptive::{adaptive_integrate, PanelRule};
use crate::options::{QuadOptions, QuadResult};
use crate::tanh_sinh::TanhSinhRule;
use crate::QuadratureError;

/// Integrates `f` over `[a, b]` with adaptive composite Gauss-Legendre
/// quadrature.
///
/// # Errors
///
/// Returns `QuadratureError::InvalidOptions` for unusable options and
/// `QuadratureError::Integrand` if `f` fails at any sampled point.
pub fn quad<F>(
    precision: &Precision,
    f: F,
    a: &Decimal,
    b: &Decimal,
    options: &QuadOptions,
) -> Result<QuadResult, QuadratureError>
where
    F: Fn(&Precision, &Decimal) -> Result<Decimal, DecimalError>,
{
    options.validate()?;
    if a == b {
        return Ok(QuadResult::zero(precision));
    }
    if a > b {
        return quad(precision, f, b, a, options).map(QuadResult::negate);
    }

    let work = precision.with_guard(options.guard_digits);
    let tolerance = precision.pow10(-(precision.digits() as isize));
    let rule = PanelRule::new(&work, options.panel_degree)?;

    let result = adaptive_integrate(
        &f,
        &work,
        &rule,
        &work.round(a.clone()),
        &work.round(b.clone()),
        &tolerance,
        &tolerance,
        options.max_subdivisions,
    )?;
    debug!(
        digits = precision.digits(),
        intervals = result.intervals,
        evaluations = result.evaluations,
        converged = result.converged,
        "quad finished"
    );

    Ok(QuadResult {
        value: precision.round(result.value),
        error: precision.round(result.error),
        evaluations: result.evaluations,
        converged: result.converged,
    })
}

/// Integrates `f` over `[a, b]` with tanh-sinh quadrature.
///
/// # Errors
///
/// Returns `QuadratureError::InvalidOptions` for unusable options and
/// `QuadratureError::Integrand` if `f` fails at any sampled point.
pub fn quadts<F>(
    precision: &Precision,
    f: F,
    a: &Decimal,
    b: &Decimal,
    options: &QuadOptions,
) -> Result<QuadResult, QuadratureError>
where
    F: Fn(&Precision, &Decimal) -> Result<Decimal, DecimalError>,
{
    options.validate()?;
    if a == b {
        return Ok(QuadResult::zero(precision));
    }
    if a > b {
        return quadts(precision, f, b, a, options).map(QuadResult::negate);
    }

    let work = precision.with_guard(options.guard_digits);
    let tolerance = precision.pow10(-(precision.digits() as isize));
    let mut rule = TanhSinhRule::new(&work);

    let result = rule.integrate(
        &f,
        &work.round(a.clone()),
        &work.round(b.clone()),
        &tolerance,
        options.max_level,
    )?;
    debug!(
        digits = precision.digits(),
        levels = result.levels,
        evaluations = result.evaluations,
        converged = result.converged,
        "quadts finished"
    );

    Ok(QuadResult {
        value: precision.round(result.value),
        error: precision.round(result.error),
        evaluations: result.evaluations,
        converged: result.converged,
    })
}
