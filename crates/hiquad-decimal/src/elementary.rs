//! Elementary functions at an explicit precision.
//!
//! `dashu` supplies `exp`; the trigonometric functions are evaluated here by
//! reducing the argument modulo π/2 and summing a Taylor series on
//! `|r| ≤ π/4`. All functions work with `GUARD_DIGITS` extra digits and round
//! the result back to the caller's precision.

use std::f64::consts::FRAC_PI_2;

use crate::{Decimal, DecimalError, Precision, GUARD_DIGITS};

/// Largest number of quarter turns removed by argument reduction.
const MAX_QUARTER_TURNS: f64 = 1e15;

/// Absolute value.
#[must_use]
pub fn abs(x: &Decimal) -> Decimal {
    if *x < Decimal::ZERO {
        -x.clone()
    } else {
        x.clone()
    }
}

/// Returns true if `x` is exactly zero.
#[must_use]
pub fn is_zero(x: &Decimal) -> bool {
    *x == Decimal::ZERO
}

/// Nearest `f64` to `x`.
#[must_use]
pub fn to_f64(x: &Decimal) -> f64 {
    x.to_f64().value()
}

impl Precision {
    /// Computes `1/x`.
    ///
    /// # Errors
    ///
    /// Returns `DecimalError::DivisionByZero` if `x` is zero.
    pub fn recip(&self, x: &Decimal) -> Result<Decimal, DecimalError> {
        if is_zero(x) {
            return Err(DecimalError::DivisionByZero);
        }
        Ok(&self.int(1) / &self.round(x.clone()))
    }

    /// Computes `x^n` by binary exponentiation.
    ///
    /// # Errors
    ///
    /// Returns `DecimalError::DivisionByZero` for a negative power of zero.
    pub fn powi(&self, x: &Decimal, n: i32) -> Result<Decimal, DecimalError> {
        let work = self.with_guard(GUARD_DIGITS);
        let mut base = work.round(x.clone());
        let mut exp = n.unsigned_abs();
        let mut acc = work.int(1);
        while exp > 0 {
            if exp & 1 == 1 {
                acc = &acc * &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = &base * &base;
            }
        }
        if n < 0 {
            acc = work.recip(&acc)?;
        }
        Ok(self.round(acc))
    }

    /// Computes `e^x`.
    #[must_use]
    pub fn exp(&self, x: &Decimal) -> Decimal {
        let work = self.with_guard(GUARD_DIGITS);
        self.round(work.round(x.clone()).exp())
    }

    /// Computes the hyperbolic sine.
    #[must_use]
    pub fn sinh(&self, x: &Decimal) -> Decimal {
        let work = self.with_guard(GUARD_DIGITS);
        let (e, inv) = work.exp_pair(x);
        self.round(&(&e - &inv) / &work.int(2))
    }

    /// Computes the hyperbolic cosine.
    #[must_use]
    pub fn cosh(&self, x: &Decimal) -> Decimal {
        let work = self.with_guard(GUARD_DIGITS);
        let (e, inv) = work.exp_pair(x);
        self.round(&(&e + &inv) / &work.int(2))
    }

    /// Returns `(e^x, e^-x)`.
    fn exp_pair(&self, x: &Decimal) -> (Decimal, Decimal) {
        let e = self.exp(x);
        let inv = &self.int(1) / &e;
        (e, inv)
    }

    /// Computes the sine.
    ///
    /// # Errors
    ///
    /// Returns `DecimalError::ArgumentTooLarge` if `|x|` exceeds about
    /// 10^15 quarter turns.
    pub fn sin(&self, x: &Decimal) -> Result<Decimal, DecimalError> {
        let (quadrant, r, work) = self.reduce_quarter_turns(x)?;
        Ok(self.round(work.quadrant_sin(quadrant, &r)))
    }

    /// Computes the cosine.
    ///
    /// # Errors
    ///
    /// Returns `DecimalError::ArgumentTooLarge` if `|x|` exceeds about
    /// 10^15 quarter turns.
    pub fn cos(&self, x: &Decimal) -> Result<Decimal, DecimalError> {
        // cos(x) = sin(x + π/2)
        let (quadrant, r, work) = self.reduce_quarter_turns(x)?;
        Ok(self.round(work.quadrant_sin((quadrant + 1) % 4, &r)))
    }

    /// Writes `x = k·π/2 + r` with `|r| ≲ π/4`.
    ///
    /// Returns `k mod 4`, `r`, and the precision `r` was computed at, which
    /// carries enough extra digits to absorb the cancellation in `x − k·π/2`.
    fn reduce_quarter_turns(&self, x: &Decimal) -> Result<(u8, Decimal, Precision), DecimalError> {
        let turns = (to_f64(x) / FRAC_PI_2).round();
        if !turns.is_finite() || turns.abs() > MAX_QUARTER_TURNS {
            return Err(DecimalError::ArgumentTooLarge(x.to_string()));
        }

        if turns == 0.0 {
            let work = self.with_guard(GUARD_DIGITS);
            return Ok((0, work.round(x.clone()), work));
        }

        let lost = turns.abs().log10().ceil() as usize + 1;
        let work = self.with_guard(GUARD_DIGITS + lost);
        let k = turns as i64;
        let half_pi = &work.pi() / &work.int(2);
        let r = &work.round(x.clone()) - &(&work.int(k) * &half_pi);
        Ok((k.rem_euclid(4) as u8, r, work))
    }

    /// sin(q·π/2 + r).
    fn quadrant_sin(&self, quadrant: u8, r: &Decimal) -> Decimal {
        match quadrant {
            0 => self.sin_series(r),
            1 => self.cos_series(r),
            2 => -self.sin_series(r),
            _ => -self.cos_series(r),
        }
    }

    fn sin_series(&self, r: &Decimal) -> Decimal {
        let r2 = r * r;
        let eps = self.epsilon();
        let mut term = r.clone();
        let mut sum = r.clone();
        let mut n = 1i64;
        loop {
            term = -(&(&term * &r2) / &self.int((2 * n) * (2 * n + 1)));
            sum = &sum + &term;
            if abs(&term) <= &eps * &abs(&sum) {
                break;
            }
            n += 1;
        }
        sum
    }

    fn cos_series(&self, r: &Decimal) -> Decimal {
        let r2 = r * r;
        let eps = self.epsilon();
        let mut term = self.int(1);
        let mut sum = self.int(1);
        let mut n = 1i64;
        loop {
            term = -(&(&term * &r2) / &self.int((2 * n - 1) * (2 * n)));
            sum = &sum + &term;
            if abs(&term) <= &eps * &abs(&sum) {
                break;
            }
            n += 1;
        }
        sum
    }
}
