//! Working precision.
//!
//! A `Precision` is the explicit replacement for a global "digits" setting:
//! it is created once, passed to whatever needs to build or combine decimal
//! values, and rounds everything it produces to its digit count.

use std::str::FromStr;
use std::sync::OnceLock;

use dashu::integer::IBig;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::{Decimal, DecimalError, GUARD_DIGITS};

/// Number of significant decimal digits carried by a computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Precision {
    digits: usize,
}

impl Precision {
    /// Creates a precision of `digits` significant decimal digits.
    ///
    /// # Errors
    ///
    /// Returns `DecimalError::ZeroPrecision` if `digits` is zero.
    pub fn new(digits: usize) -> Result<Self, DecimalError> {
        if digits == 0 {
            return Err(DecimalError::ZeroPrecision);
        }
        Ok(Self { digits })
    }

    /// Returns the number of significant decimal digits.
    #[must_use]
    pub const fn digits(&self) -> usize {
        self.digits
    }

    /// Returns a precision with `extra` more digits.
    #[must_use]
    pub const fn with_guard(self, extra: usize) -> Self {
        Self {
            digits: self.digits + extra,
        }
    }

    /// Rounds `x` to this precision.
    #[must_use]
    pub fn round(&self, x: Decimal) -> Decimal {
        x.with_precision(self.digits).value()
    }

    /// Creates the integer `n` at this precision.
    #[must_use]
    pub fn int(&self, n: i64) -> Decimal {
        self.round(Decimal::from_parts(IBig::from(n), 0))
    }

    /// Creates `numerator / denominator` at this precision.
    ///
    /// # Errors
    ///
    /// Returns `DecimalError::DivisionByZero` if `denominator` is zero.
    pub fn ratio(&self, numerator: i64, denominator: i64) -> Result<Decimal, DecimalError> {
        if denominator == 0 {
            return Err(DecimalError::DivisionByZero);
        }
        Ok(&self.int(numerator) / &self.int(denominator))
    }

    /// Creates `10^exponent` at this precision.
    #[must_use]
    pub fn pow10(&self, exponent: isize) -> Decimal {
        self.round(Decimal::from_parts(IBig::ONE, exponent))
    }

    /// Spacing between 1 and the next representable value, `10^(1 - digits)`.
    #[must_use]
    pub fn epsilon(&self) -> Decimal {
        self.pow10(1 - self.digits as isize)
    }

    /// Parses a decimal literal and rounds it to this precision.
    ///
    /// # Errors
    ///
    /// Returns `DecimalError::Parse` if the literal is not a decimal number.
    pub fn parse(&self, literal: &str) -> Result<Decimal, DecimalError> {
        let value = Decimal::from_str(literal.trim())
            .map_err(|_| DecimalError::Parse(literal.to_string()))?;
        Ok(self.round(value))
    }

    /// Returns π at this precision.
    ///
    /// Values are memoised per digit count.
    #[must_use]
    pub fn pi(&self) -> Decimal {
        if let Some(pi) = pi_cache().read().get(&self.digits) {
            return pi.clone();
        }
        let pi = self.machin_pi();
        pi_cache().write().insert(self.digits, pi.clone());
        pi
    }

    /// π = 16·atan(1/5) − 4·atan(1/239).
    fn machin_pi(&self) -> Decimal {
        trace!(digits = self.digits, "computing pi");
        let work = self.with_guard(GUARD_DIGITS);
        let a = &work.int(16) * &work.atan_recip(5);
        let b = &work.int(4) * &work.atan_recip(239);
        self.round(&a - &b)
    }

    /// atan(1/m) for an integer m > 1 by its alternating Taylor series.
    fn atan_recip(&self, m: i64) -> Decimal {
        let x = &self.int(1) / &self.int(m);
        let x2 = &x * &x;
        let eps = self.pow10(-(self.digits as isize) - 1);

        let mut power = x.clone();
        let mut sum = x;
        let mut k = 1i64;
        loop {
            power = &power * &x2;
            let term = &power / &self.int(2 * k + 1);
            if term < eps {
                break;
            }
            sum = if k % 2 == 1 { &sum - &term } else { &sum + &term };
            k += 1;
        }
        sum
    }
}

fn pi_cache() -> &'static RwLock<FxHashMap<usize, Decimal>> {
    static CACHE: OnceLock<RwLock<FxHashMap<usize, Decimal>>> = OnceLock::new();
    CACHE.get_or_init(|| RwLock::new(FxHashMap::default()))
}
