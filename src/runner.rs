//! The fixed computation: integrate `x·sin(1/x³)` over `[1, 2]` twice and
//! report both values against the reference.

use std::io::{self, Write};

use hiquad_decimal::{abs, Decimal, DecimalError, Precision};
use hiquad_integrate::{quad, quadts, QuadOptions, QuadResult, QuadratureError};
use thiserror::Error;
use tracing::info;

/// Known value of ∫₁² x·sin(1/x³) dx.
pub const REFERENCE_VALUE: &str = "0.47700710215784439527606573611131026296";

/// Significant decimal digits used by the binary.
pub const DEFAULT_DIGITS: usize = 50;

/// Configuration of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Significant decimal digits of every value the run produces
    pub digits: usize,
    /// Options shared by both quadrature routines
    pub options: QuadOptions,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            digits: DEFAULT_DIGITS,
            options: QuadOptions::default(),
        }
    }
}

impl RunConfig {
    /// Sets the number of significant digits.
    #[must_use]
    pub fn with_digits(mut self, digits: usize) -> Self {
        self.digits = digits;
        self
    }

    /// Sets the quadrature options.
    #[must_use]
    pub fn with_options(mut self, options: QuadOptions) -> Self {
        self.options = options;
        self
    }
}

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum RunError {
    /// The precision or a constant could not be set up.
    #[error(transparent)]
    Decimal(#[from] DecimalError),

    /// One of the quadratures failed.
    #[error(transparent)]
    Quadrature(#[from] QuadratureError),
}

/// Outcome of a run.
#[derive(Clone, Debug)]
pub struct Report {
    /// Adaptive composite result (printed as "Симпсон (quad)")
    pub simpson: QuadResult,
    /// Tanh-sinh result (printed as "Гаусс (quadts)")
    pub gauss: QuadResult,
    /// |simpson − gauss|
    pub difference: Decimal,
}

impl Report {
    /// Writes the four result lines.
    ///
    /// # Errors
    ///
    /// Propagates write failures.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Симпсон (quad):  {}", self.simpson.value)?;
        writeln!(out, "Гаусс (quadts):  {}", self.gauss.value)?;
        writeln!(out, "Эталон        :  {REFERENCE_VALUE}")?;
        writeln!(out, "Разность      :        {}", self.difference)
    }
}

/// f(x) = x·sin(1/x³)
///
/// # Errors
///
/// Fails at `x = 0`.
pub fn integrand(precision: &Precision, x: &Decimal) -> Result<Decimal, DecimalError> {
    let inv_cube = precision.powi(x, -3)?;
    let sine = precision.sin(&inv_cube)?;
    Ok(precision.round(x * &sine))
}

/// Runs both quadratures over `[1, 2]`.
///
/// # Errors
///
/// Returns `RunError` if the precision is invalid or either quadrature fails.
pub fn run(config: &RunConfig) -> Result<Report, RunError> {
    let precision = Precision::new(config.digits)?;
    info!(digits = config.digits, "integrating x·sin(1/x³) over [1, 2]");

    let a = precision.int(1);
    let b = precision.int(2);

    let simpson = quad(&precision, integrand, &a, &b, &config.options)?;
    let gauss = quadts(&precision, integrand, &a, &b, &config.options)?;
    let difference = abs(&(&simpson.value - &gauss.value));

    info!(
        quad_evaluations = simpson.evaluations,
        quadts_evaluations = gauss.evaluations,
        difference = %difference,
        "integration finished"
    );

    Ok(Report {
        simpson,
        gauss,
        difference,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::OnceLock;

    use super::*;

    fn report_50() -> &'static Report {
        static REPORT: OnceLock<Report> = OnceLock::new();
        REPORT.get_or_init(|| run(&RunConfig::default()).unwrap())
    }

    fn render(report: &Report) -> String {
        let mut out = Vec::new();
        report.write_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn error_vs_reference(value: &Decimal, digits: usize) -> Decimal {
        let p = Precision::new(digits).unwrap();
        let reference = p.parse(REFERENCE_VALUE).unwrap();
        abs(&(value - &reference))
    }

    #[test]
    fn test_both_methods_match_reference() {
        // The reference literal carries 38 decimals.
        let report = report_50();
        let p = Precision::new(DEFAULT_DIGITS).unwrap();
        let tolerance = p.pow10(-37);
        assert!(report.simpson.converged);
        assert!(report.gauss.converged);
        assert!(error_vs_reference(&report.simpson.value, DEFAULT_DIGITS) < tolerance);
        assert!(error_vs_reference(&report.gauss.value, DEFAULT_DIGITS) < tolerance);
    }

    #[test]
    fn test_methods_agree_to_forty_digits() {
        let report = report_50();
        let p = Precision::new(DEFAULT_DIGITS).unwrap();
        assert!(report.difference < p.pow10(-40), "difference {}", report.difference);
    }

    #[test]
    fn test_output_has_four_fixed_lines() {
        let text = render(report_50());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Симпсон (quad):  0.4770071021578443952760657361113102629"));
        assert!(lines[1].starts_with("Гаусс (quadts):  0.4770071021578443952760657361113102629"));
        assert_eq!(
            lines[2],
            "Эталон        :  0.47700710215784439527606573611131026296"
        );
        assert!(lines[3].starts_with("Разность      :        "));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_run_is_idempotent() {
        let again = run(&RunConfig::default()).unwrap();
        assert_eq!(render(report_50()), render(&again));
    }

    #[test]
    fn test_reduced_precision_limits_agreement() {
        let config = RunConfig::default().with_digits(15);
        let report = run(&config).unwrap();
        let p = Precision::new(50).unwrap();
        for value in [&report.simpson.value, &report.gauss.value] {
            let err = error_vs_reference(value, 50);
            assert!(err < p.pow10(-13), "15-digit result {value} too far off");
            assert!(err > p.pow10(-20), "15-digit result {value} is too accurate");
            assert!(value.precision() <= 15);
        }
    }

    #[test]
    fn test_zero_digits_rejected() {
        let result = run(&RunConfig::default().with_digits(0));
        assert!(matches!(
            result,
            Err(RunError::Decimal(DecimalError::ZeroPrecision))
        ));
    }

    #[test]
    fn test_invalid_options_rejected() {
        let options = QuadOptions::default().with_panel_degree(0);
        let result = run(&RunConfig::default().with_digits(10).with_options(options));
        assert!(matches!(
            result,
            Err(RunError::Quadrature(QuadratureError::InvalidOptions(_)))
        ));
    }

    #[test]
    fn test_integrand_values() {
        let p = Precision::new(30).unwrap();
        // f(1) = sin(1)
        let at_one = integrand(&p, &p.int(1)).unwrap();
        assert_eq!(at_one, p.sin(&p.int(1)).unwrap());
        assert_eq!(integrand(&p, &p.int(0)), Err(DecimalError::DivisionByZero));
    }
}
