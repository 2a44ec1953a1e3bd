//! Property-based tests for the quadrature rules.

#[cfg(test)]
mod tests {
    use hiquad_decimal::{abs, Decimal, DecimalError, Precision};
    use proptest::prelude::*;

    use crate::float64::gauss_kronrod21;
    use crate::GaussLegendreRule;

    fn p30() -> Precision {
        Precision::new(30).unwrap()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn gauss_legendre_exact_for_low_degree(points in 1usize..8, k in 0i32..16) {
            prop_assume!((k as usize) < 2 * points);
            let p = p30();
            let rule = GaussLegendreRule::new(&p, points).unwrap();
            let f = |p: &Precision, x: &Decimal| p.powi(x, k);
            let value = rule.integrate(&f, &p, &p.int(0), &p.int(1)).unwrap();
            let expected = p.ratio(1, i64::from(k) + 1).unwrap();
            prop_assert!(abs(&(&value - &expected)) < p.pow10(-26));
        }

        #[test]
        fn gauss_legendre_nodes_inside_interval(points in 2usize..24) {
            let p = p30();
            let rule = GaussLegendreRule::new(&p, points).unwrap();
            let one = p.int(1);
            for pair in rule.nodes().windows(2) {
                prop_assert!(pair[0] > pair[1]);
            }
            for x in rule.nodes() {
                prop_assert!(*x > Decimal::ZERO && *x < one);
            }
        }

        #[test]
        fn gauss_legendre_is_linear_in_interval(a in -50i64..50, len in 1i64..50) {
            // ∫ₐᵇ 1 dx = b − a
            let p = p30();
            let rule = GaussLegendreRule::new(&p, 5).unwrap();
            let f = |p: &Precision, _: &Decimal| -> Result<Decimal, DecimalError> { Ok(p.int(1)) };
            let value = rule.integrate(&f, &p, &p.int(a), &p.int(a + len)).unwrap();
            prop_assert!(abs(&(&value - &p.int(len))) < p.pow10(-25));
        }

        #[test]
        fn gauss_kronrod_error_small_for_polynomials(c in -10.0f64..10.0) {
            let result = gauss_kronrod21(&|x: f64| c * x * x + 1.0, -1.0, 1.0);
            prop_assert!((result.value - (2.0 * c / 3.0 + 2.0)).abs() < 1e-12);
            prop_assert!(result.error < 1e-12);
        }
    }
}
