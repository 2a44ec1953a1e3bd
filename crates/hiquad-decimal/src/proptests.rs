//! Property-based tests for the elementary functions.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{abs, Precision};

    fn p30() -> Precision {
        Precision::new(30).unwrap()
    }

    // Arguments n/1000 in [-20, 20]
    fn milli() -> impl Strategy<Value = i64> {
        -20_000i64..20_000i64
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn pythagorean_identity(n in milli()) {
            let p = p30();
            let x = p.ratio(n, 1000).unwrap();
            let s = p.sin(&x).unwrap();
            let c = p.cos(&x).unwrap();
            let one = &(&s * &s) + &(&c * &c);
            prop_assert!(abs(&(&one - &p.int(1))) < p.pow10(-27));
        }

        #[test]
        fn sine_is_odd(n in milli()) {
            let p = p30();
            let x = p.ratio(n, 1000).unwrap();
            let s = p.sin(&x).unwrap();
            let s_neg = p.sin(&-x).unwrap();
            prop_assert!(abs(&(&s + &s_neg)) < p.pow10(-28));
        }

        #[test]
        fn sine_matches_machine_precision(n in milli()) {
            let p = p30();
            let x = p.ratio(n, 1000).unwrap();
            let s = crate::to_f64(&p.sin(&x).unwrap());
            let expected = (n as f64 / 1000.0).sin();
            prop_assert!((s - expected).abs() < 1e-14);
        }

        #[test]
        fn exp_is_multiplicative(a in -5_000i64..5_000, b in -5_000i64..5_000) {
            let p = p30();
            let x = p.ratio(a, 1000).unwrap();
            let y = p.ratio(b, 1000).unwrap();
            let lhs = p.exp(&(&x + &y));
            let rhs = &p.exp(&x) * &p.exp(&y);
            prop_assert!(abs(&(&lhs - &rhs)) <= &p.pow10(-27) * &abs(&lhs));
        }
    }
}
