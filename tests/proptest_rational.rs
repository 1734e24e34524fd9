use std::cmp::Ordering;

use bigratio::{BigInt, Rational, RationalError};
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use proptest::prelude::*;

// ============================================================================
// Strategies for Generating Rational Values
// ============================================================================

/// Strategy for numerators, including zero and negatives
fn small_i64() -> impl Strategy<Value = i64> {
    -1_000_000i64..1_000_000i64
}

/// Strategy for terms far outside machine range
fn huge_bigint() -> impl Strategy<Value = BigInt> {
    (any::<i64>(), any::<i64>(), any::<u64>()).prop_map(|(hi, mid, lo)| {
        (BigInt::from(hi) << 128) + (BigInt::from(mid) << 64) + BigInt::from(lo)
    })
}

/// Strategy for non-zero integers (for denominators and divisors)
fn non_zero_i64() -> impl Strategy<Value = i64> {
    small_i64().prop_filter("Must be non-zero", |x| *x != 0)
}

fn non_zero_bigint() -> impl Strategy<Value = BigInt> {
    huge_bigint().prop_filter("Must be non-zero", |x| !x.is_zero())
}

/// Strategy for valid rationals from machine-sized terms
fn small_rational() -> impl Strategy<Value = Rational> {
    (small_i64(), non_zero_i64()).prop_map(|(n, d)| Rational::from_i64s(n, d).unwrap())
}

/// Strategy for rationals mixing small and huge terms
fn rational() -> impl Strategy<Value = Rational> {
    prop_oneof![
        small_rational(),
        (huge_bigint(), non_zero_bigint()).prop_map(|(n, d)| Rational::new(n, d).unwrap()),
    ]
}

fn non_zero_rational() -> impl Strategy<Value = Rational> {
    rational().prop_filter("Must be non-zero", |r| !r.is_zero())
}

fn is_canonical(r: &Rational) -> bool {
    if r.numerator().is_zero() {
        r.denominator().is_one()
    } else {
        r.denominator().is_positive() && r.numerator().gcd(r.denominator()).is_one()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    // ========================================================================
    // Canonical Form Properties
    // ========================================================================

    #[test]
    fn construct_is_canonical(n in huge_bigint(), d in non_zero_bigint()) {
        let r = Rational::new(n, d).unwrap();
        prop_assert!(is_canonical(&r));
    }

    #[test]
    fn canonical_form_is_unique(n in small_i64(), d in non_zero_i64(), k in non_zero_i64()) {
        // n/d and (nk)/(dk) denote the same value
        let a = Rational::from_i64s(n, d).unwrap();
        let b = Rational::new(BigInt::from(n) * k, BigInt::from(d) * k).unwrap();
        prop_assert_eq!(a.numerator(), b.numerator());
        prop_assert_eq!(a.denominator(), b.denominator());
    }

    #[test]
    fn zero_denominator_fails(n in huge_bigint()) {
        prop_assert_eq!(
            Rational::new(n, BigInt::zero()).unwrap_err(),
            RationalError::InvalidDenominator
        );
    }

    #[test]
    fn arithmetic_results_are_canonical(p in rational(), q in non_zero_rational()) {
        prop_assert!(is_canonical(&p.plus(&q)));
        prop_assert!(is_canonical(&p.minus(&q)));
        prop_assert!(is_canonical(&p.times(&q)));
        prop_assert!(is_canonical(&p.divided_by(&q).unwrap()));
    }

    // ========================================================================
    // Algebraic Properties
    // ========================================================================

    #[test]
    fn add_commutative(p in rational(), q in rational()) {
        prop_assert_eq!(Rational::add(&p, &q), Rational::add(&q, &p));
    }

    #[test]
    fn mult_commutative(p in rational(), q in rational()) {
        prop_assert_eq!(Rational::mult(&p, &q), Rational::mult(&q, &p));
    }

    #[test]
    fn add_associative(p in rational(), q in rational(), r in rational()) {
        let left = Rational::add(&Rational::add(&p, &q), &r);
        let right = Rational::add(&p, &Rational::add(&q, &r));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn sub_self_is_zero(p in rational()) {
        let zero = Rational::sub(&p, &p);
        prop_assert!(zero.numerator().is_zero());
        prop_assert!(zero.denominator().is_one());
    }

    #[test]
    fn mult_inverse_is_one(p in non_zero_rational()) {
        let one = Rational::mult(&p, &p.recip().unwrap());
        prop_assert!(one.numerator().is_one());
        prop_assert!(one.denominator().is_one());
    }

    #[test]
    fn div_is_mult_by_inverse(p in rational(), q in non_zero_rational()) {
        let mut inverse = q.clone();
        inverse.invert().unwrap();
        prop_assert_eq!(Rational::div(&p, &q).unwrap(), Rational::mult(&p, &inverse));
    }

    #[test]
    fn div_by_zero_fails(p in rational()) {
        prop_assert_eq!(
            Rational::div(&p, &Rational::zero()).unwrap_err(),
            RationalError::DivisionByZeroOnInvert
        );
    }

    #[test]
    fn neg_neg_is_identity(p in rational()) {
        prop_assert_eq!(-(-&p), p);
    }

    // ========================================================================
    // Comparison Properties
    // ========================================================================

    #[test]
    fn equal_iff_same_canonical_terms(p in small_rational(), q in small_rational()) {
        let same_terms = p.numerator() == q.numerator() && p.denominator() == q.denominator();
        prop_assert_eq!(p.cmp(&q) == Ordering::Equal, same_terms);
    }

    #[test]
    fn compare_antisymmetric(p in rational(), q in rational()) {
        prop_assert_eq!(p.cmp(&q), q.cmp(&p).reverse());
    }

    #[test]
    fn compare_matches_sign_of_difference(p in rational(), q in rational()) {
        let diff = Rational::sub(&p, &q);
        let expected = if diff.is_zero() {
            Ordering::Equal
        } else if diff.is_positive() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
        prop_assert_eq!(p.cmp(&q), expected);
    }

    // ========================================================================
    // Agreement with num-rational
    // ========================================================================

    #[test]
    fn arithmetic_agrees_with_big_rational(p in rational(), q in non_zero_rational()) {
        let bp = BigRational::new(p.numerator().clone(), p.denominator().clone());
        let bq = BigRational::new(q.numerator().clone(), q.denominator().clone());

        prop_assert_eq!(BigRational::from(p.plus(&q)), &bp + &bq);
        prop_assert_eq!(BigRational::from(p.minus(&q)), &bp - &bq);
        prop_assert_eq!(BigRational::from(p.times(&q)), &bp * &bq);
        prop_assert_eq!(BigRational::from(p.divided_by(&q).unwrap()), &bp / &bq);
        prop_assert_eq!(p.cmp(&q), bp.cmp(&bq));
    }

    #[test]
    fn float_narrowing_preserves_sign(p in small_rational()) {
        let f = p.to_f64();
        if p.is_positive() {
            prop_assert!(f > 0.0);
        } else if p.is_negative() {
            prop_assert!(f < 0.0);
        } else {
            prop_assert_eq!(f, 0.0);
        }
    }
}
