use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{Product, Sum};
use std::mem;
use std::ops::{Add, Mul, Neg, Sub};

use log::{debug, trace};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::error::{RationalError, Result};

// ============================================================================
// Rational Type
// ============================================================================

/// An exact fraction of two arbitrary-precision integers.
///
/// Every constructor yields the canonical form: the denominator is positive
/// and shares no factor with the numerator, and zero is stored as `0/1`.
/// [`set_numerator`](Rational::set_numerator) and
/// [`set_denominator`](Rational::set_denominator) store their argument as-is
/// and may leave the value non-canonical until [`normalize`](Rational::normalize)
/// and [`reduce`](Rational::reduce) are called. Comparison, hashing and
/// formatting stay correct for such values.
#[derive(Debug, Clone)]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

// ============================================================================
// Construction
// ============================================================================

impl Rational {
    /// Create a rational in canonical form.
    ///
    /// Fails with [`RationalError::InvalidDenominator`] when `denom` is zero.
    pub fn new(numer: BigInt, denom: BigInt) -> Result<Rational> {
        if denom.is_zero() {
            debug!("rejected rational with zero denominator (numerator {numer})");
            return Err(RationalError::InvalidDenominator);
        }
        Ok(Rational::from_nonzero_parts(numer, denom))
    }

    /// Create a rational from machine integers.
    pub fn from_i64s(numer: i64, denom: i64) -> Result<Rational> {
        Rational::new(BigInt::from(numer), BigInt::from(denom))
    }

    /// Create the integral rational `numer/1`.
    pub fn from_integer(numer: BigInt) -> Rational {
        // n/1 is already canonical
        Rational {
            numer,
            denom: BigInt::one(),
        }
    }

    pub fn from_i64(numer: i64) -> Rational {
        Rational::from_integer(BigInt::from(numer))
    }

    /// Canonicalize a pair whose denominator is known to be non-zero.
    fn from_nonzero_parts(numer: BigInt, denom: BigInt) -> Rational {
        let mut r = Rational { numer, denom };
        r.normalize();
        r.reduce();
        r
    }

    /// A canonicalized copy, for views that must not depend on representation.
    fn canonical(&self) -> Rational {
        Rational::from_nonzero_parts(self.numer.clone(), self.denom.clone())
    }
}

// ============================================================================
// Canonicalization
// ============================================================================

impl Rational {
    /// Move the sign onto the numerator so the denominator is positive.
    pub fn normalize(&mut self) {
        if self.denom.is_negative() {
            self.numer = -mem::take(&mut self.numer);
            self.denom = -mem::take(&mut self.denom);
        }
    }

    /// Divide numerator and denominator by their greatest common divisor.
    ///
    /// A zero numerator collapses the denominator to one (`gcd(0, d) = |d|`).
    pub fn reduce(&mut self) {
        let g = self.numer.gcd(&self.denom);
        if g.is_one() || g.is_zero() {
            return;
        }
        trace!("reducing {}/{} by {g}", self.numer, self.denom);
        self.numer /= &g;
        self.denom /= &g;
    }
}

// ============================================================================
// Queries and Accessors
// ============================================================================

impl Rational {
    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    /// True for values strictly greater than zero, whatever the denominator's sign.
    pub fn is_positive(&self) -> bool {
        !self.numer.is_zero() && self.numer.is_positive() == self.denom.is_positive()
    }

    /// True for values strictly less than zero, whatever the denominator's sign.
    pub fn is_negative(&self) -> bool {
        !self.numer.is_zero() && self.numer.is_positive() != self.denom.is_positive()
    }

    /// True when the value has no fractional part.
    pub fn is_integer(&self) -> bool {
        (&self.numer % &self.denom).is_zero()
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numer
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denom
    }

    /// Replace the numerator without canonicalizing.
    pub fn set_numerator(&mut self, numer: BigInt) {
        self.numer = numer;
    }

    /// Replace the denominator without canonicalizing.
    ///
    /// A zero denominator is rejected and leaves the value untouched.
    pub fn set_denominator(&mut self, denom: BigInt) -> Result<()> {
        if denom.is_zero() {
            debug!("rejected zero denominator for {}", self.numer);
            return Err(RationalError::InvalidDenominator);
        }
        self.denom = denom;
        Ok(())
    }

    /// Consume the value, returning `(numerator, denominator)`.
    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numer, self.denom)
    }
}

// ============================================================================
// Negation and Inversion
// ============================================================================

impl Rational {
    /// Flip the sign in place.
    pub fn negate(&mut self) {
        self.numer = -mem::take(&mut self.numer);
        self.normalize();
    }

    /// Replace the value by its reciprocal in place.
    ///
    /// Fails with [`RationalError::DivisionByZeroOnInvert`] on zero, leaving
    /// the value unchanged.
    pub fn invert(&mut self) -> Result<()> {
        if self.numer.is_zero() {
            debug!("attempted to invert zero");
            return Err(RationalError::DivisionByZeroOnInvert);
        }
        mem::swap(&mut self.numer, &mut self.denom);
        self.normalize();
        Ok(())
    }

    /// The reciprocal as a new value.
    pub fn recip(&self) -> Result<Rational> {
        let mut r = self.clone();
        r.invert()?;
        Ok(r)
    }
}

// ============================================================================
// Arithmetic Operations
// ============================================================================

impl Rational {
    /// `a/b + c/d = (ad + bc) / bd`
    pub fn add(p: &Rational, q: &Rational) -> Rational {
        let numer = &p.numer * &q.denom + &p.denom * &q.numer;
        let denom = &p.denom * &q.denom;
        Rational::from_nonzero_parts(numer, denom)
    }

    /// `p - q = p + (-q)`
    pub fn sub(p: &Rational, q: &Rational) -> Rational {
        let mut negated = q.clone();
        negated.negate();
        Rational::add(p, &negated)
    }

    /// Multiplication with cross-reduction.
    ///
    /// Common factors between each numerator and the other operand's
    /// denominator are divided out before multiplying, which keeps the
    /// intermediate products small.
    pub fn mult(p: &Rational, q: &Rational) -> Rational {
        let g_ad = p.numer.gcd(&q.denom);
        let g_bc = p.denom.gcd(&q.numer);
        let numer = (&p.numer / &g_ad) * (&q.numer / &g_bc);
        let denom = (&p.denom / &g_bc) * (&q.denom / &g_ad);
        Rational::from_nonzero_parts(numer, denom)
    }

    /// `p / q = p * (1/q)`
    ///
    /// Fails with [`RationalError::DivisionByZeroOnInvert`] when `q` is zero.
    pub fn div(p: &Rational, q: &Rational) -> Result<Rational> {
        let inverted = q.recip()?;
        Ok(Rational::mult(p, &inverted))
    }

    pub fn plus(&self, other: &Rational) -> Rational {
        Rational::add(self, other)
    }

    pub fn minus(&self, other: &Rational) -> Rational {
        Rational::sub(self, other)
    }

    pub fn times(&self, other: &Rational) -> Rational {
        Rational::mult(self, other)
    }

    pub fn divided_by(&self, other: &Rational) -> Result<Rational> {
        Rational::div(self, other)
    }

    /// Division returning `None` for a zero divisor.
    pub fn checked_div(&self, other: &Rational) -> Option<Rational> {
        Rational::div(self, other).ok()
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident, $func:path) => {
        impl $imp<&Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Rational {
                $func(self, rhs)
            }
        }

        impl $imp<Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                $func(self, &rhs)
            }
        }

        impl $imp<&Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Rational {
                $func(&self, rhs)
            }
        }

        impl $imp<Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                $func(&self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add, Rational::add);
forward_binop!(Sub, sub, Rational::sub);
forward_binop!(Mul, mul, Rational::mult);

impl Neg for Rational {
    type Output = Rational;

    fn neg(mut self) -> Rational {
        self.negate();
        self
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        -self.clone()
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Rational {
        iter.fold(Rational::zero(), |acc, x| Rational::add(&acc, &x))
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Rational {
        iter.fold(Rational::zero(), |acc, x| Rational::add(&acc, x))
    }
}

impl Product for Rational {
    fn product<I: Iterator<Item = Rational>>(iter: I) -> Rational {
        iter.fold(Rational::one(), |acc, x| Rational::mult(&acc, &x))
    }
}

impl<'a> Product<&'a Rational> for Rational {
    fn product<I: Iterator<Item = &'a Rational>>(iter: I) -> Rational {
        iter.fold(Rational::one(), |acc, x| Rational::mult(&acc, x))
    }
}

// ============================================================================
// Equality and Comparison
// ============================================================================

impl Ord for Rational {
    /// Cross-multiplication: `a/b` vs `c/d` takes the sign of `(ad - bc) * bd`.
    fn cmp(&self, other: &Self) -> Ordering {
        let diff = &self.numer * &other.denom - &self.denom * &other.numer;
        let ord = diff.cmp(&BigInt::zero());
        if self.denom.is_negative() != other.denom.is_negative() {
            ord.reverse()
        } else {
            ord
        }
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Rational {}

impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Equal values share a canonical form
        let canonical = self.canonical();
        canonical.numer.hash(state);
        canonical.denom.hash(state);
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl Rational {
    /// Nearest `f64`, dividing the float images of both terms.
    ///
    /// Huge terms follow IEEE 754 and may produce infinity or NaN.
    pub fn to_f64(&self) -> f64 {
        let numer = self.numer.to_f64().unwrap_or(f64::NAN);
        let denom = self.denom.to_f64().unwrap_or(f64::NAN);
        numer / denom
    }

    pub fn to_f32(&self) -> f32 {
        let numer = self.numer.to_f32().unwrap_or(f32::NAN);
        let denom = self.denom.to_f32().unwrap_or(f32::NAN);
        numer / denom
    }

    /// The integral value, if there is no fractional part.
    fn to_integer(&self) -> Option<BigInt> {
        if self.is_integer() {
            Some(&self.numer / &self.denom)
        } else {
            None
        }
    }
}

impl ToPrimitive for Rational {
    fn to_i64(&self) -> Option<i64> {
        self.to_integer()?.to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_integer()?.to_u64()
    }

    fn to_i128(&self) -> Option<i128> {
        self.to_integer()?.to_i128()
    }

    fn to_u128(&self) -> Option<u128> {
        self.to_integer()?.to_u128()
    }

    fn to_f32(&self) -> Option<f32> {
        Some(Rational::to_f32(self))
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Rational::to_f64(self))
    }
}

impl Zero for Rational {
    fn zero() -> Rational {
        Rational::from_integer(BigInt::zero())
    }

    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl One for Rational {
    fn one() -> Rational {
        Rational::from_integer(BigInt::one())
    }
}

impl Default for Rational {
    fn default() -> Rational {
        Rational::zero()
    }
}

impl From<BigInt> for Rational {
    fn from(numer: BigInt) -> Rational {
        Rational::from_integer(numer)
    }
}

impl From<i64> for Rational {
    fn from(numer: i64) -> Rational {
        Rational::from_i64(numer)
    }
}

impl From<i32> for Rational {
    fn from(numer: i32) -> Rational {
        Rational::from_i64(i64::from(numer))
    }
}

impl TryFrom<(BigInt, BigInt)> for Rational {
    type Error = RationalError;

    fn try_from((numer, denom): (BigInt, BigInt)) -> Result<Rational> {
        Rational::new(numer, denom)
    }
}

impl TryFrom<(i64, i64)> for Rational {
    type Error = RationalError;

    fn try_from((numer, denom): (i64, i64)) -> Result<Rational> {
        Rational::from_i64s(numer, denom)
    }
}

#[cfg(feature = "ratio-interop")]
impl From<Rational> for num_rational::BigRational {
    fn from(r: Rational) -> Self {
        num_rational::BigRational::new(r.numer, r.denom)
    }
}

#[cfg(feature = "ratio-interop")]
impl From<num_rational::BigRational> for Rational {
    fn from(r: num_rational::BigRational) -> Self {
        // Ratio never holds a zero denominator
        Rational::from_nonzero_parts(r.numer().clone(), r.denom().clone())
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl fmt::Display for Rational {
    /// Integers print bare, proper fractions as `n/d`, and improper ones as
    /// mixed numbers `q r/d`. The sign always leads.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut r = self.canonical();
        if r.numer.is_negative() {
            f.write_str("-")?;
            r.negate();
        }

        if r.denom.is_one() {
            return write!(f, "{}", r.numer);
        }

        let (quot, rem) = r.numer.div_rem(&r.denom);
        if quot.is_positive() {
            write!(f, "{quot} {rem}/{}", r.denom)
        } else {
            write!(f, "{}/{}", r.numer, r.denom)
        }
    }
}
