//! Arbitrary-precision rational numbers.
//!
//! [`Rational`] is a fraction of two [`BigInt`](num_bigint::BigInt)s that
//! every constructor leaves in canonical form: positive denominator, no
//! common factor, and zero stored as `0/1`. Arithmetic never mutates its
//! operands; the in-place operations (`normalize`, `reduce`, `negate`,
//! `invert`, the setters) take `&mut self` and make mutation explicit.
//!
//! ```
//! use bigratio::Rational;
//!
//! let a = Rational::from_i64s(7, 4)?;
//! let b = Rational::from_i64s(1, 4)?;
//! assert_eq!((&a + &b).to_string(), "2");
//! assert_eq!(a.to_string(), "1 3/4");
//! assert!(Rational::div(&a, &Rational::from(0)).is_err());
//! # Ok::<(), bigratio::RationalError>(())
//! ```

pub mod error;
pub mod rational;

// Re-export commonly used items for convenience
pub use error::{RationalError, Result};
pub use num_bigint::BigInt;
pub use rational::Rational;
