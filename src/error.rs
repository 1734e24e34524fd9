//! Error types for rational arithmetic.

use thiserror::Error;

/// Failures raised by construction and inversion.
///
/// Both are logic errors on the caller's side: check [`Rational::is_zero`]
/// before inverting or dividing, and never hand a zero denominator to a
/// constructor.
///
/// [`Rational::is_zero`]: crate::Rational::is_zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum RationalError {
    /// A rational was built (or a denominator set) with a zero denominator.
    #[error("cannot construct a rational with a zero denominator")]
    InvalidDenominator,

    /// Zero was inverted, either directly or as the divisor of a division.
    #[error("cannot invert zero")]
    DivisionByZeroOnInvert,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RationalError>;
