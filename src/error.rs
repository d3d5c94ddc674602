use std::error::Error;
use std::fmt;

/// Reasons a quadrature rule refuses its arguments.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum QuadratureError {
    /// Zero subintervals requested for a fixed-partition rule
    InvalidPartitions,
    /// Zero maximum recursion depth requested for Simpson's rule
    InvalidLevelMax,
    /// Romberg refinement level would overflow the panel count
    TooManyLevels,
    /// Negative or NaN tolerance
    BadTol,
    /// Infinite or NaN integration bound
    InvalidBounds,
}

impl Error for QuadratureError {}

impl fmt::Display for QuadratureError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            QuadratureError::InvalidPartitions => {
                write!(f, "Number of subintervals must be at least one")
            }
            QuadratureError::InvalidLevelMax => {
                write!(f, "Maximum recursion level must be at least one")
            }
            QuadratureError::TooManyLevels => {
                write!(f, "Number of Romberg levels overflows the panel count")
            }
            QuadratureError::BadTol => {
                write!(f, "Invalid tolerance. Tolerance must be non-negative")
            }
            QuadratureError::InvalidBounds => {
                write!(f, "Integration bounds must be finite")
            }
        }
    }
}
