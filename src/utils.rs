use crate::error::QuadratureError;
use log::warn;
use num::{Float, ToPrimitive};

/// Convert a count or constant into the working float type. Values that do
/// not fit become NaN and propagate through the estimate.
#[inline]
pub(crate) fn cast<T: Float, N: ToPrimitive>(x: N) -> T {
    T::from(x).unwrap_or_else(T::nan)
}

#[inline]
pub(crate) fn check_bounds<T: Float>(a: T, b: T) -> Result<(), QuadratureError> {
    if a.is_finite() && b.is_finite() {
        Ok(())
    } else {
        warn!(
            "Invalid bounds. Args = {:?}",
            [a.to_f64(), b.to_f64()]
        );
        Err(QuadratureError::InvalidBounds)
    }
}

#[inline]
pub(crate) fn check_partitions(n: usize) -> Result<(), QuadratureError> {
    if n == 0 {
        warn!("Invalid number of subintervals. Args = {:?}", [n]);
        Err(QuadratureError::InvalidPartitions)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_cast() {
        let x: f64 = cast(7usize);
        assert_eq!(x, 7.0);
        let y: f32 = cast(0.5f64);
        assert_eq!(y, 0.5);
    }

    #[test]
    fn test_check_bounds() {
        assert!(check_bounds(0.0, 1.0).is_ok());
        assert!(check_bounds(1.0, -1.0).is_ok());
        assert_eq!(
            check_bounds(0.0, f64::INFINITY),
            Err(QuadratureError::InvalidBounds)
        );
        assert_eq!(
            check_bounds(f64::NAN, 1.0),
            Err(QuadratureError::InvalidBounds)
        );
    }

    #[test]
    fn test_check_partitions() {
        assert!(check_partitions(1).is_ok());
        assert_eq!(check_partitions(0), Err(QuadratureError::InvalidPartitions));
    }
}
