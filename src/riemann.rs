//! Fixed-partition Riemann sums. Both sums follow Cheney and Kincaid,
//! *Numerical Mathematics and Computing* (6th ed.), p. 185.

use crate::error::QuadratureError;
use crate::utils::{cast, check_bounds, check_partitions};
use num::Float;

/// Compute the lower sum of `f` over `[a, b]` with `n` subintervals.
///
/// This is the right-endpoint Riemann sum `h * (f(a + h) + ... + f(b))`,
/// with samples accumulated from `b` back towards `a`. It bounds the
/// integral from below only when `f` is monotonically decreasing.
///
/// # Arguments
///
/// * `f` - Function to integrate.
/// * `a` - Lower bound of integration.
/// * `b` - Upper bound of integration.
/// * `n` - Number of subintervals. Must be at least one.
///
/// # Examples
///
/// ```
/// use cyphus_quadrature::prelude::*;
///
/// let sum = sum_lower(|x: f64| x, 0.0, 1.0, 4).unwrap();
/// assert!((sum - 0.625).abs() < 1e-15);
/// ```
pub fn sum_lower<T, F>(f: F, a: T, b: T, n: usize) -> Result<T, QuadratureError>
where
    T: Float,
    F: Fn(T) -> T,
{
    check_bounds(a, b)?;
    check_partitions(n)?;

    let h = (b - a) / cast::<T, _>(n);
    let mut sum = T::zero();
    for i in (1..=n).rev() {
        sum = sum + f(a + cast::<T, _>(i) * h);
    }
    Ok(sum * h)
}

/// Compute the upper sum of `f` over `[a, b]` with `n` subintervals.
///
/// Obtained from the lower sum by swapping the sample at `b` for the one at
/// `a`, which makes it the left-endpoint Riemann sum.
///
/// # Examples
///
/// ```
/// use cyphus_quadrature::prelude::*;
///
/// let sum = sum_upper(|x: f64| x, 0.0, 1.0, 4).unwrap();
/// assert!((sum - 0.375).abs() < 1e-15);
/// ```
pub fn sum_upper<T, F>(f: F, a: T, b: T, n: usize) -> Result<T, QuadratureError>
where
    T: Float,
    F: Fn(T) -> T,
{
    let lower = sum_lower(&f, a, b, n)?;
    Ok(lower + (b - a) * (f(a) - f(b)) / cast::<T, _>(n))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_utils::*;
    use std::cell::Cell;

    #[test]
    fn test_linear_identity() {
        let f = |x: f64| x;
        for &n in &[1usize, 2, 7, 100] {
            let lower = sum_lower(f, -1.0, 3.0, n).unwrap();
            let upper = sum_upper(f, -1.0, 3.0, n).unwrap();
            test_abs(upper - lower, 4.0 * (-1.0 - 3.0) / n as f64, 1e-12);
        }
    }

    #[test]
    fn test_single_panel() {
        let f = |x: f64| x * x + 1.0;
        let lower = sum_lower(f, 1.0, 3.0, 1).unwrap();
        let upper = sum_upper(f, 1.0, 3.0, 1).unwrap();

        test_rel(lower, 2.0 * f(3.0), 1e-15);
        test_rel(upper, 2.0 * f(1.0), 1e-15);
    }

    #[test]
    fn test_monotone_bracket() {
        // exp(-x) is decreasing, so the lower sum really is a lower bound
        let f = |x: f64| (-x).exp();
        let exact = 1.0 - (-2.0f64).exp();
        let lower = sum_lower(f, 0.0, 2.0, 50).unwrap();
        let upper = sum_upper(f, 0.0, 2.0, 50).unwrap();

        assert!(lower < exact && exact < upper);
        test_rel(lower, exact, 5e-2);
        test_rel(upper, exact, 5e-2);
    }

    #[test]
    fn test_summation_order() {
        let samples = std::cell::RefCell::new(Vec::new());
        let f = |x: f64| {
            samples.borrow_mut().push(x);
            x
        };
        sum_lower(f, 0.0, 4.0, 4).unwrap();
        assert_eq!(*samples.borrow(), vec![4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_nevals() {
        let count = Cell::new(0);
        sum_lower(counted(cube, &count), 0.0, 1.0, 10).unwrap();
        assert_eq!(count.get(), 10);

        count.set(0);
        sum_upper(counted(cube, &count), 0.0, 1.0, 10).unwrap();
        assert_eq!(count.get(), 12);
    }

    #[test]
    fn test_invalid_args() {
        assert_eq!(
            sum_lower(cube, 0.0, 1.0, 0),
            Err(QuadratureError::InvalidPartitions)
        );
        assert_eq!(
            sum_upper(cube, 0.0, 1.0, 0),
            Err(QuadratureError::InvalidPartitions)
        );
        assert_eq!(
            sum_lower(cube, 0.0, f64::NAN, 3),
            Err(QuadratureError::InvalidBounds)
        );
    }

    #[test]
    fn test_f32() {
        let lower = sum_lower(|x: f32| 2.0 * x, 0.0f32, 1.0f32, 2).unwrap();
        assert!((lower - 1.5).abs() < 1e-6);
    }
}
