use crate::error::QuadratureError;
use crate::utils::{cast, check_bounds, check_partitions};
use num::Float;

/// Compute the integral of `f` from `a` to `b` using the composite
/// trapezoidal rule with `n` subintervals. See Cheney and Kincaid,
/// *Numerical Mathematics and Computing* (6th ed.), p. 191.
///
/// The error is O(h^2) for smooth integrands.
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
/// let res = trapezoid(|x: f64| x * x, 0.0, 1.0, 1000).unwrap();
/// assert!((res - 1.0 / 3.0).abs() < 1e-6);
/// ```
pub fn trapezoid<T, F>(f: F, a: T, b: T, n: usize) -> Result<T, QuadratureError>
where
    T: Float,
    F: Fn(T) -> T,
{
    check_bounds(a, b)?;
    check_partitions(n)?;

    let h = (b - a) / cast::<T, _>(n);
    let mut sum = cast::<T, _>(0.5) * (f(a) + f(b));
    for i in 1..n {
        sum = sum + f(a + cast::<T, _>(i) * h);
    }
    Ok(sum * h)
}
