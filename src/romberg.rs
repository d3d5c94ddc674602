//! Romberg integration: repeated halving of the trapezoidal rule followed by
//! Richardson extrapolation. See Cheney and Kincaid, *Numerical Mathematics
//! and Computing* (6th ed.), p. 206.

use crate::error::QuadratureError;
use crate::utils::{cast, check_bounds};
use log::warn;
use ndarray::Array1;
use num::Float;

/// Build the extrapolated Romberg table of `f` over `[a, b]` with `n`
/// refinement levels.
///
/// The returned table has `n + 1` entries; entry `j` is the Romberg estimate
/// of order `j` built from trapezoid sums with up to `2^j` panels. The table
/// is filled in place, first with the trapezoid sums and then by the
/// extrapolation sweep, so `f` is evaluated `2^n + 1` times in total.
pub fn romberg_table<T, F>(f: F, a: T, b: T, n: usize) -> Result<Array1<T>, QuadratureError>
where
    T: Float,
    F: Fn(T) -> T,
{
    check_bounds(a, b)?;
    if n >= usize::BITS as usize {
        warn!("Too many Romberg levels. Args = {:?}", [n]);
        return Err(QuadratureError::TooManyLevels);
    }

    let mut r = Array1::<T>::zeros(n + 1);
    let half = cast::<T, _>(0.5);

    let mut h = b - a;
    r[0] = half * h * (f(a) + f(b));
    for i in 1..=n {
        h = h * half;
        // Odd multiples of the new step are the midpoints of the old panels
        let mut sum = T::zero();
        for k in (1..(1usize << i)).step_by(2) {
            sum = sum + f(a + cast::<T, _>(k) * h);
        }
        r[i] = half * r[i - 1] + sum * h;
    }

    let four = cast::<T, _>(4.0);
    for i in 1..=n {
        let denom = four.powi(i as i32) - T::one();
        for j in (i..=n).rev() {
            r[j] = r[j] + (r[j] - r[j - 1]) / denom;
        }
    }

    Ok(r)
}

/// Compute the integral of `f` from `a` to `b` by Romberg extrapolation with
/// `n` refinement levels.
///
/// With `n = 0` this is the one-panel trapezoid rule. The estimate is exact
/// for polynomials of degree up to `2n + 1`. The cost doubles with every
/// level, so `n` is usually kept between 5 and 10.
///
/// # Examples
///
/// ```
/// use cyphus_quadrature::prelude::*;
///
/// let res = romberg(|x: f64| x * x * x, 0.0, 1.0, 5).unwrap();
/// assert!((res - 0.25).abs() < 1e-10);
/// ```
pub fn romberg<T, F>(f: F, a: T, b: T, n: usize) -> Result<T, QuadratureError>
where
    T: Float,
    F: Fn(T) -> T,
{
    let r = romberg_table(f, a, b, n)?;
    Ok(r[n])
}
