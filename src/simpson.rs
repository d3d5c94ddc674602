//! Adaptive Simpson's rule. See Cheney and Kincaid, *Numerical Mathematics
//! and Computing* (6th ed.), p. 224.

use crate::error::QuadratureError;
use crate::utils::{cast, check_bounds};
use log::{debug, warn};
use num::Float;

/// Bookkeeping gathered while the recursion refines `[a, b]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Refinement<T> {
    /// Sum of the local error estimates `|two - one| / 15` of accepted panels
    pub err: T,
    /// Number of panels accepted because the depth cap was reached
    pub capped: usize,
}

/// Compute the integral of `f` from `a` to `b` using adaptive Simpson's
/// rule.
///
/// Each panel compares the one-panel Simpson estimate against the two-panel
/// one. When they agree to within `15 * epsilon` the Richardson-corrected
/// two-panel value is accepted; otherwise the panel is bisected and each half
/// is refined against `epsilon / 2`. A panel at recursion depth `level_max` is
/// accepted unconditionally, so at most `2^level_max` panels are used.
///
/// # Arguments
///
/// * `f` - Function to integrate.
/// * `a` - Lower bound of integration.
/// * `b` - Upper bound of integration.
/// * `epsilon` - Target absolute error. Must be non-negative.
/// * `level_max` - Maximum recursion depth. Must be at least one.
///
/// # Examples
///
/// ```
/// use cyphus_quadrature::prelude::*;
///
/// let res = simpson(|x: f64| x.sin(), 0.0, std::f64::consts::PI, 1e-8, 30).unwrap();
/// assert!((res - 2.0).abs() < 1e-8);
/// ```
pub fn simpson<T, F>(f: F, a: T, b: T, epsilon: T, level_max: usize) -> Result<T, QuadratureError>
where
    T: Float,
    F: Fn(T) -> T,
{
    let (val, refinement) = simpson_refine(f, a, b, epsilon, level_max)?;
    if refinement.capped > 0 {
        debug!(
            "Maximum level {} reached on {} panel(s)",
            level_max, refinement.capped
        );
    }
    Ok(val)
}

/// Validate the arguments and run the recursion from level zero.
pub(crate) fn simpson_refine<T, F>(
    f: F,
    a: T,
    b: T,
    epsilon: T,
    level_max: usize,
) -> Result<(T, Refinement<T>), QuadratureError>
where
    T: Float,
    F: Fn(T) -> T,
{
    check_bounds(a, b)?;
    if level_max == 0 {
        warn!("Invalid maximum level. Args = {:?}", [level_max]);
        return Err(QuadratureError::InvalidLevelMax);
    }
    // Rejects NaN as well
    if !(epsilon >= T::zero()) {
        warn!("Invalid tolerance. Args = {:?}", [epsilon.to_f64()]);
        return Err(QuadratureError::BadTol);
    }

    let mut refinement = Refinement {
        err: T::zero(),
        capped: 0,
    };
    let val = adaptive(&f, a, b, epsilon, 0, level_max, &mut refinement);
    Ok((val, refinement))
}

fn adaptive<T, F>(
    f: &F,
    a: T,
    b: T,
    epsilon: T,
    level: usize,
    level_max: usize,
    refinement: &mut Refinement<T>,
) -> T
where
    T: Float,
    F: Fn(T) -> T,
{
    let level = level + 1;

    let two = cast::<T, _>(2.0);
    let four = cast::<T, _>(4.0);
    let fifteen = cast::<T, _>(15.0);

    let h = b - a;
    let c = (a + b) / two;
    let d = (a + c) / two;
    let e = (c + b) / two;

    let fa = f(a);
    let fb = f(b);
    let fc = f(c);

    let one_simp = h * (fa + four * fc + fb) / cast::<T, _>(6.0);
    let two_simp = h * (fa + four * f(d) + two * fc + four * f(e) + fb) / cast::<T, _>(12.0);
    let delta = two_simp - one_simp;

    if level >= level_max {
        refinement.err = refinement.err + delta.abs() / fifteen;
        refinement.capped += 1;
        two_simp
    } else if delta.abs() < fifteen * epsilon {
        refinement.err = refinement.err + delta.abs() / fifteen;
        two_simp + delta / fifteen
    } else {
        let epsilon = epsilon / two;
        adaptive(f, a, c, epsilon, level, level_max, refinement)
            + adaptive(f, c, b, epsilon, level, level_max, refinement)
    }
}
