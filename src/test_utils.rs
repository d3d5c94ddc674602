use std::cell::Cell;

/// Assert that `result` agrees with `expected` to within `relative_error`.
/// Falls back to an absolute comparison when `expected` is zero.
pub(crate) fn test_rel(result: f64, expected: f64, relative_error: f64) {
    let status = if result.is_nan() || expected.is_nan() {
        result.is_nan() != expected.is_nan()
    } else if result.is_infinite() || expected.is_infinite() {
        result != expected
    } else if expected != 0.0 {
        (result - expected).abs() / expected.abs() > relative_error
    } else {
        result.abs() > relative_error
    };

    assert!(
        !status,
        "observed: {:?}, expected: {:?}, tolerance: {:?}",
        result, expected, relative_error
    );
}

/// Assert that `result` is within `abs_error` of `expected`.
pub(crate) fn test_abs(result: f64, expected: f64, abs_error: f64) {
    assert!(
        (result - expected).abs() <= abs_error,
        "observed: {:?}, expected: {:?}, tolerance: {:?}",
        result,
        expected,
        abs_error
    );
}

/// Wrap `f` so that every evaluation bumps `count`.
pub(crate) fn counted<'a, F>(f: F, count: &'a Cell<usize>) -> impl Fn(f64) -> f64 + 'a
where
    F: Fn(f64) -> f64 + 'a,
{
    move |x| {
        count.set(count.get() + 1);
        f(x)
    }
}

/// Cubic test integrand, integral over [0, 1] is 1/4
pub(crate) fn cube(x: f64) -> f64 {
    x * x * x
}

/// Quintic test integrand, integral over [0, 2] is 14/3
pub(crate) fn quintic(x: f64) -> f64 {
    x.powi(5) - 3.0 * x * x + 1.0
}

/// Peaked integrand, integral over [-1, 1] is 2 atan(10) / 10
pub(crate) fn runge(x: f64) -> f64 {
    (1.0 + 100.0 * x * x).recip()
}
