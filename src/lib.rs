pub mod error;
pub mod prelude;
pub mod quad;
pub mod result;
pub mod riemann;
pub mod romberg;
pub mod simpson;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod trapezoid;
pub(crate) mod utils;
