pub use crate::error::QuadratureError;
pub use crate::quad::{QuadratureIntegrator, QuadratureIntegratorBuilder, Rule, RuleKind};
pub use crate::result::{IntegrationResult, IntegrationRetCode};
pub use crate::riemann::{sum_lower, sum_upper};
pub use crate::romberg::{romberg, romberg_table};
pub use crate::simpson::simpson;
pub use crate::trapezoid::trapezoid;
