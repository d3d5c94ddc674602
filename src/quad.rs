use crate::error::QuadratureError;
use crate::result::{IntegrationResult, IntegrationRetCode};
use crate::riemann::{sum_lower, sum_upper};
use crate::romberg::romberg_table;
use crate::simpson::simpson_refine;
use crate::trapezoid::trapezoid;
use crate::utils::cast;
use num::Float;
use std::cell::Cell;

/// Quadrature rules understood by the integrator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RuleKind {
    LowerSum,
    UpperSum,
    Trapezoid,
    Romberg,
    Simpson,
}

/// A quadrature rule together with its parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rule<T> {
    /// Right-endpoint Riemann sum over `partitions` subintervals.
    LowerSum { partitions: usize },
    /// Left-endpoint Riemann sum over `partitions` subintervals.
    UpperSum { partitions: usize },
    /// Composite trapezoidal rule over `partitions` subintervals.
    Trapezoid { partitions: usize },
    /// Romberg extrapolation with `levels` halvings.
    Romberg { levels: usize },
    /// Adaptive Simpson's rule.
    Simpson { epsilon: T, level_max: usize },
}

impl<T> Rule<T> {
    pub fn kind(&self) -> RuleKind {
        match *self {
            Rule::LowerSum { .. } => RuleKind::LowerSum,
            Rule::UpperSum { .. } => RuleKind::UpperSum,
            Rule::Trapezoid { .. } => RuleKind::Trapezoid,
            Rule::Romberg { .. } => RuleKind::Romberg,
            Rule::Simpson { .. } => RuleKind::Simpson,
        }
    }
}

#[derive(Clone, Debug)]
/// One-dimensional integrator applying a single classical rule.
pub struct QuadratureIntegrator<T: Float> {
    /// Rule used by `integrate`.
    pub rule: Rule<T>,
}

impl<T: Float> QuadratureIntegrator<T> {
    /// Construct an integrator directly from a rule.
    pub fn from_rule(rule: Rule<T>) -> Self {
        QuadratureIntegrator { rule }
    }

    /// Integrate a function `f` over the interval `a` to `b`, returning
    /// an `IntegrationResult` object. Both bounds must be finite; reversed
    /// bounds give the negated integral.
    ///
    /// The value is the one the corresponding free function returns. The
    /// error estimate is reported for Romberg (difference of the last two
    /// extrapolation orders, when at least one level is used) and for
    /// Simpson (sum of the local panel estimates).
    ///
    /// # Examples
    ///
    /// Integrate a function over a finite interval: f(x) = x^2
    /// ```
    /// use cyphus_quadrature::prelude::*;
    ///
    /// let integrator = QuadratureIntegratorBuilder::default()
    ///     .rule(RuleKind::Romberg)
    ///     .levels(6)
    ///     .build();
    /// let res = integrator.integrate(|x: f64| x * x, 0.0, 1.0).unwrap();
    /// assert!((res.val - 1.0 / 3.0).abs() < 1e-12);
    /// assert_eq!(res.nevals, 65);
    /// ```
    pub fn integrate<F>(&self, f: F, a: T, b: T) -> Result<IntegrationResult<T>, QuadratureError>
    where
        F: Fn(T) -> T,
    {
        let nevals = Cell::new(0usize);
        let g = |x: T| {
            nevals.set(nevals.get() + 1);
            f(x)
        };

        let result = match self.rule {
            Rule::LowerSum { partitions } => {
                let val = sum_lower(&g, a, b, partitions)?;
                IntegrationResult::new(val, None, nevals.get())
            }
            Rule::UpperSum { partitions } => {
                let val = sum_upper(&g, a, b, partitions)?;
                IntegrationResult::new(val, None, nevals.get())
            }
            Rule::Trapezoid { partitions } => {
                let val = trapezoid(&g, a, b, partitions)?;
                IntegrationResult::new(val, None, nevals.get())
            }
            Rule::Romberg { levels } => {
                let table = romberg_table(&g, a, b, levels)?;
                let err = if levels > 0 {
                    Some((table[levels] - table[levels - 1]).abs())
                } else {
                    None
                };
                IntegrationResult::new(table[levels], err, nevals.get())
            }
            Rule::Simpson { epsilon, level_max } => {
                let (val, refinement) = simpson_refine(&g, a, b, epsilon, level_max)?;
                let mut result = IntegrationResult::new(val, Some(refinement.err), nevals.get());
                if refinement.capped > 0 {
                    result.code = IntegrationRetCode::MaxLevelReached;
                    result.issue_warning(level_max);
                }
                result
            }
        };

        Ok(result)
    }
}

/// Builder struct used to construct an integrator with wanted parameters.
pub struct QuadratureIntegratorBuilder<T: Float> {
    /// Rule to apply.
    rule: Option<RuleKind>,
    /// Number of subintervals for the fixed-partition rules.
    partitions: Option<usize>,
    /// Number of Romberg halvings.
    levels: Option<usize>,
    /// Absolute tolerance for Simpson's rule.
    epsilon: Option<T>,
    /// Maximum Simpson recursion depth.
    level_max: Option<usize>,
}

impl<T: Float> Default for QuadratureIntegratorBuilder<T> {
    fn default() -> Self {
        QuadratureIntegratorBuilder {
            rule: None,
            partitions: None,
            levels: None,
            epsilon: None,
            level_max: None,
        }
    }
}

impl<T: Float> QuadratureIntegratorBuilder<T> {
    /// Set the quadrature rule.
    pub fn rule(mut self, rule: RuleKind) -> Self {
        self.rule = Some(rule);
        self
    }
    /// Set the number of subintervals used by the sums and the trapezoid rule.
    pub fn partitions(mut self, partitions: usize) -> Self {
        self.partitions = Some(partitions);
        self
    }
    /// Set the number of Romberg refinement levels.
    pub fn levels(mut self, levels: usize) -> Self {
        self.levels = Some(levels);
        self
    }
    /// Set the absolute tolerance of Simpson's rule.
    pub fn epsilon(mut self, epsilon: T) -> Self {
        self.epsilon = Some(epsilon);
        self
    }
    /// Set the maximum recursion depth of Simpson's rule.
    pub fn level_max(mut self, level_max: usize) -> Self {
        self.level_max = Some(level_max);
        self
    }
    /// Build the integrator. Arguments are checked when integrating.
    pub fn build(self) -> QuadratureIntegrator<T> {
        let partitions = self.partitions.unwrap_or(100);
        let rule = match self.rule.unwrap_or(RuleKind::Simpson) {
            RuleKind::LowerSum => Rule::LowerSum { partitions },
            RuleKind::UpperSum => Rule::UpperSum { partitions },
            RuleKind::Trapezoid => Rule::Trapezoid { partitions },
            RuleKind::Romberg => Rule::Romberg {
                levels: self.levels.unwrap_or(8),
            },
            RuleKind::Simpson => Rule::Simpson {
                epsilon: self.epsilon.unwrap_or_else(|| cast(1e-8)),
                level_max: self.level_max.unwrap_or(30),
            },
        };
        QuadratureIntegrator { rule }
    }
}
