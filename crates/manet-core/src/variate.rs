//! `Variate` — a closed set of scalar random distributions.
//!
//! Scenario parameters ("speed", "pause", "mean direction", …) are each a
//! distribution, not a number.  Representing them as one tagged enum keeps
//! model parameter records plain data: serializable, comparable, and
//! validated once at construction instead of per draw.
//!
//! Every `sample` call is an independent draw.  Models that need correlated
//! values (Gauss-Markov) keep the previous value themselves and mix a fresh
//! draw in.

use rand::Rng;
use rand::rngs::SmallRng;
use rand_distr::{Distribution, Normal};

use crate::{CoreError, CoreResult};

/// A scalar random variate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variate {
    /// Always returns `.0`.
    Constant(f64),

    /// Uniform over `[min, max)`.  Requires `min < max`.
    Uniform { min: f64, max: f64 },

    /// Normal with rejection outside `[mean - bound, mean + bound]`.
    ///
    /// `std_dev = 0` or `bound = 0` degenerates to `Constant(mean)`.
    Normal { mean: f64, std_dev: f64, bound: f64 },
}

impl Variate {
    /// Validate distribution parameters.  Called once when a model
    /// configuration is validated, so `sample` can assume well-formed input.
    pub fn validate(&self, what: &'static str) -> CoreResult<()> {
        match *self {
            Variate::Constant(c) => {
                if !c.is_finite() {
                    return Err(CoreError::Config(format!("{what}: non-finite constant {c}")));
                }
            }
            Variate::Uniform { min, max } => {
                if !min.is_finite() || !max.is_finite() || min >= max {
                    return Err(CoreError::EmptyInterval { what, min, max });
                }
            }
            Variate::Normal { mean, std_dev, bound } => {
                if !mean.is_finite() || !std_dev.is_finite() || !bound.is_finite() {
                    return Err(CoreError::Config(format!("{what}: non-finite normal parameter")));
                }
                if std_dev < 0.0 || bound < 0.0 {
                    return Err(CoreError::Config(format!(
                        "{what}: negative std_dev ({std_dev}) or bound ({bound})"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Draw one independent sample.
    pub fn sample(&self, rng: &mut SmallRng) -> f64 {
        match *self {
            Variate::Constant(c) => c,

            Variate::Uniform { min, max } => rng.gen_range(min..max),

            Variate::Normal { mean, std_dev, bound } => {
                if std_dev == 0.0 || bound == 0.0 {
                    return mean;
                }
                // validate() guarantees std_dev > 0, so Normal::new cannot fail.
                let Ok(dist) = Normal::new(mean, std_dev) else {
                    return mean;
                };
                loop {
                    let v = dist.sample(rng);
                    if (v - mean).abs() <= bound {
                        return v;
                    }
                }
            }
        }
    }

    /// The smallest value this variate can produce (used to reject
    /// configurations that could draw a non-positive speed).
    pub fn lower_bound(&self) -> f64 {
        match *self {
            Variate::Constant(c) => c,
            Variate::Uniform { min, .. } => min,
            Variate::Normal { mean, std_dev, bound } => {
                if std_dev == 0.0 || bound == 0.0 { mean } else { mean - bound }
            }
        }
    }
}
