//! Scalar random quantities drawn once per phantom instance
//!
//! Literature values come in four shapes: a fixed constant, a Gaussian, a
//! Gaussian truncated to a plausible interval, and a bare measured range.
//! Tissues that borrow another tissue's value are represented by an explicit
//! alias, which the resolver replaces before anything is sampled.

use crate::io::configuration::REJECTION_LIMIT;
use crate::io::error::{DistributionError, invalid_parameters};
use crate::math::probability::{truncated_normal_mass, truncated_normal_mean};
use crate::tissue::label::TissueId;
use ndarray::Array1;
use rand::Rng;
use rand_distr::{Distribution as _, Normal, Uniform};
use std::fmt;

/// Scalar property value or the recipe for drawing one
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distribution {
    /// Fixed value, consumes no randomness
    Constant(f64),
    /// Unbounded normal distribution
    Gaussian {
        /// Mean
        mean: f64,
        /// Standard deviation
        std: f64,
    },
    /// Normal distribution restricted to `[lower, upper]`
    TruncatedGaussian {
        /// Mean of the untruncated parent
        mean: f64,
        /// Standard deviation of the untruncated parent
        std: f64,
        /// Lower bound, inclusive
        lower: f64,
        /// Upper bound, inclusive
        upper: f64,
    },
    /// Uniform draw over a measured literature range
    Uniform {
        /// Lower end of the range
        lower: f64,
        /// Upper end of the range
        upper: f64,
    },
    /// Reuse the entry of another tissue for the same property
    Alias(TissueId),
}

impl Distribution {
    /// Create a fixed value
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::InvalidParameters`] if `value` is not finite
    pub fn constant(value: f64) -> Result<Self, DistributionError> {
        if !value.is_finite() {
            return Err(invalid_parameters("constant", &"value must be finite"));
        }
        Ok(Self::Constant(value))
    }

    /// Create a Gaussian `N(mean, std²)`
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::InvalidParameters`] if `std <= 0` or any
    /// parameter is not finite
    pub fn gaussian(mean: f64, std: f64) -> Result<Self, DistributionError> {
        check_normal("gaussian", mean, std)?;
        Ok(Self::Gaussian { mean, std })
    }

    /// Create a truncated Gaussian `TN(mean, std, lower, upper)`
    ///
    /// The mean may sit outside the bounds; such distributions are legal but
    /// usually exhaust the rejection limit when sampled.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::InvalidParameters`] if `std <= 0`,
    /// `lower >= upper`, or any parameter is not finite
    pub fn truncated_gaussian(
        mean: f64,
        std: f64,
        lower: f64,
        upper: f64,
    ) -> Result<Self, DistributionError> {
        check_normal("truncated gaussian", mean, std)?;
        check_interval("truncated gaussian", lower, upper)?;

        let acceptance = truncated_normal_mass(mean, std, lower, upper);
        if acceptance < 1.0 / REJECTION_LIMIT as f64 {
            log::warn!(
                "TN({mean}, {std}, {lower}, {upper}) accepts only {acceptance:.3e} of draws"
            );
        }

        Ok(Self::TruncatedGaussian {
            mean,
            std,
            lower,
            upper,
        })
    }

    /// Create a uniform distribution over `[lower, upper]`
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::InvalidParameters`] if `lower >= upper`
    /// or either bound is not finite
    pub fn uniform(lower: f64, upper: f64) -> Result<Self, DistributionError> {
        check_interval("uniform", lower, upper)?;
        Ok(Self::Uniform { lower, upper })
    }

    /// Create an alias to another tissue's entry
    pub const fn alias(target: TissueId) -> Self {
        Self::Alias(target)
    }

    /// Draw one value using the default rejection limit
    ///
    /// # Errors
    ///
    /// Returns an error if this is an unresolved alias or if a truncated
    /// Gaussian exhausts [`REJECTION_LIMIT`]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64, DistributionError> {
        self.sample_with_limit(rng, REJECTION_LIMIT)
    }

    /// Draw one value, giving a truncated Gaussian at most `limit` attempts
    ///
    /// # Errors
    ///
    /// Returns an error if this is an unresolved alias, if the parameters were
    /// bypassed into an invalid state, or if a truncated Gaussian exhausts
    /// `limit`
    pub fn sample_with_limit<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        limit: usize,
    ) -> Result<f64, DistributionError> {
        match *self {
            Self::Constant(value) => Ok(value),
            Self::Gaussian { mean, std } => Ok(normal(mean, std)?.sample(rng)),
            Self::TruncatedGaussian {
                mean,
                std,
                lower,
                upper,
            } => {
                let parent = normal(mean, std)?;
                for _ in 0..limit {
                    let draw = parent.sample(rng);
                    if (lower..=upper).contains(&draw) {
                        return Ok(draw);
                    }
                }
                Err(DistributionError::RejectionLimitExceeded {
                    attempts: limit,
                    lower,
                    upper,
                })
            }
            Self::Uniform { lower, upper } => {
                let range = Uniform::new_inclusive(lower, upper)
                    .map_err(|err| invalid_parameters("uniform", &err))?;
                Ok(range.sample(rng))
            }
            Self::Alias(target) => Err(DistributionError::UnresolvedAlias { target }),
        }
    }

    /// Draw `count` independent values
    ///
    /// # Errors
    ///
    /// Returns the first sampling failure
    pub fn sample_n<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: usize,
    ) -> Result<Array1<f64>, DistributionError> {
        let draws = (0..count)
            .map(|_| self.sample(rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Array1::from(draws))
    }

    /// Analytic mean of the distribution
    ///
    /// Returns `None` for aliases and for truncations with no usable mass.
    pub fn expected_value(&self) -> Option<f64> {
        match *self {
            Self::Constant(value) => Some(value),
            Self::Gaussian { mean, .. } => Some(mean),
            Self::TruncatedGaussian {
                mean,
                std,
                lower,
                upper,
            } => truncated_normal_mean(mean, std, lower, upper),
            Self::Uniform { lower, upper } => Some(0.5 * (lower + upper)),
            Self::Alias(_) => None,
        }
    }

    /// Probability that a single untruncated draw is accepted
    ///
    /// Every variant other than a truncated Gaussian accepts all draws.
    pub fn acceptance_probability(&self) -> f64 {
        match *self {
            Self::TruncatedGaussian {
                mean,
                std,
                lower,
                upper,
            } => truncated_normal_mass(mean, std, lower, upper),
            _ => 1.0,
        }
    }

    /// Whether the value is fixed
    pub const fn is_constant(&self) -> bool {
        matches!(self, Self::Constant(_))
    }

    /// Whether this entry points at another tissue
    pub const fn is_alias(&self) -> bool {
        matches!(self, Self::Alias(_))
    }
}

/// Literature notation: `N(μ, σ)`, `TN(μ, σ, a, b)`, `U(a, b)`
impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "{value}"),
            Self::Gaussian { mean, std } => write!(f, "N({mean}, {std})"),
            Self::TruncatedGaussian {
                mean,
                std,
                lower,
                upper,
            } => write!(f, "TN({mean}, {std}, {lower}, {upper})"),
            Self::Uniform { lower, upper } => write!(f, "U({lower}, {upper})"),
            Self::Alias(target) => write!(f, "-> {target}"),
        }
    }
}

fn check_normal(family: &'static str, mean: f64, std: f64) -> Result<(), DistributionError> {
    if !mean.is_finite() || !std.is_finite() {
        return Err(invalid_parameters(family, &"mean and std must be finite"));
    }
    if std <= 0.0 {
        return Err(invalid_parameters(
            family,
            &format!("std must be positive, got {std}"),
        ));
    }
    Ok(())
}

fn check_interval(family: &'static str, lower: f64, upper: f64) -> Result<(), DistributionError> {
    if !lower.is_finite() || !upper.is_finite() {
        return Err(invalid_parameters(family, &"bounds must be finite"));
    }
    if lower >= upper {
        return Err(invalid_parameters(
            family,
            &format!("lower bound {lower} must be below upper bound {upper}"),
        ));
    }
    Ok(())
}

fn normal(mean: f64, std: f64) -> Result<Normal<f64>, DistributionError> {
    Normal::new(mean, std).map_err(|err| invalid_parameters("gaussian", &err))
}
