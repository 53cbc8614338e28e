//! Error types and context management for property resolution and sampling

use crate::table::property::{PropertyDomain, PropertyKind};
use crate::tissue::label::TissueId;
use std::fmt;

/// Failures raised while constructing or drawing from a distribution
#[derive(Debug, Clone, PartialEq)]
pub enum DistributionError {
    /// Distribution parameters violate their invariants
    ///
    /// Raised at construction for non-positive standard deviations,
    /// inverted or empty bounds, and non-finite values.
    InvalidParameters {
        /// Which distribution family was being constructed
        family: &'static str,
        /// Explanation of the violated invariant
        reason: String,
    },

    /// Rejection sampling could not land inside the truncation bounds
    RejectionLimitExceeded {
        /// Number of draws attempted before giving up
        attempts: usize,
        /// Lower truncation bound
        lower: f64,
        /// Upper truncation bound
        upper: f64,
    },

    /// An alias entry reached the sampler without being resolved first
    UnresolvedAlias {
        /// Tissue the alias points at
        target: TissueId,
    },
}

impl fmt::Display for DistributionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameters { family, reason } => {
                write!(f, "Invalid {family} parameters: {reason}")
            }
            Self::RejectionLimitExceeded {
                attempts,
                lower,
                upper,
            } => {
                write!(
                    f,
                    "No draw fell inside [{lower}, {upper}] after {attempts} attempts"
                )
            }
            Self::UnresolvedAlias { target } => {
                write!(f, "Cannot sample an unresolved alias to '{target}'")
            }
        }
    }
}

impl std::error::Error for DistributionError {}

/// Failures raised while following alias chains through a property table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// Alias chain revisited a tissue or exceeded the hop limit
    AliasCycle {
        /// Tissue the lookup started from
        tissue: TissueId,
        /// Property being resolved
        kind: PropertyKind,
        /// Tissues visited in order, ending with the offending hop
        chain: Vec<TissueId>,
    },

    /// Table has no entry for this tissue and property
    ///
    /// Callers treat this as "not applicable", never as zero.
    PropertyUndefined {
        /// Tissue that lacks the entry
        tissue: TissueId,
        /// Property that was requested
        kind: PropertyKind,
    },

    /// Property was requested from a table of another physical domain
    DomainMismatch {
        /// Property that was requested
        kind: PropertyKind,
        /// Domain of the table that was queried
        table: PropertyDomain,
    },
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AliasCycle {
                tissue,
                kind,
                chain,
            } => {
                let path = chain
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" -> ");
                write!(f, "Alias cycle resolving {kind} for '{tissue}': {path}")
            }
            Self::PropertyUndefined { tissue, kind } => {
                write!(f, "{kind} is not defined for '{tissue}'")
            }
            Self::DomainMismatch { kind, table } => {
                write!(
                    f,
                    "{kind} belongs to the {} domain, not the {table} table",
                    kind.domain()
                )
            }
        }
    }
}

impl std::error::Error for ResolutionError {}

/// Failures raised while evaluating wavelength-dependent optical quantities
#[derive(Debug, Clone, PartialEq)]
pub enum EvaluatorError {
    /// Anisotropy of one or more makes μs = μs'/(1 − g) diverge
    DegenerateAnisotropy {
        /// Tissue whose anisotropy is degenerate
        tissue: TissueId,
        /// Offending anisotropy value
        g: f64,
    },

    /// Wavelength is not a finite positive number of nanometres
    InvalidWavelength {
        /// Offending wavelength in nm
        wavelength_nm: f64,
    },
}

impl fmt::Display for EvaluatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateAnisotropy { tissue, g } => {
                write!(
                    f,
                    "Anisotropy g = {g} for '{tissue}' leaves no finite scattering coefficient"
                )
            }
            Self::InvalidWavelength { wavelength_nm } => {
                write!(f, "Wavelength {wavelength_nm} nm must be finite and positive")
            }
        }
    }
}

impl std::error::Error for EvaluatorError {}

/// Main error type for all engine operations
#[derive(Debug)]
pub enum PropertyError {
    /// Distribution construction or sampling failed
    Distribution(DistributionError),

    /// Alias resolution failed
    Resolution(ResolutionError),

    /// Optical evaluation failed
    Evaluator(EvaluatorError),

    /// Sampling failed for a specific tissue property
    Sampling {
        /// Tissue being sampled
        tissue: TissueId,
        /// Property being sampled
        kind: PropertyKind,
        /// Underlying distribution failure
        source: DistributionError,
    },

    /// Caller-supplied argument failed validation
    InvalidArgument {
        /// Name of the argument
        argument: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Report output failed
    Io {
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for PropertyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Distribution(err) => write!(f, "{err}"),
            Self::Resolution(err) => write!(f, "{err}"),
            Self::Evaluator(err) => write!(f, "{err}"),
            Self::Sampling {
                tissue,
                kind,
                source,
            } => {
                write!(f, "Sampling {kind} for '{tissue}' failed: {source}")
            }
            Self::InvalidArgument {
                argument,
                value,
                reason,
            } => {
                write!(f, "Invalid argument '{argument}' = '{value}': {reason}")
            }
            Self::Io { operation, source } => {
                write!(f, "I/O error during {operation}: {source}")
            }
        }
    }
}

impl std::error::Error for PropertyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Distribution(err) | Self::Sampling { source: err, .. } => Some(err),
            Self::Resolution(err) => Some(err),
            Self::Evaluator(err) => Some(err),
            Self::Io { source, .. } => Some(source),
            Self::InvalidArgument { .. } => None,
        }
    }
}

impl From<DistributionError> for PropertyError {
    fn from(err: DistributionError) -> Self {
        Self::Distribution(err)
    }
}

impl From<ResolutionError> for PropertyError {
    fn from(err: ResolutionError) -> Self {
        Self::Resolution(err)
    }
}

impl From<EvaluatorError> for PropertyError {
    fn from(err: EvaluatorError) -> Self {
        Self::Evaluator(err)
    }
}

impl From<std::io::Error> for PropertyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            operation: "write",
            source: err,
        }
    }
}

/// Convenience type alias for engine results
pub type Result<T> = std::result::Result<T, PropertyError>;

/// Attaches the tissue and property being sampled to a distribution failure
pub trait WithProperty<T> {
    /// Wrap a distribution error with its sampling context
    ///
    /// # Errors
    ///
    /// Propagates the original error as [`PropertyError::Sampling`]
    fn for_property(self, tissue: TissueId, kind: PropertyKind) -> Result<T>;
}

impl<T> WithProperty<T> for std::result::Result<T, DistributionError> {
    fn for_property(self, tissue: TissueId, kind: PropertyKind) -> Result<T> {
        self.map_err(|source| PropertyError::Sampling {
            tissue,
            kind,
            source,
        })
    }
}

/// Create an invalid argument error
pub fn invalid_argument(
    argument: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PropertyError {
    PropertyError::InvalidArgument {
        argument,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid distribution parameter error
pub fn invalid_parameters(family: &'static str, reason: &impl ToString) -> DistributionError {
    DistributionError::InvalidParameters {
        family,
        reason: reason.to_string(),
    }
}
