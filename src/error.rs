// src/error.rs
//! Unified error handling for the filter design pipeline
//!
//! Every stage checks the precondition it is responsible for and surfaces a
//! typed failure immediately. There is no retry or default-substitution path
//! inside the core; relaxing tolerances and re-resolving is a caller-level
//! decision. A failed stage never leaks a partial filter.

use num_complex::Complex64;
use thiserror::Error;

/// Errors produced by the design pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DesignError {
    /// Malformed or infeasible tolerances/frequencies.
    #[error("invalid specification: {field} = {value}: {reason}")]
    InvalidSpecification {
        /// Name of the offending specification field.
        field: &'static str,
        /// The value that failed the check.
        value: f64,
        /// Why the value is unusable.
        reason: &'static str,
    },

    /// Non-positive filter order.
    #[error("invalid filter order {order}: order must be at least 1")]
    InvalidOrder {
        /// The rejected order.
        order: u32,
    },

    /// Repeated analog poles are outside the impulse-invariance contract.
    #[error("repeated analog pole near {pole}: impulse invariance requires simple poles")]
    UnsupportedPoleMultiplicity {
        /// One pole of the coincident pair.
        pole: Complex64,
    },

    /// Imaginary parts failed to cancel when collapsing complex coefficients.
    #[error("numerical instability in {stage}: relative imaginary residual {residual:e}")]
    NumericalInstability {
        /// Pipeline stage that observed the residual.
        stage: &'static str,
        /// Largest relative imaginary magnitude seen.
        residual: f64,
    },

    /// Denominator evaluated to zero at a requested frequency.
    #[error("degenerate filter: denominator vanishes at omega = {omega}")]
    DegenerateFilter {
        /// Frequency in rad/sample where the evaluation broke down.
        omega: f64,
    },
}

/// Result type alias for design operations.
pub type DesignResult<T> = Result<T, DesignError>;
