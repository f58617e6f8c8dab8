// src/config/constants.rs
//! Numeric constants for the design pipeline
//!
//! Centralized so stage tolerances never appear as magic numbers inside the
//! algorithms.

/// Tolerances for complex algebra.
pub mod tolerance {
    /// Relative imaginary residue allowed when a complex coefficient vector
    /// is collapsed to real coefficients. Conjugate pole pairs cancel far
    /// below this; anything above it is an implementation error.
    pub const COEFFICIENT_IMAG_RELATIVE: f64 = 1e-9;

    /// Poles closer than this (relative to their magnitude) are treated as
    /// repeated and rejected by the discretizer.
    pub const POLE_SEPARATION_RELATIVE: f64 = 1e-8;
}

/// Frequency-response evaluation parameters.
pub mod response {
    /// Default number of grid points over `[0, pi]`.
    pub const DEFAULT_POINTS: usize = 512;

    /// Smallest usable grid: both endpoints.
    pub const MIN_POINTS: usize = 2;

    /// Floor added to the magnitude before taking the log, guarding
    /// `log(0)` at response nulls.
    pub const LOG_MAGNITUDE_EPSILON: f64 = 1e-10;

    /// A denominator magnitude at or below this fraction of the summed
    /// coefficient magnitudes counts as an on-circle pole: the evaluation
    /// is degenerate, not merely small.
    pub const DEGENERATE_DENOMINATOR_RELATIVE: f64 = 1e-12;
}

/// Band-compliance checking.
pub mod validation {
    /// Margin in dB absorbing numerical noise at the upper band-edge
    /// bounds. A design tolerance, not a correctness fudge.
    pub const MARGIN_DB: f64 = 0.1;
}

/// Tone attenuation test parameters.
pub mod tone {
    /// Probe sinusoid duration in seconds.
    pub const TEST_DURATION_S: f64 = 0.02;

    /// Fraction of the output discarded as filter transient.
    pub const TRANSIENT_FRACTION: f64 = 0.5;

    /// Slack in dB applied to pass/reject verdicts, covering transient and
    /// measurement noise.
    pub const VERDICT_SLACK_DB: f64 = 3.0;

    /// Input RMS at or below this reports `-inf` attenuation instead of a
    /// ratio.
    pub const SILENT_RMS: f64 = 1e-10;
}
