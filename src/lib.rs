//! IIR-Core: Butterworth IIR filter design and validation library
//!
//! This library derives a discrete-time lowpass filter from design
//! tolerances and checks the result against them. It features:
//!
//! - Order and cutoff resolution from passband/stopband tolerances
//! - Analog Butterworth prototype synthesis
//! - Impulse-invariance discretization to `(b, a)` coefficients
//! - Frequency-response evaluation and band-compliance validation
//! - Empirical tone-probe attenuation testing
//!
//! Every stage is a pure computation over immutable values; results come
//! back as data for an external reporter, never as prints or plots.
//!
//! # Quick Start
//!
//! ```rust
//! use iir_core::config::{FilterSpecification, OrderSelection};
//! use iir_core::design;
//!
//! fn main() -> Result<(), iir_core::error::DesignError> {
//!     let spec = FilterSpecification {
//!         order: OrderSelection::Fixed(6),
//!         ..Default::default()
//!     };
//!
//!     let report = design::design(&spec)?;
//!     assert_eq!(report.parameters.minimum_order, 6);
//!     assert!(report.validation.is_compliant());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod design;
pub mod error;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::{
    default_probe_frequencies, load_specification, ConfigError, FilterSpecification,
    OrderSelection,
};
pub use design::{
    design, design_batch, design_with_probes, DesignParameters, DesignReport, DiscreteFilter,
    FrequencyResponse, ValidationResult,
};
pub use error::{DesignError, DesignResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "iir-core");
    }
}
