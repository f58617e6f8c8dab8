// src/design/mod.rs
//! The filter design pipeline
//!
//! Data flows strictly forward: specification → resolved parameters →
//! analog prototype → discrete filter → frequency response → validation,
//! with tone probes as an independent empirical cross-check on the
//! discretized filter. Every stage is a pure computation over immutable
//! inputs; independent specifications can be designed in parallel.

pub mod analog;
pub mod discretize;
pub mod resolver;
pub mod response;
pub mod tone_test;
pub mod validate;

pub use analog::AnalogPrototype;
pub use discretize::{impulse_invariance, DiscreteFilter};
pub use resolver::{resolve, DesignParameters};
pub use response::{FrequencyResponse, ResponsePoint};
pub use tone_test::{filter_signal, run_tone_tests, ToneExpectation, ToneTestCase};
pub use validate::{validate_response, BandReport, BandStatus, ValidationResult};

use crate::config::{default_probe_frequencies, FilterSpecification};
use crate::error::DesignResult;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Sampling interval used for the pole mapping. Normalized to 1 so the
/// digital frequency grid is numerically equal to the analog one, matching
/// the resolver's convention.
const NORMALIZED_TD: f64 = 1.0;

/// Everything one design run produces, as pure data.
///
/// The reporting collaborator renders this; the core never prints or
/// plots. All members serialize cleanly for external consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignReport {
    /// The specification the run was derived from.
    pub specification: FilterSpecification,
    /// Resolved order and cutoff, with diagnostics.
    pub parameters: DesignParameters,
    /// The analog Butterworth prototype.
    pub prototype: AnalogPrototype,
    /// The discretized filter coefficients.
    pub filter: DiscreteFilter,
    /// Frequency response sampled over `[0, pi]`.
    pub response: FrequencyResponse,
    /// Band compliance verdicts.
    pub validation: ValidationResult,
    /// Tone probe measurements; empty when probing was skipped.
    pub tone_tests: Vec<ToneTestCase>,
}

/// Run the full pipeline with the default probe plan.
pub fn design(spec: &FilterSpecification) -> DesignResult<DesignReport> {
    let probes = default_probe_frequencies(spec);
    design_with_probes(spec, &probes)
}

/// Run the full pipeline with an explicit probe set.
///
/// An empty probe slice skips tone testing; everything else still runs.
pub fn design_with_probes(
    spec: &FilterSpecification,
    probe_frequencies: &[f64],
) -> DesignResult<DesignReport> {
    let parameters = resolver::resolve(spec)?;
    let prototype = AnalogPrototype::butterworth(parameters.order, parameters.omega_c)?;
    let filter = discretize::impulse_invariance(&prototype, NORMALIZED_TD)?;
    let response = FrequencyResponse::evaluate_default(&filter)?;
    let validation = validate::validate_response(&response, spec, &parameters);
    let tone_tests = tone_test::run_tone_tests(&filter, spec, probe_frequencies);

    tracing::debug!(
        order = parameters.order,
        compliant = validation.is_compliant(),
        probes = tone_tests.len(),
        "design run complete"
    );

    Ok(DesignReport {
        specification: spec.clone(),
        parameters,
        prototype,
        filter,
        response,
        validation,
        tone_tests,
    })
}

/// Design several independent specifications in parallel.
///
/// Each run owns its whole chain; there is no shared state to synchronize.
pub fn design_batch(specs: &[FilterSpecification]) -> Vec<DesignResult<DesignReport>> {
    specs.par_iter().map(design).collect()
}
