// src/design/validate.rs
//! Compliance checks of an evaluated response against the tolerances
//!
//! The grid is partitioned into the passband (`omega <= omega_p`) and the
//! stopband (`omega >= omega_s`); samples exactly at an edge belong to that
//! edge's band. A band with no grid samples passes trivially but is
//! reported as not evaluated, which matters for test design.

use crate::config::constants::validation;
use crate::config::FilterSpecification;
use crate::design::resolver::DesignParameters;
use crate::design::response::FrequencyResponse;
use serde::{Deserialize, Serialize};

/// Verdict for one band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BandStatus {
    /// Every sample in the band met its bound.
    Compliant,
    /// At least one sample broke a bound.
    Violated,
    /// No grid sample fell inside the band.
    NotEvaluated,
}

/// Measured extrema and verdict for one band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandReport {
    /// The verdict.
    pub status: BandStatus,
    /// Largest magnitude seen in the band, dB. `None` when not evaluated.
    pub max_db: Option<f64>,
    /// Smallest magnitude seen in the band, dB. `None` when not evaluated.
    pub min_db: Option<f64>,
    /// Number of grid samples in the band.
    pub samples: usize,
}

/// Pass/fail verdicts for both bands with the extrema that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Passband verdict.
    pub passband: BandReport,
    /// Stopband verdict.
    pub stopband: BandReport,
}

impl ValidationResult {
    /// Overall verdict; a band that was never evaluated passes trivially.
    pub fn is_compliant(&self) -> bool {
        self.passband.status != BandStatus::Violated
            && self.stopband.status != BandStatus::Violated
    }
}

/// Check the response against the specification's band tolerances.
pub fn validate_response(
    response: &FrequencyResponse,
    spec: &FilterSpecification,
    params: &DesignParameters,
) -> ValidationResult {
    let margin = validation::MARGIN_DB;

    let passband = band_extrema(response, |omega| omega <= params.omega_p);
    let passband = report(passband, |max_db, min_db| {
        max_db <= margin && min_db >= -spec.passband_ripple_db
    });

    let stopband = band_extrema(response, |omega| omega >= params.omega_s);
    let stopband = report(stopband, |max_db, _| {
        max_db <= -spec.stopband_atten_db + margin
    });

    tracing::debug!(
        passband = ?passband.status,
        stopband = ?stopband.status,
        "validated frequency response"
    );

    ValidationResult { passband, stopband }
}

/// Extrema over the grid samples selected by `in_band`.
fn band_extrema(
    response: &FrequencyResponse,
    in_band: impl Fn(f64) -> bool,
) -> Option<(f64, f64, usize)> {
    let mut max_db = f64::NEG_INFINITY;
    let mut min_db = f64::INFINITY;
    let mut samples = 0;

    for (&omega, &db) in response.omegas().iter().zip(response.magnitude_db()) {
        if in_band(omega) {
            max_db = max_db.max(db);
            min_db = min_db.min(db);
            samples += 1;
        }
    }

    (samples > 0).then_some((max_db, min_db, samples))
}

fn report(
    extrema: Option<(f64, f64, usize)>,
    compliant: impl Fn(f64, f64) -> bool,
) -> BandReport {
    match extrema {
        Some((max_db, min_db, samples)) => BandReport {
            status: if compliant(max_db, min_db) {
                BandStatus::Compliant
            } else {
                BandStatus::Violated
            },
            max_db: Some(max_db),
            min_db: Some(min_db),
            samples,
        },
        None => BandReport {
            status: BandStatus::NotEvaluated,
            max_db: None,
            min_db: None,
            samples: 0,
        },
    }
}
