// src/design/resolver.rs
//! Resolution of design tolerances into an analog order and cutoff
//!
//! Frequencies are mapped with the normalized impulse-invariance convention
//! `Td = 1`, so digital edges in rad/sample are used directly as analog
//! frequencies in rad/s. The edges are not pre-warped; the known inaccuracy
//! of this convention is part of the design contract and is preserved.

use crate::config::{FilterSpecification, OrderSelection};
use crate::error::{DesignError, DesignResult};
use crate::utils::conversion::{db_to_amplitude, hz_to_rad_per_sample};
use serde::{Deserialize, Serialize};

/// Parameters derived from a [`FilterSpecification`].
///
/// Pure data: resolving the same specification twice yields identical
/// values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignParameters {
    /// Order actually used by the synthesizer.
    pub order: u32,
    /// Minimal order satisfying the tolerances, kept for diagnostics even
    /// when the order was forced.
    pub minimum_order: u32,
    /// Normalized analog cutoff in rad/s.
    pub omega_c: f64,
    /// Passband edge in rad/sample (numerically equal to rad/s under the
    /// `Td = 1` convention).
    pub omega_p: f64,
    /// Stopband edge in rad/sample.
    pub omega_s: f64,
    /// Linear passband tolerance `10^(-rp/20)`.
    pub delta_p: f64,
    /// Linear stopband tolerance `10^(-as/20)`.
    pub delta_s: f64,
}

/// Resolve a specification into concrete design parameters.
///
/// The minimal order is always computed so a forced order can be compared
/// against what the tolerances require; a forced order is never overridden.
pub fn resolve(spec: &FilterSpecification) -> DesignResult<DesignParameters> {
    spec.validate()?;

    let omega_p = hz_to_rad_per_sample(spec.passband_edge_hz, spec.sample_rate_hz);
    let omega_s = hz_to_rad_per_sample(spec.stopband_edge_hz, spec.sample_rate_hz);
    let delta_p = db_to_amplitude(-spec.passband_ripple_db);
    let delta_s = db_to_amplitude(-spec.stopband_atten_db);

    let minimum_order = minimal_order(omega_p, omega_s, delta_p, delta_s)?;
    let order = match spec.order {
        OrderSelection::Fixed(0) => return Err(DesignError::InvalidOrder { order: 0 }),
        OrderSelection::Fixed(n) => n,
        OrderSelection::Auto => minimum_order,
    };

    let omega_c = cutoff_for_order(omega_p, delta_p, order)?;

    tracing::debug!(
        order,
        minimum_order,
        omega_c,
        omega_p,
        omega_s,
        "resolved design parameters"
    );

    Ok(DesignParameters {
        order,
        minimum_order,
        omega_c,
        omega_p,
        omega_s,
        delta_p,
        delta_s,
    })
}

/// Minimal integer order satisfying the Butterworth selectivity equation.
fn minimal_order(omega_p: f64, omega_s: f64, delta_p: f64, delta_s: f64) -> DesignResult<u32> {
    if omega_s <= omega_p {
        return Err(DesignError::InvalidSpecification {
            field: "stopband_edge_hz",
            value: omega_s,
            reason: "stopband edge must lie above the passband edge",
        });
    }

    let passband_term = (1.0 / delta_p).powi(2) - 1.0;
    if passband_term <= 0.0 {
        return Err(DesignError::InvalidSpecification {
            field: "passband_ripple_db",
            value: delta_p,
            reason: "ripple tolerance must be positive for the selectivity equation",
        });
    }
    let stopband_term = (1.0 / delta_s).powi(2) - 1.0;

    let selectivity = stopband_term / passband_term;
    if selectivity <= 0.0 {
        return Err(DesignError::InvalidSpecification {
            field: "stopband_atten_db",
            value: delta_s,
            reason: "selectivity ratio must be positive",
        });
    }

    let raw = selectivity.log10() / (2.0 * (omega_s / omega_p).log10());
    let order = raw.ceil() as i64;
    // A ratio below unity means order 1 already over-satisfies the
    // tolerances; the minimal positive order is still 1.
    Ok(order.max(1) as u32)
}

/// Cutoff placing the passband loss exactly at the ripple tolerance.
fn cutoff_for_order(omega_p: f64, delta_p: f64, order: u32) -> DesignResult<f64> {
    let radicand = (1.0 / delta_p).powi(2) - 1.0;
    if radicand <= 0.0 {
        return Err(DesignError::InvalidSpecification {
            field: "passband_ripple_db",
            value: delta_p,
            reason: "ripple tolerance must be positive to place the cutoff",
        });
    }
    Ok(omega_p / radicand.powf(1.0 / (2.0 * f64::from(order))))
}
