// src/design/response.rs
//! Frequency-response evaluation on the unit circle
//!
//! Evaluates `H(e^{j omega}) = B(e^{-j omega}) / A(e^{-j omega})` on an
//! even grid over `[0, pi]` and at the named points the validator and
//! reporting depend on. Pure function of the filter: evaluating twice
//! yields bit-identical sequences.

use crate::config::constants::response;
use crate::design::discretize::DiscreteFilter;
use crate::error::{DesignError, DesignResult};
use crate::utils::poly;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};

/// Exactly-evaluated response at one frequency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResponsePoint {
    /// Frequency in rad/sample.
    pub omega: f64,
    /// Linear magnitude `|H|`.
    pub magnitude: f64,
    /// Magnitude in dB, floored against `log(0)`.
    pub magnitude_db: f64,
    /// Phase in radians.
    pub phase_rad: f64,
}

impl ResponsePoint {
    /// Phase in degrees.
    pub fn phase_degrees(&self) -> f64 {
        self.phase_rad.to_degrees()
    }
}

/// Sampled frequency response of a [`DiscreteFilter`] over `[0, pi]`.
///
/// Regenerable from the filter at any time; never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyResponse {
    omegas: Vec<f64>,
    magnitude: Vec<f64>,
    magnitude_db: Vec<f64>,
    phase_rad: Vec<f64>,
    dc: ResponsePoint,
    midband: ResponsePoint,
    nyquist: ResponsePoint,
}

impl FrequencyResponse {
    /// Evaluate on `n_points` evenly spaced frequencies including both
    /// endpoints of `[0, pi]`.
    pub fn evaluate(filter: &DiscreteFilter, n_points: usize) -> DesignResult<Self> {
        if n_points < response::MIN_POINTS {
            return Err(DesignError::InvalidSpecification {
                field: "n_points",
                value: n_points as f64,
                reason: "the response grid needs at least both endpoints",
            });
        }

        let mut omegas = Vec::with_capacity(n_points);
        let mut magnitude = Vec::with_capacity(n_points);
        let mut magnitude_db = Vec::with_capacity(n_points);
        let mut phase_rad = Vec::with_capacity(n_points);

        for i in 0..n_points {
            let omega = PI * i as f64 / (n_points - 1) as f64;
            let point = evaluate_at(filter, omega)?;
            omegas.push(omega);
            magnitude.push(point.magnitude);
            magnitude_db.push(point.magnitude_db);
            phase_rad.push(point.phase_rad);
        }

        Ok(Self {
            omegas,
            magnitude,
            magnitude_db,
            phase_rad,
            dc: evaluate_at(filter, 0.0)?,
            midband: evaluate_at(filter, FRAC_PI_2)?,
            nyquist: evaluate_at(filter, PI)?,
        })
    }

    /// Evaluate with the default grid resolution.
    pub fn evaluate_default(filter: &DiscreteFilter) -> DesignResult<Self> {
        Self::evaluate(filter, response::DEFAULT_POINTS)
    }

    /// Grid frequencies in rad/sample.
    pub fn omegas(&self) -> &[f64] {
        &self.omegas
    }

    /// Linear magnitude per grid point.
    pub fn magnitude(&self) -> &[f64] {
        &self.magnitude
    }

    /// Magnitude in dB per grid point.
    pub fn magnitude_db(&self) -> &[f64] {
        &self.magnitude_db
    }

    /// Phase in radians per grid point.
    pub fn phase_rad(&self) -> &[f64] {
        &self.phase_rad
    }

    /// Number of grid points.
    pub fn len(&self) -> usize {
        self.omegas.len()
    }

    /// Whether the grid is empty (never true for a constructed response).
    pub fn is_empty(&self) -> bool {
        self.omegas.is_empty()
    }

    /// Response at `omega = 0`.
    pub fn dc(&self) -> ResponsePoint {
        self.dc
    }

    /// Response at `omega = pi/2`.
    pub fn midband(&self) -> ResponsePoint {
        self.midband
    }

    /// Response at `omega = pi` (Nyquist).
    pub fn nyquist(&self) -> ResponsePoint {
        self.nyquist
    }
}

/// Evaluate the transfer function at a single frequency.
fn evaluate_at(filter: &DiscreteFilter, omega: f64) -> DesignResult<ResponsePoint> {
    let z_inv = Complex64::from_polar(1.0, -omega);
    let num = poly::eval_ascending(filter.numerator(), z_inv);
    let den = poly::eval_ascending(filter.denominator(), z_inv);

    let den_scale: f64 = filter.denominator().iter().map(|c| c.abs()).sum();
    if den.norm() <= response::DEGENERATE_DENOMINATOR_RELATIVE * den_scale {
        return Err(DesignError::DegenerateFilter { omega });
    }

    let h = num / den;
    let magnitude = h.norm();
    Ok(ResponsePoint {
        omega,
        magnitude,
        magnitude_db: 20.0 * (magnitude + response::LOG_MAGNITUDE_EPSILON).log10(),
        phase_rad: h.im.atan2(h.re),
    })
}
