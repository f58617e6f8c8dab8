// src/design/analog.rs
//! Normalized lowpass Butterworth analog prototype
//!
//! Poles sit evenly spaced on the left half of the circle of radius
//! `omega_c`; the numerator is the constant `omega_c^N`, which normalizes
//! the DC gain to unity.

use crate::config::constants::tolerance;
use crate::error::{DesignError, DesignResult};
use crate::utils::poly;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Continuous-time lowpass Butterworth transfer function `H(s)`.
///
/// Held as its pole set plus the expanded monic real denominator. All poles
/// lie in the open left half-plane; construction rejects anything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalogPrototype {
    order: u32,
    cutoff: f64,
    poles: Vec<Complex64>,
    gain: f64,
    denominator: Vec<f64>,
}

impl AnalogPrototype {
    /// Synthesize the Butterworth prototype for `order` and cutoff
    /// `omega_c` in rad/s.
    pub fn butterworth(order: u32, omega_c: f64) -> DesignResult<Self> {
        if order < 1 {
            return Err(DesignError::InvalidOrder { order });
        }
        if !(omega_c.is_finite() && omega_c > 0.0) {
            return Err(DesignError::InvalidSpecification {
                field: "omega_c",
                value: omega_c,
                reason: "analog cutoff must be positive and finite",
            });
        }

        let n = order as usize;
        let mut poles = Vec::with_capacity(n);
        for k in 0..n {
            let theta = PI * (2 * k + n + 1) as f64 / (2 * n) as f64;
            poles.push(omega_c * Complex64::new(theta.cos(), theta.sin()));
        }

        Self::from_poles(poles, omega_c.powi(order as i32))
    }

    /// Build a prototype from an explicit pole set and constant numerator.
    ///
    /// Every pole must lie strictly in the left half-plane; multiplicity is
    /// not checked here (the discretizer rejects repeated poles where the
    /// partial-fraction expansion would break down).
    pub fn from_poles(poles: Vec<Complex64>, gain: f64) -> DesignResult<Self> {
        if poles.is_empty() {
            return Err(DesignError::InvalidOrder { order: 0 });
        }
        if let Some(bad) = poles.iter().find(|p| !(p.re < 0.0)) {
            return Err(DesignError::InvalidSpecification {
                field: "poles",
                value: bad.re,
                reason: "analog poles must lie in the open left half-plane",
            });
        }

        let expansion = poly::from_roots(&poles);
        let residual = poly::max_imag_ratio(&expansion);
        if residual > tolerance::COEFFICIENT_IMAG_RELATIVE {
            return Err(DesignError::NumericalInstability {
                stage: "analog prototype",
                residual,
            });
        }

        let cutoff = poles.iter().map(|p| p.norm()).fold(0.0, f64::max);
        Ok(Self {
            order: poles.len() as u32,
            cutoff,
            denominator: poly::real_coefficients(&expansion),
            poles,
            gain,
        })
    }

    /// Filter order `N`.
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Cutoff `omega_c` in rad/s (largest pole magnitude for custom pole
    /// sets).
    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Analog poles.
    pub fn poles(&self) -> &[Complex64] {
        &self.poles
    }

    /// Constant numerator `omega_c^N`.
    pub fn gain(&self) -> f64 {
        self.gain
    }

    /// Monic denominator coefficients, leading power first.
    pub fn denominator(&self) -> &[f64] {
        &self.denominator
    }

    /// Gain at `s = 0`: numerator over the denominator's constant term.
    pub fn dc_gain(&self) -> f64 {
        self.gain / self.denominator[self.denominator.len() - 1]
    }
}
