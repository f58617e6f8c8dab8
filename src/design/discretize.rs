// src/design/discretize.rs
//! Impulse-invariance mapping from the analog prototype to `(b, a)`
//!
//! `H(s)` is decomposed into partial fractions over its simple poles; each
//! term `r_k/(s - p_k)` maps to a discrete pole `exp(p_k * Td)` with the
//! residue scaled by `Td`, and the discrete terms are recombined over the
//! common denominator. No aliasing correction is applied; the frequency
//! distortion impulse invariance inherits near Nyquist is an accepted
//! characteristic of the method, not something to compensate here.

use crate::config::constants::tolerance;
use crate::design::analog::AnalogPrototype;
use crate::error::{DesignError, DesignResult};
use crate::utils::poly;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Discrete-time rational transfer function in `z^-1`, normalized to
/// `a[0] = 1`.
///
/// Immutable once produced; the frequency-response evaluator and the tone
/// tester only read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscreteFilter {
    b: Vec<f64>,
    a: Vec<f64>,
    poles: Vec<Complex64>,
}

impl DiscreteFilter {
    /// Build a filter from explicit coefficient vectors, normalizing the
    /// denominator so `a[0] = 1`.
    ///
    /// The pole set is not reconstructed from the coefficients, so
    /// [`DiscreteFilter::is_stable`] reports `true` for filters built this
    /// way; stability bookkeeping is meaningful for pipeline-produced
    /// filters.
    pub fn from_coefficients(b: Vec<f64>, a: Vec<f64>) -> DesignResult<Self> {
        if a.is_empty() || a[0] == 0.0 {
            return Err(DesignError::DegenerateFilter { omega: 0.0 });
        }
        let scale = a[0];
        Ok(Self {
            b: b.iter().map(|c| c / scale).collect(),
            a: a.iter().map(|c| c / scale).collect(),
            poles: Vec::new(),
        })
    }

    /// Numerator coefficients `b[0..]` in ascending powers of `z^-1`.
    pub fn numerator(&self) -> &[f64] {
        &self.b
    }

    /// Denominator coefficients `a[0..]`, `a[0] = 1`.
    pub fn denominator(&self) -> &[f64] {
        &self.a
    }

    /// Filter order (denominator degree).
    pub fn order(&self) -> usize {
        self.a.len() - 1
    }

    /// Discrete poles recorded during the mapping, if any.
    pub fn poles(&self) -> &[Complex64] {
        &self.poles
    }

    /// Whether every recorded pole lies inside the unit circle.
    pub fn is_stable(&self) -> bool {
        self.poles.iter().all(|z| z.norm() < 1.0)
    }
}

/// Map `prototype` to a discrete filter with sampling interval `td`.
///
/// The pipeline uses `td = 1`, matching the normalized-frequency
/// convention of the resolver.
pub fn impulse_invariance(prototype: &AnalogPrototype, td: f64) -> DesignResult<DiscreteFilter> {
    if !(td.is_finite() && td > 0.0) {
        return Err(DesignError::InvalidSpecification {
            field: "td",
            value: td,
            reason: "sampling interval must be positive and finite",
        });
    }

    let poles = prototype.poles();
    reject_repeated_poles(poles)?;

    // Residues of gain / prod_k (s - p_k) at each simple pole.
    let mut residues = Vec::with_capacity(poles.len());
    for (k, &pk) in poles.iter().enumerate() {
        let mut denom = Complex64::new(1.0, 0.0);
        for (j, &pj) in poles.iter().enumerate() {
            if j != k {
                denom *= pk - pj;
            }
        }
        residues.push(Complex64::new(prototype.gain(), 0.0) / denom);
    }

    let z_poles: Vec<Complex64> = poles.iter().map(|p| (p * td).exp()).collect();

    // A(z) = prod_k (1 - z_k z^-1), ascending powers of z^-1.
    let den = poly::from_roots(&z_poles);

    // B(z) = sum_k Td*r_k * prod_{j != k} (1 - z_j z^-1).
    let n = poles.len();
    let mut num = vec![Complex64::new(0.0, 0.0); n];
    for k in 0..n {
        let others: Vec<Complex64> = z_poles
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != k)
            .map(|(_, &z)| z)
            .collect();
        let partial = poly::from_roots(&others);
        let scaled = residues[k] * td;
        for (i, &c) in partial.iter().enumerate() {
            num[i] += scaled * c;
        }
    }

    // Conjugate pole pairs must cancel the imaginary parts.
    let residual = poly::max_imag_ratio(&den).max(poly::max_imag_ratio(&num));
    if residual > tolerance::COEFFICIENT_IMAG_RELATIVE {
        return Err(DesignError::NumericalInstability {
            stage: "impulse invariance",
            residual,
        });
    }

    tracing::debug!(order = n, residual, "discretized analog prototype");

    Ok(DiscreteFilter {
        b: poly::real_coefficients(&num),
        a: poly::real_coefficients(&den),
        poles: z_poles,
    })
}

/// The partial-fraction expansion assumes simple poles; coincident poles
/// would need `t^m e^{pt}` terms this implementation does not produce.
fn reject_repeated_poles(poles: &[Complex64]) -> DesignResult<()> {
    for (i, &pi) in poles.iter().enumerate() {
        for &pj in &poles[i + 1..] {
            let scale = pi.norm().max(pj.norm());
            if (pi - pj).norm() <= tolerance::POLE_SEPARATION_RELATIVE * scale {
                return Err(DesignError::UnsupportedPoleMultiplicity { pole: pi });
            }
        }
    }
    Ok(())
}
