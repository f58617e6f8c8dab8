// src/config/mod.rs
//! Filter specification types and spec-file loading

pub mod constants;
pub mod loader;

pub use loader::{load_specification, ConfigError};

use crate::error::{DesignError, DesignResult};
use serde::{Deserialize, Serialize};

/// How the filter order is chosen.
///
/// `Auto` derives the minimal order from the design tolerances; `Fixed`
/// forces an explicit order. The resolver computes the minimal order either
/// way so a forced order can be compared against what the tolerances
/// actually require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderSelection {
    /// Derive the minimal order satisfying the tolerances.
    #[default]
    Auto,
    /// Use the given order as-is.
    Fixed(u32),
}

/// Immutable input tolerances for one lowpass design request.
///
/// Created once per design run; every downstream entity is derived from it,
/// never mutated. Field defaults reproduce the canonical classroom design
/// (10 kHz sampling, 1 kHz passband, 1.5 kHz stopband, 1 dB ripple, 15 dB
/// attenuation, automatic order).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSpecification {
    /// Sampling rate in Hz.
    #[serde(default = "defaults::sample_rate_hz")]
    pub sample_rate_hz: f64,

    /// Passband edge in Hz; must lie in `(0, fs/2)`.
    #[serde(default = "defaults::passband_edge_hz")]
    pub passband_edge_hz: f64,

    /// Stopband edge in Hz; must lie in `(passband_edge, fs/2)`.
    #[serde(default = "defaults::stopband_edge_hz")]
    pub stopband_edge_hz: f64,

    /// Maximum passband loss in dB.
    #[serde(default = "defaults::passband_ripple_db")]
    pub passband_ripple_db: f64,

    /// Minimum stopband attenuation in dB.
    #[serde(default = "defaults::stopband_atten_db")]
    pub stopband_atten_db: f64,

    /// Order selection, automatic unless forced.
    #[serde(default)]
    pub order: OrderSelection,
}

/// Default value providers for serde and `Default`.
mod defaults {
    pub fn sample_rate_hz() -> f64 {
        10_000.0
    }

    pub fn passband_edge_hz() -> f64 {
        1000.0
    }

    pub fn stopband_edge_hz() -> f64 {
        1500.0
    }

    pub fn passband_ripple_db() -> f64 {
        1.0
    }

    pub fn stopband_atten_db() -> f64 {
        15.0
    }
}

impl Default for FilterSpecification {
    fn default() -> Self {
        Self {
            sample_rate_hz: defaults::sample_rate_hz(),
            passband_edge_hz: defaults::passband_edge_hz(),
            stopband_edge_hz: defaults::stopband_edge_hz(),
            passband_ripple_db: defaults::passband_ripple_db(),
            stopband_atten_db: defaults::stopband_atten_db(),
            order: OrderSelection::default(),
        }
    }
}

impl FilterSpecification {
    /// Check the specification against its structural constraints.
    ///
    /// Feasibility of the tolerances themselves (order equation, cutoff
    /// radicand) is the resolver's responsibility; this only rejects
    /// malformed frequencies and signs.
    pub fn validate(&self) -> DesignResult<()> {
        if !(self.sample_rate_hz.is_finite() && self.sample_rate_hz > 0.0) {
            return Err(DesignError::InvalidSpecification {
                field: "sample_rate_hz",
                value: self.sample_rate_hz,
                reason: "sampling rate must be positive and finite",
            });
        }
        let nyquist = self.nyquist_hz();
        if !(self.passband_edge_hz.is_finite()
            && self.passband_edge_hz > 0.0
            && self.passband_edge_hz < nyquist)
        {
            return Err(DesignError::InvalidSpecification {
                field: "passband_edge_hz",
                value: self.passband_edge_hz,
                reason: "passband edge must lie strictly between 0 and the Nyquist frequency",
            });
        }
        if !(self.stopband_edge_hz.is_finite()
            && self.stopband_edge_hz > self.passband_edge_hz
            && self.stopband_edge_hz < nyquist)
        {
            return Err(DesignError::InvalidSpecification {
                field: "stopband_edge_hz",
                value: self.stopband_edge_hz,
                reason: "stopband edge must lie strictly between the passband edge and Nyquist",
            });
        }
        if !(self.passband_ripple_db.is_finite() && self.passband_ripple_db >= 0.0) {
            return Err(DesignError::InvalidSpecification {
                field: "passband_ripple_db",
                value: self.passband_ripple_db,
                reason: "ripple tolerance must be non-negative",
            });
        }
        if !(self.stopband_atten_db.is_finite() && self.stopband_atten_db > 0.0) {
            return Err(DesignError::InvalidSpecification {
                field: "stopband_atten_db",
                value: self.stopband_atten_db,
                reason: "stopband attenuation must be positive",
            });
        }
        Ok(())
    }

    /// Half the sampling rate.
    pub fn nyquist_hz(&self) -> f64 {
        self.sample_rate_hz / 2.0
    }

    /// Sampling interval `T = 1/fs` in seconds.
    pub fn sampling_interval(&self) -> f64 {
        1.0 / self.sample_rate_hz
    }
}

/// Probe plan used by the tone tester when the caller does not supply one.
///
/// Spread across the passband (10%, 50%, 80%, the edge, 20% above), the
/// stopband edge and its multiples, and 40% of the sampling rate.
pub fn default_probe_frequencies(spec: &FilterSpecification) -> Vec<f64> {
    let fp = spec.passband_edge_hz;
    let fsr = spec.stopband_edge_hz;
    vec![
        fp * 0.1,
        fp * 0.5,
        fp * 0.8,
        fp,
        fp * 1.2,
        fsr,
        fsr * 1.5,
        fsr * 2.0,
        spec.sample_rate_hz * 0.4,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_specification_is_valid() {
        assert!(FilterSpecification::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_nonpositive_sample_rate() {
        let spec = FilterSpecification {
            sample_rate_hz: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            spec.validate(),
            Err(DesignError::InvalidSpecification {
                field: "sample_rate_hz",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_passband_above_nyquist() {
        let spec = FilterSpecification {
            passband_edge_hz: 6000.0,
            ..Default::default()
        };
        assert!(matches!(
            spec.validate(),
            Err(DesignError::InvalidSpecification {
                field: "passband_edge_hz",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_stopband_at_or_below_passband() {
        let spec = FilterSpecification {
            stopband_edge_hz: 1000.0,
            ..Default::default()
        };
        assert!(matches!(
            spec.validate(),
            Err(DesignError::InvalidSpecification {
                field: "stopband_edge_hz",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_negative_tolerances() {
        let ripple = FilterSpecification {
            passband_ripple_db: -0.5,
            ..Default::default()
        };
        assert!(ripple.validate().is_err());

        let atten = FilterSpecification {
            stopband_atten_db: 0.0,
            ..Default::default()
        };
        assert!(atten.validate().is_err());
    }

    #[test]
    fn test_order_selection_serde_forms() {
        let auto: OrderSelection = serde_json::from_str("\"auto\"").unwrap();
        assert_eq!(auto, OrderSelection::Auto);

        let fixed: OrderSelection = serde_json::from_str("{\"fixed\":6}").unwrap();
        assert_eq!(fixed, OrderSelection::Fixed(6));
    }

    #[test]
    fn test_specification_toml_round_trip() {
        let spec = FilterSpecification {
            order: OrderSelection::Fixed(6),
            ..Default::default()
        };
        let encoded = toml::to_string(&spec).unwrap();
        let decoded: FilterSpecification = toml::from_str(&encoded).unwrap();
        assert_eq!(decoded, spec);
    }

    #[test]
    fn test_default_probe_plan_shape() {
        let spec = FilterSpecification::default();
        let probes = default_probe_frequencies(&spec);
        assert_eq!(probes.len(), 9);
        assert!(probes.contains(&spec.passband_edge_hz));
        assert!(probes.contains(&spec.stopband_edge_hz));
        assert!((probes[8] - 4000.0).abs() < 1e-12);
    }
}
