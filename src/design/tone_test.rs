// src/design/tone_test.rs
//! Empirical tone-probe verification of a discretized filter
//!
//! Independent of the frequency-response evaluator: each probe drives the
//! filter with an actual sampled sinusoid through the difference equation
//! and measures the attenuation after the transient settles. The transition
//! band carries no contract, so probes there always report ok.

use crate::config::constants::tone;
use crate::config::FilterSpecification;
use crate::design::discretize::DiscreteFilter;
use crate::utils::conversion::{amplitude_to_db, rms};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Band a probe frequency falls into, and therefore what the filter is
/// expected to do with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToneExpectation {
    /// At or below the passband edge: the tone should come through.
    Pass,
    /// Between the edges: no contract.
    Transition,
    /// At or above the stopband edge: the tone should be rejected.
    Reject,
}

/// One probe measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneTestCase {
    /// Probe frequency in Hz.
    pub frequency_hz: f64,
    /// Measured steady-state attenuation in dB; `-inf` for a silent probe.
    pub attenuation_db: f64,
    /// Classification from the probe's position between the band edges.
    pub expected: ToneExpectation,
    /// Whether the measurement met the expectation (with slack).
    pub ok: bool,
}

/// Probe the filter at each frequency and measure settled attenuation.
pub fn run_tone_tests(
    filter: &DiscreteFilter,
    spec: &FilterSpecification,
    probe_frequencies: &[f64],
) -> Vec<ToneTestCase> {
    probe_frequencies
        .iter()
        .map(|&frequency_hz| probe_tone(filter, spec, frequency_hz))
        .collect()
}

/// Direct-form realization of the difference equation
/// `a[0] y[n] = sum_k b[k] x[n-k] - sum_{k>=1} a[k] y[n-k]`.
pub fn filter_signal(filter: &DiscreteFilter, input: &[f64]) -> Vec<f64> {
    let b = filter.numerator();
    let a = filter.denominator();
    let mut output = vec![0.0; input.len()];

    for n in 0..input.len() {
        let mut acc = 0.0;
        for (k, &bk) in b.iter().enumerate() {
            if n >= k {
                acc += bk * input[n - k];
            }
        }
        for (k, &ak) in a.iter().enumerate().skip(1) {
            if n >= k {
                acc -= ak * output[n - k];
            }
        }
        output[n] = acc / a[0];
    }

    output
}

fn probe_tone(
    filter: &DiscreteFilter,
    spec: &FilterSpecification,
    frequency_hz: f64,
) -> ToneTestCase {
    let n_samples = (tone::TEST_DURATION_S * spec.sample_rate_hz).round() as usize;
    let ts = spec.sampling_interval();
    let input: Vec<f64> = (0..n_samples)
        .map(|n| (2.0 * PI * frequency_hz * n as f64 * ts).sin())
        .collect();

    let output = filter_signal(filter, &input);

    // Skip the leading transient; measure over the settled tail.
    let settled = (n_samples as f64 * tone::TRANSIENT_FRACTION) as usize;
    let input_rms = rms(&input[settled..]);
    let output_rms = rms(&output[settled..]);

    let attenuation_db = if input_rms > tone::SILENT_RMS {
        amplitude_to_db(output_rms / input_rms)
    } else {
        // A probe landing on a multiple of the sampling rate samples to
        // silence; -inf attenuation is a valid measurement.
        f64::NEG_INFINITY
    };

    let (expected, ok) = if frequency_hz <= spec.passband_edge_hz {
        (
            ToneExpectation::Pass,
            attenuation_db >= -spec.passband_ripple_db - tone::VERDICT_SLACK_DB,
        )
    } else if frequency_hz >= spec.stopband_edge_hz {
        (
            ToneExpectation::Reject,
            attenuation_db <= -spec.stopband_atten_db + tone::VERDICT_SLACK_DB,
        )
    } else {
        (ToneExpectation::Transition, true)
    };

    ToneTestCase {
        frequency_hz,
        attenuation_db,
        expected,
        ok,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{default_probe_frequencies, OrderSelection};
    use crate::design::analog::AnalogPrototype;
    use crate::design::discretize::impulse_invariance;
    use crate::design::resolver::resolve;

    fn classroom() -> (FilterSpecification, DiscreteFilter) {
        let spec = FilterSpecification {
            order: OrderSelection::Fixed(6),
            ..Default::default()
        };
        let params = resolve(&spec).unwrap();
        let proto = AnalogPrototype::butterworth(params.order, params.omega_c).unwrap();
        let filter = impulse_invariance(&proto, 1.0).unwrap();
        (spec, filter)
    }

    #[test]
    fn test_difference_equation_first_order_recursion() {
        // y[n] = x[n] + 0.5 y[n-1] for b = [1], a = [1, -0.5].
        let filter = DiscreteFilter::from_coefficients(vec![1.0], vec![1.0, -0.5]).unwrap();
        let output = filter_signal(&filter, &[1.0, 0.0, 0.0, 0.0]);
        assert_eq!(output, vec![1.0, 0.5, 0.25, 0.125]);
    }

    #[test]
    fn test_difference_equation_fir_moving_average() {
        let filter = DiscreteFilter::from_coefficients(vec![0.5, 0.5], vec![1.0]).unwrap();
        let output = filter_signal(&filter, &[1.0, 1.0, 1.0]);
        assert_eq!(output, vec![0.5, 1.0, 1.0]);
    }

    #[test]
    fn test_passband_edge_probe_passes() {
        let (spec, filter) = classroom();
        let cases = run_tone_tests(&filter, &spec, &[spec.passband_edge_hz]);

        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].expected, ToneExpectation::Pass);
        assert!(cases[0].ok, "attenuation {} dB", cases[0].attenuation_db);
        assert!(cases[0].attenuation_db >= -4.0);
        assert!(cases[0].attenuation_db <= 0.0);
    }

    #[test]
    fn test_stopband_edge_probe_rejects() {
        let (spec, filter) = classroom();
        let cases = run_tone_tests(&filter, &spec, &[spec.stopband_edge_hz]);

        assert_eq!(cases[0].expected, ToneExpectation::Reject);
        assert!(cases[0].ok, "attenuation {} dB", cases[0].attenuation_db);
        assert!(cases[0].attenuation_db <= -12.0);
    }

    #[test]
    fn test_transition_probe_carries_no_contract() {
        let (spec, filter) = classroom();
        let mid = (spec.passband_edge_hz + spec.stopband_edge_hz) / 2.0;
        let cases = run_tone_tests(&filter, &spec, &[mid]);

        assert_eq!(cases[0].expected, ToneExpectation::Transition);
        assert!(cases[0].ok);
    }

    #[test]
    fn test_probe_at_sampling_rate_measures_silence() {
        let (spec, filter) = classroom();
        let cases = run_tone_tests(&filter, &spec, &[spec.sample_rate_hz]);

        assert_eq!(cases[0].attenuation_db, f64::NEG_INFINITY);
        // Silence is rejected as hard as anything can be.
        assert_eq!(cases[0].expected, ToneExpectation::Reject);
        assert!(cases[0].ok);
    }

    #[test]
    fn test_default_probe_plan_is_all_ok() {
        let (spec, filter) = classroom();
        let cases = run_tone_tests(&filter, &spec, &default_probe_frequencies(&spec));

        assert_eq!(cases.len(), 9);
        for case in &cases {
            assert!(
                case.ok,
                "probe {} Hz ({:?}) measured {} dB",
                case.frequency_hz, case.expected, case.attenuation_db
            );
        }
    }

    #[test]
    fn test_deep_stopband_probe_attenuates_hard() {
        let (spec, filter) = classroom();
        let cases = run_tone_tests(&filter, &spec, &[3000.0]);
        assert!(cases[0].attenuation_db < -30.0);
    }
}
