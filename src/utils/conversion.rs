//! Conversion utilities shared across the design pipeline
//!
//! Decibel/linear amplitude conversions, the Hz-to-normalized-frequency
//! mapping used by the resolver, and the RMS measurement the tone tester
//! builds its attenuation figures on.

use std::f64::consts::PI;

/// Convert a level in dB to a linear amplitude ratio.
pub fn db_to_amplitude(db: f64) -> f64 {
    10f64.powf(db / 20.0)
}

/// Convert a linear amplitude ratio to dB.
///
/// A zero ratio maps to `-inf`, which the callers treat as a valid,
/// representable measurement.
pub fn amplitude_to_db(amplitude: f64) -> f64 {
    20.0 * amplitude.log10()
}

/// Map a frequency in Hz to rad/sample for the given sampling rate.
pub fn hz_to_rad_per_sample(frequency_hz: f64, sample_rate_hz: f64) -> f64 {
    2.0 * PI * frequency_hz / sample_rate_hz
}

/// Root-mean-square of a sample block. Zero for an empty block.
pub fn rms(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let power: f64 = samples.iter().map(|x| x * x).sum::<f64>() / samples.len() as f64;
    power.sqrt()
}
