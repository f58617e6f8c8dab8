//! Numeric support for the design pipeline
//!
//! This module provides the algebra the pipeline stages lean on:
//! - Complex polynomial expansion and evaluation for pole manipulation
//! - Decibel, frequency, and RMS conversions
//!
//! The polynomial helpers consume `num-complex`; no stage implements its
//! own complex arithmetic.

pub mod conversion;
pub mod poly;

pub use conversion::{amplitude_to_db, db_to_amplitude, hz_to_rad_per_sample, rms};
