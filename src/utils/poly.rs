// src/utils/poly.rs
//! Complex polynomial algebra for pole manipulation
//!
//! Small helpers consumed by the analog synthesizer and the
//! impulse-invariance discretizer: monic expansion from a root set, Horner
//! evaluation, and the controlled collapse of nominally-real complex
//! coefficient vectors back to `f64`.

use num_complex::Complex64;
use num_traits::Zero;

/// Expand the monic polynomial with the given roots.
///
/// Coefficients are ordered from the leading power down to the constant
/// term, so `from_roots(&[r])` is `[1, -r]`. The same coefficient vector,
/// read as ascending powers of `x`, is the expansion of `prod_k (1 - r_k x)`
/// with constant term first; the discretizer relies on that reading for
/// polynomials in `z^-1`.
pub fn from_roots(roots: &[Complex64]) -> Vec<Complex64> {
    let mut coeffs = vec![Complex64::new(1.0, 0.0)];
    for &root in roots {
        coeffs.push(Complex64::zero());
        for i in (1..coeffs.len()).rev() {
            let prev = coeffs[i - 1];
            coeffs[i] -= root * prev;
        }
    }
    coeffs
}

/// Horner evaluation of a complex coefficient vector, leading power first.
pub fn eval(coeffs: &[Complex64], x: Complex64) -> Complex64 {
    coeffs.iter().fold(Complex64::zero(), |acc, &c| acc * x + c)
}

/// Horner evaluation of a real coefficient vector ordered by ascending
/// powers of `x` (the `z^-1` convention for discrete transfer functions).
pub fn eval_ascending(coeffs: &[f64], x: Complex64) -> Complex64 {
    coeffs
        .iter()
        .rev()
        .fold(Complex64::zero(), |acc, &c| acc * x + c)
}

/// Largest imaginary magnitude relative to the largest coefficient
/// magnitude. Zero for an all-zero vector.
pub fn max_imag_ratio(coeffs: &[Complex64]) -> f64 {
    let scale = coeffs.iter().map(|c| c.norm()).fold(0.0, f64::max);
    if scale == 0.0 {
        return 0.0;
    }
    coeffs.iter().map(|c| c.im.abs()).fold(0.0, f64::max) / scale
}

/// Drop imaginary parts, keeping the real coefficient vector.
///
/// Callers must have checked [`max_imag_ratio`] against their tolerance
/// first; this function does not re-verify.
pub fn real_coefficients(coeffs: &[Complex64]) -> Vec<f64> {
    coeffs.iter().map(|c| c.re).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_roots_quadratic() {
        // (x - 1)(x - 2) = x^2 - 3x + 2
        let roots = [Complex64::new(1.0, 0.0), Complex64::new(2.0, 0.0)];
        let coeffs = from_roots(&roots);
        assert_eq!(coeffs.len(), 3);
        assert!((coeffs[0].re - 1.0).abs() < 1e-12);
        assert!((coeffs[1].re + 3.0).abs() < 1e-12);
        assert!((coeffs[2].re - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_roots_conjugate_pair_is_real() {
        let roots = [Complex64::new(-0.5, 0.8), Complex64::new(-0.5, -0.8)];
        let coeffs = from_roots(&roots);
        assert!(max_imag_ratio(&coeffs) < 1e-15);
        // x^2 + x + (0.25 + 0.64)
        let real = real_coefficients(&coeffs);
        assert!((real[1] - 1.0).abs() < 1e-12);
        assert!((real[2] - 0.89).abs() < 1e-12);
    }

    #[test]
    fn test_eval_at_root_is_zero() {
        let root = Complex64::new(-0.3, 0.7);
        let coeffs = from_roots(&[root, root.conj()]);
        assert!(eval(&coeffs, root).norm() < 1e-12);
    }

    #[test]
    fn test_eval_ascending_matches_direct_sum() {
        // 1 + 2w + 3w^2 at w = e^{-j*pi/4}
        let w = Complex64::from_polar(1.0, -std::f64::consts::FRAC_PI_4);
        let direct = Complex64::new(1.0, 0.0) + w * 2.0 + w * w * 3.0;
        let horner = eval_ascending(&[1.0, 2.0, 3.0], w);
        assert!((direct - horner).norm() < 1e-12);
    }

    #[test]
    fn test_max_imag_ratio_empty_and_zero() {
        assert_eq!(max_imag_ratio(&[]), 0.0);
        assert_eq!(max_imag_ratio(&[Complex64::new(0.0, 0.0)]), 0.0);
    }
}
