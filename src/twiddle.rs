// src/twiddle.rs

use core::f64::consts::PI;
use num_complex::Complex64;

/// Twiddle factor for the forward transform: the primitive `n`-th root
/// of unity raised to the power `-k`, i.e. `(cos x, sin x)` with
/// `x = -2*pi*k/n`.
pub(crate) fn unit_root(k: usize, n: usize) -> Complex64 {
    let angle = -2.0 * PI * (k as f64) / (n as f64);
    let (sin, cos) = sin_cos(angle);
    Complex64::new(cos, sin)
}

/// Backend-agnostic sin/cos helper.
fn sin_cos(angle: f64) -> (f64, f64) {
    #[cfg(feature = "std")]
    return (angle.sin(), angle.cos());

    #[cfg(not(feature = "std"))]
    return (libm::sin(angle), libm::cos(angle));
}

#[cfg(test)]
#[path = "twiddle_tests.rs"]
mod tests;
