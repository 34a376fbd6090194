// src/spectrum.rs

use crate::buffer::ComplexBuffer;
use alloc::vec::Vec;

/// Per-bin modulus of the complex spectrum: `sqrt(re^2 + im^2)`.
pub fn magnitudes(spectrum: &ComplexBuffer) -> Vec<f64> {
    spectrum
        .real()
        .iter()
        .zip(spectrum.imag())
        .map(|(re, im)| sqrt(re * re + im * im))
        .collect()
}

/// Divides every magnitude by the sequence maximum, mapping the loudest
/// bin to 1.0. An all-zero sequence stays all-zero.
///
/// The reference is the current frame's own maximum, so scaling varies
/// with frame loudness. That matches the consumer contract; a fixed
/// reference scale would be a behavior change, not a fix.
pub fn normalize(magnitudes: &mut [f64]) {
    let max = magnitudes.iter().fold(0.0f64, |acc, &m| acc.max(m));
    if max > 0.0 {
        for m in magnitudes.iter_mut() {
            *m /= max;
        }
    }
}

/// Magnitude extraction and normalization in one pass, the shape the
/// renderer consumes every frame.
pub fn normalized_magnitudes(spectrum: &ComplexBuffer) -> Vec<f64> {
    let mut mags = magnitudes(spectrum);
    normalize(&mut mags);
    mags
}

/// Backend-agnostic square root helper.
fn sqrt(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sqrt();

    #[cfg(not(feature = "std"))]
    return libm::sqrt(x);
}

#[cfg(test)]
#[path = "spectrum_tests.rs"]
mod tests;
