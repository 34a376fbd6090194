// src/buffer.rs

use crate::common::ShapeError;
use alloc::vec::Vec;
use num_complex::Complex64;

/// Working storage for one transform call: parallel real/imaginary
/// sequences of equal power-of-two length.
///
/// A buffer is owned exclusively by the `transform` invocation that
/// created it and is mutated in place through the reorder and butterfly
/// stages. After the call it holds the unnormalized DFT coefficients in
/// natural bin order.
#[derive(Debug)]
pub struct ComplexBuffer {
    pub(crate) real: Vec<f64>,
    pub(crate) imag: Vec<f64>,
}

impl ComplexBuffer {
    /// Builds a buffer from separate real/imaginary parts, enforcing the
    /// shape invariant. Non-conforming input is rejected, never resized.
    pub fn from_parts(real: Vec<f64>, imag: Vec<f64>) -> Result<Self, ShapeError> {
        if !real.len().is_power_of_two() {
            return Err(ShapeError::NotPowerOfTwo);
        }
        if real.len() != imag.len() {
            return Err(ShapeError::LengthMismatch);
        }
        Ok(Self { real, imag })
    }

    pub fn len(&self) -> usize {
        self.real.len()
    }

    pub fn is_empty(&self) -> bool {
        // Shape invariant keeps len >= 1, so this only exists for symmetry.
        self.real.is_empty()
    }

    pub fn real(&self) -> &[f64] {
        &self.real
    }

    pub fn imag(&self) -> &[f64] {
        &self.imag
    }

    /// Reads coefficient `i` as an ephemeral complex value.
    pub fn bin(&self, i: usize) -> Complex64 {
        Complex64::new(self.real[i], self.imag[i])
    }

    pub(crate) fn set_bin(&mut self, i: usize, value: Complex64) {
        self.real[i] = value.re;
        self.imag[i] = value.im;
    }

    /// Hands the storage back to the caller.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.real, self.imag)
    }
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;
