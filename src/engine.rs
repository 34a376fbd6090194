// src/engine.rs

use crate::buffer::ComplexBuffer;
use crate::cache::{BitReversalCache, ZeroBufferCache};
use crate::common::ShapeError;
use crate::twiddle::unit_root;
use alloc::vec;
use alloc::vec::Vec;

/// Iterative radix-2 decimation-in-time FFT engine.
///
/// The engine owns its memoization caches, so repeated transforms at a
/// fixed buffer size pay the table-construction cost only once. One call
/// per rendered frame is the intended usage; the transform itself is
/// synchronous and never blocks.
///
/// `&mut self` makes cache population exclusive by construction. A
/// multi-threaded host either wraps the engine in its own lock or gives
/// each thread its own engine; the tables are a pure function of the
/// size, so duplicated work across engines is only wasted effort.
pub struct FftEngine {
    bitrev: BitReversalCache,
    zeros: ZeroBufferCache,
}

impl FftEngine {
    pub fn new() -> Self {
        Self {
            bitrev: BitReversalCache::new(),
            zeros: ZeroBufferCache::new(),
        }
    }

    /// Forward DFT of a real-only sample sequence. The imaginary half is
    /// drawn from the zero-buffer cache once the shape gate passes.
    ///
    /// Output is the raw unnormalized spectrum in natural bin order; no
    /// `1/N` scaling and no windowing.
    pub fn transform(&mut self, samples: &[f64]) -> Result<ComplexBuffer, ShapeError> {
        if !samples.len().is_power_of_two() {
            return Err(ShapeError::NotPowerOfTwo);
        }
        let imag = self.zeros.take(samples.len());
        let mut buffer = ComplexBuffer::from_parts(samples.to_vec(), imag)?;
        self.process(&mut buffer);
        Ok(buffer)
    }

    /// Forward DFT of an already-complex input pair.
    pub fn transform_complex(
        &mut self,
        real: &[f64],
        imag: &[f64],
    ) -> Result<ComplexBuffer, ShapeError> {
        let mut buffer = ComplexBuffer::from_parts(real.to_vec(), imag.to_vec())?;
        self.process(&mut buffer);
        Ok(buffer)
    }

    /// The full per-frame pipeline: transform, then reduce to normalized
    /// per-bin magnitudes for the renderer.
    pub fn spectrum(&mut self, samples: &[f64]) -> Result<Vec<f64>, ShapeError> {
        let buffer = self.transform(samples)?;
        Ok(crate::spectrum::normalized_magnitudes(&buffer))
    }

    /// Runs the reorder and butterfly stages in place. The buffer shape
    /// has already been validated.
    fn process(&mut self, buffer: &mut ComplexBuffer) {
        let n = buffer.len();
        self.reorder(buffer);

        // log2(n) stages; stage s works on blocks of size 2^s. Within a
        // stage every (k, m) pair touches a disjoint even/odd index pair,
        // so iteration order inside a stage is irrelevant. Stages must
        // stay sequential.
        let mut block = 2;
        while block <= n {
            let half = block / 2;
            for k in 0..half {
                let w = unit_root(k, block);
                for m in 0..(n / block) {
                    let even = block * m + k;
                    let odd = even + half;

                    let odd_term = w * buffer.bin(odd);
                    let even_sample = buffer.bin(even);

                    buffer.set_bin(odd, even_sample - odd_term);
                    buffer.set_bin(even, odd_term + even_sample);
                }
            }
            block <<= 1;
        }
    }

    /// Pre-permutes the buffer so the butterfly network emits natural
    /// bin order. Writes through a scratch pair (`ordered[rev[i]] =
    /// original[i]`, every index written exactly once) rather than
    /// swapping in place.
    fn reorder(&mut self, buffer: &mut ComplexBuffer) {
        let n = buffer.len();
        let table = self.bitrev.table(n);

        let mut real = vec![0.0; n];
        let mut imag = vec![0.0; n];
        for i in 0..n {
            real[table[i]] = buffer.real[i];
            imag[table[i]] = buffer.imag[i];
        }
        buffer.real = real;
        buffer.imag = imag;
    }
}

impl Default for FftEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
