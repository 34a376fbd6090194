#![no_std]

// Heap allocation is required for the sample buffers and the memoization
// caches, but the full standard library stays optional.
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod buffer;
pub mod cache;
pub mod common;
pub mod engine;
pub mod spectrum;
mod twiddle;

pub use buffer::ComplexBuffer;
pub use cache::{BitReversalCache, ZeroBufferCache};
pub use common::ShapeError;
pub use engine::FftEngine;
