// src/cache.rs

use alloc::collections::BTreeMap;
use alloc::vec;
use alloc::vec::Vec;

/// Fills the bit-reversal permutation table for a transform of size `n`.
///
/// `table[i]` is `i` with its bits reversed within the minimal width
/// needed to represent `n - 1`. The result is a self-inverse bijection
/// on `[0, n)`; `n = 1` yields the trivial single-entry table.
pub(crate) fn bit_reverse_table(n: usize) -> Vec<usize> {
    debug_assert!(n.is_power_of_two());

    let mut table = vec![0usize; n];
    let mut j = 0;
    for i in 1..n {
        let mut k = n >> 1;
        while j >= k {
            j -= k;
            k >>= 1;
        }
        j += k;
        table[i] = j;
    }
    table
}

/// Memoized bit-reversal tables, keyed by transform size.
///
/// A table is built on the first request for a given size and reused for
/// every later call; it is a pure function of the size and never changes
/// once computed. The cache is owned by an engine instance rather than
/// living in module-level global state, so separate engines never share
/// or contaminate each other's tables.
pub struct BitReversalCache {
    tables: BTreeMap<usize, Vec<usize>>,
}

impl BitReversalCache {
    pub fn new() -> Self {
        Self {
            tables: BTreeMap::new(),
        }
    }

    /// Returns the permutation table for size `n`, building it on the
    /// first request. `n` must already have passed the power-of-two gate.
    pub fn table(&mut self, n: usize) -> &[usize] {
        self.tables.entry(n).or_insert_with(|| bit_reverse_table(n))
    }
}

impl Default for BitReversalCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Memoized all-zero buffers, used for the imaginary half of real-only
/// input. Purely a performance cache: recomputing a zero buffer has no
/// correctness implications.
pub struct ZeroBufferCache {
    buffers: BTreeMap<usize, Vec<f64>>,
}

impl ZeroBufferCache {
    pub fn new() -> Self {
        Self {
            buffers: BTreeMap::new(),
        }
    }

    /// Returns a fresh all-zero buffer of length `n`, cloned from the
    /// memoized prototype.
    pub fn take(&mut self, n: usize) -> Vec<f64> {
        self.buffers.entry(n).or_insert_with(|| vec![0.0; n]).clone()
    }
}

impl Default for ZeroBufferCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
