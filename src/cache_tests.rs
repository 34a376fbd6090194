use super::*;
use alloc::vec;

#[test]
fn test_bit_reverse_table_8() {
    // Expected bit reversal for N=8:
    // 0 (000) -> 0 (000)
    // 1 (001) -> 4 (100)
    // 2 (010) -> 2 (010)
    // 3 (011) -> 6 (110)
    // 4 (100) -> 1 (001)
    // 5 (101) -> 5 (101)
    // 6 (110) -> 3 (011)
    // 7 (111) -> 7 (111)
    let expected = vec![0, 4, 2, 6, 1, 5, 3, 7];
    assert_eq!(bit_reverse_table(8), expected);
}

#[test]
fn test_bit_reverse_table_trivial() {
    assert_eq!(bit_reverse_table(1), vec![0]);
    assert_eq!(bit_reverse_table(2), vec![0, 1]);
}

#[test]
fn test_bit_reverse_table_is_self_inverse_bijection() {
    for shift in 0..11 {
        let n = 1usize << shift;
        let table = bit_reverse_table(n);
        assert_eq!(table.len(), n);

        let mut seen = vec![false; n];
        for i in 0..n {
            assert!(table[i] < n);
            assert!(!seen[table[i]], "index {} written twice for n={}", table[i], n);
            seen[table[i]] = true;
            assert_eq!(table[table[i]], i, "not self-inverse at i={} for n={}", i, n);
        }
    }
}

#[test]
fn test_bit_reversal_cache_is_idempotent() {
    let mut cache = BitReversalCache::new();
    let first = cache.table(16).to_vec();
    let second = cache.table(16).to_vec();
    assert_eq!(first, second);
    assert_eq!(first, bit_reverse_table(16));
}

#[test]
fn test_bit_reversal_cache_keeps_sizes_apart() {
    let mut cache = BitReversalCache::new();
    cache.table(4);
    cache.table(8);
    assert_eq!(cache.table(4), &[0, 2, 1, 3]);
    assert_eq!(cache.table(8), &[0, 4, 2, 6, 1, 5, 3, 7]);
}

#[test]
fn test_zero_buffer_cache_returns_zeros() {
    let mut cache = ZeroBufferCache::new();
    let buf = cache.take(8);
    assert_eq!(buf, vec![0.0; 8]);
}

#[test]
fn test_zero_buffer_cache_hands_out_fresh_copies() {
    let mut cache = ZeroBufferCache::new();
    let mut first = cache.take(4);
    first[0] = 7.0;

    // The memoized prototype must be unaffected by caller writes.
    assert_eq!(cache.take(4), vec![0.0; 4]);
}
