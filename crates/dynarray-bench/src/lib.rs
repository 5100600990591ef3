//! Benchmark workloads for dynarray.
//!
//! Provides deterministic inputs shared by the criterion benches:
//!
//! - [`grown_array`]: an array built purely by appends from the default capacity
//! - [`string_payload`]: heap-owning elements for clone and relocation costs
//! - [`probe_indices`]: a fixed, scattered index sequence for access benches

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynarray::DynamicArray;

/// Build an array of `0..n` by appending to a default array.
///
/// Exercises every growth event from capacity 2 up to the first power of
/// two not below `n`.
pub fn grown_array(n: u64) -> DynamicArray<u64> {
    let mut array = DynamicArray::new();
    for i in 0..n {
        array.append(i);
    }
    array
}

/// `n` short owned strings, each distinct.
pub fn string_payload(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("element-{i:06}")).collect()
}

/// `count` indices in `[0, len)` visited in a scattered but repeatable order.
///
/// Uses a fixed odd stride so every index is hit once per `len` probes
/// whenever `len` is a power of two.
pub fn probe_indices(len: usize, count: usize) -> Vec<usize> {
    const STRIDE: usize = 7919;
    if len == 0 {
        return Vec::new();
    }
    (0..count).map(|i| i.wrapping_mul(STRIDE) % len).collect()
}
