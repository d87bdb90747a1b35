// Copyright 2025 cpubench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Sorting a large array of seeded random integers.

use crate::workload::{Workload, WorkloadCategory, SEED};
use cpubench_core::ConfigurationError;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

/// Largest value (inclusive) in the generated input.
pub const MAX_VALUE: u32 = 1_000_000;

/// Sorts `len` random integers in `[0, MAX_VALUE]` ascending.
///
/// Uses the generic comparison sort (`slice::sort`), not a radix or
/// integer-specialized sort.
#[derive(Debug, Clone)]
pub struct LargeArraySort {
    len: usize,
}

impl LargeArraySort {
    /// Workload over `len` elements.
    pub fn new(len: usize) -> Self {
        Self { len }
    }
}

impl Default for LargeArraySort {
    fn default() -> Self {
        Self::new(1_000_000)
    }
}

impl Workload for LargeArraySort {
    fn id(&self) -> &'static str {
        "large_array_sort"
    }

    fn name(&self) -> &'static str {
        "Large Array Sort (1M elements)"
    }

    fn category(&self) -> WorkloadCategory {
        WorkloadCategory::Memory
    }

    fn execute(&self) -> Result<u64, ConfigurationError> {
        let mut data = sort_input(self.len, SEED);
        data.sort();
        black_box(&data);
        Ok(self.len as u64)
    }
}

/// Seeded random integers in `[0, MAX_VALUE]`.
pub fn sort_input(len: usize, seed: u64) -> Vec<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(0..=MAX_VALUE)).collect()
}
