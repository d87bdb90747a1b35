// Copyright 2025 cpubench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Prime counting by trial division.

use crate::workload::{Workload, WorkloadCategory};
use cpubench_core::ConfigurationError;

/// Counts primes in `2..=limit`.
#[derive(Debug, Clone)]
pub struct PrimeCounting {
    limit: u32,
}

impl PrimeCounting {
    /// Workload over `2..=limit`.
    pub fn new(limit: u32) -> Self {
        Self { limit }
    }
}

impl Default for PrimeCounting {
    fn default() -> Self {
        Self::new(100_000)
    }
}

impl Workload for PrimeCounting {
    fn id(&self) -> &'static str {
        "prime_numbers"
    }

    fn name(&self) -> &'static str {
        "Prime Numbers (up to 100k)"
    }

    fn category(&self) -> WorkloadCategory {
        WorkloadCategory::Cpu
    }

    fn execute(&self) -> Result<u64, ConfigurationError> {
        Ok(count_primes(self.limit))
    }
}

/// Number of primes `p` with `2 <= p <= limit`.
pub fn count_primes(limit: u32) -> u64 {
    (2..=limit).filter(|&n| is_prime(n)).count() as u64
}

/// Trial division by every candidate up to `sqrt(n)`.
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    let n = u64::from(n);
    (2..).take_while(|d| d * d <= n).all(|d| n % d != 0)
}
