// Copyright 2025 cpubench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Transcendental math accumulation.

use crate::workload::{Workload, WorkloadCategory};
use cpubench_core::ConfigurationError;
use std::hint::black_box;
use tracing::warn;

/// Sums `sin(i) * cos(i) * sqrt(i + 1)` over `0..iterations`.
#[derive(Debug, Clone)]
pub struct MathOperations {
    iterations: u64,
}

impl MathOperations {
    /// Workload over `0..iterations`.
    pub fn new(iterations: u64) -> Self {
        Self { iterations }
    }
}

impl Default for MathOperations {
    fn default() -> Self {
        Self::new(10_000_000)
    }
}

impl Workload for MathOperations {
    fn id(&self) -> &'static str {
        "math_operations"
    }

    fn name(&self) -> &'static str {
        "Math Operations (10M iterations)"
    }

    fn category(&self) -> WorkloadCategory {
        WorkloadCategory::Cpu
    }

    fn execute(&self) -> Result<u64, ConfigurationError> {
        let sum = accumulate(self.iterations);
        // Inspecting the sum keeps the loop observable.
        if sum.is_nan() {
            warn!(iterations = self.iterations, "math workload produced NaN");
        }
        black_box(sum);
        Ok(self.iterations)
    }
}

/// Running sum of `sin(x) * cos(x) * sqrt(x + 1)` for `x` in `0..iterations`.
pub fn accumulate(iterations: u64) -> f64 {
    let mut sum = 0.0;
    for i in 0..iterations {
        let x = i as f64;
        sum += x.sin() * x.cos() * (x + 1.0).sqrt();
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulate_first_terms() {
        assert_eq!(accumulate(0), 0.0);
        assert_eq!(accumulate(1), 0.0);
        let expected = 1f64.sin() * 1f64.cos() * 2f64.sqrt();
        assert_eq!(accumulate(2), expected);
    }

    #[test]
    fn test_accumulate_is_finite() {
        assert!(accumulate(100_000).is_finite());
    }

    #[test]
    fn test_operation_count_is_iteration_count() {
        assert_eq!(MathOperations::new(1_000).execute(), Ok(1_000));
        assert_eq!(MathOperations::default().iterations, 10_000_000);
    }
}
