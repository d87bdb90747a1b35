// Copyright 2025 cpubench Contributors
// SPDX-License-Identifier: Apache-2.0

//! The `Workload` trait and the fixed workload registry.

use crate::workloads::{
    CryptographicHashing, LargeArraySort, MathOperations, MatrixMultiplication,
    MemoryAllocation, PrimeCounting, StringConcatenation,
};
use cpubench_core::ConfigurationError;
use std::fmt;

/// Seed shared by every randomized workload input.
pub const SEED: u64 = 42;

/// Which resource a workload mainly stresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkloadCategory {
    /// Compute-bound.
    Cpu,
    /// Allocation- or bandwidth-bound.
    Memory,
}

impl WorkloadCategory {
    /// Banner printed when the runner enters this category.
    pub fn banner(&self) -> &'static str {
        match self {
            Self::Cpu => "Running CPU-intensive benchmarks...",
            Self::Memory => "Running memory-intensive benchmarks...",
        }
    }
}

impl fmt::Display for WorkloadCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpu => f.pad("cpu"),
            Self::Memory => f.pad("memory"),
        }
    }
}

/// A fixed, self-contained benchmarked computation.
///
/// Implementors do the work and report how many logical operations they
/// completed; timing is the runner's job.
pub trait Workload {
    /// Stable identifier (snake_case).
    fn id(&self) -> &'static str;

    /// Human-readable label used in console output and reports.
    ///
    /// Labels are fixed per workload type and describe the default size;
    /// instances built with other sizes keep the same label.
    fn name(&self) -> &'static str;

    /// Resource the workload stresses.
    fn category(&self) -> WorkloadCategory;

    /// Check that every primitive the workload needs is available.
    fn preflight(&self) -> Result<(), ConfigurationError> {
        Ok(())
    }

    /// Run the workload once and return the operation count.
    fn execute(&self) -> Result<u64, ConfigurationError>;
}

/// All workloads, in execution order.
pub fn all_workloads() -> Vec<Box<dyn Workload>> {
    vec![
        Box::new(PrimeCounting::default()),
        Box::new(MatrixMultiplication::default()),
        Box::new(CryptographicHashing::default()),
        Box::new(MathOperations::default()),
        Box::new(LargeArraySort::default()),
        Box::new(MemoryAllocation::default()),
        Box::new(StringConcatenation::default()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order() {
        let ids: Vec<_> = all_workloads().iter().map(|w| w.id()).collect();
        assert_eq!(
            ids,
            [
                "prime_numbers",
                "matrix_multiplication",
                "sha256_hashing",
                "math_operations",
                "large_array_sort",
                "memory_allocation",
                "string_concatenation",
            ]
        );
    }

    #[test]
    fn test_cpu_workloads_precede_memory_workloads() {
        let categories: Vec<_> = all_workloads().iter().map(|w| w.category()).collect();
        let first_memory = categories
            .iter()
            .position(|c| *c == WorkloadCategory::Memory)
            .unwrap();
        assert_eq!(first_memory, 4);
        assert!(categories[first_memory..]
            .iter()
            .all(|c| *c == WorkloadCategory::Memory));
    }

    #[test]
    fn test_default_registry_passes_preflight() {
        for workload in all_workloads() {
            assert!(workload.preflight().is_ok(), "{} failed preflight", workload.id());
        }
    }
}
