// Copyright 2025 cpubench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Allocation churn with every buffer retained until the workload ends.

use crate::workload::{Workload, WorkloadCategory};
use cpubench_core::ConfigurationError;
use std::hint::black_box;

/// Integers per allocated buffer.
pub const BUFFER_LEN: usize = 256;

/// Allocates one fresh `BUFFER_LEN`-integer buffer per iteration.
#[derive(Debug, Clone)]
pub struct MemoryAllocation {
    allocations: usize,
}

impl MemoryAllocation {
    /// Workload performing `allocations` allocations.
    pub fn new(allocations: usize) -> Self {
        Self { allocations }
    }
}

impl Default for MemoryAllocation {
    fn default() -> Self {
        Self::new(100_000)
    }
}

impl Workload for MemoryAllocation {
    fn id(&self) -> &'static str {
        "memory_allocation"
    }

    fn name(&self) -> &'static str {
        "Memory Allocation (100k x 1KB)"
    }

    fn category(&self) -> WorkloadCategory {
        WorkloadCategory::Memory
    }

    fn execute(&self) -> Result<u64, ConfigurationError> {
        let buffers = allocate_buffers(self.allocations);
        black_box(&buffers);
        Ok(buffers.len() as u64)
    }
}

/// Buffer `i` is filled with `i % 256`. All buffers stay alive in the
/// returned collection.
pub fn allocate_buffers(allocations: usize) -> Vec<Vec<u32>> {
    let mut buffers = Vec::with_capacity(allocations);
    for i in 0..allocations {
        buffers.push(vec![(i % 256) as u32; BUFFER_LEN]);
    }
    buffers
}
