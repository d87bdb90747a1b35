// Copyright 2025 cpubench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Building one large string by repeated appends.

use crate::workload::{Workload, WorkloadCategory};
use cpubench_core::ConfigurationError;
use std::fmt::Write;
use std::hint::black_box;

/// Appends `"iteration_{i}_"` to a single growing `String`.
#[derive(Debug, Clone)]
pub struct StringConcatenation {
    iterations: u64,
}

impl StringConcatenation {
    /// Workload performing `iterations` appends.
    pub fn new(iterations: u64) -> Self {
        Self { iterations }
    }
}

impl Default for StringConcatenation {
    fn default() -> Self {
        Self::new(50_000)
    }
}

impl Workload for StringConcatenation {
    fn id(&self) -> &'static str {
        "string_concatenation"
    }

    fn name(&self) -> &'static str {
        "String Concatenation (50k iterations)"
    }

    fn category(&self) -> WorkloadCategory {
        WorkloadCategory::Memory
    }

    fn execute(&self) -> Result<u64, ConfigurationError> {
        let text = build_string(self.iterations);
        black_box(&text);
        Ok(self.iterations)
    }
}

/// Concatenation of `"iteration_{i}_"` for `i` in `0..iterations`.
///
/// Starts empty and relies on `String`'s amortized growth.
pub fn build_string(iterations: u64) -> String {
    let mut text = String::new();
    for i in 0..iterations {
        // Writing into a String never fails.
        let _ = write!(text, "iteration_{i}_");
    }
    text
}
