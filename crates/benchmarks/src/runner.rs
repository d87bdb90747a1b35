// Copyright 2025 cpubench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Sequential workload runner.

use crate::workload::{all_workloads, Workload, WorkloadCategory};
use cpubench_core::{BenchmarkResult, ConfigurationError, RunError};
use std::io::{self, Write};
use std::time::Instant;
use tracing::debug;

/// Run every registered workload, in order, on the current thread, with
/// progress banners on stdout.
///
/// # Errors
///
/// Returns [`RunError::Configuration`] if any workload is missing a required
/// primitive. Preflight runs for all workloads first, so nothing has been
/// executed or printed when that happens.
pub fn run_all_benchmarks() -> Result<Vec<BenchmarkResult>, RunError> {
    run_all_benchmarks_with(&mut io::stdout())
}

/// Same as [`run_all_benchmarks`], writing progress banners to `out`.
pub fn run_all_benchmarks_with<W: Write>(out: &mut W) -> Result<Vec<BenchmarkResult>, RunError> {
    run_workloads(&all_workloads(), out)
}

/// Run `workloads` in order and collect one result per workload.
///
/// Writes a category banner to `out` whenever the category changes.
pub fn run_workloads<W: Write>(
    workloads: &[Box<dyn Workload>],
    out: &mut W,
) -> Result<Vec<BenchmarkResult>, RunError> {
    for workload in workloads {
        workload.preflight()?;
    }

    let mut results = Vec::with_capacity(workloads.len());
    let mut current: Option<WorkloadCategory> = None;
    for workload in workloads {
        let category = workload.category();
        if current != Some(category) {
            writeln!(out, "{}", category.banner())?;
            out.flush()?;
            current = Some(category);
        }
        results.push(measure(workload.as_ref())?);
    }
    Ok(results)
}

/// Time a single execution of `workload`.
pub fn measure(workload: &dyn Workload) -> Result<BenchmarkResult, ConfigurationError> {
    debug!(workload = workload.id(), "starting workload");
    let start = Instant::now();
    let operations = workload.execute()?;
    let elapsed = start.elapsed();

    let result = BenchmarkResult::from_elapsed(workload.name(), elapsed, operations);
    debug!(
        workload = workload.id(),
        duration_ns = result.duration_ns(),
        operations,
        "finished workload"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workloads::{
        CryptographicHashing, MemoryAllocation, PrimeCounting, StringConcatenation,
    };
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Default)]
    struct CountingWorkload {
        executions: Rc<Cell<u32>>,
    }

    impl Workload for CountingWorkload {
        fn id(&self) -> &'static str {
            "counting"
        }

        fn name(&self) -> &'static str {
            "Counting"
        }

        fn category(&self) -> WorkloadCategory {
            WorkloadCategory::Cpu
        }

        fn execute(&self) -> Result<u64, ConfigurationError> {
            self.executions.set(self.executions.get() + 1);
            Ok(7)
        }
    }

    #[test]
    fn test_measure_records_name_and_operations() {
        let workload = CountingWorkload::default();
        let result = measure(&workload).unwrap();
        assert_eq!(result.name(), "Counting");
        assert_eq!(result.operations(), 7);
        assert_eq!(result.memory_bytes(), 0);
        assert_eq!(workload.executions.get(), 1);
    }

    #[test]
    fn test_run_workloads_preserves_order() {
        let workloads: Vec<Box<dyn Workload>> = vec![
            Box::new(PrimeCounting::new(1_000)),
            Box::new(MemoryAllocation::new(10)),
            Box::new(StringConcatenation::new(5)),
        ];
        let results = run_workloads(&workloads, &mut Vec::new()).unwrap();

        let ids: Vec<_> = workloads.iter().map(|w| w.id()).collect();
        assert_eq!(ids, ["prime_numbers", "memory_allocation", "string_concatenation"]);
        for (workload, result) in workloads.iter().zip(&results) {
            assert_eq!(result.name(), workload.name());
        }
        assert_eq!(results[0].operations(), 168);
        assert_eq!(results[1].operations(), 10);
        assert_eq!(results[2].operations(), 5);
    }

    #[test]
    fn test_banners_written_once_per_category() {
        let workloads: Vec<Box<dyn Workload>> = vec![
            Box::new(PrimeCounting::new(100)),
            Box::new(CountingWorkload::default()),
            Box::new(MemoryAllocation::new(4)),
            Box::new(StringConcatenation::new(4)),
        ];
        let mut out = Vec::new();
        run_workloads(&workloads, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Running CPU-intensive benchmarks...\n\
             Running memory-intensive benchmarks...\n"
        );
    }

    #[test]
    fn test_ops_per_sec_invariant_holds() {
        let workloads: Vec<Box<dyn Workload>> = vec![
            Box::new(PrimeCounting::new(5_000)),
            Box::new(StringConcatenation::new(500)),
        ];
        for result in run_workloads(&workloads, &mut Vec::new()).unwrap() {
            let expected = result.operations() as f64 / (result.duration_ns() as f64 / 1e9);
            assert_eq!(result.ops_per_sec(), expected);
        }
    }

    #[test]
    fn test_configuration_error_aborts_before_execution() {
        let counting = CountingWorkload::default();
        let executions = Rc::clone(&counting.executions);
        let workloads: Vec<Box<dyn Workload>> = vec![
            Box::new(counting),
            Box::new(CryptographicHashing::new("MD4", 16, 1)),
        ];
        let mut out = Vec::new();
        let err = run_workloads(&workloads, &mut out).unwrap_err();
        match err {
            RunError::Configuration(err) => {
                assert_eq!(err, ConfigurationError::UnsupportedAlgorithm("MD4".to_string()))
            }
            other => panic!("expected configuration error, got {other}"),
        }
        assert_eq!(executions.get(), 0);
        assert!(out.is_empty());
    }
}
