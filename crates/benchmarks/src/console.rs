// Copyright 2025 cpubench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Human-readable console summary.

use cpubench_core::BenchmarkResult;
use std::io::{self, Write};
use std::time::Duration;

/// Write the per-workload summary block, in execution order.
pub fn print_results<W: Write>(out: &mut W, results: &[BenchmarkResult]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== BENCHMARK RESULTS ===")?;
    for result in results {
        writeln!(out, "Test: {}", result.name())?;
        writeln!(out, "  Duration: {} ns", result.duration_ns())?;
        writeln!(out, "  Memory: {} bytes", result.memory_bytes())?;
        writeln!(out, "  Operations: {}", result.operations())?;
        writeln!(out, "  Ops/sec: {:.2}", result.ops_per_sec())?;
        writeln!(out)?;
    }
    Ok(())
}

/// Write the closing total-time line.
pub fn print_total_time<W: Write>(out: &mut W, total_time: Duration) -> io::Result<()> {
    writeln!(
        out,
        "Total execution time: {:.3} seconds",
        total_time.as_secs_f64()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(results: &[BenchmarkResult]) -> String {
        let mut buf = Vec::new();
        print_results(&mut buf, results).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_summary_layout() {
        let output = render(&[BenchmarkResult::new("Prime Numbers (up to 100k)", 4_000_000, 9592)]);
        assert_eq!(
            output,
            "\n=== BENCHMARK RESULTS ===\n\
             Test: Prime Numbers (up to 100k)\n  \
             Duration: 4000000 ns\n  \
             Memory: 0 bytes\n  \
             Operations: 9592\n  \
             Ops/sec: 2398000.00\n\n"
        );
    }

    #[test]
    fn test_summary_keeps_execution_order() {
        let output = render(&[
            BenchmarkResult::new("first", 1_000, 1),
            BenchmarkResult::new("second", 1_000, 1),
        ]);
        let first = output.find("Test: first").unwrap();
        let second = output.find("Test: second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_ops_per_sec_two_decimals() {
        let output = render(&[BenchmarkResult::new("thirds", 3_000_000_000, 1)]);
        assert!(output.contains("  Ops/sec: 0.33\n"));
    }

    #[test]
    fn test_total_time_three_decimals() {
        let mut buf = Vec::new();
        print_total_time(&mut buf, Duration::from_millis(12_345)).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Total execution time: 12.345 seconds\n");
    }
}
