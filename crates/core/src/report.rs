// Copyright 2025 cpubench Contributors
// SPDX-License-Identifier: Apache-2.0

//! The persisted run report.
//!
//! A [`BenchmarkReport`] is assembled once, after every workload has
//! finished, and exists only to be serialized.

use crate::result::BenchmarkResult;
use crate::system::{self, SystemInfo};
use chrono::{DateTime, Local, SecondsFormat};
use serde::Serialize;
use std::time::Duration;

/// Language tag written into every report and report file name.
pub const LANGUAGE: &str = "rust";

/// Full report for one harness run.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport {
    /// Source-language tag.
    pub language: &'static str,
    /// Local time the report was generated, RFC 3339.
    pub timestamp: String,
    /// Compiler version used to build the harness.
    pub rust_version: String,
    /// Harness crate version.
    pub harness_version: String,
    /// Host metadata.
    pub system: SystemInfo,
    /// Results in execution order.
    pub tests: Vec<BenchmarkResult>,
    /// Wall-clock time of the whole run, in seconds.
    pub total_time_seconds: f64,
    #[serde(skip)]
    generated_at: DateTime<Local>,
}

impl BenchmarkReport {
    /// Build a report for the current host, stamped with the current local time.
    pub fn new(tests: Vec<BenchmarkResult>, total_time: Duration) -> Self {
        Self::with_metadata(tests, total_time, SystemInfo::collect(), Local::now())
    }

    /// Build a report with explicit host metadata and generation time.
    pub fn with_metadata(
        tests: Vec<BenchmarkResult>,
        total_time: Duration,
        system: SystemInfo,
        generated_at: DateTime<Local>,
    ) -> Self {
        Self {
            language: LANGUAGE,
            timestamp: generated_at.to_rfc3339_opts(SecondsFormat::Secs, false),
            rust_version: system::rust_version().to_string(),
            harness_version: system::harness_version().to_string(),
            system,
            tests,
            total_time_seconds: total_time.as_secs_f64(),
            generated_at,
        }
    }

    /// File name for this report: `benchmark_<language>_<YYYYMMDD_HHMMSS>.json`.
    ///
    /// Derived from the same instant as [`timestamp`](Self::timestamp).
    pub fn file_name(&self) -> String {
        format!(
            "benchmark_{}_{}.json",
            self.language,
            self.generated_at.format("%Y%m%d_%H%M%S")
        )
    }

    /// Render the report as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_report() -> BenchmarkReport {
        let generated_at = Local.with_ymd_and_hms(2025, 3, 7, 9, 5, 2).unwrap();
        let system = SystemInfo {
            os: "linux".to_string(),
            arch: "x86_64".to_string(),
            cpus: 8,
            cpu_model: None,
        };
        BenchmarkReport::with_metadata(
            vec![
                BenchmarkResult::new("Prime Numbers (up to 100k)", 5_000_000, 9592),
                BenchmarkResult::new("SHA256 Hashing (50k iterations)", 40_000_000, 50_000),
            ],
            Duration::from_millis(1_250),
            system,
            generated_at,
        )
    }

    #[test]
    fn test_file_name_uses_compact_timestamp() {
        assert_eq!(fixed_report().file_name(), "benchmark_rust_20250307_090502.json");
    }

    #[test]
    fn test_timestamp_matches_file_name_instant() {
        let report = fixed_report();
        assert!(report.timestamp.starts_with("2025-03-07T09:05:02"));
    }

    #[test]
    fn test_report_field_names() {
        let json: serde_json::Value =
            serde_json::from_str(&fixed_report().to_json_pretty().unwrap()).unwrap();
        assert_eq!(json["language"], "rust");
        assert!(json["timestamp"].is_string());
        assert!(json["rust_version"].is_string());
        assert!(json["harness_version"].is_string());
        assert_eq!(json["system"]["os"], "linux");
        assert_eq!(json["system"]["arch"], "x86_64");
        assert_eq!(json["system"]["cpus"], 8);
        assert_eq!(json["total_time_seconds"], 1.25);
        assert!(json.get("generated_at").is_none());

        let tests = json["tests"].as_array().unwrap();
        assert_eq!(tests.len(), 2);
        assert_eq!(tests[0]["test"], "Prime Numbers (up to 100k)");
        assert_eq!(tests[0]["operations"], 9592);
        assert_eq!(tests[1]["duration_ns"], 40_000_000);
    }

    #[test]
    fn test_json_is_pretty_printed() {
        let text = fixed_report().to_json_pretty().unwrap();
        assert!(text.contains("\n  \"language\": \"rust\""));
    }
}
