// Copyright 2025 cpubench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Report persistence.
//!
//! Each run writes exactly one pretty-printed JSON report named by
//! [`BenchmarkReport::file_name`] into the chosen directory.

use cpubench_core::{BenchmarkReport, BenchmarkResult, ReportError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Write `report` into `dir` and return the full path of the new file.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if the file cannot be created or written,
/// for example when `dir` does not exist.
pub fn write_report(report: &BenchmarkReport, dir: impl AsRef<Path>) -> Result<PathBuf, ReportError> {
    let path = dir.as_ref().join(report.file_name());
    let json = report.to_json_pretty()?;
    fs::write(&path, json).map_err(|source| ReportError::Io {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), tests = report.tests.len(), "report written");
    Ok(path)
}

#[derive(Deserialize)]
struct PersistedTests {
    tests: Vec<BenchmarkResult>,
}

/// Read the `tests` array back from a persisted report.
pub fn read_report_results(path: impl AsRef<Path>) -> Result<Vec<BenchmarkResult>, ReportError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let persisted: PersistedTests =
        serde_json::from_str(&content).map_err(|source| ReportError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(persisted.tests)
}
