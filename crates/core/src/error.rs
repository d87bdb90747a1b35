// Copyright 2025 cpubench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types shared by the harness crates.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A workload cannot run because a required primitive is missing.
///
/// Always fatal: the run aborts before any result is reported.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The requested algorithm is not available in this build.
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

/// The runner could not complete the battery.
#[derive(Debug, Error)]
pub enum RunError {
    /// A workload is missing a required primitive.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Progress output could not be written.
    #[error("Failed to write progress output: {0}")]
    Output(#[from] io::Error),
}

/// Errors that can occur while producing or reading the persisted report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The report could not be encoded as JSON.
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A persisted report is not valid report JSON.
    #[error("Failed to parse report {}: {source}", .path.display())]
    Parse {
        /// Source file path.
        path: PathBuf,
        /// Underlying decoding failure.
        #[source]
        source: serde_json::Error,
    },

    /// A persisted report could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        /// Source file path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The report file could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        /// Target file path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}
