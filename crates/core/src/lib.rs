// Copyright 2025 cpubench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Core types for the cpubench harness.
//!
//! # Modules
//!
//! - [`result`] - The per-workload `BenchmarkResult` record
//! - [`report`] - The persisted `BenchmarkReport`
//! - [`system`] - Host and toolchain metadata
//! - [`error`] - Configuration and report errors

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod error;
pub mod report;
pub mod result;
pub mod system;

pub use error::{ConfigurationError, ReportError, RunError};
pub use report::BenchmarkReport;
pub use result::BenchmarkResult;
pub use system::SystemInfo;
