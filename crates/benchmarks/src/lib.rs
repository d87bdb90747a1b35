// Copyright 2025 cpubench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Workload battery, runner and reporter for cpubench.
//!
//! # Quick Start
//!
//! ```no_run
//! use cpubench_benchmarks::{console, run_all_benchmarks};
//!
//! let results = run_all_benchmarks()?;
//! console::print_results(&mut std::io::stdout(), &results)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Modules
//!
//! - [`workload`] - The `Workload` trait and registry
//! - [`workloads`] - The seven fixed workloads
//! - [`runner`] - Sequential execution and timing
//! - [`console`] - Human-readable summary
//! - [`io`] - JSON report persistence

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod console;
pub mod io;
pub mod runner;
pub mod workload;
pub mod workloads;

pub use runner::{run_all_benchmarks, run_all_benchmarks_with, run_workloads};
pub use workload::{all_workloads, Workload, WorkloadCategory, SEED};
