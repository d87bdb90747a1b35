// Copyright 2025 cpubench Contributors
// SPDX-License-Identifier: Apache-2.0

//! CLI for cpubench.
//!
//! This crate provides the command-line interface for the harness: the
//! default `run` subcommand executes the workload battery, prints the
//! summary and writes the JSON report.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

mod logging;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use cpubench_benchmarks::{all_workloads, console, io as report_io, run_all_benchmarks_with};
use cpubench_core::{BenchmarkReport, BenchmarkResult};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// cpubench CLI.
#[derive(Parser, Debug)]
#[command(name = "cpubench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run. Defaults to `run`.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Debug-level logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run every workload and write `benchmark_rust_<timestamp>.json`.
    Run(RunArgs),

    /// List the workloads in execution order.
    List,
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Directory the JSON report is written to.
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

/// Run the CLI with the process arguments.
pub fn run() -> anyhow::Result<()> {
    run_with_cli(Cli::parse())
}

/// Run the CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    logging::init(cli.verbose);

    let mut stdout = io::stdout();
    match cli.command.unwrap_or_else(|| Commands::Run(RunArgs::default())) {
        Commands::Run(args) => run_benchmarks(&args, &mut stdout).map(|_| ()),
        Commands::List => list_workloads(&mut stdout).map_err(Into::into),
    }
}

/// Run the battery, print the summary and persist the report.
///
/// Returns the path of the written report.
pub fn run_benchmarks<W: Write>(args: &RunArgs, out: &mut W) -> anyhow::Result<PathBuf> {
    let start = Instant::now();
    let results = run_all_benchmarks_with(out).context("Benchmark run failed")?;
    let total_time = start.elapsed();

    emit_report(&results, total_time, &args.output_dir, out)
}

/// Print the summary, write the report into `output_dir`, then print the
/// saved path and total time.
///
/// The summary is flushed before the report is written, so it remains
/// visible when writing fails.
pub fn emit_report<W: Write>(
    results: &[BenchmarkResult],
    total_time: Duration,
    output_dir: &Path,
    out: &mut W,
) -> anyhow::Result<PathBuf> {
    console::print_results(out, results)?;
    out.flush()?;

    let report = BenchmarkReport::new(results.to_vec(), total_time);
    let path = report_io::write_report(&report, output_dir).context("Error saving results")?;

    writeln!(out, "Results saved to: {}", path.display())?;
    console::print_total_time(out, total_time)?;
    Ok(path)
}

/// Print workload ids, categories and labels.
pub fn list_workloads<W: Write>(out: &mut W) -> io::Result<()> {
    for workload in all_workloads() {
        writeln!(
            out,
            "{:<22} {:<7} {}",
            workload.id(),
            workload.category(),
            workload.name()
        )?;
    }
    Ok(())
}
