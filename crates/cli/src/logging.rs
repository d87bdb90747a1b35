// Copyright 2025 cpubench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Logging setup.
//!
//! Logs go to stderr so stdout carries only the benchmark summary. The
//! filter comes from the verbosity flag alone.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "cpubench=warn";
const VERBOSE_FILTER: &str = "cpubench=debug";

/// Install the global `fmt` subscriber. Later calls are no-ops.
pub(crate) fn init(verbose: bool) {
    let directive = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::new(directive))
        .try_init();
}
