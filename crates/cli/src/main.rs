// Copyright 2025 cpubench Contributors
// SPDX-License-Identifier: Apache-2.0

//! cpubench CLI entry point.

fn main() {
    if let Err(e) = cpubench_cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
