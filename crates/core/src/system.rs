// Copyright 2025 cpubench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Host and toolchain metadata for report enrichment.
//!
//! Linux-only details (CPU model) degrade to `None` on other platforms.

use serde::{Deserialize, Serialize};

/// Host description embedded in every report under `system`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Operating system name (e.g. "linux", "macos").
    pub os: String,
    /// CPU architecture (e.g. "x86_64", "aarch64").
    pub arch: String,
    /// Logical CPU count.
    pub cpus: usize,
    /// CPU model name, when the platform exposes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_model: Option<String>,
}

impl SystemInfo {
    /// Collect metadata for the current host.
    pub fn collect() -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            cpus: logical_cpus(),
            cpu_model: cpu_model(),
        }
    }
}

/// Version of the compiler that built this binary.
pub fn rust_version() -> &'static str {
    option_env!("VERGEN_RUSTC_SEMVER").unwrap_or("unknown")
}

/// Version of the harness itself.
pub fn harness_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

fn logical_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

fn cpu_model() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        std::fs::read_to_string("/proc/cpuinfo")
            .ok()
            .and_then(|content| parse_cpu_model(&content))
    }
    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}

#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_cpu_model(cpuinfo: &str) -> Option<String> {
    cpuinfo
        .lines()
        .find(|l| l.starts_with("model name"))
        .and_then(|l| l.split(':').nth(1))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
