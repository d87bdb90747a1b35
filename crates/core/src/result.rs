// Copyright 2025 cpubench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Benchmark result types.
//!
//! This module provides the `BenchmarkResult` record produced once per
//! completed workload.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Outcome of a single workload run.
///
/// Throughput is derived from the operation count and duration when the
/// record is created and never recomputed. Fields are read through accessors
/// only, so a result cannot drift from the invariant
/// `ops_per_sec == operations / (duration_ns / 1e9)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PersistedResult")]
pub struct BenchmarkResult {
    /// Human-readable workload label.
    #[serde(rename = "test")]
    name: String,
    /// Wall-clock elapsed time in nanoseconds.
    duration_ns: u64,
    /// Memory used. Not measured; always zero.
    memory_bytes: u64,
    /// Logical units of work completed.
    operations: u64,
    /// Operations per second. Infinite when the duration rounds to zero.
    #[serde(serialize_with = "throughput::serialize")]
    ops_per_sec: f64,
}

/// On-disk shape of a result. `ops_per_sec` may be a number, one of the
/// non-finite markers, or `null`; `null` is recomputed from the other fields.
#[derive(Deserialize)]
struct PersistedResult {
    #[serde(rename = "test")]
    name: String,
    duration_ns: u64,
    memory_bytes: u64,
    operations: u64,
    #[serde(default, deserialize_with = "throughput::deserialize")]
    ops_per_sec: Option<f64>,
}

impl From<PersistedResult> for BenchmarkResult {
    fn from(p: PersistedResult) -> Self {
        Self {
            ops_per_sec: p
                .ops_per_sec
                .unwrap_or_else(|| ops_per_sec(p.operations, p.duration_ns)),
            name: p.name,
            duration_ns: p.duration_ns,
            memory_bytes: p.memory_bytes,
            operations: p.operations,
        }
    }
}

impl BenchmarkResult {
    /// Create a new BenchmarkResult from a raw nanosecond duration.
    pub fn new(name: impl Into<String>, duration_ns: u64, operations: u64) -> Self {
        Self {
            name: name.into(),
            duration_ns,
            memory_bytes: 0,
            operations,
            ops_per_sec: ops_per_sec(operations, duration_ns),
        }
    }

    /// Create a new BenchmarkResult from a measured [`Duration`].
    ///
    /// Durations beyond `u64::MAX` nanoseconds (~584 years) saturate.
    pub fn from_elapsed(name: impl Into<String>, elapsed: Duration, operations: u64) -> Self {
        let duration_ns = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
        Self::new(name, duration_ns, operations)
    }

    /// Workload label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Elapsed time in nanoseconds.
    pub fn duration_ns(&self) -> u64 {
        self.duration_ns
    }

    /// Memory used in bytes (always zero).
    pub fn memory_bytes(&self) -> u64 {
        self.memory_bytes
    }

    /// Operation count.
    pub fn operations(&self) -> u64 {
        self.operations
    }

    /// Throughput in operations per second.
    pub fn ops_per_sec(&self) -> f64 {
        self.ops_per_sec
    }
}

fn ops_per_sec(operations: u64, duration_ns: u64) -> f64 {
    operations as f64 / (duration_ns as f64 / 1e9)
}

/// JSON has no literal for non-finite floats; they are written as the
/// strings `"inf"`, `"-inf"` and `"NaN"`.
mod throughput {
    use serde::de::{self, Unexpected};
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_str("NaN")
        } else if value.is_infinite() {
            serializer.serialize_str(if *value > 0.0 { "inf" } else { "-inf" })
        } else {
            serializer.serialize_f64(*value)
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<f64>, D::Error> {
        match Option::<Repr>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Repr::Number(value)) => Ok(Some(value)),
            Some(Repr::Text(text)) => match text.as_str() {
                "inf" | "+inf" | "Infinity" => Ok(Some(f64::INFINITY)),
                "-inf" | "-Infinity" => Ok(Some(f64::NEG_INFINITY)),
                "NaN" | "nan" => Ok(Some(f64::NAN)),
                other => Err(de::Error::invalid_value(
                    Unexpected::Str(other),
                    &"a number, \"inf\", \"-inf\" or \"NaN\"",
                )),
            },
        }
    }
}
