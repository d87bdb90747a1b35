// Copyright 2025 cpubench Contributors
// SPDX-License-Identifier: Apache-2.0

//! The seven fixed workloads.
//!
//! CPU-bound: [`PrimeCounting`], [`MatrixMultiplication`], [`CryptographicHashing`],
//! [`MathOperations`]. Memory-bound: [`LargeArraySort`],
//! [`MemoryAllocation`], [`StringConcatenation`].

pub mod allocation;
pub mod hashing;
pub mod math;
pub mod matrix;
pub mod primes;
pub mod sort;
pub mod strings;

pub use allocation::MemoryAllocation;
pub use hashing::{CryptographicHashing, HashAlgorithm};
pub use math::MathOperations;
pub use matrix::MatrixMultiplication;
pub use primes::PrimeCounting;
pub use sort::LargeArraySort;
pub use strings::StringConcatenation;
