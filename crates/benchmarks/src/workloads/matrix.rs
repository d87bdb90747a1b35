// Copyright 2025 cpubench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Naive dense matrix multiplication.
//!
//! Matrices are square, row-major `Vec<f64>` of `size * size` elements.

use crate::workload::{Workload, WorkloadCategory, SEED};
use cpubench_core::ConfigurationError;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

/// Multiplies two seeded random `size x size` matrices.
#[derive(Debug, Clone)]
pub struct MatrixMultiplication {
    size: usize,
}

impl MatrixMultiplication {
    /// Workload over `size x size` operands.
    pub fn new(size: usize) -> Self {
        Self { size }
    }
}

impl Default for MatrixMultiplication {
    fn default() -> Self {
        Self::new(500)
    }
}

impl Workload for MatrixMultiplication {
    fn id(&self) -> &'static str {
        "matrix_multiplication"
    }

    fn name(&self) -> &'static str {
        "Matrix Multiplication (500x500)"
    }

    fn category(&self) -> WorkloadCategory {
        WorkloadCategory::Cpu
    }

    fn execute(&self) -> Result<u64, ConfigurationError> {
        let (a, b) = matrix_inputs(self.size, SEED);
        let product = multiply(&a, &b, self.size);
        black_box(&product);
        Ok((self.size as u64).pow(3))
    }
}

/// Generate the two operands from one generator: all of `a`, then all of `b`.
///
/// Elements are uniform in `[0, 1)`.
pub fn matrix_inputs(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let a = (0..size * size).map(|_| rng.gen::<f64>()).collect();
    let b = (0..size * size).map(|_| rng.gen::<f64>()).collect();
    (a, b)
}

/// Textbook `i, j, k` triple loop.
pub fn multiply(a: &[f64], b: &[f64], size: usize) -> Vec<f64> {
    assert_eq!(a.len(), size * size, "left operand is not {size}x{size}");
    assert_eq!(b.len(), size * size, "right operand is not {size}x{size}");

    let mut c = vec![0.0; size * size];
    for i in 0..size {
        for j in 0..size {
            let mut sum = 0.0;
            for k in 0..size {
                sum += a[i * size + k] * b[k * size + j];
            }
            c[i * size + j] = sum;
        }
    }
    c
}
