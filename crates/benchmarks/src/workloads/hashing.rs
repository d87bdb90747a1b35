// Copyright 2025 cpubench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Repeated SHA-256 digests over a fixed random buffer.

use crate::workload::{Workload, WorkloadCategory, SEED};
use cpubench_core::ConfigurationError;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};
use std::hint::black_box;

/// Digest algorithms the harness can resolve by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    /// SHA-256.
    Sha256,
}

impl HashAlgorithm {
    /// Resolve an algorithm from its conventional name (`"SHA-256"`).
    ///
    /// Matching ignores ASCII case and the optional hyphen.
    pub fn from_name(name: &str) -> Result<Self, ConfigurationError> {
        match name.to_ascii_uppercase().replace('-', "").as_str() {
            "SHA256" => Ok(Self::Sha256),
            _ => Err(ConfigurationError::UnsupportedAlgorithm(name.to_string())),
        }
    }

    /// Compute `iterations` independent digests of `data`.
    pub fn hash_repeatedly(self, data: &[u8], iterations: u64) {
        match self {
            Self::Sha256 => {
                for _ in 0..iterations {
                    black_box(Sha256::digest(black_box(data)));
                }
            }
        }
    }
}

/// Hashes the same seeded buffer many times, with a fresh digest each time.
#[derive(Debug, Clone)]
pub struct CryptographicHashing {
    algorithm: &'static str,
    input_len: usize,
    iterations: u64,
}

impl CryptographicHashing {
    /// Workload hashing `input_len` bytes `iterations` times with `algorithm`.
    pub fn new(algorithm: &'static str, input_len: usize, iterations: u64) -> Self {
        Self {
            algorithm,
            input_len,
            iterations,
        }
    }
}

impl Default for CryptographicHashing {
    fn default() -> Self {
        Self::new("SHA-256", 1024, 50_000)
    }
}

impl Workload for CryptographicHashing {
    fn id(&self) -> &'static str {
        "sha256_hashing"
    }

    fn name(&self) -> &'static str {
        "SHA256 Hashing (50k iterations)"
    }

    fn category(&self) -> WorkloadCategory {
        WorkloadCategory::Cpu
    }

    fn preflight(&self) -> Result<(), ConfigurationError> {
        HashAlgorithm::from_name(self.algorithm).map(|_| ())
    }

    fn execute(&self) -> Result<u64, ConfigurationError> {
        let algorithm = HashAlgorithm::from_name(self.algorithm)?;
        let data = hash_input(self.input_len, SEED);
        algorithm.hash_repeatedly(&data, self.iterations);
        Ok(self.iterations)
    }
}

/// Seeded random bytes to hash.
pub fn hash_input(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = vec![0u8; len];
    rng.fill_bytes(&mut data);
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_sha256_names() {
        for name in ["SHA-256", "sha256", "Sha-256"] {
            assert_eq!(HashAlgorithm::from_name(name), Ok(HashAlgorithm::Sha256));
        }
    }

    #[test]
    fn test_unknown_algorithm_is_configuration_error() {
        let err = HashAlgorithm::from_name("MD5").unwrap_err();
        assert_eq!(err, ConfigurationError::UnsupportedAlgorithm("MD5".to_string()));
        assert!(err.to_string().contains("MD5"));
    }

    #[test]
    fn test_unsupported_algorithm_fails_preflight_and_execute() {
        let workload = CryptographicHashing::new("WHIRLPOOL", 1024, 10);
        assert!(workload.preflight().is_err());
        assert!(workload.execute().is_err());
    }

    #[test]
    fn test_input_reproducible_for_seed() {
        let first = hash_input(1024, SEED);
        let second = hash_input(1024, SEED);
        assert_eq!(first.len(), 1024);
        assert_eq!(Sha256::digest(&first), Sha256::digest(&second));
        assert_ne!(first, hash_input(1024, SEED + 1));
    }

    #[test]
    fn test_operation_count_is_iteration_count() {
        assert_eq!(CryptographicHashing::new("SHA-256", 64, 25).execute(), Ok(25));
        assert_eq!(CryptographicHashing::default().iterations, 50_000);
    }
}
