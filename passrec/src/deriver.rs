//! Parameter builder producing encoded derivation records
//!
//! Setters apply in call order and later calls win for the same field; in
//! particular an exact salt and a requested random-salt length displace each
//! other. Unset fields fall back to the defaults below at derivation time.

use crate::algorithm::HashAlgorithm;
use crate::entropy;
use crate::error::{KdfError, Result};
use crate::kdf;
use crate::record::DerivationRecord;

/// Default salt length in bytes
pub const DEFAULT_SALT_SIZE: usize = 64;

/// Default derived-key length in bytes
pub const DEFAULT_OUTPUT_SIZE: usize = 256;

/// Default PBKDF2 iteration count
pub const DEFAULT_ITERATIONS: u32 = 4096;

/// Builder for credential derivation
///
/// A `Deriver` holds no secret material and may be reused; each call to
/// [`derive`](Self::derive) that generates its own salt produces a distinct
/// record.
#[derive(Debug, Clone)]
pub struct Deriver {
    algorithm: HashAlgorithm,
    iterations: u32,
    output_size: usize,
    salt: Option<Vec<u8>>,
    salt_size: usize,
}

impl Deriver {
    /// Create a builder with default parameters
    #[must_use]
    pub fn new() -> Self {
        Self {
            algorithm: HashAlgorithm::default(),
            iterations: DEFAULT_ITERATIONS,
            output_size: DEFAULT_OUTPUT_SIZE,
            salt: None,
            salt_size: DEFAULT_SALT_SIZE,
        }
    }

    /// Select the hash algorithm for the PBKDF2 PRF
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Override the iteration count
    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Override the derived-key length in bytes
    #[must_use]
    pub fn with_output_size(mut self, output_size: usize) -> Self {
        self.output_size = output_size;
        self
    }

    /// Use this exact salt instead of generating one
    ///
    /// An empty salt counts as unset and a random salt of the configured
    /// size is generated instead.
    #[must_use]
    pub fn with_salt(mut self, salt: Vec<u8>) -> Self {
        self.salt = Some(salt);
        self
    }

    /// Generate a random salt of `salt_size` bytes at derivation time
    ///
    /// Displaces any exact salt supplied earlier.
    #[must_use]
    pub fn with_salt_size(mut self, salt_size: usize) -> Self {
        self.salt = None;
        self.salt_size = salt_size;
        self
    }

    /// Derive a key from `secret` and return the encoded record.
    ///
    /// # Errors
    ///
    /// Returns [`KdfError::EmptyInput`] for an empty secret before any
    /// randomness is consumed, [`KdfError::InvalidParameters`] for zero
    /// iterations, output size or salt size, and
    /// [`KdfError::RandomGeneration`] if the entropy source cannot fill the
    /// requested salt length.
    pub fn derive(&self, secret: &[u8]) -> Result<Vec<u8>> {
        if secret.is_empty() {
            return Err(KdfError::EmptyInput);
        }
        if self.iterations == 0 {
            return Err(KdfError::invalid_parameters("iteration count must be non-zero"));
        }
        if self.output_size == 0 {
            return Err(KdfError::invalid_parameters("output size must be non-zero"));
        }
        let output_size = u32::try_from(self.output_size)
            .map_err(|_| KdfError::invalid_parameters("output size exceeds u32::MAX"))?;

        let salt = match &self.salt {
            Some(salt) if !salt.is_empty() => salt.clone(),
            _ => {
                if self.salt_size == 0 {
                    return Err(KdfError::invalid_parameters("salt size must be non-zero"));
                }
                entropy::secure_bytes(self.salt_size)?
            }
        };

        tracing::debug!(
            algorithm = %self.algorithm,
            iterations = self.iterations,
            output_size = self.output_size,
            salt_len = salt.len(),
            "deriving credential record"
        );

        let derived_key = kdf::derive_key(
            self.algorithm,
            secret,
            &salt,
            self.iterations,
            self.output_size,
        )?;
        let record =
            DerivationRecord::new(self.algorithm, salt, self.iterations, output_size, derived_key);
        record.to_bytes()
    }
}

impl Default for Deriver {
    fn default() -> Self {
        Self::new()
    }
}
