//! Self-describing derivation record and its binary codec
//!
//! A record carries every parameter needed to reproduce its derivation:
//! format version, algorithm tag, salt, iteration count, output size and the
//! derived key itself. Nothing about decoding depends on crate defaults, so
//! records written under older defaults keep verifying after defaults move.

use bincode::config::Configuration;

use crate::algorithm::HashAlgorithm;
use crate::error::{KdfError, Result};

/// Current record format version. Bumped only on incompatible layout change.
const RECORD_VERSION: u8 = 1;

/// Wire configuration for the record codec.
fn wire_config() -> Configuration {
    bincode::config::standard()
}

/// A finalized derivation: parameters plus derived key
///
/// Records are immutable once produced; verification reads them and never
/// writes them back.
#[derive(Debug, Clone, PartialEq, Eq, bincode::Encode, bincode::Decode)]
pub struct DerivationRecord {
    version: u8,
    algorithm: HashAlgorithm,
    salt: Vec<u8>,
    iterations: u32,
    output_size: u32,
    derived_key: Vec<u8>,
}

impl DerivationRecord {
    /// Assemble a record from finalized parameters and a freshly derived key.
    pub(crate) fn new(
        algorithm: HashAlgorithm,
        salt: Vec<u8>,
        iterations: u32,
        output_size: u32,
        derived_key: Vec<u8>,
    ) -> Self {
        Self {
            version: RECORD_VERSION,
            algorithm,
            salt,
            iterations,
            output_size,
            derived_key,
        }
    }

    /// Hash algorithm the record was derived with
    #[must_use]
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Salt mixed into the derivation
    #[must_use]
    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    /// PBKDF2 iteration count
    #[must_use]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Derived key length in bytes
    #[must_use]
    pub fn output_size(&self) -> usize {
        self.output_size as usize
    }

    /// The stored derived key
    #[must_use]
    pub fn derived_key(&self) -> &[u8] {
        &self.derived_key
    }

    /// Serialize the record to its opaque byte form.
    ///
    /// # Errors
    ///
    /// Returns [`KdfError::Internal`] if encoding fails, which cannot happen
    /// for a record this crate constructed.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::encode_to_vec(self, wire_config())
            .map_err(|e| KdfError::internal(format!("record encoding failed: {e}")))
    }

    /// Parse and validate an encoded record.
    ///
    /// # Errors
    ///
    /// Returns [`KdfError::MalformedRecord`] when the bytes are not a
    /// well-formed current-version record: wrong version byte, unknown
    /// algorithm tag, truncated fields, trailing bytes, empty salt, zero
    /// iteration count or output size, or a stored key whose length
    /// disagrees with the recorded output size.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (record, consumed): (Self, usize) = bincode::decode_from_slice(bytes, wire_config())
            .map_err(|e| KdfError::malformed_record(e.to_string()))?;
        if consumed != bytes.len() {
            return Err(KdfError::malformed_record(format!(
                "{} trailing bytes after record",
                bytes.len() - consumed
            )));
        }
        record.validate()?;
        Ok(record)
    }

    /// Structural invariants every decoded record must satisfy.
    fn validate(&self) -> Result<()> {
        if self.version != RECORD_VERSION {
            return Err(KdfError::malformed_record(format!(
                "unsupported record version {}",
                self.version
            )));
        }
        if self.salt.is_empty() {
            return Err(KdfError::malformed_record("salt is empty"));
        }
        if self.iterations == 0 {
            return Err(KdfError::malformed_record("iteration count is zero"));
        }
        if self.output_size == 0 {
            return Err(KdfError::malformed_record("output size is zero"));
        }
        if self.derived_key.len() != self.output_size as usize {
            return Err(KdfError::malformed_record(format!(
                "derived key is {} bytes, record declares {}",
                self.derived_key.len(),
                self.output_size
            )));
        }
        Ok(())
    }
}
