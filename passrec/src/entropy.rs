//! Cryptographically secure byte generation
//!
//! All randomness consumed by this crate flows through this module. The OS
//! entropy source either fills the full requested length or the operation
//! fails; partially filled buffers are never returned.

use crate::error::{KdfError, Result};

/// Fill exactly `len` bytes from the operating system entropy source.
pub(crate) fn secure_bytes(len: usize) -> Result<Vec<u8>> {
    let mut bytes = vec![0u8; len];
    getrandom::fill(&mut bytes).map_err(|e| KdfError::RandomGeneration(e.to_string()))?;
    Ok(bytes)
}
