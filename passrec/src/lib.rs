//! Self-describing PBKDF2 credential records
//!
//! Derives a storable credential hash from a plaintext secret with PBKDF2
//! over an HMAC pseudorandom function, packs every derivation parameter
//! (algorithm tag, salt, iteration count, output size) together with the
//! derived key into one opaque binary record, and later verifies candidate
//! secrets against that record in constant time. Because the record is
//! self-describing, verification never consults crate defaults; changing
//! defaults cannot orphan stored records.
//!
//! # Examples
//!
//! ```
//! use passrec::{verify, Deriver};
//!
//! # fn main() -> passrec::Result<()> {
//! let record = Deriver::new().with_iterations(512).derive(b"correct horse")?;
//! assert!(verify(&record, b"correct horse").is_ok());
//! assert!(verify(&record, b"wrong horse").is_err());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod algorithm;
pub mod deriver;
pub mod error;
pub mod record;
pub mod verify;

mod entropy;
mod kdf;

pub use algorithm::HashAlgorithm;
pub use deriver::{Deriver, DEFAULT_ITERATIONS, DEFAULT_OUTPUT_SIZE, DEFAULT_SALT_SIZE};
pub use error::{KdfError, Result};
pub use record::DerivationRecord;
pub use verify::{constant_time_compare, verify};

/// Derive a credential record from `secret` with default parameters.
///
/// Equivalent to `Deriver::new().derive(secret)`.
///
/// # Errors
///
/// Returns [`KdfError::EmptyInput`] for an empty secret and
/// [`KdfError::RandomGeneration`] if the entropy source fails.
pub fn derive(secret: &[u8]) -> Result<Vec<u8>> {
    Deriver::new().derive(secret)
}
