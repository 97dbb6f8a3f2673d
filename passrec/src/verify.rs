//! Verification of candidate secrets against stored records

use zeroize::Zeroizing;

use crate::error::{KdfError, Result};
use crate::kdf;
use crate::record::DerivationRecord;

/// Constant-time comparison for derived keys
///
/// Reveals nothing about a partial match; only a length difference is
/// observable.
#[must_use]
#[inline]
pub fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    use subtle::ConstantTimeEq;
    a.ct_eq(b).into()
}

/// Verify a candidate secret against an encoded derivation record.
///
/// The record's own parameters drive the recomputation, so records remain
/// verifiable across changes to this crate's defaults. Callers must treat
/// every error outcome as "do not authenticate"; distinguishing a malformed
/// record from a mismatch in caller behavior reopens the side channel this
/// function closes.
///
/// # Errors
///
/// Returns [`KdfError::EmptyInput`] when either input is empty,
/// [`KdfError::MalformedRecord`] when the record bytes do not decode, and
/// [`KdfError::Mismatch`] when the recomputed key differs from the stored
/// one.
pub fn verify(record: &[u8], candidate: &[u8]) -> Result<()> {
    if record.is_empty() || candidate.is_empty() {
        return Err(KdfError::EmptyInput);
    }
    let record = DerivationRecord::from_bytes(record)?;

    tracing::debug!(
        algorithm = %record.algorithm(),
        iterations = record.iterations(),
        output_size = record.output_size(),
        "verifying candidate against stored record"
    );

    let computed = Zeroizing::new(kdf::derive_key(
        record.algorithm(),
        candidate,
        record.salt(),
        record.iterations(),
        record.output_size(),
    )?);
    if constant_time_compare(&computed, record.derived_key()) {
        Ok(())
    } else {
        Err(KdfError::Mismatch)
    }
}

#[cfg(test)]
mod tests {
    use super::constant_time_compare;

    #[test]
    fn equal_slices_compare_equal() {
        assert!(constant_time_compare(b"abc", b"abc"));
        assert!(constant_time_compare(b"", b""));
    }

    #[test]
    fn unequal_slices_compare_unequal() {
        assert!(!constant_time_compare(b"abc", b"abd"));
        assert!(!constant_time_compare(b"abc", b"abcd"));
    }
}
