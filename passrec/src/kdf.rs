//! PBKDF2 derivation engine
//!
//! A deterministic, side-effect-free function of its inputs. The PRF is
//! HMAC over the selected hash, keyed internally by the secret exactly as
//! RFC 2898 specifies; no state survives a call.

use digest::{FixedOutput, KeyInit, Update};
use hmac::Hmac;
use sha2::{Sha256, Sha512};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};

use crate::algorithm::HashAlgorithm;
use crate::error::{KdfError, Result};

/// Compute `output_size` bytes of PBKDF2 output for the given parameters.
pub(crate) fn derive_key(
    algorithm: HashAlgorithm,
    secret: &[u8],
    salt: &[u8],
    iterations: u32,
    output_size: usize,
) -> Result<Vec<u8>> {
    let mut output = vec![0u8; output_size];
    match algorithm {
        HashAlgorithm::Sha256 => fill::<Hmac<Sha256>>(secret, salt, iterations, &mut output),
        HashAlgorithm::Sha512 => fill::<Hmac<Sha512>>(secret, salt, iterations, &mut output),
        HashAlgorithm::Sha3_224 => fill::<Hmac<Sha3_224>>(secret, salt, iterations, &mut output),
        HashAlgorithm::Sha3_256 => fill::<Hmac<Sha3_256>>(secret, salt, iterations, &mut output),
        HashAlgorithm::Sha3_384 => fill::<Hmac<Sha3_384>>(secret, salt, iterations, &mut output),
        HashAlgorithm::Sha3_512 => fill::<Hmac<Sha3_512>>(secret, salt, iterations, &mut output),
    }?;
    Ok(output)
}

/// Run PBKDF2 with a concrete PRF into a pre-sized buffer.
fn fill<P>(secret: &[u8], salt: &[u8], iterations: u32, output: &mut [u8]) -> Result<()>
where
    P: KeyInit + Update + FixedOutput + Clone + Sync,
{
    pbkdf2::pbkdf2::<P>(secret, salt, iterations, output)
        .map_err(|e| KdfError::internal(format!("PBKDF2 expansion failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::derive_key;
    use crate::algorithm::HashAlgorithm;

    #[test]
    fn identical_inputs_derive_identical_keys() {
        for alg in HashAlgorithm::ALL {
            let a = derive_key(alg, b"secret", b"salt", 16, 40).expect("derivation");
            let b = derive_key(alg, b"secret", b"salt", 16, 40).expect("derivation");
            assert_eq!(a, b);
            assert_eq!(a.len(), 40);
        }
    }

    #[test]
    fn algorithms_disagree_on_output() {
        let sha2 = derive_key(HashAlgorithm::Sha256, b"secret", b"salt", 16, 32).expect("sha256");
        let sha3 = derive_key(HashAlgorithm::Sha3_256, b"secret", b"salt", 16, 32).expect("sha3");
        assert_ne!(sha2, sha3);
    }

    #[test]
    fn iteration_count_changes_output() {
        let one = derive_key(HashAlgorithm::Sha3_256, b"secret", b"salt", 1, 32).expect("one");
        let two = derive_key(HashAlgorithm::Sha3_256, b"secret", b"salt", 2, 32).expect("two");
        assert_ne!(one, two);
    }
}
